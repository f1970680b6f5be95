use crate::league::League;
use crate::model::{BoxScoreDetail, HomeAway, PlayerStats, Stat, StatGroup, TeamStats};

pub const NOT_AVAILABLE_MESSAGE: &str = "Box score not available for this game.";
pub const BOX_SCORE_FAILED_MESSAGE: &str = "Failed to load box score. Please try again.";
pub const NO_PLAYER_STATS_MESSAGE: &str = "No player stats available.";
/// Shown when a score is missing from the summary header
pub const MISSING_SCORE: &str = "-";

/// Athletes listed per team
const MAX_ATHLETES: usize = 10;
/// Player tables shown, one per team
const MAX_PLAYER_TABLES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxScoreView {
    NotAvailable { message: String },
    Loaded(BoxScoreSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreHeader {
    pub abbreviation: String,
    pub score: String,
}

/// One row of the team comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub label: String,
    pub away: String,
    pub home: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRow {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerTable {
    Stats {
        title: String,
        columns: Vec<String>,
        rows: Vec<PlayerRow>,
    },
    Empty {
        title: String,
        message: String,
    },
}

impl PlayerTable {
    pub fn title(&self) -> &str {
        match self {
            PlayerTable::Stats { title, .. } | PlayerTable::Empty { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScoreSummary {
    /// Game page, from the summary header id or else the requested id
    pub game_url: String,
    pub title: String,
    pub away: ScoreHeader,
    pub home: ScoreHeader,
    pub team_stats: Vec<StatRow>,
    pub player_tables: Vec<PlayerTable>,
}

/// Build the box score view for one game
///
/// `requested_id` is the event id the summary was fetched with; the header id
/// wins when the summary reports one.
pub fn render_box_score(
    detail: &BoxScoreDetail,
    league: League,
    requested_id: &str,
    web_base: &str,
) -> BoxScoreView {
    let (away, home) = match detail.teams.as_slice() {
        [first, second, ..] => {
            if first.side == Some(HomeAway::Away) {
                (first, second)
            } else {
                (second, first)
            }
        }
        _ => {
            return BoxScoreView::NotAvailable {
                message: NOT_AVAILABLE_MESSAGE.to_string(),
            }
        }
    };

    BoxScoreView::Loaded(BoxScoreSummary {
        game_url: league.game_url(web_base, detail.event_id.as_deref().unwrap_or(requested_id)),
        title: format!("{} @ {}", away.team.full_name(), home.team.full_name()),
        away: score_header(detail, away, HomeAway::Away),
        home: score_header(detail, home, HomeAway::Home),
        team_stats: team_stat_rows(away, home, league),
        player_tables: detail
            .players
            .iter()
            .filter_map(|block| block.groups.first().map(|group| (block, group)))
            .take(MAX_PLAYER_TABLES)
            .map(|(block, group)| player_table(block, group, league))
            .collect(),
    })
}

fn score_header(detail: &BoxScoreDetail, team: &TeamStats, side: HomeAway) -> ScoreHeader {
    let score = detail
        .competitors
        .iter()
        .find(|line| line.side == Some(side))
        .and_then(|line| line.score.clone())
        .unwrap_or_else(|| MISSING_SCORE.to_string());
    ScoreHeader {
        abbreviation: team.team.abbreviation.clone().unwrap_or_default(),
        score,
    }
}

/// Key stats reported by both teams, in league order
fn team_stat_rows(away: &TeamStats, home: &TeamStats, league: League) -> Vec<StatRow> {
    league
        .key_stats()
        .iter()
        .filter_map(|&name| {
            let (a, h) = (away.stat(name)?, home.stat(name)?);
            Some(StatRow {
                label: a.label.clone().unwrap_or_else(|| name.to_string()),
                away: stat_value(a),
                home: stat_value(h),
            })
        })
        .collect()
}

fn stat_value(stat: &Stat) -> String {
    stat.display_value
        .clone()
        .or_else(|| stat.value.clone())
        .unwrap_or_else(|| MISSING_SCORE.to_string())
}

fn player_table(block: &PlayerStats, group: &StatGroup, league: League) -> PlayerTable {
    let title = format!("{} - Player Stats", block.team.full_name());
    if group.athletes.is_empty() {
        return PlayerTable::Empty {
            title,
            message: NO_PLAYER_STATS_MESSAGE.to_string(),
        };
    }

    let max_columns = league.player_stat_columns();
    PlayerTable::Stats {
        title,
        columns: group.labels.iter().take(max_columns).cloned().collect(),
        rows: group
            .athletes
            .iter()
            .take(MAX_ATHLETES)
            .map(|athlete| PlayerRow {
                name: athlete.name.clone(),
                values: athlete.stats.iter().take(max_columns).cloned().collect(),
            })
            .collect(),
    }
}
