//! Domain types for scoreboards and box scores.
//!
//! These are read-only snapshots built from the ESPN wire types. Empty strings
//! coming from upstream are normalized to `None` so that renderers only have to
//! check for presence.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use crate::espn::{
    EspnCompetitor, EspnEvent, EspnStat, EspnTeam, ScoreboardResponse, SummaryResponse,
};
use crate::league::League;

/// Coarse game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Scheduled,
    InProgress,
    Final,
    /// Anything upstream sends that is not "pre", "in" or "post"
    Other(String),
}

impl GameState {
    pub fn from_api(state: Option<&str>) -> Self {
        match state {
            Some("pre") => GameState::Scheduled,
            Some("in") => GameState::InProgress,
            Some("post") => GameState::Final,
            Some(other) => GameState::Other(other.to_string()),
            None => GameState::Other(String::new()),
        }
    }

    pub fn has_started(&self) -> bool {
        !matches!(self, GameState::Scheduled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub state: GameState,
    pub detail: Option<String>,
    pub short_detail: Option<String>,
    /// Period, quarter, half or inning; 0 when unknown
    pub period: u32,
    pub clock: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRef {
    pub display_name: Option<String>,
    pub short_name: Option<String>,
    pub abbreviation: Option<String>,
    /// Hex color without the leading '#'
    pub color: Option<String>,
    pub logo: Option<String>,
}

impl TeamRef {
    /// Best available name for compact display
    pub fn name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.display_name.as_deref())
            .or(self.abbreviation.as_deref())
            .unwrap_or("")
    }

    pub fn full_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.short_name.as_deref())
            .or(self.abbreviation.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    pub fn from_api(value: Option<&str>) -> Option<Self> {
        match value {
            Some("home") => Some(HomeAway::Home),
            Some("away") => Some(HomeAway::Away),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub team: TeamRef,
    pub score: u32,
    /// Only meaningful once the game is final
    pub winner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    pub id: String,
    /// `None` when upstream sent no parseable timestamp
    pub start: Option<DateTime<Utc>>,
    pub status: StatusInfo,
    pub venue: Option<String>,
    /// Network names of the first broadcast entry
    pub broadcasts: Vec<String>,
    pub home: Participant,
    pub away: Participant,
}

/// All games of one league on one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub league: League,
    pub events: Vec<GameEvent>,
}

impl Scoreboard {
    /// Build from a scoreboard payload, dropping events that lack a home or away side
    pub fn from_response(league: League, response: ScoreboardResponse) -> Self {
        let events = response
            .events
            .into_iter()
            .filter_map(|event| {
                let id = event.id.clone();
                let converted = GameEvent::from_espn(event);
                if converted.is_none() {
                    warn!("Dropping {} event {}: missing home or away competitor", league, id);
                }
                converted
            })
            .collect();
        Self { league, events }
    }
}

impl GameEvent {
    pub fn from_espn(event: EspnEvent) -> Option<Self> {
        let EspnEvent { id, date, status, competitions } = event;
        let competition = competitions.into_iter().next()?;

        let mut home = None;
        let mut away = None;
        for competitor in competition.competitors {
            match HomeAway::from_api(competitor.home_away.as_deref()) {
                Some(HomeAway::Home) if home.is_none() => home = Some(participant(competitor)),
                Some(HomeAway::Away) if away.is_none() => away = Some(participant(competitor)),
                _ => {}
            }
        }

        let status_type = status.status_type;
        Some(GameEvent {
            id,
            start: date.as_deref().and_then(parse_timestamp),
            status: StatusInfo {
                state: GameState::from_api(status_type.state.as_deref()),
                detail: non_empty(status_type.detail),
                short_detail: non_empty(status_type.short_detail),
                period: status.period.unwrap_or(0),
                clock: non_empty(status.display_clock),
            },
            venue: competition.venue.and_then(|venue| non_empty(venue.full_name)),
            broadcasts: competition
                .broadcasts
                .into_iter()
                .next()
                .map(|broadcast| broadcast.names.into_iter().filter(|n| !n.is_empty()).collect())
                .unwrap_or_default(),
            home: home?,
            away: away?,
        })
    }
}

fn participant(competitor: EspnCompetitor) -> Participant {
    Participant {
        team: TeamRef::from(competitor.team),
        score: competitor
            .score
            .map(|score| score.to_text())
            .and_then(|score| score.trim().parse().ok())
            .unwrap_or(0),
        winner: competitor.winner.unwrap_or(false),
    }
}

impl From<EspnTeam> for TeamRef {
    fn from(team: EspnTeam) -> Self {
        TeamRef {
            display_name: non_empty(team.display_name),
            short_name: non_empty(team.short_display_name),
            abbreviation: non_empty(team.abbreviation),
            color: non_empty(team.color).map(|c| c.trim_start_matches('#').to_string()),
            logo: non_empty(team.logo),
        }
    }
}

/// Parse an upstream timestamp
///
/// ESPN usually omits seconds (`2024-11-21T00:30Z`), so RFC 3339 alone is not enough.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%SZ"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// Box score detail

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    pub side: Option<HomeAway>,
    pub score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub label: Option<String>,
    pub value: Option<String>,
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStats {
    pub side: Option<HomeAway>,
    pub team: TeamRef,
    pub stats: Vec<Stat>,
}

impl TeamStats {
    pub fn stat(&self, name: &str) -> Option<&Stat> {
        self.stats.iter().find(|stat| stat.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteLine {
    pub name: String,
    pub stats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatGroup {
    pub labels: Vec<String>,
    pub athletes: Vec<AthleteLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub team: TeamRef,
    pub groups: Vec<StatGroup>,
}

/// Per-game statistics from the summary endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxScoreDetail {
    pub event_id: Option<String>,
    pub competitors: Vec<ScoreLine>,
    pub teams: Vec<TeamStats>,
    pub players: Vec<PlayerStats>,
}

impl From<SummaryResponse> for BoxScoreDetail {
    fn from(response: SummaryResponse) -> Self {
        let (event_id, competitors) = match response.header {
            Some(header) => {
                let competitors = header
                    .competitions
                    .into_iter()
                    .next()
                    .map(|competition| {
                        competition
                            .competitors
                            .into_iter()
                            .map(|c| ScoreLine {
                                side: HomeAway::from_api(c.home_away.as_deref()),
                                score: non_empty(c.score.map(|s| s.to_text())),
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                (non_empty(header.id), competitors)
            }
            None => (None, Vec::new()),
        };

        let boxscore = response.boxscore.unwrap_or_default();
        let teams = boxscore
            .teams
            .into_iter()
            .map(|team| TeamStats {
                side: HomeAway::from_api(team.home_away.as_deref()),
                team: TeamRef::from(team.team),
                stats: team.statistics.into_iter().map(Stat::from).collect(),
            })
            .collect();
        let players = boxscore
            .players
            .into_iter()
            .map(|block| PlayerStats {
                team: TeamRef::from(block.team),
                groups: block
                    .statistics
                    .into_iter()
                    .map(|group| StatGroup {
                        labels: group.labels,
                        athletes: group
                            .athletes
                            .into_iter()
                            .map(|line| AthleteLine {
                                name: non_empty(line.athlete.short_name)
                                    .or(non_empty(line.athlete.display_name))
                                    .unwrap_or_default(),
                                stats: line.stats,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        BoxScoreDetail { event_id, competitors, teams, players }
    }
}

impl From<EspnStat> for Stat {
    fn from(stat: EspnStat) -> Self {
        Stat {
            name: stat.name,
            label: non_empty(stat.display_name).or(non_empty(stat.label)),
            value: stat.value.map(|v| v.to_text()),
            display_value: non_empty(stat.display_value),
        }
    }
}
