//! Supported leagues and the static per-league tables.
//!
//! Everything that varies by league (endpoint path, key stats, period labels,
//! player table width, web page path) lives in [`LeagueInfo`] so adding a
//! league means adding one enum variant and one table entry.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default number of player stat columns shown in a box score
const DEFAULT_PLAYER_STAT_COLUMNS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum League {
    /// Basketball (NBA)
    Nba,
    /// American football (NFL)
    Nfl,
    /// Ice hockey (NHL)
    Nhl,
    /// Baseball (MLB)
    Mlb,
    /// Soccer (English Premier League)
    Soccer,
}

/// Static data for one league
#[derive(Debug)]
pub struct LeagueInfo {
    pub title: &'static str,
    /// Sport/league path segment of the site API
    pub api_path: &'static str,
    /// Path segment of the public game page
    pub web_path: &'static str,
    /// Team stat field names compared in the box score, in display order
    pub key_stats: &'static [&'static str],
    pub player_stat_columns: usize,
}

const NBA: LeagueInfo = LeagueInfo {
    title: "NBA",
    api_path: "basketball/nba",
    web_path: "nba",
    key_stats: &[
        "fieldGoalsMade",
        "threePointFieldGoalsMade",
        "freeThrowsMade",
        "rebounds",
        "assists",
        "turnovers",
        "steals",
        "blocks",
    ],
    player_stat_columns: 10,
};

const NFL: LeagueInfo = LeagueInfo {
    title: "NFL",
    api_path: "football/nfl",
    web_path: "nfl",
    key_stats: &[
        "totalYards",
        "passingYards",
        "rushingYards",
        "turnovers",
        "possession",
        "thirdDownEff",
        "fourthDownEff",
    ],
    player_stat_columns: DEFAULT_PLAYER_STAT_COLUMNS,
};

const NHL: LeagueInfo = LeagueInfo {
    title: "NHL",
    api_path: "hockey/nhl",
    web_path: "nhl",
    key_stats: &[
        "shots",
        "powerPlayGoals",
        "faceWinPercent",
        "hits",
        "blockedShots",
        "takeaways",
        "giveaways",
    ],
    player_stat_columns: DEFAULT_PLAYER_STAT_COLUMNS,
};

const MLB: LeagueInfo = LeagueInfo {
    title: "MLB",
    api_path: "baseball/mlb",
    web_path: "mlb",
    key_stats: &["hits", "runs", "errors", "leftOnBase", "homeRuns", "strikeouts"],
    player_stat_columns: DEFAULT_PLAYER_STAT_COLUMNS,
};

const SOCCER: LeagueInfo = LeagueInfo {
    title: "Premier League",
    api_path: "soccer/eng.1",
    web_path: "soccer/_/league/eng.1",
    key_stats: &[
        "possessionPct",
        "shots",
        "shotsOnTarget",
        "corners",
        "fouls",
        "offsides",
        "yellowCards",
    ],
    player_stat_columns: DEFAULT_PLAYER_STAT_COLUMNS,
};

impl League {
    /// All leagues in display order
    pub const ALL: [League; 5] = [League::Nba, League::Nfl, League::Nhl, League::Mlb, League::Soccer];

    pub fn info(self) -> &'static LeagueInfo {
        match self {
            League::Nba => &NBA,
            League::Nfl => &NFL,
            League::Nhl => &NHL,
            League::Mlb => &MLB,
            League::Soccer => &SOCCER,
        }
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    pub fn key_stats(self) -> &'static [&'static str] {
        self.info().key_stats
    }

    pub fn player_stat_columns(self) -> usize {
        self.info().player_stat_columns
    }

    /// Short period label used on live game cards
    ///
    /// Quarters for basketball and football, periods for hockey, halves for
    /// soccer and a simplified inning marker for baseball.
    pub fn period_short_label(self, period: u32) -> String {
        match self {
            League::Nba | League::Nfl => format!("Q{}", period),
            League::Nhl => format!("P{}", period),
            League::Soccer => {
                if period == 1 {
                    "1H".to_string()
                } else {
                    "2H".to_string()
                }
            }
            League::Mlb => format!("T{}", period),
        }
    }

    /// Public game page for an event
    pub fn game_url(self, web_base: &str, event_id: &str) -> String {
        format!(
            "{}/{}/game/_/gameId/{}",
            web_base.trim_end_matches('/'),
            self.info().web_path,
            event_id
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            League::Nba => "nba",
            League::Nfl => "nfl",
            League::Nhl => "nhl",
            League::Mlb => "mlb",
            League::Soccer => "soccer",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown league '{0}'")]
pub struct UnknownLeague(pub String);

impl FromStr for League {
    type Err = UnknownLeague;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::ALL
            .into_iter()
            .find(|league| league.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLeague(s.to_string()))
    }
}
