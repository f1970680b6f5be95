/// Fixture data for tests, the development mock client and benchmarks
///
/// The JSON payloads are trimmed copies of real ESPN responses, keeping only
/// the fields the application reads. The builder functions create domain
/// values directly for tests that do not care about deserialization.
use chrono::{DateTime, TimeZone, Utc};

use crate::model::{
    AthleteLine, BoxScoreDetail, GameEvent, GameState, HomeAway, Participant, PlayerStats,
    ScoreLine, Stat, StatGroup, StatusInfo, TeamRef, TeamStats,
};

/// NBA scoreboard with one final, one live and one scheduled game
pub const NBA_SCOREBOARD_JSON: &str = r##"{
  "events": [
    {
      "id": "400",
      "date": "2024-11-20T23:00Z",
      "status": {
        "period": 5,
        "displayClock": "0.0",
        "type": { "state": "post", "detail": "Final/OT", "shortDetail": "Final/OT" }
      },
      "competitions": [{
        "venue": { "fullName": "Kaseya Center" },
        "broadcasts": [{ "names": ["TNT"] }],
        "competitors": [
          { "homeAway": "home", "score": "118", "winner": true,
            "team": { "displayName": "Miami Heat", "shortDisplayName": "Heat", "abbreviation": "MIA", "color": "98002e" } },
          { "homeAway": "away", "score": "112", "winner": false,
            "team": { "displayName": "New York Knicks", "shortDisplayName": "Knicks", "abbreviation": "NYK", "color": "1d428a" } }
        ]
      }]
    },
    {
      "id": "401",
      "date": "2024-11-21T00:30Z",
      "status": {
        "period": 2,
        "displayClock": "5:23",
        "type": { "state": "in", "detail": "In Progress", "shortDetail": "In Progress" }
      },
      "competitions": [{
        "venue": { "fullName": "TD Garden" },
        "broadcasts": [{ "names": ["ESPN", "NBCS-BOS"] }],
        "competitors": [
          { "homeAway": "away", "score": "50",
            "team": { "displayName": "Los Angeles Lakers", "shortDisplayName": "Lakers", "abbreviation": "LAL" } },
          { "homeAway": "home", "score": "54",
            "team": { "displayName": "Boston Celtics", "shortDisplayName": "Celtics", "abbreviation": "BOS",
                      "logo": "https://a.espncdn.com/i/teamlogos/nba/500/bos.png" } }
        ]
      }]
    },
    {
      "id": "402",
      "date": "2024-11-21T01:00Z",
      "status": {
        "period": 0,
        "displayClock": "0.0",
        "type": { "state": "pre", "detail": "Wed, November 20th at 8:00 PM EST", "shortDetail": "11/20 - 8:00 PM EST" }
      },
      "competitions": [{
        "venue": { "fullName": "United Center" },
        "competitors": [
          { "homeAway": "home", "score": "0",
            "team": { "displayName": "Chicago Bulls", "shortDisplayName": "Bulls", "abbreviation": "CHI" } },
          { "homeAway": "away", "score": "0",
            "team": { "displayName": "Golden State Warriors", "shortDisplayName": "Warriors", "abbreviation": "GSW" } }
        ]
      }]
    }
  ]
}"##;

/// NHL scoreboard with a single scheduled game
pub const NHL_SCOREBOARD_JSON: &str = r##"{
  "events": [
    {
      "id": "501",
      "date": "2024-11-20T23:00Z",
      "status": {
        "period": 0,
        "type": { "state": "pre", "detail": "Wed, November 20th at 7:00 PM EST", "shortDetail": "11/20 - 7:00 PM EST" }
      },
      "competitions": [{
        "competitors": [
          { "homeAway": "home", "team": { "displayName": "Toronto Maple Leafs", "shortDisplayName": "Maple Leafs", "abbreviation": "TOR" } },
          { "homeAway": "away", "team": { "displayName": "Montreal Canadiens", "shortDisplayName": "Canadiens", "abbreviation": "MTL" } }
        ]
      }]
    }
  ]
}"##;

pub const EMPTY_SCOREBOARD_JSON: &str = r#"{ "events": [] }"#;

/// Summary for game 401; the away team reports no rebounds and has no athletes listed
pub const NBA_SUMMARY_JSON: &str = r##"{
  "header": {
    "id": "401",
    "competitions": [{
      "competitors": [
        { "homeAway": "home", "score": "110", "team": { "abbreviation": "BOS" } },
        { "homeAway": "away", "score": "104", "team": { "abbreviation": "LAL" } }
      ]
    }]
  },
  "boxscore": {
    "teams": [
      {
        "homeAway": "home",
        "team": { "displayName": "Boston Celtics", "abbreviation": "BOS" },
        "statistics": [
          { "name": "fieldGoalsMade", "displayName": "FG", "displayValue": "41" },
          { "name": "rebounds", "displayName": "Rebounds", "displayValue": "47" },
          { "name": "assists", "displayName": "Assists", "displayValue": "24" },
          { "name": "steals", "label": "Steals", "value": 8 }
        ]
      },
      {
        "homeAway": "away",
        "team": { "displayName": "Los Angeles Lakers", "abbreviation": "LAL" },
        "statistics": [
          { "name": "fieldGoalsMade", "displayName": "FG", "displayValue": "39" },
          { "name": "assists", "displayName": "Assists", "displayValue": "27" },
          { "name": "steals", "label": "Steals", "value": 6 }
        ]
      }
    ],
    "players": [
      {
        "team": { "displayName": "Boston Celtics", "abbreviation": "BOS" },
        "statistics": [{
          "labels": ["MIN", "FG", "3PT", "FT", "OREB", "DREB", "REB", "AST", "STL", "BLK", "TO", "PF", "+/-", "PTS"],
          "athletes": [
            { "athlete": { "displayName": "Jayson Tatum", "shortName": "J. Tatum" }, "stats": ["38", "11-22", "4-9", "5-6", "1", "9", "10", "6", "1", "1", "3", "2", "+8", "31"] },
            { "athlete": { "displayName": "Jaylen Brown" }, "stats": ["36", "9-18", "2-6", "3-4", "2", "5", "7", "3", "2", "0", "2", "3", "+4", "23"] },
            { "athlete": { "shortName": "D. White" }, "stats": ["33"] },
            { "athlete": { "shortName": "J. Holiday" }, "stats": ["31"] },
            { "athlete": { "shortName": "K. Porzingis" }, "stats": ["29"] },
            { "athlete": { "shortName": "A. Horford" }, "stats": ["22"] },
            { "athlete": { "shortName": "P. Pritchard" }, "stats": ["20"] },
            { "athlete": { "shortName": "S. Hauser" }, "stats": ["15"] },
            { "athlete": { "shortName": "L. Kornet" }, "stats": ["9"] },
            { "athlete": { "shortName": "X. Tillman" }, "stats": ["4"] },
            { "athlete": { "shortName": "N. Queta" }, "stats": ["2"] },
            { "athlete": { "shortName": "J. Springer" }, "stats": ["1"] }
          ]
        }]
      },
      {
        "team": { "displayName": "Los Angeles Lakers", "abbreviation": "LAL" },
        "statistics": [{ "labels": ["MIN", "PTS"], "athletes": [] }]
      }
    ]
  }
}"##;

pub fn team(abbreviation: &str) -> TeamRef {
    TeamRef {
        display_name: Some(format!("{} Team", abbreviation)),
        short_name: Some(abbreviation.to_string()),
        abbreviation: Some(abbreviation.to_string()),
        color: None,
        logo: None,
    }
}

pub fn status(state: GameState) -> StatusInfo {
    StatusInfo {
        state,
        detail: None,
        short_detail: None,
        period: 0,
        clock: None,
    }
}

/// Build a game with fixed teams and the given state and start time
pub fn game(id: &str, state: GameState, start: Option<DateTime<Utc>>) -> GameEvent {
    GameEvent {
        id: id.to_string(),
        start,
        status: status(state),
        venue: None,
        broadcasts: Vec::new(),
        home: Participant { team: team("HOM"), score: 0, winner: false },
        away: Participant { team: team("AWY"), score: 0, winner: false },
    }
}

/// UTC timestamp on a fixed fixture day
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 21, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub fn stat(name: &str, display_value: &str) -> Stat {
    Stat {
        name: name.to_string(),
        label: None,
        value: None,
        display_value: Some(display_value.to_string()),
    }
}

/// Box score with the given stats per side, listed home first
pub fn box_score(home_stats: Vec<Stat>, away_stats: Vec<Stat>) -> BoxScoreDetail {
    BoxScoreDetail {
        event_id: Some("401".to_string()),
        competitors: vec![
            ScoreLine { side: Some(HomeAway::Home), score: Some("99".to_string()) },
            ScoreLine { side: Some(HomeAway::Away), score: Some("97".to_string()) },
        ],
        teams: vec![
            TeamStats { side: Some(HomeAway::Home), team: team("HOM"), stats: home_stats },
            TeamStats { side: Some(HomeAway::Away), team: team("AWY"), stats: away_stats },
        ],
        players: vec![PlayerStats {
            team: team("HOM"),
            groups: vec![StatGroup {
                labels: vec!["MIN".to_string(), "PTS".to_string()],
                athletes: vec![AthleteLine {
                    name: "A. Player".to_string(),
                    stats: vec!["30".to_string(), "12".to_string()],
                }],
            }],
        }],
    }
}
