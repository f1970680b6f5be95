//! Serde shapes of the ESPN site API responses.
//!
//! Only the fields the application reads are declared; everything is optional
//! or defaulted because the payloads differ between sports and game states.
//! Conversion into the domain types lives in [`crate::model`].

use serde::Deserialize;

/// A JSON scalar that ESPN sends either quoted or bare (scores, stat values)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

// Scoreboard

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<EspnEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnEvent {
    #[serde(default)]
    pub id: String,
    pub date: Option<String>,
    #[serde(default)]
    pub status: EspnStatus,
    #[serde(default)]
    pub competitions: Vec<EspnCompetition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnStatus {
    #[serde(rename = "type", default)]
    pub status_type: EspnStatusType,
    pub period: Option<u32>,
    pub display_clock: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnStatusType {
    /// "pre", "in" or "post"
    pub state: Option<String>,
    pub detail: Option<String>,
    pub short_detail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnCompetition {
    #[serde(default)]
    pub competitors: Vec<EspnCompetitor>,
    pub venue: Option<EspnVenue>,
    #[serde(default)]
    pub broadcasts: Vec<EspnBroadcast>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnCompetitor {
    /// "home" or "away"
    pub home_away: Option<String>,
    #[serde(default)]
    pub team: EspnTeam,
    pub score: Option<Scalar>,
    pub winner: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnTeam {
    pub display_name: Option<String>,
    pub short_display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub color: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnVenue {
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnBroadcast {
    #[serde(default)]
    pub names: Vec<String>,
}

// Game summary

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryResponse {
    pub header: Option<EspnHeader>,
    pub boxscore: Option<EspnBoxscore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnHeader {
    pub id: Option<String>,
    #[serde(default)]
    pub competitions: Vec<EspnCompetition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnBoxscore {
    #[serde(default)]
    pub teams: Vec<EspnTeamStats>,
    #[serde(default)]
    pub players: Vec<EspnTeamPlayers>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnTeamStats {
    #[serde(default)]
    pub team: EspnTeam,
    pub home_away: Option<String>,
    #[serde(default)]
    pub statistics: Vec<EspnStat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnStat {
    #[serde(default)]
    pub name: String,
    pub display_name: Option<String>,
    pub label: Option<String>,
    pub display_value: Option<String>,
    pub value: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnTeamPlayers {
    #[serde(default)]
    pub team: EspnTeam,
    #[serde(default)]
    pub statistics: Vec<EspnStatGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnStatGroup {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub athletes: Vec<EspnAthleteStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnAthleteStats {
    #[serde(default)]
    pub athlete: EspnAthlete,
    #[serde(default)]
    pub stats: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnAthlete {
    pub display_name: Option<String>,
    pub short_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_accepts_quoted_and_bare_values() {
        let quoted: Scalar = serde_json::from_str("\"102\"").unwrap();
        let bare: Scalar = serde_json::from_str("102").unwrap();
        let float: Scalar = serde_json::from_str("45.5").unwrap();
        assert_eq!(quoted.to_text(), "102");
        assert_eq!(bare.to_text(), "102");
        assert_eq!(float.to_text(), "45.5");
    }

    #[test]
    fn test_scoreboard_tolerates_missing_fields() {
        let json = r#"{"events":[{"id":"1","status":{"type":{"state":"pre"}},"competitions":[{}]}]}"#;
        let response: ScoreboardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.events.len(), 1);
        assert_eq!(response.events[0].status.status_type.state.as_deref(), Some("pre"));
        assert!(response.events[0].competitions[0].competitors.is_empty());
    }

    #[test]
    fn test_empty_scoreboard() {
        let response: ScoreboardResponse = serde_json::from_str("{}").unwrap();
        assert!(response.events.is_empty());
    }
}
