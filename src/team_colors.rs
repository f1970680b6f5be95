//! Fallback team colors for teams whose payload carries no color.

use phf::phf_map;

/// Color used when neither the payload nor the table knows the team
pub const DEFAULT_TEAM_COLOR: &str = "667eea";

/// Primary colors keyed by team abbreviation (hex, no '#')
///
/// Abbreviations collide across leagues (PHI, PIT, ...); the first league to
/// claim one wins.
static TEAM_COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    // NBA
    "LAL" => "552583",
    "BOS" => "007A33",
    "GSW" => "1D428A",
    "CHI" => "CE1141",
    "MIA" => "98002E",
    "NYK" => "006BB6",
    "BKN" => "000000",
    "PHI" => "006BB6",
    // NFL
    "KC" => "E31837",
    "SF" => "AA0000",
    "DAL" => "041E42",
    "NE" => "002244",
    "GB" => "FFB612",
    "PIT" => "FFB612",
    "SEA" => "002244",
    "TB" => "D50A0A",
    // NHL
    "TOR" => "00205B",
    "MTL" => "AF1E2D",
    "EDM" => "FF4C00",
    "VAN" => "00205B",
};

pub fn fallback_color(abbreviation: &str) -> Option<&'static str> {
    TEAM_COLORS.get(abbreviation).copied()
}

/// Resolve a badge color: team-provided, then the table, then the default
pub fn team_color(provided: Option<&str>, abbreviation: Option<&str>) -> String {
    provided
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .or_else(|| abbreviation.and_then(fallback_color).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_TEAM_COLOR.to_string())
}
