use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;
use tracing::warn;

use crate::client::DEFAULT_API_BASE_URL;
use crate::formatting::BoxChars;
use crate::league::League;

/// Default public site for game pages
pub const DEFAULT_WEB_BASE_URL: &str = "https://www.espn.com";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Seconds between automatic refreshes while viewing today
    pub refresh_interval: u32,
    /// Format of the "last updated" time
    pub time_format: String,
    /// Leagues to load, in display order
    pub leagues: Vec<League>,
    pub api_base_url: String,
    pub web_base_url: String,
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(skip)]
    pub box_chars: BoxChars,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub live_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 60,
            time_format: "%-I:%M:%S %p".to_string(),
            leagues: League::ALL.to_vec(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            web_base_url: DEFAULT_WEB_BASE_URL.to_string(),
            display: DisplayConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl DisplayConfig {
    /// Re-derive the box characters after `use_unicode` was deserialized
    fn sync_box_chars(&mut self) {
        self.box_chars = BoxChars::from_use_unicode(self.use_unicode);
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            live_fg: Color::Red,
        }
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60", and bare "FF6600" as sent by the scores API
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    // Named colors
    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    // Hex colors (#FF6600, #f60 or FF6600)
    let hex = s.strip_prefix('#').unwrap_or(&s);
    if hex.chars().all(|c| c.is_ascii_hexdigit()) {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 && s.starts_with('#') {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    // RGB tuples "255,165,0"
    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse a config file body, keeping defaults for anything missing
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.display.sync_box_chars();
    if config.leagues.is_empty() {
        config.leagues = League::ALL.to_vec();
    }
    Ok(config)
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content).unwrap_or_else(|e| {
        warn!("Ignoring invalid config {}: {}", config_path.display(), e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Blue"), Some(Color::Blue));
        assert_eq!(parse_color("ORANGE"), Some(Color::Rgb(255, 165, 0)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("552583"), Some(Color::Rgb(85, 37, 131)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("abc"), None);
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.refresh_interval, 60);
        assert_eq!(config.leagues, League::ALL.to_vec());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.display.use_unicode);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
refresh_interval = 30
leagues = ["nhl", "soccer"]

[display]
use_unicode = false

[theme]
selection_fg = "#00FFFF"
        "##;

        let config = parse(toml_str).unwrap();
        assert_eq!(config.refresh_interval, 30);
        assert_eq!(config.leagues, vec![League::Nhl, League::Soccer]);
        assert_eq!(config.theme.selection_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.theme.live_fg, Color::Red);
        assert_eq!(config.display.box_chars, BoxChars::ascii());
        assert_eq!(config.log_file, "/dev/null");
    }

    #[test]
    fn test_config_empty_league_list_means_all() {
        let config = parse("leagues = []").unwrap();
        assert_eq!(config.leagues, League::ALL.to_vec());
    }

    #[test]
    fn test_config_rejects_unknown_league() {
        assert!(parse(r#"leagues = ["cricket"]"#).is_err());
    }
}
