//! Shared layout constants used across CLI and TUI components.

/// Width of a game card's content (excluding borders)
pub const CARD_CONTENT_WIDTH: usize = 44;

/// Width of the badge column on a card ("LAL", "NYK", ...)
pub const BADGE_WIDTH: usize = 4;

/// Width of the score column on a card
pub const SCORE_WIDTH: usize = 4;

/// Width of the team stat value columns in a box score
pub const BOXSCORE_VALUE_WIDTH: usize = 10;

/// Width of the team stat label column in a box score
pub const BOXSCORE_LABEL_WIDTH: usize = 24;

/// Width of the athlete name column in player tables
pub const PLAYER_NAME_WIDTH: usize = 20;

/// Width of each stat column in player tables
pub const PLAYER_STAT_WIDTH: usize = 7;

/// Width of the header separator in CLI output
pub const HEADER_SEPARATOR_WIDTH: usize = 60;
