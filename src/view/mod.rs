//! Pure view models built from domain snapshots.
//!
//! Nothing in here performs I/O; the TUI and the CLI commands turn these
//! structures into terminal output.

pub mod boxscore;
pub mod card;

pub use boxscore::{
    render_box_score, BoxScoreSummary, BoxScoreView, PlayerRow, PlayerTable, ScoreHeader, StatRow,
    BOX_SCORE_FAILED_MESSAGE, NOT_AVAILABLE_MESSAGE, NO_PLAYER_STATS_MESSAGE,
};
pub use card::{render_card, CardView, StatusClass, TeamBadge, TeamLine};

/// Empty state for a date without games
pub const NO_GAMES_MESSAGE: &str = "No games scheduled for this date.";
/// Shown when every league failed to load
pub const SCORES_FAILED_MESSAGE: &str = "Failed to load scores. Please try again.";
