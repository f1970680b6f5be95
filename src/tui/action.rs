use chrono::{DateTime, Local, NaiveDate};

use crate::aggregator::DailyScores;
use crate::model::BoxScoreDetail;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading)
/// - The refresh timer
#[derive(Debug, Clone)]
pub enum Action {
    /// Initial load and manual refresh
    RefreshData,
    /// Periodic timer; only refreshes when the cursor is on `today`
    Tick { today: NaiveDate },

    // Date navigation
    PreviousDay,
    NextDay,

    // Game selection
    SelectPrevious,
    SelectNext,

    // Box score overlay
    OpenBoxScore,
    CloseBoxScore,
    OpenGamePage,

    // Data loaded (from effects)
    ScoresLoaded {
        generation: u64,
        scores: DailyScores,
        fetched_at: DateTime<Local>,
    },
    BoxScoreLoaded {
        request: u64,
        result: Result<BoxScoreDetail, String>,
    },

    // System actions
    SetStatusMessage { message: String, is_error: bool },
    Quit,
}
