use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::warn;

use super::action::Action;
use crate::aggregator::load_all;
use crate::browser::open_in_browser;
use crate::data_provider::ScoresProvider;
use crate::league::League;

/// Side effects returned by the reducer
///
/// The reducer never performs I/O; it describes what should happen and the
/// runtime executes it.
pub enum Effect {
    None,
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Load every configured league for a date, tagged with a generation
    FetchScores { generation: u64, date: NaiveDate },
    /// Load one game's summary, tagged with a request number
    FetchBoxScore {
        request: u64,
        league: League,
        event_id: String,
    },
    OpenUrl(String),
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::FetchScores { generation, date } => f
                .debug_struct("FetchScores")
                .field("generation", generation)
                .field("date", date)
                .finish(),
            Effect::FetchBoxScore { request, league, event_id } => f
                .debug_struct("FetchBoxScore")
                .field("request", request)
                .field("league", league)
                .field("event_id", event_id)
                .finish(),
            Effect::OpenUrl(url) => f.debug_tuple("OpenUrl").field(url).finish(),
        }
    }
}

/// Effect handler for data fetching operations
///
/// Each method returns an `Effect::Async` that resolves to the matching
/// `*Loaded` action.
pub struct DataEffects {
    client: Arc<dyn ScoresProvider>,
    leagues: Vec<League>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn ScoresProvider>, leagues: Vec<League>) -> Self {
        Self { client, leagues }
    }

    /// Fetch all configured leagues concurrently
    pub fn fetch_scores(&self, generation: u64, date: NaiveDate) -> Effect {
        let client = self.client.clone();
        let leagues = self.leagues.clone();
        Effect::Async(Box::pin(async move {
            let scores = load_all(client.as_ref(), &leagues, date).await;
            Action::ScoresLoaded {
                generation,
                scores,
                fetched_at: Local::now(),
            }
        }))
    }

    pub fn fetch_box_score(&self, request: u64, league: League, event_id: String) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.box_score(league, &event_id).await;
            if let Err(e) = &result {
                warn!("Error fetching {} box score {}: {}", league, event_id, e);
            }
            Action::BoxScoreLoaded {
                request,
                result: result.map_err(|e| e.to_string()),
            }
        }))
    }

    pub fn open_url(&self, url: String) -> Effect {
        Effect::Async(Box::pin(async move {
            match open_in_browser(&url) {
                Ok(()) => Action::SetStatusMessage {
                    message: format!("Opened {}", url),
                    is_error: false,
                },
                Err(e) => {
                    warn!("Failed to open {}: {}", url, e);
                    Action::SetStatusMessage {
                        message: format!("Failed to open browser: {}", e),
                        is_error: true,
                    }
                }
            }
        }))
    }
}
