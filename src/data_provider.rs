/// Trait for providing scores data, abstracting over the real API client and mock implementations
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::client::EspnClient;
use crate::error::ApiError;
use crate::league::League;
use crate::model::{BoxScoreDetail, Scoreboard};

/// Source of scoreboards and box scores, implemented by both EspnClient and MockClient
#[async_trait]
pub trait ScoresProvider: Send + Sync {
    /// Get every game of a league on a date
    async fn scoreboard(&self, league: League, date: NaiveDate) -> Result<Scoreboard, ApiError>;

    /// Get team and player statistics for a game
    async fn box_score(&self, league: League, event_id: &str) -> Result<BoxScoreDetail, ApiError>;
}

#[async_trait]
impl ScoresProvider for EspnClient {
    async fn scoreboard(&self, league: League, date: NaiveDate) -> Result<Scoreboard, ApiError> {
        EspnClient::scoreboard(self, league, date).await
    }

    async fn box_score(&self, league: League, event_id: &str) -> Result<BoxScoreDetail, ApiError> {
        EspnClient::box_score(self, league, event_id).await
    }
}
