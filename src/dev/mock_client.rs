/// Mock scores client for development and testing
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::data_provider::ScoresProvider;
use crate::error::ApiError;
use crate::espn::{ScoreboardResponse, SummaryResponse};
use crate::fixtures;
use crate::league::League;
use crate::model::{BoxScoreDetail, Scoreboard};

/// Mock client that returns fixture data instead of making real API calls
///
/// Leagues without a registered payload return an empty scoreboard. Leagues
/// marked as failing return a 503 error.
pub struct MockClient {
    scoreboards: HashMap<League, &'static str>,
    failing: HashSet<League>,
    box_score_fails: bool,
}

impl MockClient {
    /// Create a new mock client with NBA and NHL games
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        let mut scoreboards = HashMap::new();
        scoreboards.insert(League::Nba, fixtures::NBA_SCOREBOARD_JSON);
        scoreboards.insert(League::Nhl, fixtures::NHL_SCOREBOARD_JSON);
        Self {
            scoreboards,
            failing: HashSet::new(),
            box_score_fails: false,
        }
    }

    /// Mock client where every league has no games
    pub fn empty() -> Self {
        Self {
            scoreboards: HashMap::new(),
            failing: HashSet::new(),
            box_score_fails: false,
        }
    }

    pub fn with_scoreboard(mut self, league: League, json: &'static str) -> Self {
        self.scoreboards.insert(league, json);
        self
    }

    pub fn with_failing(mut self, leagues: &[League]) -> Self {
        self.failing.extend(leagues.iter().copied());
        self
    }

    pub fn with_failing_box_score(mut self) -> Self {
        self.box_score_fails = true;
        self
    }

    fn unavailable(url: String) -> ApiError {
        ApiError::UnexpectedStatus {
            url,
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoresProvider for MockClient {
    async fn scoreboard(&self, league: League, date: NaiveDate) -> Result<Scoreboard, ApiError> {
        if self.failing.contains(&league) {
            info!("MockClient: Failing scoreboard for {}", league);
            return Err(Self::unavailable(format!("mock://{}/scoreboard", league)));
        }
        info!("MockClient: Returning mock {} scoreboard for {}", league, date);
        let json = self
            .scoreboards
            .get(&league)
            .copied()
            .unwrap_or(fixtures::EMPTY_SCOREBOARD_JSON);
        let response: ScoreboardResponse = serde_json::from_str(json).unwrap_or_default();
        Ok(Scoreboard::from_response(league, response))
    }

    async fn box_score(&self, league: League, event_id: &str) -> Result<BoxScoreDetail, ApiError> {
        if self.box_score_fails {
            info!("MockClient: Failing box score for {} {}", league, event_id);
            return Err(Self::unavailable(format!("mock://{}/summary", league)));
        }
        info!("MockClient: Returning mock box score for {} {}", league, event_id);
        let response: SummaryResponse =
            serde_json::from_str(fixtures::NBA_SUMMARY_JSON).unwrap_or_default();
        Ok(BoxScoreDetail::from(response))
    }
}
