use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::date_cursor::DateCursor;
use crate::error::{ApiError, Result};
use crate::espn::{ScoreboardResponse, SummaryResponse};
use crate::league::League;
use crate::model::{BoxScoreDetail, Scoreboard};

/// Base URL of the public ESPN site API
pub const DEFAULT_API_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the ESPN scoreboard and game summary endpoints
///
/// Every call issues exactly one GET request; nothing is cached.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: reqwest::Client,
    base_url: String,
}

impl EspnClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Build)?;
        Ok(Self::with_client(http, base_url))
    }

    /// Use a preconfigured [`reqwest::Client`]
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn scoreboard_url(&self, league: League, date: NaiveDate) -> String {
        format!(
            "{}/{}/scoreboard?dates={}",
            self.base_url,
            league.info().api_path,
            DateCursor::new(date).to_api_key()
        )
    }

    pub fn summary_url(&self, league: League, event_id: &str) -> String {
        format!(
            "{}/{}/summary?event={}",
            self.base_url,
            league.info().api_path,
            event_id
        )
    }

    /// Fetch all games of a league on a date
    #[instrument(skip(self))]
    pub async fn scoreboard(&self, league: League, date: NaiveDate) -> Result<Scoreboard> {
        let url = self.scoreboard_url(league, date);
        let response: ScoreboardResponse = self.get_json(url).await?;
        Ok(Scoreboard::from_response(league, response))
    }

    /// Fetch team and player statistics for one game
    #[instrument(skip(self))]
    pub async fn box_score(&self, league: League, event_id: &str) -> Result<BoxScoreDetail> {
        let url = self.summary_url(league, event_id);
        let response: SummaryResponse = self.get_json(url).await?;
        Ok(BoxScoreDetail::from(response))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!("GET {}", url);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(ApiError::Http { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus { url, status });
        }

        match response.json::<T>().await {
            Ok(body) => Ok(body),
            Err(source) => Err(ApiError::Decode { url, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EspnClient {
        EspnClient::with_client(reqwest::Client::new(), DEFAULT_API_BASE_URL)
    }

    #[test]
    fn test_scoreboard_url() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            client().scoreboard_url(League::Nhl, date),
            "https://site.api.espn.com/apis/site/v2/sports/hockey/nhl/scoreboard?dates=20250307"
        );
        assert_eq!(
            client().scoreboard_url(League::Soccer, date),
            "https://site.api.espn.com/apis/site/v2/sports/soccer/eng.1/scoreboard?dates=20250307"
        );
    }

    #[test]
    fn test_scoreboard_url_uses_cursor_api_key() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let url = client().scoreboard_url(League::Nba, date);
        assert!(url.ends_with(&format!("?dates={}", DateCursor::new(date).to_api_key())));
        assert!(url.ends_with("?dates=20240105"));
    }

    #[test]
    fn test_summary_url() {
        assert_eq!(
            client().summary_url(League::Mlb, "401569999"),
            "https://site.api.espn.com/apis/site/v2/sports/baseball/mlb/summary?event=401569999"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let client = EspnClient::with_client(reqwest::Client::new(), "http://localhost:8080/");
        assert_eq!(
            client.summary_url(League::Nba, "1"),
            "http://localhost:8080/basketball/nba/summary?event=1"
        );
    }
}
