use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{info, warn};

use crate::data_provider::ScoresProvider;
use crate::league::League;
use crate::model::{GameEvent, Scoreboard};
use crate::sorting::sort_games;

/// Outcome of loading one league's scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueResult {
    Loaded(Scoreboard),
    Failed { reason: String },
}

impl LeagueResult {
    pub fn game_count(&self) -> usize {
        match self {
            LeagueResult::Loaded(scoreboard) => scoreboard.events.len(),
            LeagueResult::Failed { .. } => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LeagueResult::Failed { .. })
    }
}

/// A league with at least one game, sorted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueSection {
    pub league: League,
    pub games: Vec<GameEvent>,
}

/// Scoreboards of every configured league for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyScores {
    pub date: NaiveDate,
    /// One entry per requested league, in request order
    pub results: Vec<(League, LeagueResult)>,
}

impl DailyScores {
    pub fn result(&self, league: League) -> Option<&LeagueResult> {
        self.results
            .iter()
            .find(|(l, _)| *l == league)
            .map(|(_, result)| result)
    }

    /// Games across all leagues; failed leagues count as zero
    pub fn total_games(&self) -> usize {
        self.results.iter().map(|(_, result)| result.game_count()).sum()
    }

    pub fn has_no_games(&self) -> bool {
        self.total_games() == 0
    }

    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|(_, result)| result.is_failed())
    }

    pub fn failed_leagues(&self) -> Vec<League> {
        self.results
            .iter()
            .filter(|(_, result)| result.is_failed())
            .map(|(league, _)| *league)
            .collect()
    }

    /// Leagues with games, each sorted live/upcoming/final
    pub fn sections(&self) -> Vec<LeagueSection> {
        self.results
            .iter()
            .filter_map(|(league, result)| match result {
                LeagueResult::Loaded(scoreboard) if !scoreboard.events.is_empty() => {
                    Some(LeagueSection {
                        league: *league,
                        games: sort_games(scoreboard.events.clone()),
                    })
                }
                _ => None,
            })
            .collect()
    }
}

/// Fetch one league, converting any failure into [`LeagueResult::Failed`]
pub async fn fetch_league(
    provider: &dyn ScoresProvider,
    league: League,
    date: NaiveDate,
) -> LeagueResult {
    match provider.scoreboard(league, date).await {
        Ok(scoreboard) => {
            info!("Fetched {} games for {}", scoreboard.events.len(), league);
            LeagueResult::Loaded(scoreboard)
        }
        Err(e) => {
            warn!("Error fetching {} scores: {}", league, e);
            LeagueResult::Failed { reason: e.to_string() }
        }
    }
}

/// Fetch every league concurrently and wait for all of them to settle
pub async fn load_all(
    provider: &dyn ScoresProvider,
    leagues: &[League],
    date: NaiveDate,
) -> DailyScores {
    let fetches = leagues.iter().map(|&league| async move {
        let result = fetch_league(provider, league, date).await;
        (league, result)
    });
    let results = join_all(fetches).await;

    let scores = DailyScores { date, results };
    info!(
        "Loaded {} games across {} leagues for {}",
        scores.total_games(),
        leagues.len(),
        date
    );
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;
    use crate::fixtures;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
    }

    #[tokio::test]
    async fn test_load_all_counts_games_across_leagues() {
        let client = MockClient::new();
        let scores = load_all(&client, &League::ALL, date()).await;

        assert_eq!(scores.results.len(), 5);
        assert_eq!(scores.total_games(), 4);
        assert!(!scores.has_no_games());
        assert!(!scores.all_failed());
        let order: Vec<League> = scores.results.iter().map(|(l, _)| *l).collect();
        assert_eq!(order, League::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_succeeding_leagues() {
        let client = MockClient::new().with_failing(&[League::Nfl, League::Mlb, League::Soccer]);
        let scores = load_all(&client, &League::ALL, date()).await;

        assert_eq!(scores.failed_leagues(), vec![League::Nfl, League::Mlb, League::Soccer]);
        assert_eq!(scores.result(League::Nba).map(|r| r.game_count()), Some(3));
        assert_eq!(scores.result(League::Nhl).map(|r| r.game_count()), Some(1));
        assert_eq!(scores.total_games(), 4);

        match scores.result(League::Nfl) {
            Some(LeagueResult::Failed { reason }) => assert!(reason.contains("503")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_games_flag() {
        let scores = load_all(&MockClient::empty(), &League::ALL, date()).await;
        assert_eq!(scores.total_games(), 0);
        assert!(scores.has_no_games());
        assert!(!scores.all_failed());
        assert!(scores.sections().is_empty());
    }

    #[tokio::test]
    async fn test_all_failed() {
        let client = MockClient::new().with_failing(&League::ALL);
        let scores = load_all(&client, &League::ALL, date()).await;
        assert!(scores.all_failed());
        assert!(scores.has_no_games());
    }

    #[tokio::test]
    async fn test_sections_put_live_game_first() {
        let client = MockClient::empty().with_scoreboard(League::Nba, fixtures::NBA_SCOREBOARD_JSON);
        let scores = load_all(&client, &League::ALL, date()).await;
        let sections = scores.sections();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].league, League::Nba);
        let ids: Vec<&str> = sections[0].games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["401", "402", "400"]);
    }

    #[tokio::test]
    async fn test_only_requested_leagues_are_loaded() {
        let scores = load_all(&MockClient::new(), &[League::Nhl], date()).await;
        assert_eq!(scores.results.len(), 1);
        assert_eq!(scores.total_games(), 1);
    }
}
