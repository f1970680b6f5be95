use chrono::{DateTime, Local, NaiveDate};

use crate::aggregator::LeagueSection;
use crate::config::Config;
use crate::date_cursor::DateCursor;
use crate::league::League;
use crate::model::GameEvent;
use crate::view::BoxScoreView;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer. The view reads it and
/// never mutates it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub cursor: DateCursor,
    /// Local calendar date as of the last timer tick
    pub today: NaiveDate,
    pub data: DataState,
    /// Flat index into the games of all sections
    pub selected: Option<usize>,
    pub box_score: Option<BoxScorePanel>,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// Generation of the newest scores request; older responses are dropped
    pub generation: u64,
    pub loading: bool,
    pub sections: Vec<LeagueSection>,
    pub last_updated: Option<DateTime<Local>>,
    pub error: Option<String>,
    /// Counter for box score requests, same role as `generation`
    pub box_score_requests: u64,
}

/// Box score overlay for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScorePanel {
    pub league: League,
    pub event_id: String,
    pub request: u64,
    pub content: BoxScoreContent,
}

impl BoxScorePanel {
    /// Game page of a rendered box score
    pub fn game_url(&self) -> Option<&str> {
        match &self.content {
            BoxScoreContent::Loaded(BoxScoreView::Loaded(summary)) => Some(&summary.game_url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxScoreContent {
    Loading,
    Loaded(BoxScoreView),
    Failed(String),
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→ day | ↑↓ select | Enter box score | r refresh | q quit";

/// Help message while the box score is open
pub const BOX_SCORE_STATUS_MESSAGE: &str = "Keys: o open game page | ESC close | q quit";

/// Help message while the box score has no game page to open
pub const BOX_SCORE_PENDING_STATUS_MESSAGE: &str = "Keys: ESC close | q quit";

impl AppState {
    pub fn new(config: Config, today: NaiveDate) -> Self {
        Self {
            config,
            cursor: DateCursor::new(today),
            today,
            data: DataState::default(),
            selected: None,
            box_score: None,
            status_message: None,
            status_is_error: false,
        }
    }

    /// Games of every section in display order
    pub fn games(&self) -> impl Iterator<Item = (League, &GameEvent)> {
        self.data
            .sections
            .iter()
            .flat_map(|section| section.games.iter().map(move |game| (section.league, game)))
    }

    pub fn game_count(&self) -> usize {
        self.data.sections.iter().map(|section| section.games.len()).sum()
    }

    pub fn selected_game(&self) -> Option<(League, &GameEvent)> {
        self.selected.and_then(|index| self.games().nth(index))
    }

    /// False when forward navigation is disabled
    pub fn can_go_forward(&self) -> bool {
        !self.cursor.is_at_or_beyond_max_from(self.today)
    }

    pub fn is_viewing_today(&self) -> bool {
        self.cursor.date() == self.today
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    /// Status bar text: a pending message or the key help
    pub fn status_text(&self) -> &str {
        match (&self.status_message, &self.box_score) {
            (Some(message), _) => message,
            (None, Some(panel)) if panel.game_url().is_some() => BOX_SCORE_STATUS_MESSAGE,
            (None, Some(_)) => BOX_SCORE_PENDING_STATUS_MESSAGE,
            (None, None) => DEFAULT_STATUS_MESSAGE,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default(), Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::game;
    use crate::model::GameState;

    fn state_with_games() -> AppState {
        let mut state = AppState::new(Config::default(), NaiveDate::from_ymd_opt(2024, 11, 20).unwrap());
        state.data.sections = vec![
            LeagueSection {
                league: League::Nba,
                games: vec![game("1", GameState::InProgress, None), game("2", GameState::Final, None)],
            },
            LeagueSection {
                league: League::Nhl,
                games: vec![game("3", GameState::Scheduled, None)],
            },
        ];
        state
    }

    #[test]
    fn test_games_flatten_sections_in_order() {
        let state = state_with_games();
        let ids: Vec<(League, &str)> = state.games().map(|(l, g)| (l, g.id.as_str())).collect();
        assert_eq!(ids, vec![(League::Nba, "1"), (League::Nba, "2"), (League::Nhl, "3")]);
        assert_eq!(state.game_count(), 3);
    }

    #[test]
    fn test_selected_game() {
        let mut state = state_with_games();
        assert!(state.selected_game().is_none());
        state.selected = Some(2);
        let (league, game) = state.selected_game().unwrap();
        assert_eq!((league, game.id.as_str()), (League::Nhl, "3"));
        state.selected = Some(9);
        assert!(state.selected_game().is_none());
    }

    #[test]
    fn test_forward_bound() {
        let mut state = state_with_games();
        assert!(state.can_go_forward());
        assert!(state.is_viewing_today());
        state.cursor.advance(7);
        assert!(!state.can_go_forward());
        assert!(!state.is_viewing_today());
    }

    #[test]
    fn test_status_text() {
        let mut state = state_with_games();
        assert_eq!(state.status_text(), DEFAULT_STATUS_MESSAGE);

        state.box_score = Some(BoxScorePanel {
            league: League::Nba,
            event_id: "1".to_string(),
            request: 1,
            content: BoxScoreContent::Loading,
        });
        assert_eq!(state.status_text(), BOX_SCORE_PENDING_STATUS_MESSAGE);

        let detail = crate::fixtures::box_score(vec![], vec![]);
        if let Some(panel) = state.box_score.as_mut() {
            panel.content = BoxScoreContent::Loaded(crate::view::render_box_score(
                &detail,
                League::Nba,
                "1",
                crate::config::DEFAULT_WEB_BASE_URL,
            ));
        }
        assert_eq!(state.status_text(), BOX_SCORE_STATUS_MESSAGE);

        state.set_status_error_message("Failed to open browser".to_string());
        assert_eq!(state.status_text(), "Failed to open browser");
        assert!(state.status_is_error);

        state.set_status_message("Opened".to_string());
        assert!(!state.status_is_error);
    }
}
