use chrono::{DateTime, Local, NaiveDate};
use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::state::{AppState, BoxScoreContent, BoxScorePanel};
use crate::aggregator::DailyScores;
use crate::model::BoxScoreDetail;
use crate::view::{render_box_score, BOX_SCORE_FAILED_MESSAGE, SCORES_FAILED_MESSAGE};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; fetches and browser launches come back as `Effect`.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::RefreshData => start_scores_load(state),
        Action::Tick { today } => handle_tick(state, today),
        Action::PreviousDay => change_day(state, -1),
        Action::NextDay => {
            if !state.can_go_forward() {
                debug!("NAV: Next day ignored at {}", state.cursor.to_api_key());
                return (state, Effect::None);
            }
            change_day(state, 1)
        }
        Action::SelectPrevious => move_selection(state, -1),
        Action::SelectNext => move_selection(state, 1),
        Action::OpenBoxScore => open_box_score(state),
        Action::CloseBoxScore => {
            let mut new_state = state;
            new_state.box_score = None;
            new_state.status_message = None;
            (new_state, Effect::None)
        }
        Action::OpenGamePage => {
            let url = state
                .box_score
                .as_ref()
                .and_then(|panel| panel.game_url())
                .map(str::to_string);
            match url {
                Some(url) => (state, Effect::OpenUrl(url)),
                None => (state, Effect::None),
            }
        }
        Action::ScoresLoaded { generation, scores, fetched_at } => {
            handle_scores_loaded(state, generation, scores, fetched_at)
        }
        Action::BoxScoreLoaded { request, result } => handle_box_score_loaded(state, request, result),
        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.set_status_error_message(message);
            } else {
                new_state.set_status_message(message);
            }
            (new_state, Effect::None)
        }
        Action::Quit => (state, Effect::None),
    }
}

/// Bump the generation and request the cursor's date
fn start_scores_load(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.generation += 1;
    new_state.data.loading = true;
    debug!(
        "DATA: Loading scores for {} (generation {})",
        new_state.cursor.to_api_key(),
        new_state.data.generation
    );
    let effect = Effect::FetchScores {
        generation: new_state.data.generation,
        date: new_state.cursor.date(),
    };
    (new_state, effect)
}

fn handle_tick(state: AppState, today: NaiveDate) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.today = today;
    if new_state.is_viewing_today() {
        start_scores_load(new_state)
    } else {
        (new_state, Effect::None)
    }
}

fn change_day(state: AppState, days: i64) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.cursor.advance(days);
    new_state.data.sections.clear();
    new_state.data.error = None;
    new_state.selected = None;
    new_state.box_score = None;
    start_scores_load(new_state)
}

/// Move the selection without wrapping
fn move_selection(state: AppState, delta: isize) -> (AppState, Effect) {
    let mut new_state = state;
    let count = new_state.game_count();
    if count == 0 {
        new_state.selected = None;
        return (new_state, Effect::None);
    }
    let next = match new_state.selected {
        None => 0,
        Some(index) => index.saturating_add_signed(delta).min(count - 1),
    };
    new_state.selected = Some(next);
    (new_state, Effect::None)
}

fn open_box_score(state: AppState) -> (AppState, Effect) {
    let target = state
        .selected_game()
        .map(|(league, game)| (league, game.id.clone()));
    let Some((league, event_id)) = target else {
        return (state, Effect::None);
    };

    let mut new_state = state;
    new_state.data.box_score_requests += 1;
    let request = new_state.data.box_score_requests;
    new_state.status_message = None;
    new_state.box_score = Some(BoxScorePanel {
        league,
        event_id: event_id.clone(),
        request,
        content: BoxScoreContent::Loading,
    });
    (new_state, Effect::FetchBoxScore { request, league, event_id })
}

fn handle_scores_loaded(
    state: AppState,
    generation: u64,
    scores: DailyScores,
    fetched_at: DateTime<Local>,
) -> (AppState, Effect) {
    if generation != state.data.generation {
        debug!(
            "DATA: Dropping stale scores (generation {}, current {})",
            generation, state.data.generation
        );
        return (state, Effect::None);
    }

    let mut new_state = state;
    let previous_id = new_state.selected_game().map(|(_, game)| game.id.clone());

    debug!("DATA: Loaded {} games for {}", scores.total_games(), scores.date);
    new_state.data.loading = false;
    new_state.data.last_updated = Some(fetched_at);
    new_state.data.error = scores.all_failed().then(|| SCORES_FAILED_MESSAGE.to_string());
    new_state.data.sections = scores.sections();

    // Keep the same game selected across refreshes when it is still listed
    new_state.selected = match previous_id {
        Some(id) => new_state.games().position(|(_, game)| game.id == id).or(Some(0)),
        None => Some(0),
    }
    .filter(|_| new_state.game_count() > 0);

    (new_state, Effect::None)
}

fn handle_box_score_loaded(
    state: AppState,
    request: u64,
    result: Result<BoxScoreDetail, String>,
) -> (AppState, Effect) {
    let is_current = state
        .box_score
        .as_ref()
        .is_some_and(|panel| panel.request == request);
    if !is_current {
        debug!("DATA: Dropping stale box score response {}", request);
        return (state, Effect::None);
    }

    let mut new_state = state;
    if let Some(panel) = new_state.box_score.as_mut() {
        panel.content = match result {
            Ok(detail) => BoxScoreContent::Loaded(render_box_score(
                &detail,
                panel.league,
                &panel.event_id,
                &new_state.config.web_base_url,
            )),
            Err(e) => {
                debug!("DATA: Box score {} failed: {}", panel.event_id, e);
                BoxScoreContent::Failed(BOX_SCORE_FAILED_MESSAGE.to_string())
            }
        };
    }
    (new_state, Effect::None)
}
