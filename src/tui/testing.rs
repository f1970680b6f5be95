//! General test utilities for TUI tests.

use chrono::{Local, NaiveDate, TimeZone};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use crate::aggregator::{DailyScores, LeagueResult};
use crate::config::Config;
use crate::espn::ScoreboardResponse;
use crate::fixtures;
use crate::league::League;
use crate::model::Scoreboard;

use super::action::Action;
use super::reducer::reduce;
use super::state::AppState;
use super::view::draw;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Fixed "today" used by TUI tests
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 20).unwrap_or_default()
}

/// Scores for `date` with the NBA fixture loaded and the NFL failed
pub fn nba_scores(date: NaiveDate) -> DailyScores {
    let response: ScoreboardResponse =
        serde_json::from_str(fixtures::NBA_SCOREBOARD_JSON).unwrap_or_default();
    DailyScores {
        date,
        results: vec![
            (League::Nba, LeagueResult::Loaded(Scoreboard::from_response(League::Nba, response))),
            (League::Nfl, LeagueResult::Failed { reason: "timeout".to_string() }),
        ],
    }
}

/// State after an initial refresh answered with `scores`
pub fn state_with_scores(scores: DailyScores) -> AppState {
    let (state, _) = reduce(AppState::new(Config::default(), test_today()), Action::RefreshData);
    let generation = state.data.generation;
    let fetched_at = Local
        .with_ymd_and_hms(2024, 11, 20, 19, 5, 33)
        .single()
        .unwrap_or_else(Local::now);
    reduce(state, Action::ScoresLoaded { generation, scores, fetched_at }).0
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Draw the whole screen into a test backend and return its lines
pub fn render_lines(state: &AppState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, state)).unwrap();
    buffer_lines(terminal.backend().buffer())
}

/// True when any rendered line contains `needle`
pub fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}
