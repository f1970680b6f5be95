// Core modules
pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::background::refresh_timer_loop;
use crate::config::Config;
use crate::data_provider::ScoresProvider;

/// Main entry point for TUI mode
pub async fn run(
    client: Arc<dyn ScoresProvider>,
    config: Config,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client, config.leagues.clone()));
    let refresh_interval = Duration::from_secs(u64::from(config.refresh_interval.max(1)));
    let initial_state = AppState::new(config, Local::now().date_naive());
    let mut runtime = Runtime::new(initial_state, data_effects);

    // Periodic refresh; ends when the runtime's receiver is dropped
    let timer = tokio::spawn(refresh_timer_loop(refresh_interval, runtime.action_sender()));

    // Trigger initial data load
    runtime.dispatch(Action::RefreshData);

    let result = event_loop(&mut terminal, &mut runtime);
    timer.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| view::draw(f, runtime.state()))?;

        // Poll for keyboard events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key, runtime.state()) {
                    if matches!(action, Action::Quit) {
                        tracing::debug!("ACTION: Quitting application");
                        return Ok(());
                    }
                    runtime.dispatch(action);
                }
            }
        }
    }
}
