use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;
use tracing::debug;

use crate::tui::Action;

/// Background task loop that periodically asks the UI to refresh
///
/// Each tick carries the current local date so the reducer can tell whether
/// the displayed date is still today. The loop ends once the receiving side
/// is gone.
pub async fn refresh_timer_loop(period: Duration, action_tx: mpsc::UnboundedSender<Action>) {
    let mut interval_timer = tokio::time::interval(period);
    interval_timer.tick().await; // First tick completes immediately

    loop {
        interval_timer.tick().await;
        let today = Local::now().date_naive();
        if action_tx.send(Action::Tick { today }).is_err() {
            debug!("Refresh timer stopping, receiver dropped");
            break;
        }
    }
}
