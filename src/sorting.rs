use std::cmp::Ordering;

use crate::model::{GameEvent, GameState};

/// Display bucket: live games first, then upcoming, then finished
pub fn bucket_priority(state: &GameState) -> u8 {
    match state {
        GameState::InProgress => 0,
        GameState::Scheduled => 1,
        GameState::Final => 2,
        GameState::Other(_) => 3,
    }
}

/// Order games by bucket, then by start time within a bucket
///
/// The sort is stable. Games without a start time go last in their bucket.
pub fn sort_games(mut events: Vec<GameEvent>) -> Vec<GameEvent> {
    events.sort_by(compare_games);
    events
}

fn compare_games(a: &GameEvent, b: &GameEvent) -> Ordering {
    bucket_priority(&a.status.state)
        .cmp(&bucket_priority(&b.status.state))
        .then_with(|| match (a.start, b.start) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
