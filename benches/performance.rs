use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sportscores::espn::ScoreboardResponse;
use sportscores::fixtures::{self, at, game};
use sportscores::league::League;
use sportscores::model::{GameEvent, GameState, Scoreboard};
use sportscores::sorting::sort_games;
use sportscores::view::render_card;

/// A busy slate: every bucket represented, start times interleaved
fn create_sample_slate() -> Vec<GameEvent> {
    (0..60)
        .map(|i| {
            let state = match i % 3 {
                0 => GameState::Final,
                1 => GameState::InProgress,
                _ => GameState::Scheduled,
            };
            let start = if i % 7 == 0 { None } else { Some(at(12 + (i % 11) as u32, (i * 5 % 60) as u32)) };
            game(&format!("{}", 500 + i), state, start)
        })
        .collect()
}

fn bench_sorting(c: &mut Criterion) {
    let slate = create_sample_slate();

    c.bench_function("sort_games_60", |b| {
        b.iter(|| sort_games(black_box(slate.clone())));
    });
}

fn bench_card_rendering(c: &mut Criterion) {
    let slate = create_sample_slate();
    let mut group = c.benchmark_group("render_card");

    group.bench_function("nba_slate", |b| {
        b.iter(|| {
            for event in &slate {
                black_box(render_card(event, League::Nba, &Utc));
            }
        });
    });

    group.bench_function("soccer_slate", |b| {
        b.iter(|| {
            for event in &slate {
                black_box(render_card(event, League::Soccer, &Utc));
            }
        });
    });

    group.finish();
}

fn bench_scoreboard_parsing(c: &mut Criterion) {
    c.bench_function("parse_nba_scoreboard", |b| {
        b.iter(|| {
            let response: ScoreboardResponse =
                serde_json::from_str(black_box(fixtures::NBA_SCOREBOARD_JSON)).unwrap();
            black_box(Scoreboard::from_response(League::Nba, response))
        });
    });
}

criterion_group!(benches, bench_sorting, bench_card_rendering, bench_scoreboard_parsing);
criterion_main!(benches);
