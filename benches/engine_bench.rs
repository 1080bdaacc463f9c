use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hegemony::board::{GameLog, GameState, PlayerId, Territory};
use hegemony::dice::PrngDice;
use hegemony::engine::Engine;
use hegemony::resolve::{resolve_neutral_assault, resolve_pitched_battle};

fn bench_neutral_assault(c: &mut Criterion) {
    c.bench_function("neutral_assault_8_vs_4", |b| {
        let mut dice = PrngDice::seeded(7);
        b.iter(|| {
            let mut log = GameLog::default();
            resolve_neutral_assault(black_box(8), black_box(4), &mut dice, &mut log)
        })
    });
}

fn bench_pitched_battle(c: &mut Criterion) {
    c.bench_function("pitched_battle_6_vs_5", |b| {
        let mut dice = PrngDice::seeded(11);
        b.iter(|| {
            let mut log = GameLog::default();
            resolve_pitched_battle(black_box(6), black_box(5), &mut dice, &mut log)
        })
    });
}

fn bench_ten_turn_session(c: &mut Criterion) {
    c.bench_function("ten_turn_session", |b| {
        b.iter(|| {
            let mut engine = Engine::seeded(42);
            engine
                .start_game("Aldric", "Berend", PlayerId::One)
                .unwrap();
            for _ in 0..10 {
                engine.end_movement_phase().unwrap();
                engine.roll_reinforcements().unwrap();
            }
            black_box(engine.state().turn_count)
        })
    });
}

fn bench_movement_options(c: &mut Criterion) {
    let mut engine = Engine::seeded(3);
    engine
        .start_game("Aldric", "Berend", PlayerId::One)
        .unwrap();
    c.bench_function("movement_options_center", |b| {
        b.iter(|| engine.movement_options(black_box(Territory::Stonegate)))
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let state = GameState::new();
    c.bench_function("game_state_clone", |b| b.iter(|| black_box(&state).clone()));
}

criterion_group!(
    benches,
    bench_neutral_assault,
    bench_pitched_battle,
    bench_ten_turn_session,
    bench_movement_options,
    bench_state_clone,
);
criterion_main!(benches);
