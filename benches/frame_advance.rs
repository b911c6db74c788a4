use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rust_bomber::core::{Action, GameConfig, MapScheme, PlayerId};
use rust_bomber::engine::Game;
use rust_bomber::rollout::{RolloutConfig, RolloutRunner, UniformAgent};
use rust_bomber::snapshot::{GridEncoder, ObservationEncoder};

fn started(scheme: MapScheme) -> (Game, [PlayerId; 2]) {
    let mut game = Game::new(GameConfig::new(scheme).with_seed(42)).unwrap();
    let a = game.register_player("a").unwrap();
    let b = game.register_player("b").unwrap();
    game.start().unwrap();
    (game, [a, b])
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_frame");

    for (name, scheme) in [("standard", MapScheme::Standard), ("ibm", MapScheme::Ibm)] {
        let (base, players) = started(scheme);
        group.bench_function(format!("{name}_idle"), |b| {
            b.iter_batched(
                || base.clone(),
                |mut game| {
                    for player in players {
                        game.queue_action(player, Action::Still).unwrap();
                    }
                    game.advance_frame().unwrap();
                    game
                },
                BatchSize::SmallInput,
            );
        });
    }

    let (mut armed, players) = started(MapScheme::Standard);
    armed.queue_action(players[0], Action::Bomb).unwrap();
    armed.queue_action(players[1], Action::Bomb).unwrap();
    armed.advance_frame().unwrap();
    group.bench_function("standard_two_bombs", |b| {
        b.iter_batched(
            || armed.clone(),
            |mut game| {
                for player in players {
                    game.queue_action(player, Action::Still).unwrap();
                }
                game.advance_frame().unwrap();
                game
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    let (game, players) = started(MapScheme::Ibm);

    group.bench_function("capture", |b| b.iter(|| game.snapshot()));

    let snapshot = game.snapshot();
    let encoder = GridEncoder::new();
    group.bench_function("encode", |b| b.iter(|| encoder.encode(&snapshot, players[0])));

    group.finish();
}

fn bench_rollout(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollout");
    let runner = RolloutRunner::new(RolloutConfig::new().with_seed(7).with_max_frames(200));

    group.bench_function("uniform_200", |b| {
        b.iter(|| runner.play(&mut UniformAgent, &mut UniformAgent).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_snapshot, bench_rollout);
criterion_main!(benches);
