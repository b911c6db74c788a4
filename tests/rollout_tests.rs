//! Rollout, replay and serialization tests.

use proptest::prelude::*;
use rust_bomber::core::{Action, MapScheme, PlayerId};
use rust_bomber::rollout::{RolloutConfig, RolloutRunner, ScriptedAgent, Trajectory, UniformAgent};
use rust_bomber::rules::Outcome;
use rust_bomber::snapshot::{GridEncoder, ObservationEncoder, StatusSnapshot};
use rust_bomber::{Agent, GameRng};

/// Always bombs and never moves.
struct Kamikaze;

impl Agent for Kamikaze {
    fn act(&mut self, _: &StatusSnapshot, _: PlayerId, _: &mut GameRng) -> Action {
        Action::Bomb
    }
}

#[test]
fn test_kamikaze_loses_to_idle_player() {
    let runner = RolloutRunner::new(RolloutConfig::new().with_seed(1));
    let trajectory = runner
        .play(&mut Kamikaze, &mut ScriptedAgent::default())
        .unwrap();

    // the fuse keeps re-arming but the first overlay still runs out
    assert_eq!(trajectory.outcome, Outcome::Winner(PlayerId::new(1)));
    assert_eq!(trajectory.frames_played(), 4);
}

#[test]
fn test_mutual_kamikaze_is_a_draw_on_a_small_map() {
    let layout = rust_bomber::MapLayout::from_ascii(&["...", "..."]).unwrap();
    let runner = RolloutRunner::new(
        RolloutConfig::new()
            .with_scheme(MapScheme::Custom(layout))
            .with_seed(3),
    );
    let mut first = ScriptedAgent::new([Action::Right, Action::Bomb]);
    let mut second = ScriptedAgent::new([Action::Up]);
    let trajectory = runner.play(&mut first, &mut second).unwrap();

    assert_eq!(trajectory.outcome, Outcome::Draw);
    assert_eq!(trajectory.replay().unwrap().outcome(), Outcome::Draw);
}

#[test]
fn test_ibm_rollout_replays() {
    let runner = RolloutRunner::new(
        RolloutConfig::new()
            .with_scheme(MapScheme::Ibm)
            .with_seed(99)
            .with_max_frames(120),
    );
    let trajectory = runner.play(&mut UniformAgent, &mut UniformAgent).unwrap();
    let game = trajectory.replay().unwrap();

    assert_eq!(game.outcome(), trajectory.outcome);
    assert_eq!(game.frame() as usize, trajectory.frames_played() + 1);
    assert_eq!(game.board().dimensions(), (15, 22));
}

#[test]
fn test_trajectory_bytes_and_json() {
    let runner = RolloutRunner::new(RolloutConfig::new().with_seed(5).with_max_frames(30));
    let trajectory = runner.play(&mut UniformAgent, &mut UniformAgent).unwrap();

    let bytes = trajectory.to_bytes().unwrap();
    assert_eq!(Trajectory::from_bytes(&bytes).unwrap(), trajectory);
    assert!(Trajectory::from_bytes(&[1, 2, 3]).is_err());

    let json = serde_json::to_string(&trajectory).unwrap();
    let back: Trajectory = serde_json::from_str(&json).unwrap();
    assert_eq!(back, trajectory);
}

#[test]
fn test_observations_along_a_rollout() {
    let runner = RolloutRunner::new(RolloutConfig::new().with_seed(8).with_max_frames(20));
    let trajectory = runner.play(&mut UniformAgent, &mut UniformAgent).unwrap();
    let game = trajectory.replay().unwrap();

    let encoder = GridEncoder::new();
    let snapshot = game.snapshot();
    for player in [PlayerId::new(0), PlayerId::new(1)] {
        let encoded = encoder.encode(&snapshot, player);
        assert_eq!(encoded.shape, encoder.output_shape(snapshot.dimensions));
        assert!(encoded.tensor.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Replaying any uniform rollout reproduces its outcome and final frame.
    #[test]
    fn prop_replay_matches_rollout(seed in any::<u64>(), cap in 1usize..80) {
        let runner = RolloutRunner::new(RolloutConfig::new().with_seed(seed).with_max_frames(cap));
        let trajectory = runner.play(&mut UniformAgent, &mut UniformAgent).unwrap();
        prop_assert!(trajectory.frames_played() <= cap);

        let game = trajectory.replay().unwrap();
        prop_assert_eq!(game.outcome(), trajectory.outcome);
        prop_assert_eq!(game.is_ended(), !trajectory.is_truncated());
        prop_assert_eq!(
            trajectory.frames.last().map(|r| r.frame),
            Some(game.frame())
        );
    }
}
