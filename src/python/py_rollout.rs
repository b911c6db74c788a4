//! Rollout bindings for Python.

use pyo3::prelude::*;

use crate::core::MapScheme;
use crate::rollout::{Agent, RolloutConfig, RolloutRunner, ScriptedAgent, Trajectory, UniformAgent};

use super::py_game::parse_action;

/// Python wrapper for a recorded rollout.
#[pyclass(name = "Trajectory")]
#[derive(Clone)]
pub struct PyTrajectory(pub Trajectory);

#[pymethods]
impl PyTrajectory {
    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn outcome(&self) -> String {
        self.0.outcome.to_string()
    }

    #[getter]
    fn frames_played(&self) -> usize {
        self.0.frames_played()
    }

    fn is_truncated(&self) -> bool {
        self.0.is_truncated()
    }

    /// Action names per frame, `(first, second)`.
    fn actions(&self) -> Vec<(String, String)> {
        self.0
            .frames
            .iter()
            .map(|r| (r.actions[0].to_string(), r.actions[1].to_string()))
            .collect()
    }

    /// Replay on a fresh game and return the outcome reached.
    fn replay_outcome(&self) -> PyResult<String> {
        Ok(self.0.replay()?.outcome().to_string())
    }

    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.0.to_bytes()?)
    }

    #[staticmethod]
    fn from_bytes(bytes: Vec<u8>) -> PyResult<Self> {
        Ok(Self(Trajectory::from_bytes(&bytes)?))
    }

    fn __len__(&self) -> usize {
        self.0.frames_played()
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory(seed={}, frames={}, outcome={})",
            self.0.seed,
            self.0.frames_played(),
            self.0.outcome
        )
    }
}

/// Play one rollout.
///
/// A player with a script plays it and then stands still; a player without
/// one samples uniformly.
#[pyfunction]
#[pyo3(signature = (
    seed = 0,
    max_frames = 500,
    scheme = "standard",
    first_script = None,
    second_script = None
))]
pub fn play_rollout(
    seed: u64,
    max_frames: usize,
    scheme: &str,
    first_script: Option<Vec<String>>,
    second_script: Option<Vec<String>>,
) -> PyResult<PyTrajectory> {
    let scheme: MapScheme = scheme.parse()?;
    let runner = RolloutRunner::new(
        RolloutConfig::new()
            .with_scheme(scheme)
            .with_seed(seed)
            .with_max_frames(max_frames),
    );

    let mut first = agent(first_script)?;
    let mut second = agent(second_script)?;
    Ok(PyTrajectory(runner.play(first.as_mut(), second.as_mut())?))
}

fn agent(script: Option<Vec<String>>) -> PyResult<Box<dyn Agent>> {
    match script {
        None => Ok(Box::new(UniformAgent)),
        Some(names) => {
            let actions = names
                .iter()
                .map(|name| parse_action(name))
                .collect::<PyResult<Vec<_>>>()?;
            Ok(Box::new(ScriptedAgent::new(actions)))
        }
    }
}
