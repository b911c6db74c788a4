//! Game bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::board::MapLayout;
use crate::core::{Action, GameConfig, MapScheme, PlayerId, Position};
use crate::engine::Game;
use crate::error::GameError;
use crate::snapshot::{channel, GridEncoder, ObservationEncoder, StatusSnapshot};

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidState { .. } | GameError::IncompleteTurn { .. } => {
                PyRuntimeError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

pub(super) fn parse_action(action: &str) -> PyResult<Action> {
    action.parse().map_err(PyValueError::new_err)
}

/// Python wrapper for a game instance.
///
/// Players are addressed by their 0-based registration index.
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: Game,
}

impl PyGame {
    fn player(&self, index: u8) -> PyResult<PlayerId> {
        let id = PlayerId::new(index);
        match self.inner.player(id) {
            Some(_) => Ok(id),
            None => Err(GameError::UnknownPlayer { player: id }.into()),
        }
    }
}

#[pymethods]
impl PyGame {
    /// Create a game on a named map (`"standard"` or `"IBM"`).
    #[new]
    #[pyo3(signature = (scheme = "standard", seed = None))]
    fn new(scheme: &str, seed: Option<u64>) -> PyResult<Self> {
        let scheme: MapScheme = scheme.parse()?;
        let config = match seed {
            Some(seed) => GameConfig::new(scheme).with_seed(seed),
            None => GameConfig::new(scheme),
        };
        Ok(Self {
            inner: Game::new(config)?,
        })
    }

    /// Create a game from text rows (`.` land, `#` block, `_` void).
    #[staticmethod]
    #[pyo3(signature = (rows, seed = None))]
    fn from_ascii(rows: Vec<String>, seed: Option<u64>) -> PyResult<Self> {
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let layout = MapLayout::from_ascii(&rows)?;
        let mut config = GameConfig::new(MapScheme::Custom(layout));
        config.seed = seed;
        Ok(Self {
            inner: Game::new(config)?,
        })
    }

    /// Register a player; returns its index.
    fn register_player(&mut self, name: &str) -> PyResult<u8> {
        Ok(self.inner.register_player(name)?.0)
    }

    fn start(&mut self) -> PyResult<bool> {
        Ok(self.inner.start()?)
    }

    /// Queue `action` (`"up"`, `"down"`, `"left"`, `"right"`, `"still"`,
    /// `"bomb"`) for the player at `player`.
    fn queue_action(&mut self, player: u8, action: &str) -> PyResult<()> {
        let id = self.player(player)?;
        let action = parse_action(action)?;
        Ok(self.inner.queue_action(id, action)?)
    }

    /// Resolve one frame. Returns False once the game has ended.
    fn advance_frame(&mut self) -> PyResult<bool> {
        Ok(self.inner.advance_frame()?)
    }

    #[getter]
    fn id(&self) -> String {
        self.inner.id().to_string()
    }

    #[getter]
    fn frame(&self) -> u32 {
        self.inner.frame()
    }

    #[getter]
    fn ended(&self) -> bool {
        self.inner.is_ended()
    }

    /// `"ongoing"`, `"draw"` or the winner's label (`"player_1"`).
    #[getter]
    fn outcome(&self) -> String {
        self.inner.outcome().to_string()
    }

    /// Full status snapshot as a dict.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        snapshot_dict(py, &self.inner.snapshot())
    }

    /// Snapshot as bincode bytes.
    fn snapshot_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.inner.snapshot().to_bytes()?)
    }

    /// Observation planes for `player`, shaped `[channels, rows, cols]`.
    fn observation<'py>(&self, py: Python<'py>, player: u8) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let id = self.player(player)?;
        let encoded = GridEncoder::new().encode(&self.inner.snapshot(), id);
        let (rows, cols) = self.inner.board().dimensions();
        PyArray1::from_vec_bound(py, encoded.tensor)
            .reshape([channel::COUNT, rows, cols])
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(id={}, scheme={}, frame={}, outcome={})",
            self.inner.id(),
            self.inner.config().scheme.name(),
            self.inner.frame(),
            self.inner.outcome()
        )
    }
}

fn cells(list: &[Position]) -> Vec<(usize, usize)> {
    list.iter().map(|p| (p.row, p.col)).collect()
}

pub(super) fn snapshot_dict<'py>(
    py: Python<'py>,
    snapshot: &StatusSnapshot,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("game_id", &snapshot.game_id)?;
    dict.set_item("scheme", &snapshot.scheme)?;
    dict.set_item("dimensions", snapshot.dimensions)?;
    dict.set_item("frame", snapshot.frame)?;
    dict.set_item("outcome", snapshot.outcome.to_string())?;

    let players = PyList::empty_bound(py);
    for player in &snapshot.players {
        let entry = PyDict::new_bound(py);
        entry.set_item("label", &player.label)?;
        entry.set_item("name", &player.name)?;
        entry.set_item("position", (player.position.row, player.position.col))?;
        entry.set_item("alive", player.alive)?;
        players.append(entry)?;
    }
    dict.set_item("players", players)?;

    dict.set_item("void", cells(&snapshot.void))?;
    dict.set_item("land", cells(&snapshot.land))?;
    dict.set_item("block", cells(&snapshot.block))?;
    let bombs: Vec<(usize, usize, u8)> = snapshot
        .bombs
        .iter()
        .map(|b| (b.position.row, b.position.col, b.fuse))
        .collect();
    dict.set_item("bombs", bombs)?;
    let blasts: Vec<Vec<(usize, usize)>> = snapshot.blasts.iter().map(|b| cells(b)).collect();
    dict.set_item("blast", blasts)?;

    Ok(dict)
}
