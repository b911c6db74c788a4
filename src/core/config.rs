//! Game configuration.
//!
//! The map scheme is an explicit value handed to `Game::new` rather than an
//! ambient selection. The blast range and player count are fixed design
//! parameters and are not part of the configuration surface.

use serde::{Deserialize, Serialize};

use crate::board::MapLayout;
use crate::error::{GameError, Result};

/// Cells a blast reaches beyond its origin in each direction.
pub const BLAST_RANGE: usize = 2;

/// Number of player slots (top-left and bottom-right corners).
pub const PLAYER_SLOTS: usize = 2;

/// Named or custom map layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapScheme {
    /// 7x11 map with mirrored block clusters.
    Standard,
    /// 15x22 map spelling out three letters in blocks.
    Ibm,
    /// Caller-supplied layout.
    Custom(MapLayout),
}

impl MapScheme {
    /// Scheme name as used by renderers and persisted snapshots.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            MapScheme::Standard => "standard",
            MapScheme::Ibm => "IBM",
            MapScheme::Custom(_) => "custom",
        }
    }

    /// Build the terrain and spawn layout for this scheme.
    pub fn layout(&self) -> Result<MapLayout> {
        match self {
            MapScheme::Standard => Ok(MapLayout::standard()),
            MapScheme::Ibm => Ok(MapLayout::ibm()),
            MapScheme::Custom(layout) => {
                layout.validate()?;
                Ok(layout.clone())
            }
        }
    }
}

impl std::str::FromStr for MapScheme {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("standard") {
            Ok(MapScheme::Standard)
        } else if s.eq_ignore_ascii_case("ibm") {
            Ok(MapScheme::Ibm)
        } else {
            Err(GameError::configuration(format!("unknown map scheme {:?}", s)))
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use rust_bomber::core::{GameConfig, MapScheme};
///
/// let config = GameConfig::new(MapScheme::Standard).with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Map scheme to build the board from.
    pub scheme: MapScheme,

    /// Seed for the game identifier. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for the given scheme.
    #[must_use]
    pub fn new(scheme: MapScheme) -> Self {
        Self { scheme, seed: None }
    }

    /// Create a configuration from a scheme name (`"standard"`, `"IBM"`).
    pub fn named(scheme: &str) -> Result<Self> {
        Ok(Self::new(scheme.parse()?))
    }

    /// Fix the seed so the game identifier is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MapScheme::Standard)
    }
}
