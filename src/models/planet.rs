use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of planets fabricated per synthetic batch
pub const BATCH_SIZE: usize = 10;

/// Literal appended to every generated planet name
pub const PLANET_SUFFIX: &str = " Prime";

/// Surface temperature bounds, in kelvin
pub const TEMPERATURE_RANGE: SamplingRange = SamplingRange::new(100.0, 1000.0);

/// Surface gravity bounds, relative to Earth
pub const GRAVITY_RANGE: SamplingRange = SamplingRange::new(0.5, 2.0);

/// Atmospheric oxygen bounds, as a percentage
pub const OXYGEN_LEVEL_RANGE: SamplingRange = SamplingRange::new(0.0, 100.0);

/// Half-open `[start, end)` interval that values are drawn from uniformly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRange {
    pub start: f64,
    pub end: f64,
}

impl SamplingRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Draw one value uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.start..self.end)
    }

    /// Draw `count` independent values, in draw order
    pub fn sample_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.sample(rng)).collect()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value < self.end
    }
}

/// Ten fabricated planets stored as parallel arrays.
///
/// Index `i` of every field describes the same planet. The arrays are
/// serialized as-is, so the JSON body keeps the four keys side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticPlanetBatch {
    pub planet: Vec<String>,
    pub temperature: Vec<f64>,
    pub gravity: Vec<f64>,
    pub oxygen_level: Vec<f64>,
}

impl SyntheticPlanetBatch {
    /// Number of planets described by the batch
    pub fn len(&self) -> usize {
        self.planet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planet.is_empty()
    }

    /// True when all four arrays describe the same number of planets
    pub fn is_aligned(&self) -> bool {
        let len = self.planet.len();
        self.temperature.len() == len
            && self.gravity.len() == len
            && self.oxygen_level.len() == len
    }
}

/// Body shared by the fixed-message endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
