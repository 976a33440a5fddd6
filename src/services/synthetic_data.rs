use fake::{faker::lorem::en::Word, Fake};
use rand::Rng;
use std::sync::Arc;
use tracing::instrument;

use crate::models::{
    SyntheticPlanetBatch, BATCH_SIZE, GRAVITY_RANGE, OXYGEN_LEVEL_RANGE, PLANET_SUFFIX,
    TEMPERATURE_RANGE,
};
use crate::observability::Metrics;

/// Service fabricating synthetic planet batches
pub struct SyntheticDataService {
    metrics: Arc<Metrics>,
}

impl SyntheticDataService {
    /// Create a new SyntheticDataService
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    /// Generate a fresh batch of planets from the thread-local RNG
    #[instrument(skip(self))]
    pub fn generate_batch(&self) -> SyntheticPlanetBatch {
        let batch = generate_batch_with_rng(&mut rand::thread_rng(), BATCH_SIZE);

        self.metrics.record_synthetic_batch(batch.len());
        crate::info_with_trace!(planets = batch.len(), "Generated synthetic planet batch");

        batch
    }
}

/// Build a batch of `size` planets.
///
/// Names are drawn first, then temperatures, gravities and oxygen levels, so a
/// seeded RNG always reproduces the same batch.
pub fn generate_batch_with_rng<R: Rng + ?Sized>(rng: &mut R, size: usize) -> SyntheticPlanetBatch {
    let planet = (0..size).map(|_| planet_name(rng)).collect();
    let temperature = TEMPERATURE_RANGE.sample_many(rng, size);
    let gravity = GRAVITY_RANGE.sample_many(rng, size);
    let oxygen_level = OXYGEN_LEVEL_RANGE.sample_many(rng, size);

    SyntheticPlanetBatch {
        planet,
        temperature,
        gravity,
        oxygen_level,
    }
}

/// A random lorem word, capitalized, with the planet suffix appended
pub fn planet_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word: String = Word().fake_with_rng(rng);
    format!("{}{}", capitalize(&word), PLANET_SUFFIX)
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
