// Services module - synthetic data generation

pub mod synthetic_data;

pub use synthetic_data::{
    capitalize, generate_batch_with_rng, planet_name, SyntheticDataService,
};
