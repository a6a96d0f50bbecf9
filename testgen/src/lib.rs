pub mod bounds;
pub mod error;
pub mod models;
pub mod rng;
pub mod sampling;

pub use {
    bounds::{
        Bounds, COUNT_BOUNDS, DIVISOR_BOUNDS, VALUE_BOUNDS, parse_counts, parse_divisor_range,
    },
    error::ValidationError,
    models::{DivisorInput, MatchingInput, OUTPUT_DIR, Progress, Sequence, output_path},
    rng::create_rng,
};
