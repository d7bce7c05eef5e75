//! fibprime Library
//!
//! Fibonacci sequence generation, prime analysis of its terms, and pluggable
//! renderers that plot the results.

pub mod cli;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod input;
pub mod render_runner;
pub mod render_traits;
pub mod renderers;
pub mod types;

// Re-export main types for convenience
pub use config_file::RunConfig;
pub use engine::report::SequenceReport;
pub use engine::sequence::{
    count_primes, generate_fibonacci, is_prime, is_prime_signed, prime_distances,
    prime_positions, primes_in_fibonacci, primes_in_sequence, PrimeDistances, MAX_TERMS,
};
pub use error::FibPrimeError;
pub use input::coerce_terms;
pub use render_runner::{build_renderer, render_all};
pub use render_traits::Renderer;
pub use types::RenderBackend;
