//! Per-run results bundle.
//!
//! A `SequenceReport` is what the presentation layer consumes: the sequence,
//! where its primes sit, how many there are, and their π-scaled distances.

use crate::engine::sequence::{
    count_primes, generate_fibonacci, prime_distances, prime_positions, PrimeDistances,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Results of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceReport {
    /// The `n` the caller asked for (may be zero or negative)
    pub terms_requested: i64,
    /// Generated Fibonacci terms
    pub sequence: Vec<u64>,
    /// Indices of prime terms
    pub prime_positions: Vec<usize>,
    /// Number of prime terms
    pub prime_count: usize,
    /// Primes scaled by π and their consecutive gaps
    pub distances: PrimeDistances,
}

impl SequenceReport {
    /// Generate `n` terms and derive every statistic from them.
    pub fn build(n: i64) -> Result<Self> {
        let sequence = generate_fibonacci(n)?;
        Ok(Self::from_sequence(n, sequence))
    }

    /// Derive statistics from an already generated sequence.
    pub fn from_sequence(terms_requested: i64, sequence: Vec<u64>) -> Self {
        let prime_positions = prime_positions(&sequence);
        let prime_count = count_primes(&sequence);
        let distances = prime_distances(&sequence);

        Self {
            terms_requested,
            sequence,
            prime_positions,
            prime_count,
            distances,
        }
    }

    /// Returns true if no terms were generated.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The prime terms, in sequence order.
    pub fn primes(&self) -> Vec<u64> {
        self.prime_positions
            .iter()
            .filter_map(|&index| self.sequence.get(index).copied())
            .collect()
    }

    /// Largest term, or `None` for an empty sequence.
    pub fn max_value(&self) -> Option<u64> {
        // Non-decreasing, so the last term is the maximum
        self.sequence.last().copied()
    }

    /// Console summary, one fact per line.
    pub fn summary(&self) -> String {
        let terms = self
            .sequence
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            format!(
                "Fibonacci sequence up to {} terms: {}",
                self.terms_requested, terms
            ),
            format!("Number of primes in the sequence: {}", self.prime_count),
        ]
        .join("\n")
    }

    /// Pretty JSON document of the report plus the files rendered from it.
    pub fn to_json(&self, artifacts: &[PathBuf]) -> Result<String> {
        let output = RunOutput {
            report: self,
            artifacts,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

/// Shape of `run --json` output
#[derive(Serialize)]
struct RunOutput<'a> {
    #[serde(flatten)]
    report: &'a SequenceReport,
    artifacts: &'a [PathBuf],
}
