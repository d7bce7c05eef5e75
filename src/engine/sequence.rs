//! Sequence Engine
//!
//! Generates a bounded Fibonacci sequence, classifies the primality of its
//! terms, and derives aggregate statistics from it.
//!
//! # Operations
//!
//! | Function             | Output |
//! |----------------------|--------|
//! | `generate_fibonacci` | First `n` terms, seeded `[0, 1]` |
//! | `is_prime`           | Trial division with a 6k±1 wheel |
//! | `count_primes`       | Number of prime terms |
//! | `prime_distances`    | Primes scaled by π and their consecutive gaps |
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no shared state. Every call builds fresh output.
//! - **Bounded**: Terms are `u64`. F(93) is the largest term that fits, so at
//!   most [`MAX_TERMS`] terms can be produced. Larger requests fail with
//!   [`FibPrimeError::Overflow`] instead of wrapping.
//! - **Integer bounds**: The primality square-root bound is an integer
//!   comparison (`i <= num / i`), so perfect squares are never misclassified.

use crate::error::{FibPrimeError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Largest term count whose every element fits in a `u64` (F(0) through F(93)).
pub const MAX_TERMS: usize = 94;

// ============================================================================
// Fibonacci Generation
// ============================================================================

/// Generate the first `n` Fibonacci terms.
///
/// - `n <= 0` yields an empty sequence
/// - `n == 1` yields `[0]`
/// - `n == 2` yields `[0, 1]`
/// - otherwise the sequence is extended by summing the last two terms until
///   it holds `n` elements
///
/// # Errors
///
/// Returns [`FibPrimeError::Overflow`] if `n` exceeds [`MAX_TERMS`].
pub fn generate_fibonacci(n: i64) -> Result<Vec<u64>> {
    if n <= 0 {
        return Ok(Vec::new());
    }

    let len = usize::try_from(n)
        .ok()
        .filter(|&len| len <= MAX_TERMS)
        .ok_or_else(|| FibPrimeError::overflow(n, MAX_TERMS))?;

    if len == 1 {
        return Ok(vec![0]);
    }

    let mut sequence: Vec<u64> = Vec::with_capacity(len);
    sequence.extend_from_slice(&[0, 1]);

    while sequence.len() < len {
        let last = sequence[sequence.len() - 1];
        let prev = sequence[sequence.len() - 2];
        // Cannot fail below MAX_TERMS
        let next = last
            .checked_add(prev)
            .ok_or_else(|| FibPrimeError::overflow(n, sequence.len()))?;
        sequence.push(next);
    }

    Ok(sequence)
}

// ============================================================================
// Primality
// ============================================================================

/// Check whether `num` is prime.
///
/// 2 and 3 are answered directly; multiples of 2 and 3 are rejected; the
/// remaining candidates are divided by `6k ± 1` while `i * i <= num`.
pub fn is_prime(num: u64) -> bool {
    if num <= 1 {
        return false;
    }
    if num == 2 || num == 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }

    // `i <= num / i` is `i * i <= num` without overflowing near u64::MAX
    let mut i: u64 = 5;
    while i <= num / i {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}

/// Signed form of [`is_prime`]; zero and negatives are never prime.
pub fn is_prime_signed(num: i64) -> bool {
    u64::try_from(num).map(is_prime).unwrap_or(false)
}

// ============================================================================
// Prime Statistics
// ============================================================================

/// Count the prime elements of `sequence`.
pub fn count_primes(sequence: &[u64]) -> usize {
    sequence.iter().filter(|&&num| is_prime(num)).count()
}

/// The prime elements of `sequence`, in their original order.
pub fn primes_in_sequence(sequence: &[u64]) -> Vec<u64> {
    sequence.iter().copied().filter(|&num| is_prime(num)).collect()
}

/// Indices of the prime elements of `sequence`.
pub fn prime_positions(sequence: &[u64]) -> Vec<usize> {
    sequence
        .iter()
        .enumerate()
        .filter(|(_, num)| is_prime(**num))
        .map(|(index, _)| index)
        .collect()
}

/// Generate `n` Fibonacci terms and keep only the primes.
pub fn primes_in_fibonacci(n: i64) -> Result<Vec<u64>> {
    Ok(primes_in_sequence(&generate_fibonacci(n)?))
}

/// Primes of a sequence scaled by π, plus the gaps between neighbours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimeDistances {
    /// Each prime multiplied by π, in sequence order
    pub scaled: Vec<f64>,
    /// `scaled[i + 1] - scaled[i]`; empty when fewer than two primes exist
    pub distances: Vec<f64>,
}

impl PrimeDistances {
    /// Split into `(scaled, distances)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.scaled, self.distances)
    }
}

/// Scale the primes of `sequence` by π and compute consecutive differences.
pub fn prime_distances(sequence: &[u64]) -> PrimeDistances {
    // Lossy above 2^53
    let scaled: Vec<f64> = primes_in_sequence(sequence)
        .into_iter()
        .map(|prime| prime as f64 * PI)
        .collect();

    let distances = scaled.windows(2).map(|pair| pair[1] - pair[0]).collect();

    PrimeDistances { scaled, distances }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_non_positive_terms_give_empty_sequence() {
        for n in [-100, -5, -1, 0] {
            assert!(generate_fibonacci(n).expect("non-positive n is total").is_empty());
        }
    }

    #[test]
    fn test_seed_terms() {
        assert_eq!(generate_fibonacci(1).unwrap(), vec![0]);
        assert_eq!(generate_fibonacci(2).unwrap(), vec![0, 1]);
        assert_eq!(generate_fibonacci(3).unwrap(), vec![0, 1, 1]);
    }

    #[test]
    fn test_first_ten_terms() {
        assert_eq!(
            generate_fibonacci(10).unwrap(),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
    }

    #[test]
    fn test_largest_sequence_ends_at_f93() {
        let sequence = generate_fibonacci(MAX_TERMS as i64).expect("94 terms fit in u64");
        assert_eq!(sequence.len(), MAX_TERMS);
        assert_eq!(sequence[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_one_past_the_bound_overflows() {
        let err = generate_fibonacci(MAX_TERMS as i64 + 1).unwrap_err();
        assert!(matches!(
            err,
            FibPrimeError::Overflow { requested: 95, max: MAX_TERMS }
        ));

        assert!(generate_fibonacci(i64::MAX).is_err());
    }

    #[test]
    fn test_generation_is_idempotent() {
        assert_eq!(generate_fibonacci(40).unwrap(), generate_fibonacci(40).unwrap());
    }

    #[test]
    fn test_small_primes() {
        for num in [2, 3, 5, 7, 11, 13] {
            assert!(is_prime(num), "{} should be prime", num);
        }
    }

    #[test]
    fn test_small_non_primes() {
        for num in [0, 1, 4, 6, 8, 9] {
            assert!(!is_prime(num), "{} should not be prime", num);
        }
    }

    #[test]
    fn test_negative_numbers_are_not_prime() {
        for num in [-5, -2, -1, i64::MIN] {
            assert!(!is_prime_signed(num));
        }
        assert!(is_prime_signed(13));
    }

    #[test]
    fn test_square_root_boundary() {
        // Squares of primes sit exactly on the bound
        for num in [4, 9, 25, 49, 121, 169, 289, 361, 529, 841, 961] {
            assert!(!is_prime(num), "{} is a perfect square", num);
        }
        // Neighbours of squares
        assert!(is_prime(23));
        assert!(is_prime(29));
        assert!(is_prime(47));
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(1_000_000_000_039));
        // Product of the two largest primes below one million
        assert!(!is_prime(999_983 * 999_979));
        assert!(!is_prime(999_983 * 999_983));
        assert!(!is_prime(u64::MAX));
    }

    #[test]
    fn test_count_primes_in_first_ten_terms() {
        let sequence = generate_fibonacci(10).unwrap();
        assert_eq!(count_primes(&sequence), 4);
        assert_eq!(primes_in_sequence(&sequence), vec![2, 3, 5, 13]);
        assert_eq!(prime_positions(&sequence), vec![3, 4, 5, 7]);
    }

    #[test]
    fn test_count_primes_empty() {
        assert_eq!(count_primes(&[]), 0);
        assert!(primes_in_sequence(&[]).is_empty());
    }

    #[test]
    fn test_fibonacci_primes_up_to_f47() {
        // 2, 3, 5, 13, 89, 233, 1597, 28657, 514229, 433494437, 2971215073
        let primes = primes_in_fibonacci(50).unwrap();
        assert_eq!(primes.len(), 11);
        assert_eq!(primes.last(), Some(&2_971_215_073));
    }

    #[test]
    fn test_prime_distances_first_ten_terms() {
        let sequence = generate_fibonacci(10).unwrap();
        let (scaled, distances) = prime_distances(&sequence).into_parts();

        let expected_scaled = [2.0 * PI, 3.0 * PI, 5.0 * PI, 13.0 * PI];
        assert_eq!(scaled.len(), expected_scaled.len());
        for (got, want) in scaled.iter().zip(expected_scaled) {
            assert_relative_eq!(*got, want, epsilon = 1e-9);
        }

        let expected_distances = [PI, 2.0 * PI, 8.0 * PI];
        assert_eq!(distances.len(), expected_distances.len());
        for (got, want) in distances.iter().zip(expected_distances) {
            assert_relative_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_prime_distances_with_fewer_than_two_primes() {
        let none = prime_distances(&[0, 1, 1]);
        assert!(none.scaled.is_empty());
        assert!(none.distances.is_empty());

        let one = prime_distances(&[0, 1, 1, 2]);
        assert_eq!(one.scaled.len(), 1);
        assert!(one.distances.is_empty());
    }
}
