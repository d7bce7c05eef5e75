//! Integration Tests for the fibprime sequence engine
//!
//! Exercises the public API the way a caller relies on it
//!
//! These tests verify:
//! - Fixed small sequences and the overflow bound
//! - Prime classification at the edges
//! - π-scaled prime distances
//! - Report assembly

use approx::assert_relative_eq;
use std::f64::consts::PI;

use fibprime::{
    count_primes, generate_fibonacci, is_prime_signed, prime_distances, primes_in_fibonacci,
    FibPrimeError, SequenceReport, MAX_TERMS,
};

// =============================================================================
// Sequence Generation Tests
// =============================================================================

#[test]
fn test_non_positive_requests_are_empty() {
    for n in [i64::MIN, -1000, -1, 0] {
        assert_eq!(generate_fibonacci(n).unwrap(), Vec::<u64>::new());
    }
}

#[test]
fn test_known_prefixes() {
    assert_eq!(generate_fibonacci(1).unwrap(), vec![0]);
    assert_eq!(generate_fibonacci(2).unwrap(), vec![0, 1]);
    assert_eq!(
        generate_fibonacci(10).unwrap(),
        vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
    );
}

#[test]
fn test_every_length_up_to_bound() {
    for n in 1..=MAX_TERMS as i64 {
        assert_eq!(generate_fibonacci(n).unwrap().len() as i64, n);
    }
}

#[test]
fn test_overflow_is_an_error_not_a_wrap() {
    match generate_fibonacci(100) {
        Err(FibPrimeError::Overflow { requested, max }) => {
            assert_eq!(requested, 100);
            assert_eq!(max, MAX_TERMS);
        }
        other => panic!("Expected overflow error, got {:?}", other),
    }
}

// =============================================================================
// Primality Tests
// =============================================================================

#[test]
fn test_prime_classification_edges() {
    for num in [-5, 0, 1, 4, 6, 8, 9] {
        assert!(!is_prime_signed(num), "{} should not be prime", num);
    }
    for num in [2, 3, 5, 7, 11, 13] {
        assert!(is_prime_signed(num), "{} should be prime", num);
    }
}

// =============================================================================
// Prime Statistics Tests
// =============================================================================

#[test]
fn test_prime_counts() {
    assert_eq!(count_primes(&generate_fibonacci(10).unwrap()), 4);
    assert_eq!(count_primes(&[]), 0);
    assert_eq!(primes_in_fibonacci(10).unwrap(), vec![2, 3, 5, 13]);
}

#[test]
fn test_prime_distances_of_first_ten_terms() {
    let sequence = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];
    let result = prime_distances(&sequence);

    let scaled = [2.0, 3.0, 5.0, 13.0].map(|p| p * PI);
    for (got, want) in result.scaled.iter().zip(scaled) {
        assert_relative_eq!(*got, want, epsilon = 1e-9);
    }

    let distances = [1.0, 2.0, 8.0].map(|d| d * PI);
    assert_eq!(result.distances.len(), 3);
    for (got, want) in result.distances.iter().zip(distances) {
        assert_relative_eq!(*got, want, epsilon = 1e-9);
    }
}

// =============================================================================
// Determinism and Report Tests
// =============================================================================

#[test]
fn test_generation_is_idempotent() {
    for n in [0, 1, 2, 17, MAX_TERMS as i64] {
        assert_eq!(generate_fibonacci(n).unwrap(), generate_fibonacci(n).unwrap());
    }
}

#[test]
fn test_report_agrees_with_free_functions() {
    let report = SequenceReport::build(30).unwrap();
    assert_eq!(report.sequence, generate_fibonacci(30).unwrap());
    assert_eq!(report.prime_count, count_primes(&report.sequence));
    assert_eq!(report.primes(), primes_in_fibonacci(30).unwrap());
    assert!(report.prime_count <= report.sequence.len());
}
