//! Top-level module for the n-gram scoring system.
//!
//! This crate scores candidate substrings of a text by two independent
//! signals used in unsupervised new-word discovery:
//! - Frequency counting over sliding windows (`FrequencyTable`)
//! - Internal-cohesion scoring (`CohesionTable`)
//! - Left/right context entropy scoring (`EntropyTable`)
//! - A high-level compute/load/query facade (`Scorer`)

/// Internal-cohesion scores (minimum-split frequency-product ratio).
///
/// Derived from a frequency table; substrings whose weakest split is
/// still frequent relative to the whole behave as cohesive units.
pub mod cohesion;

/// Left/right context entropy scores.
///
/// Derived from a frequency table and the original text. Handles
/// wildcard-masked candidates and isolates per-candidate pattern
/// failures.
pub mod entropy;

/// N-gram frequency counting.
///
/// Builds the occurrence counts of every contiguous substring of length
/// `1..=N`, the shared input of both scorers.
pub mod frequency;

/// High-level scoring facade.
///
/// Exposes the compute-from-text and load-from-store lifecycles and the
/// point-lookup query surface.
pub mod scorer;
