//! Syllable-transition model and pseudoword synthesis.
//!
//! This module provides:
//! - The transition statistics (`TransitionModel`, `TransitionMatrix`, `InitialWeights`)
//! - Per-syllable rows with weighted sampling (`State`)
//! - Batch parameters (`SynthesisInput`)
//! - Candidate growth and batch synthesis (`Synthesizer`)

/// One row of the transition matrix.
///
/// Holds the outgoing weights of a syllable and supports weighted sampling.
pub mod state;

/// Square matrix of syllable-to-syllable weights, in discovery order.
pub mod transition_matrix;

/// Distribution of word-initial syllables.
pub mod initial_weights;

/// Model builder: ingestion, normalization, parallel build, merging and caching.
pub mod transition_model;

/// Parameters of one synthesis batch: size, target length, attempt bound.
pub mod synthesis_input;

/// Candidate growth, filtered batches and raw batches.
pub mod synthesizer;
