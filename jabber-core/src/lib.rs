//! Pseudoword and nonsense-sentence generation.
//!
//! This crate provides the generation core:
//! - A syllable-transition model built from a syllabified corpus
//! - Pseudoword synthesis under per-grammar phonotactic constraints
//! - Role binding and suffixation for Turkish and Ukrainian
//! - Sentence assembly from fixed word-order templates, with agreement
//!
//! `pipeline::Jabberwocky` ties these steps together for a selected grammar.

/// Transition model and pseudoword synthesizer.
pub mod model;

/// Grammars: morphology, role binding, templates, agreement.
pub mod grammar;

/// Corpus vetting and syllable sequence sources.
pub mod corpus;

/// Run parameters.
pub mod config;

/// Error type shared by the crate.
pub mod error;

/// I/O utilities (file loading, path helpers, sentence output).
pub mod io;

/// End-to-end generation for one grammar.
pub mod pipeline;

pub use config::GeneratorConfig;
pub use error::{JabberError, Result};
pub use grammar::Grammar;
pub use pipeline::Jabberwocky;
