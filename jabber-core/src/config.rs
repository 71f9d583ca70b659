use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grammar::Grammar;

/// Parameters of one generation run.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
///
/// # Fields
/// - `n_words`: pseudowords requested per batch.
/// - `n_sent`: sentences to produce.
/// - `target_length`: character length candidates grow to; the grammar's
///   typical word length when `None`.
/// - `attempts_per_word`: synthesis gives up after `n_words * attempts_per_word`
///   candidates.
/// - `agreement_retries`: redraws allowed per agreement constraint.
/// - `corpus_limit`: corpus words considered when vetting stems.
/// - `seed`: fixed seed for reproducible runs; entropy when `None`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
	pub n_words: usize,
	pub n_sent: usize,
	pub target_length: Option<usize>,
	pub attempts_per_word: usize,
	pub agreement_retries: usize,
	pub corpus_limit: usize,
	pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			n_words: 300,
			n_sent: 5,
			target_length: None,
			attempts_per_word: 1000,
			agreement_retries: 10_000,
			corpus_limit: 50_000,
			seed: None,
		}
	}
}

impl GeneratorConfig {
	/// Reads a JSON configuration file.
	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Self::from_json(&text)
	}

	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}

	/// Candidate length for `grammar`, honouring the override.
	pub fn target_length_for(&self, grammar: Grammar) -> usize {
		self.target_length.unwrap_or_else(|| grammar.target_length())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::JabberError;

	#[test]
	fn test_partial_json_keeps_defaults() {
		let config = GeneratorConfig::from_json(r#"{ "n_sent": 12, "seed": 7 }"#).unwrap();
		assert_eq!(config.n_sent, 12);
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.n_words, 300);
		assert_eq!(config.agreement_retries, 10_000);
	}

	#[test]
	fn test_target_length_override() {
		let mut config = GeneratorConfig::default();
		assert_eq!(config.target_length_for(Grammar::Turkish), 7);
		assert_eq!(config.target_length_for(Grammar::Ukrainian), 5);
		config.target_length = Some(9);
		assert_eq!(config.target_length_for(Grammar::Ukrainian), 9);
	}

	#[test]
	fn test_invalid_json() {
		assert!(matches!(GeneratorConfig::from_json("{ n_words: }"), Err(JabberError::Config(_))));
	}
}
