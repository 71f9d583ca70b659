//! Target grammars and their morphosyntax.
//!
//! Each grammar brings:
//! - a synthesis track (how raw candidates become pseudowords)
//! - a `Categorizer` that binds pseudowords to syntactic roles
//! - a closed set of sentence templates and the sentence assembly rules

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::JabberError;

/// Syntactic roles and the role map.
pub mod role;

/// Sentence templates and rendering.
pub mod template;

/// Turkish: vowel harmony, random role assignment, suffixation.
pub mod turkish;

/// Ukrainian: suffix normalization, suffix-pattern classification, agreement.
pub mod ukrainian;

use role::RoleMap;
use template::SentenceTemplate;

/// Strategy binding pseudowords to syntactic roles.
///
/// Implemented by `turkish::RandomAssignment` and
/// `ukrainian::SuffixPatternClassification`.
pub trait Categorizer {
	/// Builds the role map for a batch of pseudowords.
	fn categorize(&self, words: &[String], rng: &mut dyn RngCore) -> RoleMap;
}

/// Grammar the generator targets.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grammar {
	Turkish,
	Ukrainian,
}

impl Grammar {
	pub const ALL: [Grammar; 2] = [Grammar::Turkish, Grammar::Ukrainian];

	/// Language name, as used in output file names.
	pub fn language_name(self) -> &'static str {
		match self {
			Grammar::Turkish => "Turkish",
			Grammar::Ukrainian => "Ukrainian",
		}
	}

	/// Typical word length of the language, in characters.
	pub fn target_length(self) -> usize {
		match self {
			Grammar::Turkish => turkish::TARGET_LENGTH,
			Grammar::Ukrainian => ukrainian::TARGET_LENGTH,
		}
	}

	/// Permitted word orders.
	pub fn templates(self) -> &'static [SentenceTemplate] {
		match self {
			Grammar::Turkish => &turkish::TEMPLATES,
			Grammar::Ukrainian => &ukrainian::TEMPLATES,
		}
	}

	pub fn categorizer(self) -> Box<dyn Categorizer> {
		match self {
			Grammar::Turkish => Box::new(turkish::RandomAssignment),
			Grammar::Ukrainian => Box::new(ukrainian::SuffixPatternClassification),
		}
	}
}

impl fmt::Display for Grammar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.language_name())
	}
}

impl FromStr for Grammar {
	type Err = JabberError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"turkish" | "tr" | "a" => Ok(Grammar::Turkish),
			"ukrainian" | "uk" | "b" => Ok(Grammar::Ukrainian),
			_ => Err(JabberError::UnknownGrammar(s.to_owned())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_grammar() {
		assert_eq!("Turkish".parse::<Grammar>().unwrap(), Grammar::Turkish);
		assert_eq!(" uk ".parse::<Grammar>().unwrap(), Grammar::Ukrainian);
		assert!(matches!("klingon".parse::<Grammar>(), Err(JabberError::UnknownGrammar(_))));
	}

	#[test]
	fn test_template_counts() {
		assert_eq!(Grammar::Turkish.templates().len(), 2);
		assert_eq!(Grammar::Ukrainian.templates().len(), 3);
	}

	#[test]
	fn test_target_lengths() {
		assert_eq!(Grammar::Turkish.target_length(), 7);
		assert_eq!(Grammar::Ukrainian.target_length(), 5);
	}
}
