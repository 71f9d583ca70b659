use std::sync::Arc;

use log::{debug, info};
use rand::{Rng, RngCore, SeedableRng};
use rand::rngs::StdRng;

use crate::config::GeneratorConfig;
use crate::error::{JabberError, Result};
use crate::grammar::role::RoleMap;
use crate::grammar::{Grammar, turkish, ukrainian};
use crate::model::synthesis_input::SynthesisInput;
use crate::model::synthesizer::Synthesizer;
use crate::model::transition_model::TransitionModel;

/// Pseudoword and sentence generator for one grammar.
///
/// # Responsibilities
/// - Draw a batch of pseudowords from the transition model
/// - Bind them to roles with the grammar's categorizer
/// - Assemble the requested number of sentences
///
/// One pseudoword batch feeds every sentence of a run. The model is shared,
/// so several generators with different configurations can use one model.
#[derive(Debug, Clone)]
pub struct Jabberwocky {
	grammar: Grammar,
	model: Arc<TransitionModel>,
	config: GeneratorConfig,
}

impl Jabberwocky {
	pub fn new<M: Into<Arc<TransitionModel>>>(grammar: Grammar, model: M, config: GeneratorConfig) -> Self {
		Self {
			grammar,
			model: model.into(),
			config,
		}
	}

	/// Builds the model from syllable sequences, then wraps it.
	pub fn from_sequences(
		grammar: Grammar,
		sequences: &[Vec<String>],
		stem_count: usize,
		config: GeneratorConfig,
	) -> Result<Self> {
		let model = TransitionModel::build_parallel(sequences, stem_count)?;
		Ok(Self::new(grammar, model, config))
	}

	pub fn grammar(&self) -> Grammar {
		self.grammar
	}

	pub fn model(&self) -> &TransitionModel {
		&self.model
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Random generator for a run: seeded from the configuration when it
	/// carries a seed, from system entropy otherwise.
	pub fn rng(&self) -> StdRng {
		match self.config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}

	fn synthesis_input(&self) -> SynthesisInput {
		SynthesisInput::new(
			self.config.n_words,
			self.config.target_length_for(self.grammar),
			self.config.attempts_per_word,
		)
	}

	/// Draws one batch of pseudowords on the grammar's synthesis track.
	///
	/// # Errors
	/// - `JabberError::EmptyModel` if the model has nothing to sample.
	/// - `JabberError::AttemptsExhausted` if the Turkish filter rejects too
	///   many candidates.
	pub fn pseudowords<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>> {
		let synthesizer = Synthesizer::new(&self.model)?;
		let input = self.synthesis_input();
		match self.grammar {
			Grammar::Turkish => turkish::pseudowords(&synthesizer, &input, rng),
			Grammar::Ukrainian => ukrainian::pseudowords(&synthesizer, &input, rng),
		}
	}

	/// Binds `words` to roles.
	pub fn role_map<R: RngCore>(&self, words: &[String], rng: &mut R) -> RoleMap {
		self.grammar.categorizer().categorize(words, rng)
	}

	/// Assembles one sentence from `roles`.
	pub fn sentence<R: Rng + ?Sized>(&self, roles: &RoleMap, rng: &mut R) -> Result<String> {
		match self.grammar {
			Grammar::Turkish => turkish::sentence(roles, rng),
			Grammar::Ukrainian => ukrainian::sentence(roles, rng, self.config.agreement_retries),
		}
	}

	/// Runs the whole chain and returns `config.n_sent` sentences, each
	/// ending with ".\n".
	///
	/// Nothing is generated when either count is zero.
	pub fn generate<R: RngCore>(&self, rng: &mut R) -> Result<Vec<String>> {
		if self.config.n_words == 0 || self.config.n_sent == 0 {
			return Ok(Vec::new());
		}
		if self.model.is_empty() {
			return Err(JabberError::EmptyModel);
		}

		let words = self.pseudowords(rng)?;
		let roles = self.role_map(&words, rng);
		debug!(
			"{}: {} pseudowords, {} role forms",
			self.grammar,
			words.len(),
			roles.total()
		);

		let sentences = (0..self.config.n_sent)
			.map(|_| self.sentence(&roles, rng))
			.collect::<Result<Vec<_>>>()?;
		info!("{}: generated {} sentences", self.grammar, sentences.len());
		Ok(sentences)
	}

	/// Builds a model from `sequences` and generates sentences in one call.
	pub fn run<R: RngCore>(
		grammar: Grammar,
		sequences: &[Vec<String>],
		stem_count: usize,
		config: GeneratorConfig,
		rng: &mut R,
	) -> Result<Vec<String>> {
		Self::from_sequences(grammar, sequences, stem_count, config)?.generate(rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(n_words: usize, n_sent: usize) -> GeneratorConfig {
		GeneratorConfig {
			n_words,
			n_sent,
			seed: Some(1),
			..GeneratorConfig::default()
		}
	}

	#[test]
	fn test_zero_counts_produce_nothing() {
		let mut rng = StdRng::seed_from_u64(0);
		let sequences = vec![vec!["ka".to_string(), "ta".to_string()]];
		assert!(Jabberwocky::run(Grammar::Turkish, &sequences, 1, config(0, 5), &mut rng).unwrap().is_empty());
		assert!(Jabberwocky::run(Grammar::Turkish, &sequences, 1, config(5, 0), &mut rng).unwrap().is_empty());
	}

	#[test]
	fn test_empty_corpus_is_an_error() {
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(
			Jabberwocky::run(Grammar::Ukrainian, &[], 0, config(10, 1), &mut rng),
			Err(JabberError::EmptyModel)
		));
	}

	#[test]
	fn test_seeded_rng_is_reproducible() {
		let generator = Jabberwocky::new(Grammar::Turkish, TransitionModel::default(), config(1, 1));
		let left: u64 = generator.rng().random();
		let right: u64 = generator.rng().random();
		assert_eq!(left, right);
	}
}
