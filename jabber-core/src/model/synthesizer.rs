use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use super::synthesis_input::SynthesisInput;
use super::transition_model::TransitionModel;
use crate::error::{JabberError, Result};

/// A pseudoword being grown syllable by syllable.
///
/// `length` counts characters, not syllables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Candidate {
	syllables: Vec<String>,
	length: usize,
}

impl Candidate {
	pub fn syllables(&self) -> &[String] {
		&self.syllables
	}

	/// Characters accumulated so far.
	pub fn length(&self) -> usize {
		self.length
	}

	pub fn last(&self) -> Option<&str> {
		self.syllables.last().map(String::as_str)
	}

	pub fn push(&mut self, syllable: &str) {
		self.length += syllable.chars().count();
		self.syllables.push(syllable.to_owned());
	}

	pub fn into_syllables(self) -> Vec<String> {
		self.syllables
	}

	/// Concatenated surface form.
	pub fn surface(&self) -> String {
		self.syllables.concat()
	}
}

/// Draws pseudowords from a `TransitionModel`.
///
/// # Responsibilities
/// - Grow single candidates up to a target length
/// - Produce batches of unique, filtered pseudowords (harmony track)
/// - Produce raw batches of concatenations (normalization track)
#[derive(Debug)]
pub struct Synthesizer<'a> {
	model: &'a TransitionModel,
}

impl<'a> Synthesizer<'a> {
	/// Wraps a finalized model.
	///
	/// # Errors
	/// Returns `JabberError::EmptyModel` if the model has nothing to sample.
	pub fn new(model: &'a TransitionModel) -> Result<Self> {
		if model.is_empty() {
			return Err(JabberError::EmptyModel);
		}
		Ok(Self { model })
	}

	/// Grows one candidate.
	///
	/// # Behavior
	/// - The first syllable is drawn from the initial weights.
	/// - Every next syllable is drawn from the row of the last one.
	/// - Stops once `target_length` characters are reached, or as soon as the
	///   last syllable is terminal (only ever seen word-finally), even if the
	///   candidate is still short.
	///
	/// # Notes
	/// - A candidate always holds at least one syllable, whatever the target.
	pub fn candidate<R: Rng + ?Sized>(&self, target_length: usize, rng: &mut R) -> Result<Candidate> {
		let initials = self.model.initial_weights();
		let matrix = self.model.matrix();

		let mut candidate = Candidate::default();
		candidate.push(initials.sample(rng)?);

		while candidate.length() < target_length {
			// Should not be empty, the first syllable is always pushed
			let last = candidate.last().unwrap_or_default();
			let state = matrix
				.row(last)
				.ok_or_else(|| JabberError::UnknownSyllable(last.to_owned()))?;

			let next = match state.predict(rng)? {
				Some(position) => position,
				None => break,
			};
			let syllable = matrix
				.syllable(next)
				.ok_or_else(|| JabberError::UnknownSyllable(format!("#{next}")))?;
			candidate.push(syllable);
		}

		Ok(candidate)
	}

	/// Generates `input.count` unique pseudowords that pass `accept`.
	///
	/// # Parameters
	/// - `rewrite`: applied to the syllables of every candidate before they are
	///   joined (e.g. vowel harmony).
	/// - `accept`: phonotactic filter over the joined surface form.
	///
	/// # Behavior
	/// - Rejected and duplicate candidates are discarded and do not count.
	/// - Output order is acceptance order.
	///
	/// # Errors
	/// Returns `JabberError::AttemptsExhausted` if `input.max_attempts`
	/// candidates were drawn without reaching `input.count`.
	pub fn accepted_batch<R, W, A>(
		&self,
		input: &SynthesisInput,
		rng: &mut R,
		rewrite: W,
		accept: A,
	) -> Result<Vec<String>>
	where
		R: Rng + ?Sized,
		W: Fn(&mut [String]),
		A: Fn(&str) -> bool,
	{
		let mut words = Vec::with_capacity(input.count);
		let mut seen = HashSet::new();
		let mut attempts = 0;
		let mut rejected = 0;

		while words.len() < input.count {
			if attempts >= input.max_attempts {
				warn!("pseudoword batch stopped at {} of {}", words.len(), input.count);
				return Err(JabberError::AttemptsExhausted {
					accepted: words.len(),
					requested: input.count,
					attempts,
				});
			}
			attempts += 1;

			let mut syllables = self.candidate(input.target_length, rng)?.into_syllables();
			rewrite(&mut syllables);
			let word = syllables.concat();

			if accept(&word) && seen.insert(word.clone()) {
				words.push(word);
			} else {
				rejected += 1;
			}
		}

		debug!("accepted {} pseudowords, rejected {}", words.len(), rejected);
		Ok(words)
	}

	/// Generates `input.count` raw concatenations, duplicates included.
	///
	/// No filter applies here; the caller normalizes the pool afterwards.
	pub fn raw_batch<R: Rng + ?Sized>(&self, input: &SynthesisInput, rng: &mut R) -> Result<Vec<String>> {
		(0..input.count)
			.map(|_| self.candidate(input.target_length, rng).map(|c| c.surface()))
			.collect()
	}
}
