use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use serde::{Deserialize, Serialize};

use crate::error::{JabberError, Result};

/// Represents one row of the transition matrix.
///
/// A `State` corresponds to a syllable (`key`) and stores one weight per
/// syllable known to the matrix, in discovery order. The weight at position
/// `i` measures how often the syllable at position `i` was observed right
/// after `key`.
///
/// Conceptually, this is a node in a Markov chain whose outgoing edges point
/// to every known syllable, most of them with a zero weight.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during learning
/// - Grow by one zero entry whenever the matrix discovers a new syllable
/// - Predict the index of the next syllable using weighted random sampling
///
/// ## Invariants
/// - `weights.len()` equals the number of syllables known to the owning matrix
/// - Every weight is non-negative
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct State {
	/// Syllable this row belongs to.
	key: String,
	/// Outgoing weights indexed by the position of the following syllable.
	/// Raw counts while learning, scaled once the model is finalized.
	weights: Vec<f64>,
}

impl State {
	/// Creates a row of `width` zero weights for the given syllable.
	pub fn new(key: &str, width: usize) -> Self {
		Self {
			key: key.to_owned(),
			weights: vec![0.0; width],
		}
	}

	/// Syllable this row belongs to.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Outgoing weights, one per known syllable.
	pub fn weights(&self) -> &[f64] {
		&self.weights
	}

	/// Appends a zero column for a newly discovered syllable.
	pub(crate) fn widen(&mut self) {
		self.weights.push(0.0);
	}

	/// Adds `amount` to the transition toward the syllable at `index`.
	///
	/// Out-of-range indices are ignored; the matrix widens every row before
	/// handing out a new index.
	pub(crate) fn add_transition(&mut self, index: usize, amount: f64) {
		if let Some(weight) = self.weights.get_mut(index) {
			*weight += amount;
		}
	}

	/// Divides every weight by `divisor`.
	pub(crate) fn scale(&mut self, divisor: f64) {
		for weight in &mut self.weights {
			*weight /= divisor;
		}
	}

	/// Returns `true` when no syllable was ever observed after this one.
	///
	/// Such syllables only ever ended a corpus word, so generation must stop
	/// as soon as one is reached.
	pub fn is_terminal(&self) -> bool {
		self.weights.iter().all(|weight| *weight == 0.0)
	}

	/// Predicts the index of the next syllable using weighted random sampling.
	///
	/// The weights are used as they are: they do not need to sum to 1.
	///
	/// Returns `Ok(None)` for a terminal state.
	///
	/// # Errors
	/// Returns `JabberError::Weights` if the weights cannot form a distribution
	/// (negative or non-finite values).
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<usize>> {
		if self.is_terminal() {
			return Ok(None);
		}

		let distribution = WeightedIndex::new(&self.weights)
			.map_err(|e| JabberError::Weights(format!("row '{}': {e}", self.key)))?;
		Ok(Some(distribution.sample(rng)))
	}
}
