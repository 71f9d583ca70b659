use std::collections::HashMap;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use serde::{Deserialize, Serialize};

use crate::error::{JabberError, Result};

/// Unnormalized weights of syllables observed at the start of a word.
///
/// Each occurrence as a first syllable counts once; finalization divides the
/// counts by the number of stems considered (single-syllable stems included),
/// so a syllable's weight is `occurrences / total_stem_count`. The weights do
/// not sum to 1 and are only ever used for weighted sampling.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct InitialWeights {
	/// Syllables in discovery order.
	syllables: Vec<String>,
	/// Weight of each syllable, same order.
	weights: Vec<f64>,
	/// Lookup from syllable to position. Never iterated.
	index: HashMap<String, usize>,
}

impl InitialWeights {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.syllables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.syllables.is_empty()
	}

	/// Weight of `syllable`, if it was ever seen word-initially.
	pub fn get(&self, syllable: &str) -> Option<f64> {
		self.index.get(syllable).map(|i| self.weights[*i])
	}

	/// Iterates over `(syllable, weight)` pairs in discovery order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.syllables.iter().map(String::as_str).zip(self.weights.iter().copied())
	}

	/// Adds `amount` to the weight of `syllable`, registering it if needed.
	pub(crate) fn add(&mut self, syllable: &str, amount: f64) {
		match self.index.get(syllable) {
			Some(i) => self.weights[*i] += amount,
			None => {
				self.index.insert(syllable.to_owned(), self.syllables.len());
				self.syllables.push(syllable.to_owned());
				self.weights.push(amount);
			}
		}
	}

	/// Divides every weight by `divisor`. A zero divisor leaves weights as is.
	pub(crate) fn scale(&mut self, divisor: f64) {
		if divisor == 0.0 {
			return;
		}
		for weight in &mut self.weights {
			*weight /= divisor;
		}
	}

	/// Merges the weights of `other`, keeping this table's order first.
	pub(crate) fn merge(&mut self, other: &Self) {
		for (syllable, weight) in other.iter() {
			self.add(syllable, weight);
		}
	}

	/// Draws a word-initial syllable with probability proportional to its weight.
	///
	/// # Errors
	/// - `JabberError::EmptyModel` if no syllable was ever seen word-initially
	/// - `JabberError::Weights` if the weights cannot form a distribution
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
		if self.is_empty() {
			return Err(JabberError::EmptyModel);
		}
		let distribution = WeightedIndex::new(&self.weights)
			.map_err(|e| JabberError::Weights(format!("initial syllables: {e}")))?;
		Ok(&self.syllables[distribution.sample(rng)])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_add_accumulates_in_discovery_order() {
		let mut initials = InitialWeights::new();
		initials.add("ta", 1.0);
		initials.add("ka", 1.0);
		initials.add("ta", 1.0);
		let collected: Vec<_> = initials.iter().collect();
		assert_eq!(collected, vec![("ta", 2.0), ("ka", 1.0)]);
	}

	#[test]
	fn test_empty_table_cannot_be_sampled() {
		let initials = InitialWeights::new();
		let mut rng = StdRng::seed_from_u64(3);
		assert!(matches!(initials.sample(&mut rng), Err(JabberError::EmptyModel)));
	}

	#[test]
	fn test_sample_ignores_zero_weights() {
		let mut initials = InitialWeights::new();
		initials.add("ka", 0.0);
		initials.add("lo", 0.25);
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..20 {
			assert_eq!(initials.sample(&mut rng).unwrap(), "lo");
		}
	}
}
