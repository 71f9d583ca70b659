/// Parameters for one synthesis batch.
///
/// `SynthesisInput` gathers the knobs the `Synthesizer` needs per batch:
/// how long a candidate should grow and how hard the batch may try before
/// giving up.
///
/// # Invariants
/// - `max_attempts` bounds the total number of candidates drawn in a batch,
///   rejected ones included
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisInput {
	/// Number of pseudowords the batch must produce.
	pub count: usize,

	/// Character length a candidate grows to before it stops.
	/// A terminal syllable may stop it earlier.
	pub target_length: usize,

	/// Upper bound on candidates drawn for the batch.
	pub max_attempts: usize,
}

impl SynthesisInput {
	/// Creates an input allowing `attempts_per_word` draws per requested word.
	pub fn new(count: usize, target_length: usize, attempts_per_word: usize) -> Self {
		Self {
			count,
			target_length,
			max_attempts: count.saturating_mul(attempts_per_word.max(1)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_attempt_bound_scales_with_count() {
		let input = SynthesisInput::new(300, 7, 1000);
		assert_eq!(input.max_attempts, 300_000);
	}

	#[test]
	fn test_attempt_bound_never_zero_per_word() {
		let input = SynthesisInput::new(4, 5, 0);
		assert_eq!(input.max_attempts, 4);
	}
}
