//! Turkish grammar.
//!
//! Pseudowords are vowel-harmonized syllable by syllable and rejected when
//! two vowels touch. Each accepted word is then assigned to a random role
//! and suffixed for that role.

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use super::Categorizer;
use super::role::{Constituents, Role, RoleMap};
use super::template::SentenceTemplate;
use crate::error::Result;
use crate::model::synthesis_input::SynthesisInput;
use crate::model::synthesizer::Synthesizer;

pub mod harmony;
pub mod morphology;

/// Average Turkish word length, in characters.
pub const TARGET_LENGTH: usize = 7;

/// Turkish is verb-final; both orders end with the predicate.
pub const TEMPLATES: [SentenceTemplate; 2] = [
	SentenceTemplate::new([
		Role::Subject,
		Role::Attribute,
		Role::Object,
		Role::AdverbialModifier,
		Role::Predicate,
	]),
	SentenceTemplate::new([
		Role::Subject,
		Role::AdverbialModifier,
		Role::Attribute,
		Role::Object,
		Role::Predicate,
	]),
];

/// Generates a batch of harmonized pseudowords without adjacent vowels.
pub fn pseudowords<R: Rng + ?Sized>(
	synthesizer: &Synthesizer<'_>,
	input: &SynthesisInput,
	rng: &mut R,
) -> Result<Vec<String>> {
	synthesizer.accepted_batch(input, rng, harmony::apply_vowel_harmony, |word| {
		!harmony::has_adjacent_vowels(word)
	})
}

/// Assigns every word to one role uniformly at random, then suffixes it.
///
/// Subjects and attributes stay bare. Each word ends up as exactly one
/// form in exactly one role.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAssignment;

impl RandomAssignment {
	/// Surface form of `word` in `role`.
	pub fn inflect(role: Role, word: &str) -> String {
		match role {
			Role::Predicate => morphology::past_tense(word),
			Role::Object => morphology::accusative(word),
			Role::AdverbialModifier => morphology::adverbial(word),
			Role::Subject | Role::Attribute => word.to_owned(),
		}
	}
}

impl Categorizer for RandomAssignment {
	fn categorize(&self, words: &[String], rng: &mut dyn RngCore) -> RoleMap {
		let mut roles = RoleMap::new();
		for word in words {
			let role = *Role::ALL.choose(rng).unwrap_or(&Role::Subject);
			roles.push(role, Self::inflect(role, word));
		}
		roles
	}
}

/// Builds one sentence: every role drawn independently, one of the two
/// orders picked at random.
///
/// # Errors
/// Returns `JabberError::EmptyRole` if a role has no forms.
pub fn sentence<R: Rng + ?Sized>(roles: &RoleMap, rng: &mut R) -> Result<String> {
	let constituents = Constituents::draw(roles, rng)?;
	let template = &TEMPLATES[rng.random_range(0..TEMPLATES.len())];
	Ok(template.render(&constituents))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::JabberError;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn words(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn test_every_word_lands_in_exactly_one_role() {
		let batch = words(&["kalem", "kitap", "masa", "göz", "kuş", "defter", "ağaç", "bulut", "deniz", "tilki"]);
		let mut rng = StdRng::seed_from_u64(12);
		let roles = RandomAssignment.categorize(&batch, &mut rng);

		assert_eq!(roles.total(), batch.len());
		for word in &batch {
			let hits: usize = roles
				.iter()
				.map(|(role, forms)| {
					forms.iter().filter(|f| **f == RandomAssignment::inflect(role, word)).count()
				})
				.sum();
			assert_eq!(hits, 1, "'{}' must appear exactly once in the role map", word);
		}
	}

	#[test]
	fn test_inflect_per_role() {
		assert_eq!(RandomAssignment::inflect(Role::Subject, "kitap"), "kitap");
		assert_eq!(RandomAssignment::inflect(Role::Attribute, "kitap"), "kitap");
		assert_eq!(RandomAssignment::inflect(Role::Predicate, "kitap"), "kitaptı");
		assert_eq!(RandomAssignment::inflect(Role::Object, "kitap"), "kitabı");
		assert_eq!(RandomAssignment::inflect(Role::AdverbialModifier, "kitap"), "kitapça");
	}

	#[test]
	fn test_sentence_shape() {
		let mut roles = RoleMap::new();
		roles.push(Role::Subject, "bolan".to_owned());
		roles.push(Role::Predicate, "geldi".to_owned());
		roles.push(Role::Attribute, "mivi".to_owned());
		roles.push(Role::Object, "masayı".to_owned());
		roles.push(Role::AdverbialModifier, "hızca".to_owned());

		let mut rng = StdRng::seed_from_u64(30);
		for _ in 0..20 {
			let sentence = sentence(&roles, &mut rng).unwrap();
			assert!(
				sentence == "Bolan mivi masayı hızca geldi.\n" || sentence == "Bolan hızca mivi masayı geldi.\n",
				"unexpected sentence {sentence:?}"
			);
		}
	}

	#[test]
	fn test_sentence_needs_every_role() {
		let mut roles = RoleMap::new();
		roles.push(Role::Subject, "bolan".to_owned());
		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(sentence(&roles, &mut rng), Err(JabberError::EmptyRole(Role::Predicate))));
	}
}
