//! Ukrainian grammar.
//!
//! Raw concatenations are normalized with a derivational suffix, classified
//! by their ending and inflected per role. Sentences enforce gender agreement
//! of the predicate with the subject and of the attribute with the object.

use std::collections::HashSet;

use log::{debug, warn};
use rand::{Rng, RngCore};

use super::Categorizer;
use super::role::{Constituents, Role, RoleMap};
use super::template::SentenceTemplate;
use crate::error::{JabberError, Result};
use crate::model::synthesis_input::SynthesisInput;
use crate::model::synthesizer::Synthesizer;

pub mod agreement;
pub mod morphology;
pub mod normalization;

use agreement::Agreement;
use morphology::WordClass;

/// Average Ukrainian word length, in characters.
pub const TARGET_LENGTH: usize = 5;

/// Permitted word orders.
pub const TEMPLATES: [SentenceTemplate; 3] = [
	SentenceTemplate::new([
		Role::Subject,
		Role::Predicate,
		Role::Attribute,
		Role::Object,
		Role::AdverbialModifier,
	]),
	SentenceTemplate::new([
		Role::AdverbialModifier,
		Role::Subject,
		Role::Predicate,
		Role::Attribute,
		Role::Object,
	]),
	SentenceTemplate::new([
		Role::Attribute,
		Role::Object,
		Role::Predicate,
		Role::Subject,
		Role::AdverbialModifier,
	]),
];

/// Generates `input.count` normalized pseudowords that have a word class.
///
/// Raw concatenations are drawn in chunks and normalized. Words that no
/// class accepts and words already drawn are discarded; chunks keep coming
/// until the batch is full.
///
/// # Errors
/// Returns `JabberError::AttemptsExhausted` once `input.max_attempts`
/// pre-forms were drawn without filling the batch.
pub fn pseudowords<R: Rng + ?Sized>(
	synthesizer: &Synthesizer<'_>,
	input: &SynthesisInput,
	rng: &mut R,
) -> Result<Vec<String>> {
	let mut words = Vec::with_capacity(input.count);
	let mut seen = HashSet::new();
	let mut attempts = 0;

	while words.len() < input.count {
		if attempts >= input.max_attempts {
			warn!("pseudoword batch stopped at {} of {}", words.len(), input.count);
			return Err(JabberError::AttemptsExhausted {
				accepted: words.len(),
				requested: input.count,
				attempts,
			});
		}

		// One pre-form yields at most one word, so a chunk never overshoots
		let chunk = SynthesisInput {
			count: (input.count - words.len()).min(input.max_attempts - attempts),
			..input.clone()
		};
		attempts += chunk.count;

		let pre_forms = synthesizer.raw_batch(&chunk, rng)?;
		for word in normalization::normalize(&pre_forms, rng) {
			if morphology::classify(&word).is_some() && seen.insert(word.clone()) {
				words.push(word);
			}
		}
	}

	debug!("accepted {} pseudowords after {} pre-forms", words.len(), attempts);
	Ok(words)
}

/// Binds words to roles by their suffix.
///
/// - nouns become subjects, and objects in the accusative when their group
///   has one
/// - adverbials stay invariant
/// - infinitives give three past-tense predicates
/// - adjectives give two accusative attributes
///
/// Unclassifiable words are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixPatternClassification;

impl Categorizer for SuffixPatternClassification {
	fn categorize(&self, words: &[String], _rng: &mut dyn RngCore) -> RoleMap {
		let mut roles = RoleMap::new();
		let mut dropped = 0;

		for word in words {
			match morphology::classify(word) {
				Some(WordClass::Noun) => {
					roles.push(Role::Subject, word.clone());
					if let Some(object) = morphology::accusative(word) {
						roles.push(Role::Object, object);
					}
				}
				Some(WordClass::Adverbial) => roles.push(Role::AdverbialModifier, word.clone()),
				Some(WordClass::Infinitive) => roles.extend(Role::Predicate, morphology::predicate_forms(word)),
				Some(WordClass::Adjective) => roles.extend(Role::Attribute, morphology::attribute_forms(word)),
				None => dropped += 1,
			}
		}

		debug!("classified {} words, dropped {}", words.len() - dropped, dropped);
		roles
	}
}

/// Draws one form per role, then redraws the predicate and the attribute
/// until they agree with the subject and the object.
///
/// Subjects and objects outside every agreement class impose nothing.
///
/// # Errors
/// - `JabberError::EmptyRole` if a role has no forms.
/// - `JabberError::AgreementExhausted` if no agreeing form turns up within
///   `retries` draws, or none exists at all.
pub fn draw_constituents<'a, R: Rng + ?Sized>(
	roles: &'a RoleMap,
	rng: &mut R,
	retries: usize,
) -> Result<Constituents<'a>> {
	let mut constituents = Constituents::draw(roles, rng)?;

	if let Some(pattern) = agreement::predicate_pattern(constituents.subject) {
		constituents.predicate = agreeing(roles, Role::Predicate, constituents.predicate, pattern, retries, rng)?;
	}
	if let Some(pattern) = agreement::attribute_pattern(constituents.object) {
		constituents.attribute = agreeing(roles, Role::Attribute, constituents.attribute, pattern, retries, rng)?;
	}

	Ok(constituents)
}

fn agreeing<'a, R: Rng + ?Sized>(
	roles: &'a RoleMap,
	role: Role,
	current: &'a str,
	pattern: &'static str,
	retries: usize,
	rng: &mut R,
) -> Result<&'a str> {
	match agreement::agree(current, roles.get(role), pattern, retries, rng) {
		Agreement::Matched(form) => Ok(form),
		Agreement::Exhausted => Err(JabberError::AgreementExhausted { role, pattern, retries }),
	}
}

/// Builds one agreeing sentence in one of the three orders, picked at random.
pub fn sentence<R: Rng + ?Sized>(roles: &RoleMap, rng: &mut R, retries: usize) -> Result<String> {
	let constituents = draw_constituents(roles, rng, retries)?;
	let template = &TEMPLATES[rng.random_range(0..TEMPLATES.len())];
	Ok(template.render(&constituents))
}
