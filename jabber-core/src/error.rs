use thiserror::Error;

use crate::grammar::role::Role;

/// Errors surfaced by the generation core.
///
/// Dropped candidates (phonotactic rejections, unclassifiable words) are not
/// errors; they are discarded silently by the batch loops.
#[derive(Debug, Error)]
pub enum JabberError {
	#[error("transition model is empty: the corpus yielded no initial syllables")]
	EmptyModel,

	#[error("syllable '{0}' has no row in the transition matrix")]
	UnknownSyllable(String),

	#[error("invalid sampling weights: {0}")]
	Weights(String),

	#[error("accepted only {accepted} of {requested} pseudowords after {attempts} attempts")]
	AttemptsExhausted {
		accepted: usize,
		requested: usize,
		attempts: usize,
	},

	#[error("no role-map entry satisfies required agreement pattern: {role} ending in '{pattern}' ({retries} draws)")]
	AgreementExhausted {
		role: Role,
		pattern: &'static str,
		retries: usize,
	},

	#[error("role {0} has no word-forms to draw from")]
	EmptyRole(Role),

	#[error("unknown grammar '{0}', expected 'turkish' or 'ukrainian'")]
	UnknownGrammar(String),

	#[error("cannot merge a transition model that is already finalized")]
	Finalized,

	#[error("model builder lost {0} partial model(s)")]
	Worker(usize),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error("model serialization failed: {0}")]
	Serialization(#[from] postcard::Error),

	#[error("invalid configuration: {0}")]
	Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JabberError>;
