//! Corpus vetting and syllable sequence sources.
//!
//! The model builder consumes one syllable sequence per stem. Stemming and
//! syllabification are pluggable; the provided implementations read a corpus
//! that is already stemmed and segmented, one word per line with syllables
//! separated by spaces or `·`.

use std::collections::HashSet;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::grammar::Grammar;
use crate::io;

/// Reduces a corpus word to its stem.
pub trait Stemmer {
	fn stem(&self, word: &str) -> String;
}

/// Splits a stem into syllables.
pub trait Syllabifier {
	fn syllabify(&self, stem: &str) -> Vec<String>;
}

/// Returns every word unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
	fn stem(&self, word: &str) -> String {
		word.to_owned()
	}
}

/// Splits on a fixed set of delimiter characters.
#[derive(Debug, Clone)]
pub struct DelimitedSyllabifier {
	delimiters: Vec<char>,
}

impl DelimitedSyllabifier {
	pub fn new(delimiters: &[char]) -> Self {
		Self {
			delimiters: delimiters.to_vec(),
		}
	}

	fn is_delimiter(&self, c: char) -> bool {
		c.is_whitespace() || self.delimiters.contains(&c)
	}
}

impl Default for DelimitedSyllabifier {
	/// Whitespace and the middle dot.
	fn default() -> Self {
		Self::new(&['·'])
	}
}

impl Syllabifier for DelimitedSyllabifier {
	fn syllabify(&self, stem: &str) -> Vec<String> {
		stem.split(|c: char| self.is_delimiter(c))
			.filter(|s| !s.is_empty())
			.map(str::to_owned)
			.collect()
	}
}

const APOSTROPHES: &[char] = &['\'', '’', 'ʼ'];

/// Returns `true` if an apostrophe or a hyphen stands between two letters.
fn has_inner_joiner(word: &str) -> bool {
	let chars: Vec<char> = word.chars().collect();
	chars.windows(3).any(|w| {
		w[0].is_alphabetic() && w[2].is_alphabetic() && (w[1] == '-' || APOSTROPHES.contains(&w[1]))
	})
}

/// Selects the stems a model is built from.
///
/// # Behavior
/// - Only the first `limit` words are considered.
/// - For Ukrainian, words with an inner apostrophe or hyphen are discarded.
/// - A stem is kept if it is itself a corpus word, is longer than one
///   character, is already lowercase and was not kept before.
/// - Kept stems stay in corpus order.
pub fn vet_stems<S: Stemmer + ?Sized>(words: &[String], stemmer: &S, limit: usize, grammar: Grammar) -> Vec<String> {
	let considered = &words[..words.len().min(limit)];
	let vocabulary: HashSet<&str> = considered.iter().map(String::as_str).collect();

	let mut kept = HashSet::new();
	let mut stems = Vec::new();
	for word in considered {
		if grammar == Grammar::Ukrainian && has_inner_joiner(word) {
			continue;
		}
		let stem = stemmer.stem(word);
		let eligible = vocabulary.contains(stem.as_str())
			&& stem.chars().count() > 1
			&& stem.to_lowercase() == stem;
		if eligible && kept.insert(stem.clone()) {
			stems.push(stem);
		}
	}

	debug!("vetted {} stems out of {} words", stems.len(), considered.len());
	stems
}

/// Turns a word list into the syllable sequences the model builder takes.
#[derive(Debug, Clone)]
pub struct SyllableSource<St, Sy> {
	grammar: Grammar,
	stemmer: St,
	syllabifier: Sy,
	limit: usize,
}

impl SyllableSource<IdentityStemmer, DelimitedSyllabifier> {
	/// Source for a corpus that is already stemmed and segmented.
	pub fn pre_segmented(grammar: Grammar, limit: usize) -> Self {
		Self::new(grammar, IdentityStemmer, DelimitedSyllabifier::default(), limit)
	}
}

impl<St: Stemmer, Sy: Syllabifier> SyllableSource<St, Sy> {
	pub fn new(grammar: Grammar, stemmer: St, syllabifier: Sy, limit: usize) -> Self {
		Self {
			grammar,
			stemmer,
			syllabifier,
			limit,
		}
	}

	/// Names the settings that shape the sequences, for keying model caches.
	pub fn cache_key(&self) -> String {
		format!("{}:{}", self.grammar.language_name(), self.limit)
	}

	pub fn vet(&self, words: &[String]) -> Vec<String> {
		vet_stems(words, &self.stemmer, self.limit, self.grammar)
	}

	/// One syllable sequence per stem.
	pub fn sequences(&self, stems: &[String]) -> Vec<Vec<String>> {
		stems.iter().map(|stem| self.syllabifier.syllabify(stem)).collect()
	}

	/// Vets `words` and syllabifies the stems.
	///
	/// Returns the sequences together with the number of stems.
	pub fn from_words(&self, words: &[String]) -> (Vec<Vec<String>>, usize) {
		let stems = self.vet(words);
		(self.sequences(&stems), stems.len())
	}

	/// Reads a corpus file, one word per line, and returns its sequences.
	pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<(Vec<Vec<String>>, usize)> {
		let words = io::read_lines(path)?;
		Ok(self.from_words(&words))
	}
}
