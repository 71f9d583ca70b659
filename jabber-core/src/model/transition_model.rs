use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::initial_weights::InitialWeights;
use super::transition_matrix::TransitionMatrix;
use crate::error::{JabberError, Result};
use crate::io::build_output_path;

/// Syllable-transition model learned from a corpus of syllabified stems.
///
/// This struct manages:
/// - `initials`: how likely each syllable is to start a word.
/// - `matrix`: how likely each syllable is to follow another one.
/// - `stem_count`: number of stems the corpus provided, single-syllable ones included.
/// - `finalized`: whether the raw counts have been turned into sampling weights.
///
/// A model is built once per run and is read-only afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TransitionModel {
	initials: InitialWeights,
	matrix: TransitionMatrix,
	stem_count: usize,
	finalized: bool,
}

impl TransitionModel {
	/// Builds and finalizes a model from syllable sequences, on the calling thread.
	///
	/// # Parameters
	/// - `sequences`: one syllable sequence per stem.
	/// - `stem_count`: number of stems considered, used to scale the initial weights.
	///
	/// # Notes
	/// - Sequences of fewer than two syllables carry no transition and are skipped.
	/// - An empty input yields an empty model; sampling from it fails with
	///   `JabberError::EmptyModel`.
	pub fn build(sequences: &[Vec<String>], stem_count: usize) -> Self {
		let mut model = Self::default();
		for sequence in sequences {
			model.add_sequence(sequence);
		}
		model.finalize(stem_count);
		model
	}

	/// Builds the same model as `build`, splitting the corpus across threads.
	///
	/// # Behavior
	/// - Splits the sequences into chunks (based on CPU cores * factor).
	/// - Spawns threads to count transitions for each chunk.
	/// - Merges the partial counts in chunk order, then finalizes once.
	///
	/// # Notes
	/// - Merging in chunk order reproduces the sequential discovery order, so
	///   the result is identical to `build` for the same input.
	///
	/// # Errors
	/// Returns `JabberError::Worker` if a thread dies before sending its counts.
	pub fn build_parallel(sequences: &[Vec<String>], stem_count: usize) -> Result<Self> {
		if sequences.is_empty() {
			return Ok(Self::build(sequences, stem_count));
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = sequences.len().div_ceil(chunks).max(1);

		let (tx, rx) = mpsc::channel();
		let mut spawned = 0;
		for (position, chunk) in sequences.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			let chunk: Vec<Vec<String>> = chunk.to_vec();
			spawned += 1;

			thread::spawn(move || {
				let mut partial_model = TransitionModel::default();
				for sequence in &chunk {
					partial_model.add_sequence(sequence);
				}
				// The receiver outlives every sender; a failed send is
				// reported as a missing partial below.
				let _ = tx.send((position, partial_model));
			});
		}
		drop(tx);

		let mut partials: Vec<(usize, TransitionModel)> = rx.iter().collect();
		if partials.len() != spawned {
			return Err(JabberError::Worker(spawned - partials.len()));
		}
		partials.sort_by_key(|(position, _)| *position);

		let mut final_model = TransitionModel::default();
		for (_, partial_model) in &partials {
			final_model.merge(partial_model)?;
		}
		final_model.finalize(stem_count);

		debug!(
			"built transition model over {} chunks: {} initial syllables, {} states",
			spawned,
			final_model.initials.len(),
			final_model.matrix.len()
		);
		Ok(final_model)
	}

	/// Loads a model cached next to `corpus_path`, or builds and caches it.
	///
	/// - `corpus_path` is the corpus text file; the cache is the same path
	///   with a `.bin` extension.
	/// - `key` names the settings the sequences are read with. A cache
	///   written under another key (or unreadable) is rebuilt.
	/// - `sequences` is only called when the model is built, and returns the
	///   syllable sequences together with the stem count.
	/// - Uses `postcard` for compact serialization/deserialization.
	pub fn load_or_build<P, F>(corpus_path: P, key: &str, sequences: F) -> Result<Self>
	where
		P: AsRef<Path>,
		F: FnOnce() -> Result<(Vec<Vec<String>>, usize)>,
	{
		let binary_data_path = build_output_path(&corpus_path, "bin")?;
		if binary_data_path.exists() {
			match CachedModel::load(&binary_data_path) {
				Ok(cached) if cached.key == key => {
					info!("loading cached transition model from {}", binary_data_path.display());
					return Ok(cached.model);
				}
				_ => info!("cached model {} is stale, rebuilding", binary_data_path.display()),
			}
		}

		let (sequences, stem_count) = sequences()?;
		let cached = CachedModel {
			key: key.to_owned(),
			model: Self::build_parallel(&sequences, stem_count)?,
		};
		cached.save(&binary_data_path)?;
		info!("cached transition model to {}", binary_data_path.display());
		Ok(cached.model)
	}

	/// Adds one syllable sequence to the raw counts.
	///
	/// # Behavior
	/// - Empty syllables are dropped before anything else.
	/// - Sequences left with fewer than two syllables are ignored.
	/// - The first syllable gains one initial occurrence.
	/// - Every adjacent pair `(b, n)` gains one transition occurrence.
	pub fn add_sequence<S: AsRef<str>>(&mut self, sequence: &[S]) {
		let syllables: Vec<&str> = sequence
			.iter()
			.map(AsRef::as_ref)
			.filter(|s| !s.is_empty())
			.collect();
		if syllables.len() < 2 {
			return;
		}

		self.initials.add(syllables[0], 1.0);
		for pair in syllables.windows(2) {
			self.matrix.observe(pair[0], pair[1], 1.0);
		}
	}

	/// Turns raw counts into sampling weights.
	///
	/// Initial counts are divided by `stem_count`, matrix cells by the number
	/// of distinct syllables. Calling it twice has no further effect.
	pub fn finalize(&mut self, stem_count: usize) {
		if self.finalized {
			return;
		}
		self.initials.scale(stem_count as f64);
		self.matrix.normalize();
		self.stem_count = stem_count;
		self.finalized = true;
	}

	/// Merges the raw counts of another model into this one.
	///
	/// # Errors
	/// Returns `JabberError::Finalized` if either model has been finalized:
	/// scaled weights cannot be summed meaningfully.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.finalized || other.finalized {
			return Err(JabberError::Finalized);
		}
		self.initials.merge(&other.initials);
		self.matrix.merge(&other.matrix);
		Ok(())
	}

	pub fn initial_weights(&self) -> &InitialWeights {
		&self.initials
	}

	pub fn matrix(&self) -> &TransitionMatrix {
		&self.matrix
	}

	pub fn stem_count(&self) -> usize {
		self.stem_count
	}

	pub fn is_finalized(&self) -> bool {
		self.finalized
	}

	/// Returns `true` if nothing can be sampled from this model.
	pub fn is_empty(&self) -> bool {
		self.initials.is_empty() || self.matrix.is_empty()
	}
}

/// Cache file content: a model and the key of the settings it was built with.
#[derive(Serialize, Deserialize, Debug)]
struct CachedModel {
	key: String,
	model: TransitionModel,
}

impl CachedModel {
	fn load(path: &Path) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		Ok(postcard::from_bytes(&bytes)?)
	}

	fn save(&self, path: &Path) -> Result<()> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(path, bytes)?;
		Ok(())
	}
}
