use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::state::State;

/// Growable square matrix of syllable-to-syllable transition weights.
///
/// Rows are kept in the order syllables were first discovered, and each row
/// has one column per known syllable in that same order. The syllable at row
/// `i` is therefore also the syllable at column `i`.
///
/// # Responsibilities
/// - Register syllables, widening every existing row by one zero column
/// - Count observed adjacencies `b -> n`
/// - Normalize all cells by the vocabulary size
///
/// # Invariants
/// - Every row has exactly `len()` weights (squareness)
/// - The matrix never shrinks
/// - `index` maps each syllable to its row, and nothing else
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TransitionMatrix {
	/// Rows in discovery order.
	states: Vec<State>,

	/// Lookup from syllable to row position. Never iterated.
	index: HashMap<String, usize>,
}

impl TransitionMatrix {
	/// Creates an empty matrix.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of distinct syllables registered.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Returns `true` if no syllable has been registered.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Position of `syllable` in the matrix, if known.
	pub fn position(&self, syllable: &str) -> Option<usize> {
		self.index.get(syllable).copied()
	}

	/// Syllable stored at `position`.
	pub fn syllable(&self, position: usize) -> Option<&str> {
		self.states.get(position).map(State::key)
	}

	/// Transition row of `syllable`, if known.
	pub fn row(&self, syllable: &str) -> Option<&State> {
		self.position(syllable).and_then(|i| self.states.get(i))
	}

	/// Rows in discovery order.
	pub fn states(&self) -> &[State] {
		&self.states
	}

	/// Registers `syllable` and returns its position.
	///
	/// A new syllable appends one zero column to every existing row and gets
	/// a full-length zero row of its own. Known syllables are left untouched.
	pub fn insert(&mut self, syllable: &str) -> usize {
		if let Some(position) = self.position(syllable) {
			return position;
		}

		for state in &mut self.states {
			state.widen();
		}
		let position = self.states.len();
		self.states.push(State::new(syllable, position + 1));
		self.index.insert(syllable.to_owned(), position);
		position
	}

	/// Records `amount` occurrences of `next` following `previous`.
	///
	/// Both syllables are registered first if needed, `previous` before
	/// `next`.
	pub fn observe(&mut self, previous: &str, next: &str, amount: f64) {
		let from = self.insert(previous);
		let to = self.insert(next);
		self.states[from].add_transition(to, amount);
	}

	/// Divides every cell by the number of known syllables.
	///
	/// This is a vocabulary-size scaling, not a per-row normalization: rows do
	/// not sum to 1 afterwards.
	pub(crate) fn normalize(&mut self) {
		let vocabulary = self.states.len() as f64;
		if vocabulary == 0.0 {
			return;
		}
		for state in &mut self.states {
			state.scale(vocabulary);
		}
	}

	/// Adds the raw counts of `other` into this matrix.
	///
	/// Syllables unknown to `self` are registered in `other`'s discovery
	/// order, so merging the partial matrices of consecutive corpus slices in
	/// slice order gives the same layout as learning the whole corpus at once.
	pub(crate) fn merge(&mut self, other: &Self) {
		let remap: Vec<usize> = other
			.states
			.iter()
			.map(|state| self.insert(state.key()))
			.collect();

		for (from, state) in remap.iter().zip(&other.states) {
			for (to, weight) in state.weights().iter().enumerate() {
				if *weight != 0.0 {
					self.states[*from].add_transition(remap[to], *weight);
				}
			}
		}
	}
}
