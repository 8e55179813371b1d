use rand::Rng;

use serde::Serialize;

/// Words observed right after one prefix of the chain.
///
/// A `Successors` list is the outgoing side of a single Markov state. Words
/// are kept in observation order and duplicates are kept too, so a word that
/// followed the prefix three times is stored three times. Picking uniformly
/// over the stored list is therefore a frequency-weighted pick over the
/// distinct words, without any explicit probability table.
///
/// ## Invariants
/// - Only words that actually followed the prefix are recorded
/// - The list only grows while the chain is being built
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Successors {
	/// Observed words, in the order they were seen.
	/// Example: ["sat", "ran", "sat"]
	words: Vec<String>,
}

impl Successors {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one more occurrence of `word` after the prefix.
	pub fn add(&mut self, word: String) {
		self.words.push(word);
	}

	/// Picks a successor uniformly over the stored (duplicate-preserving) list.
	///
	/// Returns `None` if nothing was recorded.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.words.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.words.len());
		self.words.get(index).map(String::as_str)
	}

	/// Recorded words, in observation order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Number of recorded occurrences.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}
