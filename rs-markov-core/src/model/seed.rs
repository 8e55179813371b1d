use std::fmt;
use std::str::FromStr;

use crate::error::ChainError;

use super::prefix::Prefix;

/// Caller-supplied starting prefix.
///
/// A seed prefix is checked against the source text while the chain is built,
/// then used as the first words of the generated text and as the initial
/// window of the walk.
///
/// # Invariants
/// - Holds at least one word
/// - Words never contain whitespace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPrefix {
	words: Vec<String>,
}

impl SeedPrefix {
	/// Splits `text` on whitespace.
	///
	/// Returns `None` when `text` holds no word at all: a blank seed means
	/// "no seed" and disables the presence check.
	pub fn parse(text: &str) -> Option<Self> {
		let words: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
		if words.is_empty() {
			None
		} else {
			Some(Self { words })
		}
	}

	/// Seed words, in order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Number of words in the seed.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Chain key of the seed (words joined by a single space).
	pub fn key(&self) -> String {
		self.words.join(" ")
	}

	/// Window initialised with the seed words.
	pub(crate) fn to_prefix(&self) -> Prefix {
		Prefix::from_words(self.words.iter().cloned())
	}

	/// Ensures the seed fills a window of `prefix_len` slots exactly.
	///
	/// # Errors
	/// Returns `InvalidParameter` on a word count mismatch.
	pub(crate) fn check_len(&self, prefix_len: usize) -> Result<(), ChainError> {
		if self.len() != prefix_len {
			return Err(ChainError::InvalidParameter(format!(
				"seed prefix \"{}\" has {} word(s), expected {}",
				self,
				self.len(),
				prefix_len
			)));
		}
		Ok(())
	}
}

impl fmt::Display for SeedPrefix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.key())
	}
}

impl FromStr for SeedPrefix {
	type Err = ChainError;

	/// Strict variant of [`SeedPrefix::parse`]: a blank string is an error.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| ChainError::InvalidParameter("seed prefix is blank".to_owned()))
	}
}
