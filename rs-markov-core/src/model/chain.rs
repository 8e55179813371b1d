use std::collections::HashMap;
use std::io::BufRead;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::error::ChainError;
use crate::io;

use super::prefix::Prefix;
use super::seed::SeedPrefix;
use super::successors::Successors;

/// Smallest accepted prefix length.
pub const MIN_PREFIX_LEN: usize = 1;
/// Largest accepted prefix length.
pub const MAX_PREFIX_LEN: usize = 5;
/// Smallest accepted word budget for [`Chain::generate`].
pub const MIN_WORDS: usize = 1;
/// Largest accepted word budget for [`Chain::generate`].
pub const MAX_WORDS: usize = 10_000;

/// Word-level Markov chain keyed by fixed-length prefixes.
///
/// The `Chain` maps every window of `prefix_len` consecutive words seen in the
/// source text to the words that followed it. Generation walks this map from a
/// blank window (or a seed prefix), picking a successor uniformly at random
/// over the stored list at each step.
///
/// # Responsibilities
/// - Build the whole model in a single pass over a token stream
/// - Check that a seed prefix occurs in the source during that same pass
/// - Generate text of at most `max_words` words from an injected random source
///
/// # Invariants
/// - `prefix_len` is in `MIN_PREFIX_LEN..=MAX_PREFIX_LEN`
/// - Every key is made of exactly `prefix_len` slots; the leading windows
///   of the source keep blank slots for words not seen yet
/// - Every successor recorded for a key directly followed that key in the source
/// - A chain is never modified once built
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Chain {
	/// Number of words in a prefix.
	prefix_len: usize,

	/// Mapping from a prefix key to the words observed after it.
	states: HashMap<String, Successors>,
}

impl Chain {
	/// Creates an empty chain for prefixes of `prefix_len` words.
	///
	/// # Errors
	/// Returns `InvalidParameter` if `prefix_len` is outside `1..=5`.
	pub fn new(prefix_len: usize) -> Result<Self, ChainError> {
		check_range("prefix length", prefix_len, MIN_PREFIX_LEN, MAX_PREFIX_LEN)?;
		Ok(Self { prefix_len, states: HashMap::new() })
	}

	/// Builds a chain from an in-memory token sequence.
	///
	/// When `seed` is given, it must appear somewhere in the source as a
	/// complete window followed by at least one more word.
	///
	/// # Errors
	/// - `InvalidParameter` if `prefix_len` is out of range or the seed
	///   does not have exactly `prefix_len` words
	/// - `PrefixNotFound` if the seed never appears
	pub fn build<I>(prefix_len: usize, tokens: I, seed: Option<&SeedPrefix>) -> Result<Self, ChainError>
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self::try_build(prefix_len, tokens.into_iter().map(Ok::<_, ChainError>), seed)
	}

	/// Builds a chain from a reader, tokenized lazily on whitespace.
	///
	/// # Errors
	/// Same as [`Chain::build`], plus `Io` if reading fails.
	pub fn from_reader<R: BufRead>(prefix_len: usize, reader: R, seed: Option<&SeedPrefix>) -> Result<Self, ChainError> {
		Self::try_build(prefix_len, io::tokens(reader), seed)
	}

	/// Single pass over the tokens: records successors and looks for the seed.
	fn try_build<I, S, E>(prefix_len: usize, tokens: I, seed: Option<&SeedPrefix>) -> Result<Self, ChainError>
	where
		I: IntoIterator<Item = Result<S, E>>,
		S: Into<String>,
		ChainError: From<E>,
	{
		let mut chain = Self::new(prefix_len)?;
		if let Some(seed) = seed {
			seed.check_len(prefix_len)?;
		}

		let seed_key = seed.map(SeedPrefix::key);
		let mut found = false;
		let mut window = Prefix::blank(prefix_len);
		let mut token_count = 0usize;

		for token in tokens {
			let word: String = token?.into();
			let key = window.key();

			if seed_key.as_deref() == Some(key.as_str()) {
				found = true;
			}

			window.shift(&word);
			chain.states.entry(key).or_default().add(word);
			token_count += 1;
		}

		debug!("built chain: {} tokens, {} prefixes (prefix length {})", token_count, chain.states.len(), prefix_len);

		match seed_key {
			Some(key) if !found => Err(ChainError::PrefixNotFound(key)),
			_ => Ok(chain),
		}
	}

	/// Generates up to `max_words` words by walking the chain.
	///
	/// - With a seed, the output starts with the seed words verbatim and the
	///   walk continues from them.
	/// - Without a seed, the walk starts from a blank window, i.e. from the
	///   beginning of the source text.
	/// - The walk stops early when the current window has no successors;
	///   this is not an error and only shortens the output.
	///
	/// # Errors
	/// Returns `InvalidParameter` if `max_words` is outside `1..=10000`, or the
	/// seed does not have exactly `prefix_len` words, or the seed is longer
	/// than `max_words`.
	pub fn generate<R: Rng + ?Sized>(&self, max_words: usize, seed: Option<&SeedPrefix>, rng: &mut R) -> Result<String, ChainError> {
		check_range("word count", max_words, MIN_WORDS, MAX_WORDS)?;

		let (mut window, mut words) = match seed {
			Some(seed) => {
				seed.check_len(self.prefix_len)?;
				if seed.len() > max_words {
					return Err(ChainError::InvalidParameter(format!(
						"seed prefix \"{}\" is longer than the {} requested word(s)",
						seed, max_words
					)));
				}
				(seed.to_prefix(), seed.words().to_vec())
			}
			None => (Prefix::blank(self.prefix_len), Vec::with_capacity(max_words)),
		};

		while words.len() < max_words {
			let Some(next) = self.states.get(&window.key()).and_then(|s| s.pick(rng)) else {
				break;
			};
			window.shift(next);
			words.push(next.to_owned());
		}

		debug!("generated {} of {} requested words", words.len(), max_words);
		Ok(words.join(" "))
	}

	/// Number of words in a prefix.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Number of distinct prefixes recorded.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Returns `true` if nothing was recorded (empty source).
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Words observed after `key`, in observation order, duplicates included.
	pub fn successors(&self, key: &str) -> Option<&[String]> {
		self.states.get(key).map(Successors::words)
	}

	/// Iterates over every recorded prefix key, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.states.keys().map(String::as_str)
	}

	/// Returns `true` if generation can continue after `seed`.
	pub fn contains_prefix(&self, seed: &SeedPrefix) -> bool {
		self.states.contains_key(&seed.key())
	}
}

fn check_range(name: &str, value: usize, min: usize, max: usize) -> Result<(), ChainError> {
	if !(min..=max).contains(&value) {
		return Err(ChainError::InvalidParameter(format!(
			"{} must be between {} and {}, got {}",
			name, min, max, value
		)));
	}
	Ok(())
}
