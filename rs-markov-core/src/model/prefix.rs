/// Fixed-size sliding window over the last `len` words.
///
/// The same window type drives both chain construction and generation:
/// each new word is shifted in at the end while the oldest one falls off,
/// and the current content is turned into a lookup key with [`Prefix::key`].
///
/// # Invariants
/// - The number of slots is fixed at construction and never changes
/// - Blank slots hold the empty string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
	words: Box<[String]>,
}

impl Prefix {
	/// Creates a window of `len` blank slots.
	pub fn blank(len: usize) -> Self {
		Self { words: vec![String::new(); len].into_boxed_slice() }
	}

	/// Creates a window holding exactly the given words, oldest first.
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { words: words.into_iter().map(Into::into).collect() }
	}

	/// Drops the oldest word and appends `word` at the end.
	pub fn shift(&mut self, word: &str) {
		if let Some(last) = self.words.len().checked_sub(1) {
			self.words.rotate_left(1);
			self.words[last].clear();
			self.words[last].push_str(word);
		}
	}

	/// Renders the window as its chain key: slots joined by a single space.
	pub fn key(&self) -> String {
		self.words.join(" ")
	}

	/// Number of slots.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Returns `true` for a window without any slot.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Current slots, oldest first.
	pub fn words(&self) -> &[String] {
		&self.words
	}
}
