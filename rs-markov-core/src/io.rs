use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Lazy whitespace tokenizer over a buffered reader.
///
/// - Reads one line at a time, never the whole stream
/// - Splits on any Unicode whitespace; runs of whitespace and line breaks
///   never produce empty tokens
/// - A read error (invalid UTF-8 included) is yielded once, then the
///   iterator is exhausted
pub struct Tokens<R> {
	reader: R,
	line: String,
	pending: VecDeque<String>,
	done: bool,
}

impl<R: BufRead> Tokens<R> {
	pub fn new(reader: R) -> Self {
		Self { reader, line: String::new(), pending: VecDeque::new(), done: false }
	}
}

impl<R: BufRead> Iterator for Tokens<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(token) = self.pending.pop_front() {
				return Some(Ok(token));
			}
			if self.done {
				return None;
			}

			self.line.clear();
			match self.reader.read_line(&mut self.line) {
				Ok(0) => self.done = true,
				Ok(_) => self.pending.extend(self.line.split_whitespace().map(str::to_owned)),
				Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
				Err(e) => {
					self.done = true;
					return Some(Err(e));
				}
			}
		}
	}
}

/// Tokenizes `reader` lazily. See [`Tokens`].
pub fn tokens<R: BufRead>(reader: R) -> Tokens<R> {
	Tokens::new(reader)
}
