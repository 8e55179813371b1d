use thiserror::Error;

/// Errors raised while building a chain or asking it for text.
///
/// Generation itself never fails on missing data: a walk that reaches a
/// prefix without successors simply stops. Only bad parameters, an unknown
/// seed prefix, or a failing input stream end up here.
#[derive(Error, Debug)]
pub enum ChainError {
	/// The seed prefix was never seen as a complete window in the source text.
	#[error("prefix not found in source text: \"{0}\"")]
	PrefixNotFound(String),

	/// A length, word count, or seed prefix was out of range.
	#[error("invalid parameter: {0}")]
	InvalidParameter(String),

	/// The token stream could not be read.
	#[error("failed to read input: {0}")]
	Io(#[from] std::io::Error),
}
