//! Prefix chain model.
//!
//! - Sliding word window (`Prefix`)
//! - Successor lists (`Successors`)
//! - The chain itself (`Chain`)
//! - Caller-supplied starting prefixes (`SeedPrefix`)

/// Word-level Markov chain: build from tokens, generate text.
pub mod chain;

/// Fixed-size sliding window of the last words, rendered as a chain key.
pub mod prefix;

/// Optional starting prefix checked at build time and emitted at generation time.
pub mod seed;

/// Duplicate-preserving list of words observed after one prefix.
pub mod successors;
