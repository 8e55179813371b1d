//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - A prefix chain mapping fixed-length word windows to observed successors
//! - Single-pass construction from a token stream, with seed prefix checking
//! - Random walks over the chain with an injected random source
//! - A lazy whitespace tokenizer over any buffered reader
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rs_markov_core::model::chain::Chain;
//!
//! let chain = Chain::from_reader(2, "the cat sat on the mat".as_bytes(), None).unwrap();
//! let text = chain.generate(3, None, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(text, "the cat sat");
//! ```

/// Chain model, sliding prefix window and seed prefixes.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// Lazy token producer.
pub mod io;
