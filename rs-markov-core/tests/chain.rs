use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::error::ChainError;
use rs_markov_core::model::chain::{Chain, MAX_PREFIX_LEN, MIN_PREFIX_LEN};
use rs_markov_core::model::seed::SeedPrefix;

const SOURCE: &str = "\
It was the best of times, it was the worst of times,
it was the age of wisdom, it was the age of foolishness,
it was the epoch of belief, it was the epoch of incredulity,
it was the season of Light, it was the season of Darkness";

/// Every (window, next word) pair of the source, blank-padded like the chain does.
fn observed_pairs(prefix_len: usize) -> HashMap<String, Vec<String>> {
	let mut window = vec![String::new(); prefix_len];
	let mut pairs: HashMap<String, Vec<String>> = HashMap::new();
	for word in SOURCE.split_whitespace() {
		pairs.entry(window.join(" ")).or_default().push(word.to_owned());
		window.remove(0);
		window.push(word.to_owned());
	}
	pairs
}

#[test]
fn chain_holds_exactly_the_observed_pairs() {
	for prefix_len in MIN_PREFIX_LEN..=MAX_PREFIX_LEN {
		let chain = Chain::from_reader(prefix_len, SOURCE.as_bytes(), None).unwrap();
		let expected = observed_pairs(prefix_len);

		assert_eq!(chain.len(), expected.len());
		for (key, words) in &expected {
			assert_eq!(chain.successors(key).unwrap(), words.as_slice(), "key {key:?}");
		}
	}
}

#[test]
fn building_twice_gives_identical_chains() {
	let a = Chain::from_reader(3, SOURCE.as_bytes(), None).unwrap();
	let b = Chain::from_reader(3, SOURCE.as_bytes(), None).unwrap();
	assert_eq!(a, b);
}

#[test]
fn generated_text_only_uses_observed_transitions() {
	let prefix_len = 2;
	let chain = Chain::from_reader(prefix_len, SOURCE.as_bytes(), None).unwrap();
	let pairs = observed_pairs(prefix_len);

	for s in 0..20 {
		let text = chain.generate(200, None, &mut StdRng::seed_from_u64(s)).unwrap();
		let words: Vec<&str> = text.split(' ').collect();
		assert!(words.len() <= 200);

		let mut window = vec![""; prefix_len];
		for word in words {
			let key = window.join(" ");
			assert!(pairs[&key].iter().any(|w| w == word), "{word:?} never followed {key:?}");
			window.remove(0);
			window.push(word);
		}
	}
}

#[test]
fn seeded_generation_starts_with_the_seed() {
	let seed = SeedPrefix::parse("the season").unwrap();
	let chain = Chain::from_reader(2, SOURCE.as_bytes(), Some(&seed)).unwrap();

	for s in 0..10 {
		let text = chain.generate(30, Some(&seed), &mut StdRng::seed_from_u64(s)).unwrap();
		assert!(text.starts_with("the season of "), "{text:?}");
		assert!(text.split(' ').count() <= 30);
	}
}

#[test]
fn unknown_seed_yields_no_chain() {
	let seed = SeedPrefix::parse("the spring").unwrap();
	let result = Chain::from_reader(2, SOURCE.as_bytes(), Some(&seed));
	assert!(matches!(result, Err(ChainError::PrefixNotFound(ref key)) if key == "the spring"));
}

#[test]
fn short_source_gives_short_output() {
	let chain = Chain::from_reader(1, "just four words here".as_bytes(), None).unwrap();
	let text = chain.generate(50, None, &mut StdRng::seed_from_u64(5)).unwrap();
	assert_eq!(text, "just four words here");
}

#[test]
fn chain_dump_lists_prefixes_and_successors() {
	let chain = Chain::from_reader(1, "a b a c".as_bytes(), None).unwrap();
	let value = serde_json::to_value(&chain).unwrap();

	assert_eq!(value["prefix_len"], 1);
	assert_eq!(value["states"]["a"], serde_json::json!(["b", "c"]));
	assert_eq!(value["states"][""], serde_json::json!(["a"]));
}
