use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use jabber_core::corpus::SyllableSource;
use jabber_core::grammar::role::Role;
use jabber_core::grammar::ukrainian::{self, agreement};
use jabber_core::model::transition_model::TransitionModel;
use jabber_core::{GeneratorConfig, Grammar, Jabberwocky};

/// Every ordered pair of eight CV syllables sharing the vowel `a`.
fn turkish_corpus() -> Vec<Vec<String>> {
	let syllables = ["ka", "ta", "ma", "la", "na", "sa", "ba", "da"];
	let mut corpus = Vec::new();
	for first in syllables {
		for second in syllables {
			corpus.push(vec![first.to_owned(), second.to_owned()]);
		}
	}
	corpus
}

/// Two-syllable stems built from 360 distinct CVC syllables.
fn ukrainian_corpus() -> Vec<Vec<String>> {
	let onsets = ["б", "в", "д", "к", "л", "м", "п", "р", "с", "т"];
	let vowels = ["а", "о", "и", "е", "у", "і"];
	let codas = ["н", "р", "к", "т", "м", "л"];
	let syllable = |n: usize| format!("{}{}{}", onsets[n % 10], vowels[(n / 10) % 6], codas[(n / 60) % 6]);

	(0..360)
		.map(|n| vec![syllable(n), syllable((n * 37 + 11) % 360)])
		.collect()
}

fn bundled_corpus(grammar: Grammar) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("../data")
		.join(format!("{}.dat", grammar.language_name().to_lowercase()))
}

fn config(n_words: usize, n_sent: usize, seed: u64) -> GeneratorConfig {
	GeneratorConfig {
		n_words,
		n_sent,
		seed: Some(seed),
		..GeneratorConfig::default()
	}
}

#[test]
fn test_turkish_sentences() {
	let corpus = turkish_corpus();
	let mut rng = StdRng::seed_from_u64(2024);
	let sentences = Jabberwocky::run(Grammar::Turkish, &corpus, corpus.len(), config(60, 25, 2024), &mut rng).unwrap();

	assert_eq!(sentences.len(), 25);
	for sentence in &sentences {
		assert!(sentence.ends_with(".\n"), "{sentence:?}");
		assert!(sentence.chars().next().is_some_and(char::is_uppercase));

		let body = sentence.trim_end_matches(".\n");
		let words: Vec<&str> = body.split(' ').collect();
		assert_eq!(words.len(), 5, "{sentence:?}");
		// both orders are verb-final
		assert!(words[4].ends_with("dı"), "{sentence:?}");
		assert_eq!(words[1..4].iter().filter(|w| w.ends_with("yı")).count(), 1, "{sentence:?}");
		assert_eq!(words[1..4].iter().filter(|w| w.ends_with("ca")).count(), 1, "{sentence:?}");
	}
}

#[test]
fn test_turkish_pseudowords_are_unique_and_harmonic() {
	let corpus = turkish_corpus();
	let generator = Jabberwocky::from_sequences(Grammar::Turkish, &corpus, corpus.len(), config(60, 1, 3)).unwrap();
	let mut rng = generator.rng();
	let words = generator.pseudowords(&mut rng).unwrap();

	assert_eq!(words.len(), 60);
	let mut sorted = words.clone();
	sorted.sort();
	sorted.dedup();
	assert_eq!(sorted.len(), 60);
	for word in &words {
		assert_eq!(word.chars().count(), 8, "{word}");
		assert!(word.chars().filter(|c| "eıioöuü".contains(*c)).count() == 0, "{word}");
	}
}

#[test]
fn test_same_seed_same_sentences() {
	let corpus = turkish_corpus();
	let first = Jabberwocky::run(
		Grammar::Turkish,
		&corpus,
		corpus.len(),
		config(60, 10, 99),
		&mut StdRng::seed_from_u64(99),
	)
	.unwrap();
	let second = Jabberwocky::run(
		Grammar::Turkish,
		&corpus,
		corpus.len(),
		config(60, 10, 99),
		&mut StdRng::seed_from_u64(99),
	)
	.unwrap();
	assert_eq!(first, second);
}

#[test]
fn test_ukrainian_agreement_over_a_thousand_sentences() {
	let corpus = ukrainian_corpus();
	let generator = Jabberwocky::from_sequences(Grammar::Ukrainian, &corpus, corpus.len(), config(600, 1000, 7)).unwrap();
	let mut rng = StdRng::seed_from_u64(7);

	let words = generator.pseudowords(&mut rng).unwrap();
	let roles = generator.role_map(&words, &mut rng);
	for role in Role::ALL {
		assert!(!roles.get(role).is_empty(), "no {role} forms");
	}

	for _ in 0..1000 {
		let drawn = ukrainian::draw_constituents(&roles, &mut rng, 10_000).unwrap();
		let predicate = agreement::predicate_pattern(drawn.subject).unwrap();
		assert!(drawn.predicate.ends_with(predicate), "{} {}", drawn.subject, drawn.predicate);
		let attribute = agreement::attribute_pattern(drawn.object).unwrap();
		assert!(drawn.attribute.ends_with(attribute), "{} {}", drawn.object, drawn.attribute);
	}
}

#[test]
fn test_ukrainian_sentences() {
	let corpus = ukrainian_corpus();
	let mut rng = StdRng::seed_from_u64(11);
	let sentences = Jabberwocky::run(Grammar::Ukrainian, &corpus, corpus.len(), config(600, 1000, 11), &mut rng).unwrap();

	assert_eq!(sentences.len(), 1000);
	for sentence in &sentences {
		assert!(sentence.ends_with(".\n"), "{sentence:?}");
		assert!(sentence.chars().next().is_some_and(char::is_uppercase));
		assert_eq!(sentence.split_whitespace().count(), 5, "{sentence:?}");
		// exactly one past-tense predicate per sentence
		let predicates = sentence
			.trim_end_matches(".\n")
			.split(' ')
			.filter(|w| w.ends_with('в') || w.ends_with("ла") || w.ends_with("ло"))
			.count();
		assert!(predicates >= 1, "{sentence:?}");
	}
}

#[test]
fn test_model_cache_round_trip() {
	let dir = std::env::temp_dir().join(format!("jabber-cache-{}", std::process::id()));
	fs::create_dir_all(&dir).unwrap();
	let corpus_path = dir.join("turkish.dat");
	let lines: Vec<String> = turkish_corpus().iter().map(|s| s.join(" ")).collect();
	fs::write(&corpus_path, lines.join("\n")).unwrap();

	let source = SyllableSource::pre_segmented(Grammar::Turkish, 50_000);
	let key = source.cache_key();
	let built = TransitionModel::load_or_build(&corpus_path, &key, || source.read(&corpus_path)).unwrap();
	assert!(dir.join("turkish.bin").exists());

	let cached = TransitionModel::load_or_build(&corpus_path, &key, || panic!("the cache must be used")).unwrap();
	assert_eq!(built.matrix().states(), cached.matrix().states());
	assert_eq!(built.stem_count(), 64);

	// other settings over the same file rebuild the cache
	let limited = SyllableSource::pre_segmented(Grammar::Turkish, 10);
	let rebuilt = TransitionModel::load_or_build(&corpus_path, &limited.cache_key(), || limited.read(&corpus_path)).unwrap();
	assert_eq!(rebuilt.stem_count(), 10);
	let reloaded = TransitionModel::load_or_build(&corpus_path, &limited.cache_key(), || panic!("the cache must be used")).unwrap();
	assert_eq!(reloaded.stem_count(), 10);

	fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_bundled_corpora_meet_the_defaults() {
	for grammar in Grammar::ALL {
		let defaults = GeneratorConfig {
			seed: Some(5),
			..GeneratorConfig::default()
		};
		let source = SyllableSource::pre_segmented(grammar, defaults.corpus_limit);
		let (sequences, stem_count) = source.read(bundled_corpus(grammar)).unwrap();
		let generator = Jabberwocky::from_sequences(grammar, &sequences, stem_count, defaults).unwrap();

		let mut rng = generator.rng();
		let words = generator.pseudowords(&mut rng).unwrap();
		assert_eq!(words.len(), generator.config().n_words, "{grammar}");

		let sentences = generator.generate(&mut generator.rng()).unwrap();
		assert_eq!(sentences.len(), generator.config().n_sent, "{grammar}");
	}
}
