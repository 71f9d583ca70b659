// Normalization of raw Ukrainian pre-forms into suffixed pseudowords.
//
// Pre-forms are bare concatenations of syllables. Only those ending in a
// consonant that can carry a derivational suffix survive; each of them gets
// one random suffix, then any immediately repeated chunk is collapsed.

use std::collections::HashSet;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Word-final consonants that accept a derivational suffix.
pub const SUFFIXABLE_ENDINGS: &[char] = &[
	'б', 'в', 'г', 'ґ', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц', 'ч', 'ш', 'щ',
];

/// Derivational suffixes; one is drawn uniformly per pre-form.
pub const DERIVATIONAL_SUFFIXES: &[&str] = &[
	"о-таки", "о-то", "но", "цька", "ий", "ик", "ник", "івник", "льник", "иво", "аль", "ень", "ець",
	"ість", "тель", "иця", "иня", "ння", "іння", "ання", "яння", "ення", "иння", "еня", "ечок", "ечка",
	"ечко", "ичок", "ичка", "енко", "енько", "исько", "ище", "івка", "овка", "ок", "ир", "ист", "изм",
	"ір", "іст", "ізм", "яти", "ати", "іти",
];

/// Turns raw pre-forms into normalized pseudowords.
///
/// # Behavior
/// - Pre-forms not ending in a `SUFFIXABLE_ENDINGS` consonant are dropped.
/// - Every other pre-form gets one random derivational suffix.
/// - Repeated chunks are collapsed with `collapse_repeats`.
/// - Duplicates are dropped, keeping first occurrences in input order.
pub fn normalize<R: Rng + ?Sized>(pre_forms: &[String], rng: &mut R) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut words = Vec::new();
	let mut dropped = 0;

	for pre_form in pre_forms {
		let suffixable = pre_form
			.chars()
			.last()
			.is_some_and(|last| SUFFIXABLE_ENDINGS.contains(&last));
		if !suffixable {
			dropped += 1;
			continue;
		}

		let suffix = DERIVATIONAL_SUFFIXES.choose(rng).copied().unwrap_or_default();
		let word = collapse_repeats(&format!("{pre_form}{suffix}"));
		if seen.insert(word.clone()) {
			words.push(word);
		}
	}

	debug!(
		"normalized {} pre-forms into {} words ({} not suffixable)",
		pre_forms.len(),
		words.len(),
		dropped
	);
	words
}

/// Collapses every immediately repeated chunk of `word` to a single copy.
///
/// Scanning left to right, the shortest chunk that is directly followed by a
/// copy of itself is kept once and all its consecutive copies are removed.
/// Single letters count too, so geminates collapse (`"ння"` → `"ня"`).
/// Passes repeat until nothing changes, so the result holds no adjacent
/// repeated chunk at all.
///
/// Example: `"katatata"` → `"kata"`.
pub fn collapse_repeats(word: &str) -> String {
	let mut chars: Vec<char> = word.chars().collect();
	loop {
		let collapsed = collapse_pass(&chars);
		if collapsed.len() == chars.len() {
			return chars.into_iter().collect();
		}
		chars = collapsed;
	}
}

fn collapse_pass(chars: &[char]) -> Vec<char> {
	let mut out = Vec::with_capacity(chars.len());
	let mut i = 0;

	while i < chars.len() {
		let remaining = chars.len() - i;
		let unit = (1..=remaining / 2).find(|&len| chars[i..i + len] == chars[i + len..i + 2 * len]);

		match unit {
			Some(len) => {
				let mut end = i + 2 * len;
				while end + len <= chars.len() && chars[i..i + len] == chars[end..end + len] {
					end += len;
				}
				out.extend_from_slice(&chars[i..i + len]);
				i = end;
			}
			None => {
				out.push(chars[i]);
				i += 1;
			}
		}
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	/// Returns `true` if some chunk is directly followed by a copy of itself.
	fn has_adjacent_repeat(word: &str) -> bool {
		let chars: Vec<char> = word.chars().collect();
		(0..chars.len()).any(|i| (1..=(chars.len() - i) / 2).any(|len| chars[i..i + len] == chars[i + len..i + 2 * len]))
	}

	#[test]
	fn test_collapse_injected_duplication() {
		assert_eq!(collapse_repeats("katatata"), "kata");
		assert_eq!(collapse_repeats("кампекпек"), "кампек");
		assert!(!has_adjacent_repeat(&collapse_repeats("katatata")));
	}

	#[test]
	fn test_collapse_merges_geminates() {
		assert_eq!(collapse_repeats("мовання"), "мованя");
		assert_eq!(collapse_repeats("кінник"), "кіник");
		assert_eq!(collapse_repeats("рррак"), "рак");
	}

	#[test]
	fn test_collapse_reaches_a_fixpoint() {
		// the first pass leaves "abcabc" behind, the second removes it
		assert_eq!(collapse_repeats("abcbcabc"), "abc");
		assert!(!has_adjacent_repeat(&collapse_repeats("xabcabcab")));
		assert_eq!(collapse_repeats("нононо"), "но");
	}

	#[test]
	fn test_normalize_drops_vowel_final_pre_forms() {
		let pre_forms = vec!["кало".to_string(), "мира".to_string()];
		let mut rng = StdRng::seed_from_u64(0);
		assert!(normalize(&pre_forms, &mut rng).is_empty());
	}

	#[test]
	fn test_normalize_appends_a_known_suffix() {
		// neither ж nor ґ occurs in any suffix, so nothing can collapse
		let pre_forms = vec!["бурмож".to_string(), "вирґ".to_string(), "сива".to_string()];
		let mut rng = StdRng::seed_from_u64(8);
		let words = normalize(&pre_forms, &mut rng);

		assert!(!words.is_empty() && words.len() <= 2);
		for word in &words {
			let stem = ["бурмож", "вирґ"].iter().find(|s| word.starts_with(**s));
			let stem = stem.unwrap_or_else(|| panic!("'{word}' lost its stem"));
			let suffix = &word[stem.len()..];
			assert!(
				DERIVATIONAL_SUFFIXES.iter().any(|s| collapse_repeats(s) == suffix),
				"'{word}' has no known suffix"
			);
		}
	}

	#[test]
	fn test_normalize_deduplicates() {
		let pre_forms = vec!["пек".to_string(); 200];
		let mut rng = StdRng::seed_from_u64(5);
		let words = normalize(&pre_forms, &mut rng);
		let unique: HashSet<_> = words.iter().collect();
		assert_eq!(unique.len(), words.len());
		assert!(words.len() <= DERIVATIONAL_SUFFIXES.len());
	}

	#[test]
	fn test_normalized_words_have_no_adjacent_repeats() {
		let pre_forms: Vec<String> = ["тактак", "ринрин", "пас", "мовмов", "лек"].iter().map(|s| s.to_string()).collect();
		let mut rng = StdRng::seed_from_u64(44);
		for word in normalize(&pre_forms, &mut rng) {
			assert!(!has_adjacent_repeat(&word), "'{word}' still repeats");
		}
	}
}
