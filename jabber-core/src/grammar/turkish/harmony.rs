// Turkish vowel harmony and the adjacent-vowel filter.
//
// The rewrite table has four classes keyed on the vowels of the preceding
// syllable. It folds rounding and backness together: the o/u class maps to
// `a` and the ö/ü class to `e`.

use super::morphology::is_vowel;

/// One row of the harmony table.
#[derive(Debug, Clone)]
pub struct HarmonyClass {
	/// Vowels that select this class when found in the preceding syllable.
	pub triggers: &'static [char],
	/// Vowels of the following syllable rewritten by this class.
	pub foreign: &'static [char],
	/// Replacement for every foreign vowel.
	pub target: char,
}

/// Harmony classes, checked in order; the first class triggered wins.
pub const HARMONY_CLASSES: [HarmonyClass; 4] = [
	HarmonyClass {
		triggers: &['a', 'ı'],
		foreign: &['e', 'i', 'o', 'u', 'ö', 'ü'],
		target: 'a',
	},
	HarmonyClass {
		triggers: &['e', 'i'],
		foreign: &['a', 'ı', 'o', 'u', 'ö', 'ü'],
		target: 'e',
	},
	HarmonyClass {
		triggers: &['o', 'u'],
		foreign: &['e', 'i', 'ı', 'o', 'ö', 'ü'],
		target: 'a',
	},
	HarmonyClass {
		triggers: &['ö', 'ü'],
		foreign: &['a', 'i', 'ı', 'o', 'ö', 'u'],
		target: 'e',
	},
];

/// Rewrites `syllable` to harmonize with `previous`.
///
/// Syllables following a vowelless one are returned unchanged.
pub fn harmonize(previous: &str, syllable: &str) -> String {
	let class = HARMONY_CLASSES
		.iter()
		.find(|class| previous.chars().any(|c| class.triggers.contains(&c)));

	match class {
		Some(class) => syllable
			.chars()
			.map(|c| if class.foreign.contains(&c) { class.target } else { c })
			.collect(),
		None => syllable.to_owned(),
	}
}

/// Harmonizes every syllable with the one before it, left to right.
///
/// Each syllable is compared with its predecessor *after* the predecessor
/// itself was rewritten.
pub fn apply_vowel_harmony(syllables: &mut [String]) {
	for i in 1..syllables.len() {
		let harmonized = harmonize(&syllables[i - 1], &syllables[i]);
		syllables[i] = harmonized;
	}
}

/// Returns `true` if two vowels stand next to each other anywhere in `word`.
pub fn has_adjacent_vowels(word: &str) -> bool {
	let chars: Vec<char> = word.chars().collect();
	chars.windows(2).any(|pair| is_vowel(pair[0]) && is_vowel(pair[1]))
}
