// Turkish role suffixes: past tense, accusative case, adverbial "-ca/-ce".
//
// Every rule branches on the final letter of the word, and picks the suffix
// vowel by front/back harmony. Vowel-final words harmonize with their final
// vowel; consonant-final words with "contains any back vowel".

pub const VOWELS: &[char] = &['a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü'];
pub const BACK_VOWELS: &[char] = &['a', 'ı', 'o', 'u'];

/// Voiceless consonants ("fıstıkçı şahap").
pub const VOICELESS: &[char] = &['f', 's', 't', 'k', 'ç', 'ş', 'h', 'p'];

/// Final-consonant alternations before the accusative vowel.
const ACCUSATIVE_ALTERNATIONS: &[(char, char)] = &[('p', 'b'), ('ç', 'c'), ('t', 't'), ('k', 'ğ')];

pub fn is_vowel(c: char) -> bool {
	VOWELS.contains(&c)
}

pub fn is_back_vowel(c: char) -> bool {
	BACK_VOWELS.contains(&c)
}

fn contains_back_vowel(word: &str) -> bool {
	word.chars().any(is_back_vowel)
}

/// Past tense: `-dı/-di`, `-tı/-ti` after a voiceless consonant.
pub fn past_tense(word: &str) -> String {
	let suffix = match word.chars().last() {
		Some(last) if is_vowel(last) => {
			if is_back_vowel(last) { "dı" } else { "di" }
		}
		Some(last) if VOICELESS.contains(&last) => {
			if contains_back_vowel(word) { "tı" } else { "ti" }
		}
		_ => {
			if contains_back_vowel(word) { "dı" } else { "di" }
		}
	};
	format!("{word}{suffix}")
}

/// Accusative case.
///
/// - vowel-final: buffer `y` + `ı/i`
/// - final `p ç t k`: alternate to `b c t ğ`, then `ı/i`
/// - other consonants: `ı/i`
pub fn accusative(word: &str) -> String {
	let Some(last) = word.chars().last() else {
		return "i".to_owned();
	};

	if is_vowel(last) {
		let suffix = if is_back_vowel(last) { "yı" } else { "yi" };
		return format!("{word}{suffix}");
	}

	let vowel = if contains_back_vowel(word) { 'ı' } else { 'i' };
	match ACCUSATIVE_ALTERNATIONS.iter().find(|(from, _)| *from == last) {
		Some((_, to)) => {
			let stem = &word[..word.len() - last.len_utf8()];
			format!("{stem}{to}{vowel}")
		}
		None => format!("{word}{vowel}"),
	}
}

/// Adverbial `-ca/-ce`, with `ç` after a voiceless consonant.
pub fn adverbial(word: &str) -> String {
	let consonant = match word.chars().last() {
		Some(last) if VOICELESS.contains(&last) => 'ç',
		_ => 'c',
	};
	let vowel = if contains_back_vowel(word) { 'a' } else { 'e' };
	format!("{word}{consonant}{vowel}")
}
