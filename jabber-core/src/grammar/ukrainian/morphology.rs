// Ukrainian suffix classification and inflection.
//
// A normalized pseudoword's ending decides its word class. Nouns serve as
// subjects and, once put in the accusative, as objects. Infinitives become
// past-tense predicates in three genders; adjectives become attributes in
// two genders.

/// Noun-deriving suffixes.
pub const NOUN_SUFFIXES: &[&str] = &[
	"ик", "ник", "івник", "льник", "иво", "аль", "ень", "ець", "ість", "тель", "иця", "иня", "ння",
	"іння", "ання", "яння", "ення", "иння", "еня", "ечок", "ечка", "ечко", "ичок", "ичка", "енко",
	"исько", "ище", "івка", "овка", "ок", "ир", "ист", "изм", "ір", "іст", "ізм",
];

/// Markers of invariant adverbials.
pub const ADVERBIAL_MARKERS: &[&str] = &["-таки", "-то", "но", "ацька"];

pub const INFINITIVE_MARKER: &str = "ти";
pub const ADJECTIVAL_MARKER: &str = "ий";

/// Past-tense endings replacing the infinitive marker: masculine, feminine, neuter.
pub const PREDICATE_ENDINGS: &[&str] = &["в", "ла", "ло"];

/// Accusative adjective endings replacing the adjectival marker: feminine, masculine/neuter.
pub const ATTRIBUTE_ENDINGS: &[&str] = &["ої", "ого"];

/// Word class read off a pseudoword's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
	Noun,
	Adverbial,
	Infinitive,
	Adjective,
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
	suffixes.iter().any(|suffix| word.ends_with(suffix))
}

/// Classifies `word`, testing the suffix families in priority order:
/// noun, adverbial, infinitive, adjective.
///
/// Returns `None` when no family matches; such words are dropped.
pub fn classify(word: &str) -> Option<WordClass> {
	if ends_with_any(word, NOUN_SUFFIXES) {
		Some(WordClass::Noun)
	} else if ends_with_any(word, ADVERBIAL_MARKERS) {
		Some(WordClass::Adverbial)
	} else if word.ends_with(INFINITIVE_MARKER) {
		Some(WordClass::Infinitive)
	} else if word.ends_with(ADJECTIVAL_MARKER) {
		Some(WordClass::Adjective)
	} else {
		None
	}
}

/// Replaces `marker` at the end of `word` by each of `endings`.
///
/// Returns nothing if `word` does not end with `marker`.
pub fn inflect_ending(word: &str, marker: &str, endings: &[&str]) -> Vec<String> {
	match word.strip_suffix(marker) {
		Some(stem) => endings.iter().map(|ending| format!("{stem}{ending}")).collect(),
		None => Vec::new(),
	}
}

/// Past-tense forms of an infinitive, one per gender.
pub fn predicate_forms(infinitive: &str) -> Vec<String> {
	inflect_ending(infinitive, INFINITIVE_MARKER, PREDICATE_ENDINGS)
}

/// Accusative forms of an adjective, one per gender.
pub fn attribute_forms(adjective: &str) -> Vec<String> {
	inflect_ending(adjective, ADJECTIVAL_MARKER, ATTRIBUTE_ENDINGS)
}

/// Nouns sharing an accusative inflection.
#[derive(Debug, Clone)]
pub struct ObjectGroup {
	pub label: &'static str,
	pub suffixes: &'static [&'static str],
	pub inflection: &'static str,
}

/// Accusative groups, checked in order; the first match wins.
pub const OBJECT_GROUPS: [ObjectGroup; 6] = [
	ObjectGroup {
		label: "masculine, hard stem",
		suffixes: &["ик", "ник", "івник", "льник", "ок", "ир", "ист", "изм", "ір", "іст", "ізм"],
		inflection: "а",
	},
	ObjectGroup {
		label: "masculine, soft stem",
		suffixes: &["аль", "ень", "тель", "ець"],
		inflection: "я",
	},
	ObjectGroup {
		label: "feminine, soft stem",
		suffixes: &["иця", "иня", "ння", "іння", "ання", "яння", "иння"],
		inflection: "і",
	},
	ObjectGroup {
		label: "feminine, hard stem",
		suffixes: &["ичка", "івка", "овка"],
		inflection: "и",
	},
	ObjectGroup {
		label: "feminine diminutive",
		suffixes: &["ечка"],
		inflection: "и",
	},
	ObjectGroup {
		label: "neuter",
		suffixes: &["иво", "ечко", "енко", "исько", "ище"],
		inflection: "а",
	},
];

/// Final letters that take the inflection as an extra letter.
const APPENDING_FINALS: &[char] = &['м', 'р', 'к', 'т'];

/// Final letters the inflection replaces.
const REPLACED_FINALS: &[char] = &['ь', 'я', 'а', 'о', 'е'];

/// Accusative form of a noun.
///
/// Returns `None` for nouns outside every `OBJECT_GROUPS` entry; they never
/// become objects.
pub fn accusative(noun: &str) -> Option<String> {
	let group = OBJECT_GROUPS
		.iter()
		.find(|group| ends_with_any(noun, group.suffixes))?;
	let last = noun.chars().last()?;

	let form = if APPENDING_FINALS.contains(&last) {
		format!("{noun}{}", group.inflection)
	} else if REPLACED_FINALS.contains(&last) {
		let stem = &noun[..noun.len() - last.len_utf8()];
		format!("{stem}{}", group.inflection)
	} else {
		noun.to_owned()
	};
	Some(form)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_suffix_families_are_prioritized() {
		assert_eq!(classify("бурник"), Some(WordClass::Noun));
		assert_eq!(classify("кало-таки"), Some(WordClass::Adverbial));
		assert_eq!(classify("мирно"), Some(WordClass::Adverbial));
		assert_eq!(classify("лопати"), Some(WordClass::Infinitive));
		assert_eq!(classify("сивий"), Some(WordClass::Adjective));
		assert_eq!(classify("гарцька"), None);
		assert_eq!(classify("пекенько"), None);
	}

	#[test]
	fn test_noun_suffix_shadows_other_families() {
		// "ення" is a noun suffix even though the word also ends in "я"
		assert_eq!(classify("лисення"), Some(WordClass::Noun));
	}

	#[test]
	fn test_predicate_forms() {
		assert_eq!(predicate_forms("лопати"), vec!["лопав", "лопала", "лопало"]);
		// only the final marker is replaced
		assert_eq!(predicate_forms("тилтіти"), vec!["тилтів", "тилтіла", "тилтіло"]);
		assert!(predicate_forms("сивий").is_empty());
	}

	#[test]
	fn test_attribute_forms() {
		assert_eq!(attribute_forms("сивий"), vec!["сивої", "сивого"]);
		assert_eq!(attribute_forms("кийрий"), vec!["кийрої", "кийрого"]);
	}

	#[test]
	fn test_accusative_appends_after_hard_consonant() {
		assert_eq!(accusative("бурник").as_deref(), Some("бурника"));
		assert_eq!(accusative("мовизм").as_deref(), Some("мовизма"));
		assert_eq!(accusative("тапір").as_deref(), Some("тапіра"));
		// "-ечок" falls in the hard group through its "-ок"
		assert_eq!(accusative("котечок").as_deref(), Some("котечока"));
	}

	#[test]
	fn test_accusative_replaces_soft_or_vowel_final() {
		assert_eq!(accusative("кописець").as_deref(), Some("кописеця"));
		assert_eq!(accusative("ралання").as_deref(), Some("раланні"));
		assert_eq!(accusative("мурівка").as_deref(), Some("мурівки"));
		assert_eq!(accusative("лисечка").as_deref(), Some("лисечки"));
		assert_eq!(accusative("пекиво").as_deref(), Some("пекива"));
		assert_eq!(accusative("горище").as_deref(), Some("горища"));
	}

	#[test]
	fn test_accusative_skips_nouns_outside_the_groups() {
		assert_eq!(accusative("радість"), None);
		assert_eq!(accusative("кошеня"), None);
	}
}
