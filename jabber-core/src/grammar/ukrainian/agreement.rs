// Gender agreement between subject and predicate, and between object and
// attribute.
//
// The controller's final letter selects the ending the dependent form must
// carry. Dependent forms are redrawn until one carries it, within a bounded
// number of retries.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Outcome of an agreement redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement<'a> {
	/// A form carrying the required ending.
	Matched(&'a str),
	/// No form carrying the required ending was drawn.
	Exhausted,
}

/// Predicate ending required by `subject`, if any.
///
/// - `о`, `е` (neuter): `ло`
/// - `а`, `я`, `ь` (feminine): `ла`
/// - `к`, `м`, `с`, `т`, `р` (masculine): `в`
pub fn predicate_pattern(subject: &str) -> Option<&'static str> {
	match subject.chars().last()? {
		'о' | 'е' => Some("ло"),
		'а' | 'я' | 'ь' => Some("ла"),
		'к' | 'м' | 'с' | 'т' | 'р' => Some("в"),
		_ => None,
	}
}

/// Attribute ending required by `object`, if any.
///
/// - `и`, `і` (feminine): `ої`
/// - `а`, `я` (masculine, neuter): `ого`
pub fn attribute_pattern(object: &str) -> Option<&'static str> {
	match object.chars().last()? {
		'и' | 'і' => Some("ої"),
		'а' | 'я' => Some("ого"),
		_ => None,
	}
}

/// Keeps `current` if it ends with `pattern`, otherwise redraws from `forms`
/// up to `retries` times.
///
/// Returns `Agreement::Exhausted` straight away when no form in `forms` ends
/// with `pattern`.
pub fn agree<'a, R: Rng + ?Sized>(
	current: &'a str,
	forms: &'a [String],
	pattern: &str,
	retries: usize,
	rng: &mut R,
) -> Agreement<'a> {
	if current.ends_with(pattern) {
		return Agreement::Matched(current);
	}
	if !forms.iter().any(|form| form.ends_with(pattern)) {
		return Agreement::Exhausted;
	}

	for _ in 0..retries {
		match forms.choose(rng) {
			Some(form) if form.ends_with(pattern) => return Agreement::Matched(form),
			Some(_) => {}
			None => break,
		}
	}
	Agreement::Exhausted
}
