use super::role::{Constituents, Role};

/// One permitted linear order of the five roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentenceTemplate {
	order: [Role; 5],
}

impl SentenceTemplate {
	pub const fn new(order: [Role; 5]) -> Self {
		Self { order }
	}

	pub fn order(&self) -> &[Role; 5] {
		&self.order
	}

	/// Joins the constituents in template order with single spaces, ends the
	/// sentence with a period and a newline, and capitalizes its first letter.
	pub fn render(&self, constituents: &Constituents<'_>) -> String {
		let words: Vec<&str> = self.order.iter().map(|role| constituents.get(*role)).collect();
		capitalize(&format!("{}.\n", words.join(" ")))
	}
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}
