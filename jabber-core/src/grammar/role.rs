use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{JabberError, Result};

/// Syntactic role a pseudoword can fill in a sentence.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
	Subject,
	Predicate,
	Attribute,
	Object,
	AdverbialModifier,
}

impl Role {
	/// Every role, in canonical order.
	pub const ALL: [Role; 5] = [
		Role::Subject,
		Role::Predicate,
		Role::Attribute,
		Role::Object,
		Role::AdverbialModifier,
	];

	pub fn name(self) -> &'static str {
		match self {
			Role::Subject => "SUBJECT",
			Role::Predicate => "PREDICATE",
			Role::Attribute => "ATTRIBUTE",
			Role::Object => "OBJECT",
			Role::AdverbialModifier => "ADVERBIAL MODIFIER",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Word-forms available for each role.
///
/// All five roles are always present, possibly with an empty list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoleMap {
	forms: BTreeMap<Role, Vec<String>>,
}

impl Default for RoleMap {
	fn default() -> Self {
		Self {
			forms: Role::ALL.iter().map(|role| (*role, Vec::new())).collect(),
		}
	}
}

impl RoleMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, role: Role, form: String) {
		self.forms.entry(role).or_default().push(form);
	}

	pub fn extend<I: IntoIterator<Item = String>>(&mut self, role: Role, forms: I) {
		self.forms.entry(role).or_default().extend(forms);
	}

	/// Forms of `role`, in insertion order.
	pub fn get(&self, role: Role) -> &[String] {
		self.forms.get(&role).map(Vec::as_slice).unwrap_or_default()
	}

	/// Total number of forms across all roles.
	pub fn total(&self) -> usize {
		self.forms.values().map(Vec::len).sum()
	}

	/// Iterates over `(role, forms)` in canonical role order.
	pub fn iter(&self) -> impl Iterator<Item = (Role, &[String])> {
		self.forms.iter().map(|(role, forms)| (*role, forms.as_slice()))
	}

	/// Draws one form of `role` uniformly at random.
	///
	/// # Errors
	/// Returns `JabberError::EmptyRole` if the role has no forms.
	pub fn pick<R: Rng + ?Sized>(&self, role: Role, rng: &mut R) -> Result<&str> {
		self.get(role)
			.choose(rng)
			.map(String::as_str)
			.ok_or(JabberError::EmptyRole(role))
	}
}

/// One form per role, as drawn for a single sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constituents<'a> {
	pub subject: &'a str,
	pub predicate: &'a str,
	pub attribute: &'a str,
	pub object: &'a str,
	pub adverbial: &'a str,
}

impl<'a> Constituents<'a> {
	/// Draws every role independently, in canonical role order.
	pub fn draw<R: Rng + ?Sized>(roles: &'a RoleMap, rng: &mut R) -> Result<Self> {
		Ok(Self {
			subject: roles.pick(Role::Subject, rng)?,
			predicate: roles.pick(Role::Predicate, rng)?,
			attribute: roles.pick(Role::Attribute, rng)?,
			object: roles.pick(Role::Object, rng)?,
			adverbial: roles.pick(Role::AdverbialModifier, rng)?,
		})
	}

	pub fn get(&self, role: Role) -> &'a str {
		match role {
			Role::Subject => self.subject,
			Role::Predicate => self.predicate,
			Role::Attribute => self.attribute,
			Role::Object => self.object,
			Role::AdverbialModifier => self.adverbial,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_new_map_has_every_role() {
		let roles = RoleMap::new();
		assert_eq!(roles.iter().count(), 5);
		assert_eq!(roles.total(), 0);
	}

	#[test]
	fn test_pick_from_empty_role() {
		let roles = RoleMap::new();
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(
			roles.pick(Role::Object, &mut rng),
			Err(JabberError::EmptyRole(Role::Object))
		));
	}

	#[test]
	fn test_draw_constituents() {
		let mut roles = RoleMap::new();
		for role in Role::ALL {
			roles.push(role, role.name().to_lowercase());
		}
		let mut rng = StdRng::seed_from_u64(0);
		let drawn = Constituents::draw(&roles, &mut rng).unwrap();
		assert_eq!(drawn.get(Role::Subject), "subject");
		assert_eq!(drawn.get(Role::AdverbialModifier), "adverbial modifier");
	}
}
