//! Skills a current role is already known to cover.
//!
//! The backend marks overlap itself in its hub-style payloads; this table is
//! the client-side fallback used for "already have" styling.

use std::collections::{HashMap, HashSet};

/// Skill names held per role title.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
	by_role: HashMap<String, HashSet<String>>,
}

impl SkillCatalog {
	/// Build from `(role, skills)` pairs. A repeated role keeps its last entry.
	pub fn from_pairs<I, R, K>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (R, Vec<K>)>,
		R: Into<String>,
		K: Into<String>,
	{
		Self {
			by_role: pairs
				.into_iter()
				.map(|(role, skills)| (role.into(), skills.into_iter().map(Into::into).collect()))
				.collect(),
		}
	}

	/// Built-in table for the demo roles.
	pub fn sample() -> Self {
		Self::from_pairs([
			(
				"Software Developers",
				vec![
					"Describe the Visual Elements of Design",
					"Employ Digital Visual Tools",
					"Apply Visual Design Principles",
					"Create Storyboards with Technology",
				],
			),
			(
				"Computer Systems Analysts",
				vec![
					"Describe the Visual Elements of Design",
					"Instructional Design and Technology Application",
					"Design Curriculum within Technology Requirements",
				],
			),
			(
				"Financial Analysts",
				vec![
					"Describe the Visual Elements of Design",
					"Apply Visual Design Principles",
				],
			),
			("Data Scientists", vec![]),
		])
	}

	/// Owned skills for `role`; empty for unknown roles.
	pub fn owned_skills(&self, role: &str) -> HashSet<String> {
		self.by_role.get(role.trim()).cloned().unwrap_or_default()
	}
}
