//! Wire types returned by the pathway backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads a text field the backend may send as a string, a number or `null`.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Ok(match Value::deserialize(deserializer)? {
		Value::Null => String::new(),
		Value::String(s) => s,
		other => other.to_string(),
	})
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
	deserializer: D,
) -> Result<Option<String>, D::Error> {
	Ok(Some(lenient_text(deserializer)?).filter(|s| !s.is_empty()))
}

/// Body of `GET /pathway/{job1}/{job2}`.
///
/// The backend either returns a graph (`nodes` + `edges`) or an object with an
/// `error` string. Both shapes decode into this type; the graph transform
/// decides whether it is usable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPathwayPayload {
	/// Skill nodes, absent on error bodies.
	#[serde(default)]
	pub nodes: Option<Vec<RawNode>>,
	/// Directed prerequisite edges.
	#[serde(default)]
	pub edges: Option<Vec<RawEdge>>,
	/// Backend failure message, e.g. an unknown job title.
	#[serde(default)]
	pub error: Option<String>,
}

/// One skill in the pathway.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
	/// Unique within the payload. `root` marks the dream-role hub.
	pub id: String,
	/// Human-readable skill name.
	#[serde(default, deserialize_with = "lenient_text")]
	pub skill_name: String,
	/// Display hint from the backend. Usually empty and ignored.
	#[serde(default, deserialize_with = "lenient_text")]
	pub label: String,
	/// Shown in the detail panel.
	#[serde(default)]
	pub description: Option<String>,
	/// Courses that teach the skill.
	#[serde(default)]
	pub courses: Option<Vec<RawCourse>>,
	/// Set when the current role already has this skill.
	#[serde(default, rename = "match")]
	pub matched: Option<bool>,
	/// Legacy adjacency field, always ignored.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub connections: Option<serde_json::Value>,
}

impl RawNode {
	/// Skill name, or the id when the backend left the name out.
	pub fn display_name(&self) -> &str {
		if self.skill_name.is_empty() {
			&self.id
		} else {
			&self.skill_name
		}
	}
}

/// A course attached to a skill.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCourse {
	/// Department prefix, e.g. `CINE`.
	#[serde(default, deserialize_with = "lenient_text")]
	pub course_prefix: String,
	/// Catalog number. Numeric values are kept as text.
	#[serde(default, deserialize_with = "lenient_text")]
	pub course_number: String,
	/// Course title.
	#[serde(default, deserialize_with = "lenient_text")]
	pub course_title: String,
	/// Catalog description.
	#[serde(default)]
	pub course_desc: Option<String>,
	/// Credit units.
	#[serde(default, deserialize_with = "lenient_optional_text")]
	pub num_units: Option<String>,
	/// Offering department.
	#[serde(default)]
	pub dept_name: Option<String>,
	/// IPEDS id of the institution.
	#[serde(default)]
	pub inst_ipeds: Option<String>,
	/// Opaque backend metadata.
	#[serde(default)]
	pub metadata: Option<String>,
	/// Other skills the course covers.
	#[serde(default)]
	pub skills: Option<Vec<String>>,
}

impl RawCourse {
	/// `"{prefix} {number} - {title}"`, the form shown in the detail panel.
	pub fn display_line(&self) -> String {
		format!(
			"{} {} - {}",
			self.course_prefix, self.course_number, self.course_title
		)
	}
}

/// A directed edge. Duplicates are legal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEdge {
	/// Prerequisite skill id.
	pub from: String,
	/// Dependent skill id.
	pub to: String,
}

/// Body of `GET /jobs`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct JobDirectory {
	/// Known job titles, in backend order.
	#[serde(default)]
	pub jobs: Option<Vec<String>>,
	/// Set when the directory could not be read.
	#[serde(default)]
	pub error: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn decodes_backend_root_node() {
		let node: RawNode = serde_json::from_value(json!({
			"connections": null,
			"skill_name": "root",
			"id": "root",
			"label": ""
		}))
		.unwrap();
		assert_eq!(node.id, "root");
		assert_eq!(node.matched, None);
		assert!(node.courses.is_none());
	}

	#[test]
	fn decodes_match_flag_and_courses() {
		let node: RawNode = serde_json::from_value(json!({
			"id": "Employ Digital Visual Tools",
			"skill_name": "Employ Digital Visual Tools",
			"match": true,
			"alignment": "ignored",
			"courses": [{
				"course_prefix": "CINE",
				"course_number": "364",
				"course_title": "Interactive Storytelling for the Screen",
				"num_units": "3"
			}]
		}))
		.unwrap();
		assert_eq!(node.matched, Some(true));
		let courses = node.courses.unwrap();
		assert_eq!(
			courses[0].display_line(),
			"CINE 364 - Interactive Storytelling for the Screen"
		);
	}

	#[test]
	fn null_and_numeric_text_fields_still_decode() {
		let node: RawNode = serde_json::from_value(json!({
			"id": "Budgeting",
			"skill_name": null,
			"label": null,
			"courses": [{
				"course_prefix": "ACCT",
				"course_number": 375,
				"course_title": null,
				"num_units": 4
			}]
		}))
		.unwrap();
		assert_eq!(node.display_name(), "Budgeting");
		assert_eq!(node.label, "");
		let course = &node.courses.unwrap()[0];
		assert_eq!(course.course_number, "375");
		assert_eq!(course.num_units.as_deref(), Some("4"));
		assert_eq!(course.display_line(), "ACCT 375 - ");
	}

	#[test]
	fn error_body_decodes_without_graph() {
		let payload: RawPathwayPayload = serde_json::from_value(json!({
			"error": "Job title not found",
			"job1": "A",
			"job2": "B"
		}))
		.unwrap();
		assert_eq!(payload.error.as_deref(), Some("Job title not found"));
		assert!(payload.nodes.is_none());
		assert!(payload.edges.is_none());
	}

	#[test]
	fn display_name_falls_back_to_id() {
		let node = RawNode {
			id: "n1".into(),
			..RawNode::default()
		};
		assert_eq!(node.display_name(), "n1");
	}
}
