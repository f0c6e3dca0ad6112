//! Maps a raw pathway payload onto styled nodes and edges for the renderer.
//!
//! The backend has shipped two payload shapes:
//!
//! - **root hub**: a synthetic `root` node stands for the dream role and the
//!   current role's overlap is flagged per node with `match`.
//! - **positional**: no hub; the first edge starts at the start skill and the
//!   last edge ends at the goal skill.
//!
//! [`Convention::detect`] picks one from the presence of a `root` node, and
//! [`transform_with`] lets the caller force either. Every node ends up in
//! exactly one [`NodeClass`]: hub, matched, start, goal, owned, then
//! everything else.

use std::collections::HashSet;

use log::warn;
use serde::Serialize;
use thiserror::Error;

use crate::api::{RawEdge, RawNode, RawPathwayPayload};

/// Id of the synthetic hub node.
pub const ROOT_ID: &str = "root";

/// Stroke colour of every edge.
pub const EDGE_COLOR: &str = "#008751";
/// Detail text for skills the backend did not describe.
pub const NO_DESCRIPTION: &str = "No description available.";
/// Hub label when no dream role was given.
pub const DREAM_ROLE_FALLBACK: &str = "Dream Role";

const DEFAULT_SIZE: f64 = 25.0;
const GOAL_SIZE: f64 = 30.0;
const HUB_SIZE: f64 = 45.0;

/// Which payload shape a graph follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Convention {
	/// Start and goal come from the first and last edge.
	Positional,
	/// A `root` hub stands for the dream role.
	RootHub,
}

impl Convention {
	/// `RootHub` when a `root` node is present.
	pub fn detect(raw: &RawPathwayPayload) -> Self {
		let has_root = raw
			.nodes
			.as_deref()
			.is_some_and(|nodes| nodes.iter().any(|n| n.id == ROOT_ID));
		if has_root { Self::RootHub } else { Self::Positional }
	}
}

/// How a node is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NodeShape {
	/// Rectangle sized to its label.
	Box,
	/// Five-pointed star with the label underneath.
	Star,
}

/// Border and fill of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NodeColor {
	/// CSS colour of the outline.
	pub border: &'static str,
	/// CSS fill colour.
	pub background: &'static str,
}

/// Visual category of a node, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NodeClass {
	/// The dream-role hub.
	RoleHub,
	/// Flagged by the backend as covered by the current role.
	Matched,
	/// Source of the first edge.
	Start,
	/// Target of the last edge.
	Goal,
	/// Listed for the current role in the skill catalog.
	Owned,
	/// Still to be learned.
	Acquire,
}

impl NodeClass {
	/// Every class, in priority order.
	pub const ALL: [NodeClass; 6] = [
		Self::RoleHub,
		Self::Matched,
		Self::Start,
		Self::Goal,
		Self::Owned,
		Self::Acquire,
	];

	/// Stars for the hub and goal, boxes otherwise.
	pub fn shape(self) -> NodeShape {
		match self {
			Self::RoleHub | Self::Goal => NodeShape::Star,
			_ => NodeShape::Box,
		}
	}

	/// Colours of the node and its legend swatch.
	pub fn color(self) -> NodeColor {
		let (border, background) = match self {
			Self::RoleHub => ("#FFFFFF", "#008751"),
			Self::Matched => ("#FFD700", "#332b00"),
			Self::Start => ("#C0C0C0", "#000000"),
			Self::Goal => ("#39FF14", "#000000"),
			Self::Owned => ("#FFD700", "#1a1a00"),
			Self::Acquire => ("#008751", "#000000"),
		};
		NodeColor { border, background }
	}

	/// Star radius.
	pub fn size(self) -> f64 {
		match self {
			Self::RoleHub => HUB_SIZE,
			Self::Goal => GOAL_SIZE,
			_ => DEFAULT_SIZE,
		}
	}

	/// Suffix appended under the wrapped skill name.
	pub fn annotation(self) -> Option<&'static str> {
		match self {
			Self::RoleHub => Some("(Dream Role)"),
			Self::Matched => Some("✓ Current Role Skill"),
			Self::Start => Some("(Start Skill)"),
			Self::Goal => Some("(Goal Skill)"),
			Self::Owned => Some("✓ Already Have"),
			Self::Acquire => None,
		}
	}

	/// Text for the legend swatch.
	pub fn legend(self) -> &'static str {
		match self {
			Self::RoleHub => "Dream Role",
			Self::Matched => "Skills Your Current Role Covers",
			Self::Start => "Start Skill",
			Self::Goal => "Goal Skill",
			Self::Owned => "Skills You Already Have",
			Self::Acquire => "Skills You Need",
		}
	}
}

/// A classified node, ready to draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayNode {
	/// Payload id.
	pub id: String,
	/// Wrapped name plus the class annotation, newline separated.
	pub label: String,
	/// Shape of [`class`](Self::class).
	pub shape: NodeShape,
	/// Colour of [`class`](Self::class).
	pub color: NodeColor,
	/// Size of [`class`](Self::class).
	pub size: f64,
	/// Hover text: the unmodified skill name.
	pub title: String,
	/// Skill description, or [`NO_DESCRIPTION`].
	pub description: String,
	/// Course lines as `"{prefix} {number} - {title}"`.
	pub courses: Vec<String>,
	/// Owned according to the skill catalog.
	pub is_current_skill: bool,
	/// Flagged `match` by the backend.
	pub has_match: bool,
	/// The single class this node was assigned.
	pub class: NodeClass,
}

/// A directed edge, ready to draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayEdge {
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
	/// Stroke colour.
	pub color: &'static str,
}

/// Result of [`transform_with`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransformedGraph {
	/// Nodes in payload order, minus a filtered hub.
	pub nodes: Vec<DisplayNode>,
	/// Edges in payload order, minus filtered ones.
	pub edges: Vec<DisplayEdge>,
	/// The payload's nodes as received, for inspection.
	pub raw_nodes: Vec<RawNode>,
	/// Convention the graph was built with.
	pub convention: Convention,
}

impl TransformedGraph {
	/// Look a node up by id.
	pub fn node(&self, id: &str) -> Option<&DisplayNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Classes present in this graph, in priority order.
	pub fn classes(&self) -> Vec<NodeClass> {
		NodeClass::ALL
			.into_iter()
			.filter(|c| self.nodes.iter().any(|n| n.class == *c))
			.collect()
	}
}

/// Why a payload cannot be drawn. Checks run in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PayloadDefect {
	/// Nothing was fetched.
	#[error("no payload")]
	Absent,
	/// No `nodes` key.
	#[error("payload has no node list")]
	MissingNodes,
	/// No `edges` key.
	#[error("payload has no edge list")]
	MissingEdges,
	/// The payload carries an `error` message.
	#[error("backend reported: {0}")]
	Backend(String),
	/// `nodes` is empty.
	#[error("pathway has no skills")]
	EmptyNodes,
	/// `edges` is empty.
	#[error("pathway has no connections")]
	EmptyEdges,
}

/// Borrowed view of a payload that passed validation.
#[derive(Clone, Copy, Debug)]
pub struct ValidPayload<'a> {
	/// Never empty.
	pub nodes: &'a [RawNode],
	/// Never empty.
	pub edges: &'a [RawEdge],
}

/// Check that a payload describes a drawable graph.
pub fn validate(raw: Option<&RawPathwayPayload>) -> Result<ValidPayload<'_>, PayloadDefect> {
	let raw = raw.ok_or(PayloadDefect::Absent)?;
	let nodes = raw.nodes.as_deref().ok_or(PayloadDefect::MissingNodes)?;
	let edges = raw.edges.as_deref().ok_or(PayloadDefect::MissingEdges)?;
	if let Some(error) = &raw.error {
		return Err(PayloadDefect::Backend(error.clone()));
	}
	if nodes.is_empty() {
		return Err(PayloadDefect::EmptyNodes);
	}
	if edges.is_empty() {
		return Err(PayloadDefect::EmptyEdges);
	}
	Ok(ValidPayload { nodes, edges })
}

/// Inputs to [`transform_with`] beyond the payload.
#[derive(Clone, Debug, Default)]
pub struct TransformOptions<'a> {
	/// Skill names the user's current role is known to cover.
	pub owned_skills: Option<&'a HashSet<String>>,
	/// Shown on the hub node.
	pub dream_job_label: Option<&'a str>,
	/// Forces a convention instead of detecting it.
	pub convention: Option<Convention>,
}

/// Transform with the convention detected from the payload.
pub fn transform(
	raw: Option<&RawPathwayPayload>,
	owned_skills: &HashSet<String>,
	dream_job_label: Option<&str>,
) -> Option<TransformedGraph> {
	transform_with(
		raw,
		&TransformOptions {
			owned_skills: Some(owned_skills),
			dream_job_label,
			convention: None,
		},
	)
}

/// Classify and style every node of a payload.
///
/// Returns `None` when the payload fails [`validate`].
pub fn transform_with(
	raw: Option<&RawPathwayPayload>,
	options: &TransformOptions<'_>,
) -> Option<TransformedGraph> {
	let valid = validate(raw).ok()?;
	let convention = options
		.convention
		.or_else(|| raw.map(Convention::detect))?;

	let keep_root = convention == Convention::RootHub;
	let kept_edges: Vec<&RawEdge> = valid
		.edges
		.iter()
		.filter(|e| keep_root || e.from != ROOT_ID)
		.collect();

	// Read before filtering: an endpoint of `root` marks nothing.
	let endpoints = match convention {
		Convention::Positional => Endpoints {
			start: valid.edges.first().map(|e| e.from.as_str()),
			goal: valid.edges.last().map(|e| e.to.as_str()),
		},
		Convention::RootHub => Endpoints::default(),
	};

	let empty = HashSet::new();
	let owned = options.owned_skills.unwrap_or(&empty);
	let dream_label = options
		.dream_job_label
		.map(str::trim)
		.filter(|s| !s.is_empty());

	let nodes: Vec<DisplayNode> = valid
		.nodes
		.iter()
		.filter(|n| keep_root || n.id != ROOT_ID)
		.map(|n| display_node(n, convention, &endpoints, owned, dream_label))
		.collect();

	let edges: Vec<DisplayEdge> = kept_edges
		.iter()
		.map(|e| DisplayEdge {
			from: e.from.clone(),
			to: e.to.clone(),
			color: EDGE_COLOR,
		})
		.collect();

	warn_dangling(&nodes, &edges);

	Some(TransformedGraph {
		nodes,
		edges,
		raw_nodes: valid.nodes.to_vec(),
		convention,
	})
}

#[derive(Debug, Default)]
struct Endpoints<'a> {
	start: Option<&'a str>,
	goal: Option<&'a str>,
}

fn classify(
	node: &RawNode,
	convention: Convention,
	endpoints: &Endpoints<'_>,
	owned: &HashSet<String>,
) -> NodeClass {
	let id = node.id.as_str();
	if convention == Convention::RootHub && id == ROOT_ID {
		NodeClass::RoleHub
	} else if node.matched == Some(true) {
		NodeClass::Matched
	} else if endpoints.start == Some(id) {
		NodeClass::Start
	} else if endpoints.goal == Some(id) {
		NodeClass::Goal
	} else if owned.contains(node.display_name()) {
		NodeClass::Owned
	} else {
		NodeClass::Acquire
	}
}

fn wrap(text: &str) -> String {
	text.replace(' ', "\n")
}

fn display_node(
	node: &RawNode,
	convention: Convention,
	endpoints: &Endpoints<'_>,
	owned: &HashSet<String>,
	dream_label: Option<&str>,
) -> DisplayNode {
	let class = classify(node, convention, endpoints, owned);
	let name = node.display_name();

	let (title, label) = match class {
		NodeClass::RoleHub => match dream_label {
			Some(dream) => (
				dream.to_string(),
				format!("{}\n{}", wrap(dream), class.annotation().unwrap_or_default()),
			),
			None => (DREAM_ROLE_FALLBACK.to_string(), wrap(DREAM_ROLE_FALLBACK)),
		},
		_ => {
			let label = match class.annotation() {
				Some(note) => format!("{}\n{}", wrap(name), note),
				None => wrap(name),
			};
			(name.to_string(), label)
		}
	};

	let courses = node
		.courses
		.as_deref()
		.unwrap_or_default()
		.iter()
		.map(|c| c.display_line())
		.collect();

	DisplayNode {
		id: node.id.clone(),
		label,
		shape: class.shape(),
		color: class.color(),
		size: class.size(),
		title,
		description: node
			.description
			.clone()
			.filter(|d| !d.trim().is_empty())
			.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
		courses,
		is_current_skill: owned.contains(name),
		has_match: node.matched == Some(true),
		class,
	}
}

fn warn_dangling(nodes: &[DisplayNode], edges: &[DisplayEdge]) {
	let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	let dangling = edges
		.iter()
		.filter(|e| !ids.contains(e.from.as_str()) || !ids.contains(e.to.as_str()))
		.count();
	if dangling > 0 {
		warn!(
			"pathway has {} edge(s) pointing at unknown skills; passing them through",
			dangling
		);
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn payload(value: serde_json::Value) -> RawPathwayPayload {
		serde_json::from_value(value).unwrap()
	}

	fn owned(names: &[&str]) -> HashSet<String> {
		names.iter().map(|s| s.to_string()).collect()
	}

	/// Three design skills, no hub node.
	fn positional() -> RawPathwayPayload {
		payload(json!({
			"nodes": [
				{
					"id": "Describe the Visual Elements of Design",
					"skill_name": "Describe the Visual Elements of Design",
					"description": "Understand line, shape, color, and texture.",
					"courses": [{
						"course_prefix": "CINE",
						"course_number": "375",
						"course_title": "Directing the Camera for the Screen"
					}]
				},
				{
					"id": "Employ Digital Visual Tools",
					"skill_name": "Employ Digital Visual Tools",
					"courses": []
				},
				{
					"id": "Apply Visual Design Principles",
					"skill_name": "Apply Visual Design Principles"
				}
			],
			"edges": [
				{"from": "Describe the Visual Elements of Design", "to": "Employ Digital Visual Tools"},
				{"from": "Describe the Visual Elements of Design", "to": "Apply Visual Design Principles"}
			]
		}))
	}

	/// Hub convention as the current backend emits it.
	fn hub() -> RawPathwayPayload {
		payload(json!({
			"nodes": [
				{"connections": null, "skill_name": "root", "id": "root", "label": ""},
				{"id": "Visual Design", "skill_name": "Visual Design", "label": "", "match": false},
				{"id": "Create Storyboards with Technology", "skill_name": "Create Storyboards with Technology", "label": "", "match": true},
				{"id": "Professional Image Creation", "skill_name": "Professional Image Creation", "label": "", "match": false}
			],
			"edges": [
				{"from": "root", "to": "Visual Design"},
				{"from": "root", "to": "Create Storyboards with Technology"},
				{"from": "Visual Design", "to": "Professional Image Creation"}
			]
		}))
	}

	#[test]
	fn rejects_every_invalid_shape() {
		let none = owned(&[]);
		let cases = [
			json!({"edges": [{"from": "a", "to": "b"}]}),
			json!({"nodes": [{"id": "a"}]}),
			json!({"nodes": [{"id": "a"}], "edges": [{"from": "a", "to": "a"}], "error": "boom"}),
			json!({"error": "not found"}),
			json!({"nodes": [], "edges": [{"from": "a", "to": "b"}]}),
			json!({"nodes": [{"id": "a"}], "edges": []}),
		];
		for case in cases {
			let raw = payload(case.clone());
			assert!(transform(Some(&raw), &none, None).is_none(), "{case}");
		}
		assert!(transform(None, &none, None).is_none());
	}

	#[test]
	fn validate_reports_the_first_failing_check() {
		let raw = payload(json!({"error": "Job title not found"}));
		assert_eq!(validate(Some(&raw)).unwrap_err(), PayloadDefect::MissingNodes);

		let raw = payload(json!({"nodes": [{"id": "a"}], "edges": [], "error": "boom"}));
		assert_eq!(
			validate(Some(&raw)).unwrap_err(),
			PayloadDefect::Backend("boom".into())
		);

		let raw = payload(json!({"nodes": [], "edges": []}));
		assert_eq!(validate(Some(&raw)).unwrap_err(), PayloadDefect::EmptyNodes);
		assert_eq!(validate(None).unwrap_err(), PayloadDefect::Absent);
	}

	#[test]
	fn positional_start_and_goal_follow_edge_order() {
		let raw = positional();
		let graph = transform(Some(&raw), &owned(&[]), None).unwrap();

		assert_eq!(graph.convention, Convention::Positional);
		assert_eq!(graph.nodes.len(), 3);

		let start = graph.node("Describe the Visual Elements of Design").unwrap();
		assert_eq!(start.class, NodeClass::Start);
		assert_eq!(start.label, "Describe\nthe\nVisual\nElements\nof\nDesign\n(Start Skill)");
		assert_eq!(start.title, "Describe the Visual Elements of Design");

		let goal = graph.node("Apply Visual Design Principles").unwrap();
		assert_eq!(goal.class, NodeClass::Goal);
		assert_eq!(goal.shape, NodeShape::Star);

		let middle = graph.node("Employ Digital Visual Tools").unwrap();
		assert_eq!(middle.class, NodeClass::Acquire);
		assert_eq!(middle.label, "Employ\nDigital\nVisual\nTools");
		assert_eq!(middle.color.border, "#008751");
	}

	#[test]
	fn goal_outranks_owned_skill() {
		let raw = positional();
		let mine = owned(&["Apply Visual Design Principles", "Employ Digital Visual Tools"]);
		let graph = transform(Some(&raw), &mine, None).unwrap();

		let goal = graph.node("Apply Visual Design Principles").unwrap();
		assert_eq!(goal.class, NodeClass::Goal);
		assert!(goal.is_current_skill);

		let owned_node = graph.node("Employ Digital Visual Tools").unwrap();
		assert_eq!(owned_node.class, NodeClass::Owned);
		assert!(owned_node.label.ends_with("✓ Already Have"));
		assert_eq!(owned_node.color.border, "#FFD700");
	}

	#[test]
	fn match_flag_outranks_start() {
		let mut raw = positional();
		raw.nodes.as_mut().unwrap()[0].matched = Some(true);
		let graph = transform(Some(&raw), &owned(&[]), None).unwrap();
		let node = graph.node("Describe the Visual Elements of Design").unwrap();
		assert_eq!(node.class, NodeClass::Matched);
		assert!(node.has_match);
	}

	#[test]
	fn courses_flatten_in_order_and_descriptions_fall_back() {
		let raw = positional();
		let graph = transform(Some(&raw), &owned(&[]), None).unwrap();

		let first = graph.node("Describe the Visual Elements of Design").unwrap();
		assert_eq!(first.courses, vec!["CINE 375 - Directing the Camera for the Screen"]);
		assert_eq!(first.description, "Understand line, shape, color, and texture.");

		let second = graph.node("Employ Digital Visual Tools").unwrap();
		assert!(second.courses.is_empty());
		assert_eq!(second.description, NO_DESCRIPTION);
		assert!(graph.node("Apply Visual Design Principles").unwrap().courses.is_empty());
	}

	#[test]
	fn edges_pass_through_with_duplicates_and_dangling_ends() {
		let mut raw = positional();
		let edges = raw.edges.as_mut().unwrap();
		let duplicate = edges[0].clone();
		edges.insert(1, duplicate);
		edges.insert(
			2,
			RawEdge {
				from: "Employ Digital Visual Tools".into(),
				to: "Nowhere".into(),
			},
		);
		let graph = transform(Some(&raw), &owned(&[]), None).unwrap();
		assert_eq!(graph.edges.len(), 4);
		assert_eq!(graph.edges[0], graph.edges[1]);
		assert_eq!(graph.edges[2].to, "Nowhere");
		assert!(graph.edges.iter().all(|e| e.color == EDGE_COLOR));
	}

	#[test]
	fn transform_is_deterministic() {
		let raw = hub();
		let mine = owned(&["Visual Design"]);
		let a = transform(Some(&raw), &mine, Some("Data Scientists"));
		let b = transform(Some(&raw), &mine, Some("Data Scientists"));
		assert_eq!(a, b);
	}

	mod root_hub {
		use super::*;

		#[test]
		fn keeps_every_node() {
			let raw = hub();
			let graph = transform(Some(&raw), &owned(&[]), Some("Data Scientists")).unwrap();
			assert_eq!(graph.convention, Convention::RootHub);
			assert_eq!(graph.nodes.len(), raw.nodes.as_ref().unwrap().len());
			assert_eq!(graph.edges.len(), 3);
			assert_eq!(graph.raw_nodes.len(), 4);
		}

		#[test]
		fn hub_shows_the_dream_role() {
			let raw = hub();
			let graph = transform(Some(&raw), &owned(&[]), Some("Data Scientists")).unwrap();
			let root = graph.node(ROOT_ID).unwrap();
			assert_eq!(root.class, NodeClass::RoleHub);
			assert_eq!(root.shape, NodeShape::Star);
			assert_eq!(root.label, "Data\nScientists\n(Dream Role)");
			assert!(root.size > graph.node("Visual Design").unwrap().size);

			let unnamed = transform(Some(&raw), &owned(&[]), Some("  ")).unwrap();
			assert_eq!(unnamed.node(ROOT_ID).unwrap().label, "Dream\nRole");
		}

		#[test]
		fn no_positional_start_or_goal() {
			let raw = hub();
			let graph = transform(Some(&raw), &owned(&[]), None).unwrap();
			assert!(
				graph
					.nodes
					.iter()
					.all(|n| n.class != NodeClass::Start && n.class != NodeClass::Goal)
			);
			assert_eq!(
				graph.node("Create Storyboards with Technology").unwrap().class,
				NodeClass::Matched
			);
			assert_eq!(
				graph.node("Professional Image Creation").unwrap().class,
				NodeClass::Acquire
			);
		}

		#[test]
		fn owned_skills_still_apply_below_match() {
			let raw = hub();
			let mine = owned(&["Visual Design", "Create Storyboards with Technology"]);
			let graph = transform(Some(&raw), &mine, None).unwrap();
			assert_eq!(graph.node("Visual Design").unwrap().class, NodeClass::Owned);
			let matched = graph.node("Create Storyboards with Technology").unwrap();
			assert_eq!(matched.class, NodeClass::Matched);
			assert!(matched.is_current_skill);
		}
	}

	mod root_filtered {
		use super::*;

		fn forced(raw: &RawPathwayPayload) -> TransformedGraph {
			transform_with(
				Some(raw),
				&TransformOptions {
					convention: Some(Convention::Positional),
					..TransformOptions::default()
				},
			)
			.unwrap()
		}

		#[test]
		fn drops_the_root_node_and_its_edges() {
			let raw = hub();
			let graph = forced(&raw);
			assert_eq!(graph.nodes.len(), raw.nodes.as_ref().unwrap().len() - 1);
			assert!(graph.node(ROOT_ID).is_none());
			assert_eq!(graph.edges.len(), 1);
			assert_eq!(graph.raw_nodes.len(), 4);
		}

		#[test]
		fn endpoints_follow_the_unfiltered_edge_order() {
			let graph = forced(&hub());
			assert!(graph.nodes.iter().all(|n| n.class != NodeClass::Start));
			assert_eq!(
				graph.node("Visual Design").unwrap().class,
				NodeClass::Acquire
			);
			assert_eq!(
				graph.node("Professional Image Creation").unwrap().class,
				NodeClass::Goal
			);
		}

		#[test]
		fn first_edge_from_root_leaves_no_start_skill() {
			let raw = payload(json!({
				"nodes": [
					{"id": "root", "skill_name": "root"},
					{"id": "Visual Design", "skill_name": "Visual Design"},
					{"id": "Professional Image Creation", "skill_name": "Professional Image Creation"}
				],
				"edges": [
					{"from": "root", "to": "Visual Design"},
					{"from": "Visual Design", "to": "Professional Image Creation"}
				]
			}));
			let graph = forced(&raw);
			assert_ne!(graph.node("Visual Design").unwrap().class, NodeClass::Start);
			assert_eq!(graph.edges.len(), 1);
		}

		#[test]
		fn payload_without_root_keeps_node_count() {
			let raw = positional();
			let graph = forced(&raw);
			assert_eq!(graph.nodes.len(), 3);
		}
	}

	#[test]
	fn legend_lists_present_classes_in_priority_order() {
		let raw = positional();
		let graph = transform(Some(&raw), &owned(&[]), None).unwrap();
		assert_eq!(
			graph.classes(),
			vec![NodeClass::Start, NodeClass::Goal, NodeClass::Acquire]
		);
	}
}
