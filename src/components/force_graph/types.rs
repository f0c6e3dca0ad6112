//! Plain data handed to the canvas component.

use crate::pathway::{NodeShape, TransformedGraph};

/// One node as the canvas draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Skill id from the payload.
	pub id: String,
	/// Multi-line label, one entry per line.
	pub lines: Vec<String>,
	/// Box or star.
	pub shape: NodeShape,
	/// Outline colour.
	pub border: &'static str,
	/// Fill colour.
	pub background: &'static str,
	/// Star radius. Boxes size themselves from their label.
	pub size: f64,
}

/// A directed edge between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Stroke colour.
	pub color: &'static str,
}

/// Everything the canvas needs for one graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes in draw order.
	pub nodes: Vec<GraphNode>,
	/// Edges; ones with unknown endpoints are skipped when drawn.
	pub links: Vec<GraphLink>,
}

impl From<&TransformedGraph> for GraphData {
	fn from(graph: &TransformedGraph) -> Self {
		Self {
			nodes: graph
				.nodes
				.iter()
				.map(|n| GraphNode {
					id: n.id.clone(),
					lines: n.label.lines().map(str::to_string).collect(),
					shape: n.shape,
					border: n.color.border,
					background: n.color.background,
					size: n.size,
				})
				.collect(),
			links: graph
				.edges
				.iter()
				.map(|e| GraphLink {
					source: e.from.clone(),
					target: e.to.clone(),
					color: e.color,
				})
				.collect(),
		}
	}
}
