use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::GraphData;
use crate::pathway::NodeShape;
use crate::pathway::transform::EDGE_COLOR;

pub const FONT_SIZE: f64 = 11.0;
pub const LINE_HEIGHT: f64 = 13.0;
const CHAR_WIDTH: f64 = 6.2;
const BOX_PADDING: f64 = 6.0;

/// Pointer travel, in screen pixels, that turns a press into a drag.
pub const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub lines: Vec<String>,
	pub shape: Option<NodeShape>,
	pub border: &'static str,
	pub background: &'static str,
	pub size: f64,
}

impl NodeInfo {
	/// Half width and half height of the node body, in graph units.
	pub fn half_extent(&self) -> (f64, f64) {
		match self.shape {
			Some(NodeShape::Star) => (self.size, self.size),
			_ => {
				let widest = self
					.lines
					.iter()
					.map(|l| l.chars().count())
					.max()
					.unwrap_or(0) as f64;
				let tall = self.lines.len().max(1) as f64 * LINE_HEIGHT;
				(
					(widest * CHAR_WIDTH).max(self.size) / 2.0 + BOX_PADDING,
					tall / 2.0 + BOX_PADDING,
				)
			}
		}
	}

	/// Whether an offset from the node centre falls on the body.
	pub fn contains(&self, dx: f64, dy: f64) -> bool {
		match self.shape {
			Some(NodeShape::Star) => dx * dx + dy * dy < self.size * self.size,
			_ => {
				let (hw, hh) = self.half_extent();
				dx.abs() <= hw && dy.abs() <= hh
			}
		}
	}

	/// Distance from the centre to the body outline along the unit vector
	/// `(ux, uy)`.
	pub fn boundary(&self, ux: f64, uy: f64) -> f64 {
		match self.shape {
			Some(NodeShape::Star) => self.size,
			_ => {
				let (hw, hh) = self.half_extent();
				let tx = if ux.abs() > 1e-9 { hw / ux.abs() } else { f64::INFINITY };
				let ty = if uy.abs() > 1e-9 { hh / uy.abs() } else { f64::INFINITY };
				tx.min(ty)
			}
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
	/// Set once the pointer leaves [`CLICK_SLOP`]; a release without it is a click.
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	edge_colors: HashMap<(DefaultNodeIdx, DefaultNodeIdx), &'static str>,
}

fn simulation() -> ForceGraph<NodeInfo, ()> {
	ForceGraph::new(SimulationParameters {
		force_charge: 400.0,
		force_spring: 0.03,
		force_max: 120.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	})
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut state = Self {
			graph: simulation(),
			edges: Vec::new(),
			edge_colors: HashMap::new(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		};
		state.load(data);
		state
	}

	/// Replace the whole graph. The pan/zoom transform is kept.
	pub fn load(&mut self, data: &GraphData) {
		let mut graph = simulation();
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();
		let mut edge_colors = HashMap::new();

		let spread = 60.0 + 25.0 * data.nodes.len() as f64;
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (spread * angle.cos()) as f32,
				y: (spread * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					lines: node.lines.clone(),
					shape: Some(node.shape),
					border: node.border,
					background: node.background,
					size: node.size,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
				edge_colors.insert((src, tgt), link.color);
			}
		}

		self.graph = graph;
		self.edges = edges;
		self.edge_colors = edge_colors;
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.hover = HoverState::default();
		self.animation_running = true;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Top-most node under a screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (gx - node.x() as f64, gy - node.y() as f64);
			if node.data.user_data.contains(dx, dy) {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	pub fn edge_color(&self, src: DefaultNodeIdx, tgt: DefaultNodeIdx) -> &'static str {
		self.edge_colors
			.get(&(src, tgt))
			.copied()
			.unwrap_or(EDGE_COLOR)
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the previous highlight around so it can fade out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
