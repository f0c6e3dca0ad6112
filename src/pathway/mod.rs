//! From a pair of role titles to a drawable graph.

pub mod controller;
pub mod transform;
pub mod view;

pub use controller::{GraphSink, PathwayController};
pub use transform::{
	Convention, DisplayEdge, DisplayNode, NodeClass, NodeColor, NodeShape, TransformedGraph,
};
pub use view::{PathwayRequest, PathwayView, Resolution, ViewError, ViewState};
