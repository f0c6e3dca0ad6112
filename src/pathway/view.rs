//! Fetch lifecycle of the pathway view.
//!
//! `Idle -> Loading -> Success | Failure`, restarted by every new submission.
//! Each submission bumps a generation counter and hands out a [`Ticket`];
//! only the ticket of the current generation may move the state out of
//! `Loading`, so a slow early response can never overwrite a later one.

use std::collections::HashSet;

use log::debug;
use serde::Serialize;
use thiserror::Error;

use super::transform::{self, PayloadDefect, TransformOptions, TransformedGraph};
use crate::api::{FetchError, RawPathwayPayload};

/// Monotonic counter bumped by every submit and clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
	fn next(self) -> Self {
		Self(self.0 + 1)
	}
}

/// A (current role, dream role) pair as submitted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PathwayRequest {
	/// Trimmed current role title.
	pub current_job: String,
	/// Trimmed dream role title.
	pub dream_job: String,
}

impl PathwayRequest {
	/// Both titles trimmed; `None` if either is blank.
	pub fn new(current_job: &str, dream_job: &str) -> Option<Self> {
		let (current_job, dream_job) = (current_job.trim(), dream_job.trim());
		if current_job.is_empty() || dream_job.is_empty() {
			return None;
		}
		Some(Self {
			current_job: current_job.to_string(),
			dream_job: dream_job.to_string(),
		})
	}
}

/// Handle for one outstanding fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
	/// Generation the fetch was issued under.
	pub generation: Generation,
	/// The pair being fetched.
	pub request: PathwayRequest,
}

/// Why a submitted pair has no graph.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
pub enum ViewError {
	/// The backend could not be reached or answered with an error status.
	#[error("Could not load the pathway: {message}")]
	FetchFailed {
		/// Transport or status description.
		message: String,
		/// HTTP status, if any.
		status: Option<u16>,
	},

	/// The backend answered, but not with a drawable graph.
	#[error("The backend sent a pathway that cannot be drawn: {reason}")]
	InvalidPayload {
		/// What was wrong with the response.
		reason: String,
	},
}

impl ViewError {
	/// One-line advice shown under the error.
	pub fn hint(&self) -> &'static str {
		match self {
			Self::FetchFailed { .. } => {
				"Make sure the pathway backend is running and reachable from this page."
			}
			Self::InvalidPayload { .. } => "Try a different pair of roles.",
		}
	}
}

impl From<FetchError> for ViewError {
	fn from(e: FetchError) -> Self {
		if e.is_decode() {
			return Self::InvalidPayload {
				reason: e.to_string(),
			};
		}
		Self::FetchFailed {
			status: e.status(),
			message: e.to_string(),
		}
	}
}

impl From<PayloadDefect> for ViewError {
	fn from(defect: PayloadDefect) -> Self {
		Self::InvalidPayload {
			reason: defect.to_string(),
		}
	}
}

/// What the map page shows.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub enum ViewState {
	/// Nothing submitted.
	#[default]
	Idle,
	/// Waiting on the backend.
	Loading {
		/// Pair being fetched.
		request: PathwayRequest,
	},
	/// A graph is ready.
	Success {
		/// Pair the graph belongs to.
		request: PathwayRequest,
		/// The drawable graph.
		graph: TransformedGraph,
	},
	/// The fetch or the payload failed.
	Failure {
		/// Pair that failed.
		request: PathwayRequest,
		/// What went wrong.
		error: ViewError,
	},
}

impl ViewState {
	/// Pair behind the state, if any.
	pub fn request(&self) -> Option<&PathwayRequest> {
		match self {
			Self::Idle => None,
			Self::Loading { request }
			| Self::Success { request, .. }
			| Self::Failure { request, .. } => Some(request),
		}
	}

	/// Graph of a `Success`.
	pub fn graph(&self) -> Option<&TransformedGraph> {
		match self {
			Self::Success { graph, .. } => Some(graph),
			_ => None,
		}
	}

	/// True while a fetch is pending.
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading { .. })
	}
}

/// What happened to a resolved ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
	/// The outcome became the current state.
	Applied,
	/// Superseded by a newer submission or a clear; dropped silently.
	Stale,
}

/// Submission state machine guarding against out-of-order responses.
#[derive(Clone, Debug, Default)]
pub struct PathwayView {
	state: ViewState,
	generation: Generation,
}

impl PathwayView {
	/// Idle view at generation zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current state.
	pub fn state(&self) -> &ViewState {
		&self.state
	}

	/// Current generation.
	pub fn generation(&self) -> Generation {
		self.generation
	}

	/// Start a fetch for the pair, unless it is blank (goes idle) or the very
	/// same pair is already loading.
	pub fn submit(&mut self, current_job: &str, dream_job: &str) -> Option<Ticket> {
		let Some(request) = PathwayRequest::new(current_job, dream_job) else {
			self.clear();
			return None;
		};
		if let ViewState::Loading { request: pending } = &self.state {
			if *pending == request {
				debug!("pathway {:?} already loading", request);
				return None;
			}
		}

		self.generation = self.generation.next();
		self.state = ViewState::Loading {
			request: request.clone(),
		};
		Some(Ticket {
			generation: self.generation,
			request,
		})
	}

	/// Back to idle. Any outstanding ticket becomes stale.
	pub fn clear(&mut self) {
		self.generation = self.generation.next();
		self.state = ViewState::Idle;
	}

	/// Apply the outcome of `ticket`'s fetch, unless a newer submit or a clear
	/// superseded it.
	pub fn resolve(
		&mut self,
		ticket: &Ticket,
		outcome: Result<RawPathwayPayload, FetchError>,
		owned_skills: &HashSet<String>,
	) -> Resolution {
		if ticket.generation != self.generation {
			debug!(
				"dropping stale pathway {:?} (generation {:?}, current {:?})",
				ticket.request, ticket.generation, self.generation
			);
			return Resolution::Stale;
		}

		let request = ticket.request.clone();
		self.state = match outcome.map_err(ViewError::from).and_then(|payload| {
			build_graph(&payload, owned_skills, &request.dream_job)
		}) {
			Ok(graph) => ViewState::Success { request, graph },
			Err(error) => ViewState::Failure { request, error },
		};
		Resolution::Applied
	}
}

fn build_graph(
	payload: &RawPathwayPayload,
	owned_skills: &HashSet<String>,
	dream_job: &str,
) -> Result<TransformedGraph, ViewError> {
	if let Err(defect) = transform::validate(Some(payload)) {
		// An error body carries no node list; report the backend's own reason
		let defect = match &payload.error {
			Some(error) => PayloadDefect::Backend(error.clone()),
			None => defect,
		};
		return Err(defect.into());
	}
	transform::transform_with(
		Some(payload),
		&TransformOptions {
			owned_skills: Some(owned_skills),
			dream_job_label: Some(dream_job),
			convention: None,
		},
	)
	.ok_or_else(|| ViewError::InvalidPayload {
		reason: "pathway could not be transformed".into(),
	})
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn graph_payload(skill: &str) -> RawPathwayPayload {
		serde_json::from_value(json!({
			"nodes": [{"id": skill, "skill_name": skill}, {"id": "Goal", "skill_name": "Goal"}],
			"edges": [{"from": skill, "to": "Goal"}]
		}))
		.unwrap()
	}

	fn no_skills() -> HashSet<String> {
		HashSet::new()
	}

	#[test]
	fn submit_needs_both_titles() {
		let mut view = PathwayView::new();
		assert!(view.submit("Software Developers", "  ").is_none());
		assert_eq!(view.state(), &ViewState::Idle);

		let ticket = view.submit(" Software Developers ", "Data Scientists").unwrap();
		assert_eq!(ticket.request.current_job, "Software Developers");
		assert!(view.state().is_loading());
	}

	#[test]
	fn success_carries_the_graph() {
		let mut view = PathwayView::new();
		let ticket = view.submit("A", "B").unwrap();
		let outcome = view.resolve(&ticket, Ok(graph_payload("Start")), &no_skills());
		assert_eq!(outcome, Resolution::Applied);
		let graph = view.state().graph().unwrap();
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(view.state().request(), Some(&ticket.request));
	}

	#[test]
	fn fetch_error_becomes_failure() {
		let mut view = PathwayView::new();
		let ticket = view.submit("A", "B").unwrap();
		let err = FetchError::Status {
			url: "http://localhost:8000/pathway/A/B".into(),
			status: 500,
			status_text: "Internal Server Error".into(),
		};
		view.resolve(&ticket, Err(err), &no_skills());
		match view.state() {
			ViewState::Failure {
				error: ViewError::FetchFailed { status, message },
				..
			} => {
				assert_eq!(*status, Some(500));
				assert!(message.contains("500"));
			}
			other => panic!("unexpected state {other:?}"),
		}
	}

	#[test]
	fn backend_error_body_is_an_invalid_payload() {
		let mut view = PathwayView::new();
		let ticket = view.submit("A", "B").unwrap();
		let payload: RawPathwayPayload =
			serde_json::from_value(json!({"error": "not found"})).unwrap();
		view.resolve(&ticket, Ok(payload), &no_skills());
		assert!(matches!(
			view.state(),
			ViewState::Failure {
				error: ViewError::InvalidPayload { .. },
				..
			}
		));
	}

	#[test]
	fn backend_error_message_reaches_the_failure() {
		let mut view = PathwayView::new();
		let ticket = view.submit("Software Developers", "Astronauts").unwrap();
		let payload: RawPathwayPayload =
			serde_json::from_value(json!({"error": "Job title not found"})).unwrap();
		view.resolve(&ticket, Ok(payload), &no_skills());
		match view.state() {
			ViewState::Failure { error, .. } => {
				assert!(matches!(error, ViewError::InvalidPayload { .. }));
				assert!(error.to_string().contains("Job title not found"));
			}
			other => panic!("unexpected state {other:?}"),
		}
	}

	#[test]
	fn shape_defect_is_reported_without_a_backend_error() {
		let mut view = PathwayView::new();
		let ticket = view.submit("A", "B").unwrap();
		let payload: RawPathwayPayload =
			serde_json::from_value(json!({"nodes": [{"id": "a"}], "edges": []})).unwrap();
		view.resolve(&ticket, Ok(payload), &no_skills());
		let ViewState::Failure { error, .. } = view.state() else {
			panic!("expected a failure");
		};
		assert!(error.to_string().contains("no connections"));
	}

	#[test]
	fn decode_error_is_an_invalid_payload() {
		let mut view = PathwayView::new();
		let ticket = view.submit("A", "B").unwrap();
		let err = FetchError::Decode {
			url: "u".into(),
			message: "expected an object".into(),
		};
		view.resolve(&ticket, Err(err), &no_skills());
		assert!(matches!(
			view.state(),
			ViewState::Failure {
				error: ViewError::InvalidPayload { .. },
				..
			}
		));
	}

	#[test]
	fn late_response_for_an_old_submission_is_dropped() {
		let mut view = PathwayView::new();
		let first = view.submit("A", "B").unwrap();
		let second = view.submit("C", "D").unwrap();
		assert!(second.generation > first.generation);

		assert_eq!(
			view.resolve(&second, Ok(graph_payload("from CD")), &no_skills()),
			Resolution::Applied
		);
		assert_eq!(
			view.resolve(&first, Ok(graph_payload("from AB")), &no_skills()),
			Resolution::Stale
		);

		let graph = view.state().graph().unwrap();
		assert!(graph.node("from CD").is_some());
		assert_eq!(view.state().request().unwrap().current_job, "C");
	}

	#[test]
	fn clear_orphans_the_pending_fetch() {
		let mut view = PathwayView::new();
		let ticket = view.submit("A", "B").unwrap();
		view.clear();
		assert_eq!(
			view.resolve(&ticket, Ok(graph_payload("x")), &no_skills()),
			Resolution::Stale
		);
		assert_eq!(view.state(), &ViewState::Idle);
	}

	#[test]
	fn identical_pending_submission_is_not_refetched() {
		let mut view = PathwayView::new();
		let ticket = view.submit("A", "B").unwrap();
		assert!(view.submit("A", "B").is_none());
		assert_eq!(view.generation(), ticket.generation);
	}

	#[test]
	fn resubmitting_after_success_fetches_again() {
		let mut view = PathwayView::new();
		let first = view.submit("A", "B").unwrap();
		view.resolve(&first, Ok(graph_payload("x")), &no_skills());
		let again = view.submit("A", "B").unwrap();
		assert!(again.generation > first.generation);
		assert!(view.state().is_loading());
	}

	#[test]
	fn owned_skills_reach_the_transform() {
		let mut view = PathwayView::new();
		let ticket = view.submit("A", "B").unwrap();
		let payload: RawPathwayPayload = serde_json::from_value(json!({
			"nodes": [
				{"id": "s", "skill_name": "s"},
				{"id": "Owned", "skill_name": "Owned"},
				{"id": "g", "skill_name": "g"}
			],
			"edges": [{"from": "s", "to": "Owned"}, {"from": "s", "to": "g"}]
		}))
		.unwrap();
		let owned: HashSet<String> = ["Owned".to_string()].into();
		view.resolve(&ticket, Ok(payload), &owned);
		let node = view.state().graph().unwrap().node("Owned").unwrap();
		assert!(node.is_current_skill);
		assert_eq!(node.class, crate::pathway::transform::NodeClass::Owned);
	}
}
