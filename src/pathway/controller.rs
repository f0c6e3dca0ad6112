//! Runs pathway fetches through [`PathwayView`] and publishes each applied
//! state to a [`GraphSink`].

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use log::{debug, info};

use super::view::{PathwayView, Resolution, ViewState};
use crate::api::PathwayBackend;
use crate::catalog::SkillCatalog;

/// Receiver of view states: the renderer side of the pathway view.
pub trait GraphSink {
	/// Show `state`. Called after every applied transition.
	fn render(&self, state: &ViewState);
}

/// Single-threaded driver around a [`PathwayView`].
pub struct PathwayController<B, S> {
	backend: Rc<B>,
	sink: Rc<S>,
	catalog: Rc<SkillCatalog>,
	view: Rc<RefCell<PathwayView>>,
}

impl<B, S> PathwayController<B, S>
where
	B: PathwayBackend + 'static,
	S: GraphSink + 'static,
{
	/// Controller starting in the idle state.
	pub fn new(backend: B, sink: S, catalog: SkillCatalog) -> Self {
		Self {
			backend: Rc::new(backend),
			sink: Rc::new(sink),
			catalog: Rc::new(catalog),
			view: Rc::new(RefCell::new(PathwayView::new())),
		}
	}

	/// Snapshot of the current state.
	pub fn state(&self) -> ViewState {
		self.view.borrow().state().clone()
	}

	fn publish(&self) {
		let state = self.state();
		self.sink.render(&state);
	}

	/// Issue a fetch for the pair.
	///
	/// The generation is taken now, not when the returned future is first
	/// polled, so submission order is what decides which response wins.
	/// `None` means nothing needs fetching (blank pair, or already loading).
	pub fn submit(
		&self,
		current_job: &str,
		dream_job: &str,
	) -> Option<impl Future<Output = Resolution> + use<B, S>> {
		let ticket = self.view.borrow_mut().submit(current_job, dream_job);
		self.publish();
		let ticket = ticket?;
		info!(
			"fetching pathway {:?} -> {:?}",
			ticket.request.current_job, ticket.request.dream_job
		);

		let backend = Rc::clone(&self.backend);
		let sink = Rc::clone(&self.sink);
		let catalog = Rc::clone(&self.catalog);
		let view = Rc::clone(&self.view);

		Some(async move {
			let outcome = backend
				.fetch_pathway(&ticket.request.current_job, &ticket.request.dream_job)
				.await;
			let owned = catalog.owned_skills(&ticket.request.current_job);

			let (resolution, state) = {
				let mut view = view.borrow_mut();
				let resolution = view.resolve(&ticket, outcome, &owned);
				(resolution, view.state().clone())
			};
			match resolution {
				Resolution::Applied => sink.render(&state),
				Resolution::Stale => debug!("ignored superseded pathway response"),
			}
			resolution
		})
	}

	/// Drop any graph or pending fetch and return to idle.
	pub fn clear(&self) {
		self.view.borrow_mut().clear();
		self.publish();
	}
}
