//! The pathway page: status panels, legend, canvas and the skill detail panel.

use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::components::skill_panel::SkillPanel;
use crate::pathway::{NodeClass, ViewState};

const GRAPH_HEIGHT: f64 = 600.0;

/// Legend shown before any graph has loaded.
const DEFAULT_LEGEND: [NodeClass; 3] = [NodeClass::Owned, NodeClass::Acquire, NodeClass::Goal];

fn health_text(health: Option<bool>) -> &'static str {
	match health {
		None => "Checking backend…",
		Some(true) => "Backend is reachable.",
		Some(false) => "Backend did not answer.",
	}
}

/// Pathway map for the submitted pair.
///
/// The canvas stays mounted in every state and is fed an empty graph outside
/// `Success`.
#[component]
pub fn ComplexMap(
	#[prop(into)] view_state: Signal<ViewState>,
	backend_url: String,
	#[prop(into)] health: Signal<Option<bool>>,
) -> impl IntoView {
	let selected = RwSignal::new(None::<String>);
	let graph_data = Memo::new(move |_| {
		view_state.with(|s| s.graph().map(GraphData::from).unwrap_or_default())
	});

	// A new state means a new graph; the old selection no longer applies
	Effect::new(move |_| {
		view_state.track();
		selected.set(None);
	});

	let legend = move || {
		view_state
			.with(|s| s.graph().map(|g| g.classes()))
			.unwrap_or_else(|| DEFAULT_LEGEND.to_vec())
			.into_iter()
			.map(|class| {
				let color = class.color();
				view! {
					<div class="legend-item">
						<div
							class="legend-swatch"
							style:border-color=color.border
							style:background-color=color.background
						></div>
						<span>{class.legend()}</span>
					</div>
				}
			})
			.collect_view()
	};

	let status = move || {
		view_state.with(|state| match state {
			ViewState::Idle => Some(
				view! {
					<div class="status-panel">
						<p class="status-title">"Awaiting Role Submissions"</p>
						<p>
							"Submit a Current Role and a Dream Role in the header above to map the skills between them."
						</p>
					</div>
				}
				.into_any(),
			),
			ViewState::Loading { request } => {
				let text = format!(
					"Mapping {} → {}…",
					request.current_job, request.dream_job
				);
				Some(
					view! {
						<div class="status-panel">
							<p class="status-title loading">{text}</p>
						</div>
					}
					.into_any(),
				)
			}
			ViewState::Failure { error, .. } => {
				let (message, hint) = (error.to_string(), error.hint());
				let backend = format!("Backend: {}", backend_url);
				Some(
					view! {
						<div class="status-panel error-panel">
							<p class="status-title">{message}</p>
							<p>{hint}</p>
							<p class="backend-info">{backend}</p>
							<p class="backend-info">{move || health_text(health.get())}</p>
						</div>
					}
					.into_any(),
				)
			}
			ViewState::Success { .. } => None,
		})
	};

	let detail = move || {
		let id = selected.get()?;
		let node = view_state.with(|s| s.graph().and_then(|g| g.node(&id).cloned()))?;
		Some(view! { <SkillPanel node=node on_close=Callback::new(move |_| selected.set(None)) /> })
	};

	view! {
		<div class="main-content">
			<div class="map-heading">
				<h1>"Complex Course & Skill Map"</h1>
				<p class="subtitle">
					"This map visualizes the path between your roles: the skills you need to acquire and the courses that teach them."
				</p>
			</div>
			<div class="legend">{legend}</div>
			<div class="graph-area">
				<ForceGraphCanvas
					data=graph_data
					on_node_click=Callback::new(move |id: String| selected.set(Some(id)))
					height=Some(GRAPH_HEIGHT)
				/>
				{status}
				{detail}
			</div>
		</div>
	}
}
