//! Skill Mapper: chart the skills between a current role and a dream role.
//!
//! A client-side Leptos app. Two role titles go to the pathway backend, the
//! returned skill graph is classified and styled, then drawn on an
//! interactive force-directed canvas.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod api;
pub mod catalog;
pub mod components;
pub mod config;
pub mod pages;
pub mod pathway;
pub mod shell;
pub mod stats;

use crate::api::ApiClient;
use crate::catalog::SkillCatalog;
use crate::components::job_input::{JobInputHeader, dispatch};
use crate::components::navigation::Navigation;
use crate::config::AppConfig;
use crate::pages::basic_map::BasicMap;
use crate::pages::complex_map::ComplexMap;
use crate::pages::home::Home;
use crate::pages::job_stats::JobStats;
use crate::pages::not_found::NotFound;
use crate::pathway::{GraphSink, PathwayController, ViewState};
use crate::shell::{Page, ShellAction, ShellState};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Publishes pathway states into a signal for the pages to read.
#[derive(Clone, Copy)]
struct SignalSink(RwSignal<ViewState>);

impl GraphSink for SignalSink {
	fn render(&self, state: &ViewState) {
		self.0.set(state.clone());
	}
}

/// Router with the shell at `/` and a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Skill Mapper" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Shell />
			</Routes>
		</Router>
	}
}

/// Owns the app state and switches pages in memory.
#[component]
fn Shell() -> impl IntoView {
	let config = AppConfig::load();
	info!("pathway backend at {}", config.backend_url);
	let client = ApiClient::for_browser(&config);
	let backend_url = client.base_url().to_string();

	let shell = RwSignal::new(ShellState::default());
	let view_state = RwSignal::new(ViewState::default());
	let health = RwSignal::new(None::<bool>);

	let directory_client = client.clone();
	spawn_local(async move {
		let jobs = directory_client.list_jobs().await;
		dispatch(shell, ShellAction::DirectoryLoaded(jobs));
	});
	let health_client = client.clone();
	spawn_local(async move {
		let reachable = health_client.check_health().await;
		info!("backend reachable: {}", reachable);
		health.set(Some(reachable));
	});

	let controller = PathwayController::new(client, SignalSink(view_state), SkillCatalog::sample());
	let pair = Memo::new(move |_| shell.with(|s| s.submitted_pair()));
	Effect::new(move |_| match pair.get() {
		Some(request) => {
			if let Some(fetch) = controller.submit(&request.current_job, &request.dream_job) {
				spawn_local(async move {
					fetch.await;
				});
			}
		}
		None => controller.clear(),
	});

	let page = Memo::new(move |_| shell.with(|s| s.page));
	let navigate = Callback::new(move |target: Page| dispatch(shell, ShellAction::Navigate(target)));

	let content = move || {
		let current = page.get();
		let body = match current {
			Page::Home => view! {
				<Home on_start=Callback::new(move |_| {
					dispatch(shell, ShellAction::Navigate(Page::ComplexMap))
				}) />
			}
			.into_any(),
			Page::ComplexMap => view! {
				<ComplexMap view_state=view_state backend_url=backend_url.clone() health=health />
			}
			.into_any(),
			Page::BasicMap => view! { <BasicMap /> }.into_any(),
			Page::JobStats => view! { <JobStats pair=pair /> }.into_any(),
		};
		if !current.has_role_inputs() {
			return body;
		}
		view! {
			<div class="page-body">
				<JobInputHeader shell=shell />
				{body}
			</div>
		}
		.into_any()
	};

	view! {
		<div class="page-container">
			<Navigation page=page on_navigate=navigate />
			{content}
		</div>
	}
}
