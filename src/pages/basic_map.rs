//! Placeholder for the simplified map.

use leptos::prelude::*;

use crate::shell::Page;

/// Static placeholder page.
#[component]
pub fn BasicMap() -> impl IntoView {
	view! {
		<div class="main-content">
			<div class="map-heading">
				<h1>{Page::BasicMap.title()}</h1>
				<p class="subtitle">
					"This map visualizes the mandatory, foundational course path (e.g. General Education requirements) required for your degree."
				</p>
			</div>
			<div class="placeholder-panel">
				<p class="placeholder-title">"[Course Path Node Map Generation]"</p>
				<p>
					"This area will display a node map of core, mandatory courses, showing prerequisites and sequences."
				</p>
			</div>
		</div>
	}
}
