//! Landing page.

use leptos::prelude::*;

/// Title page
#[component]
pub fn Home(on_start: Callback<()>) -> impl IntoView {
	view! {
		<div class="home-container">
			<h1 class="home-title">"Skill Mapper"</h1>
			<p class="home-subtitle">"Chart your path from your current role to your dream career."</p>
			<button class="submit-button start-button" on:click=move |_| on_start.run(())>
				"Start Mapping"
			</button>
			<div class="map-description">
				<p>"The Complex Map suggests electives and advanced skills."</p>
				<p>"The Basic Map shows mandatory, foundational classes."</p>
				<p>"The Job Stats page compares career outlook."</p>
			</div>
		</div>
	}
}
