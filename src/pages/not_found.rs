//! Router fallback.

use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="home-container">
			<h1 class="home-title">"Page not found"</h1>
			<a href="/">"Back to Skill Mapper"</a>
		</div>
	}
}
