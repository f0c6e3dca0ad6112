//! Page switcher.

use leptos::prelude::*;

use crate::shell::Page;

/// Top bar switching between the shell's pages.
#[component]
pub fn Navigation(
	#[prop(into)] page: Signal<Page>,
	on_navigate: Callback<Page>,
) -> impl IntoView {
	view! {
		<nav class="navigation">
			{Page::ALL
				.into_iter()
				.map(move |target| {
					view! {
						<button
							class="nav-button"
							class:active=move || page.get() == target
							on:click=move |_| on_navigate.run(target)
						>
							{target.nav_label()}
						</button>
					}
				})
				.collect_view()}
		</nav>
	}
}
