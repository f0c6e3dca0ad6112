//! The two role inputs shown above the map and stats pages.

use leptos::prelude::*;

use crate::shell::{RoleField, ShellAction, ShellState};

/// Feed one action through the shell reducer.
pub fn dispatch(shell: RwSignal<ShellState>, action: ShellAction) {
	shell.update(|state| *state = std::mem::take(state).reduce(action));
}

/// Current and dream role inputs with their suggestion lists.
#[component]
pub fn JobInputHeader(shell: RwSignal<ShellState>) -> impl IntoView {
	let title = move || shell.with(|s| s.page.title());

	view! {
		<header class="header-container">
			<h1 class="title">{title}</h1>
			<div class="input-row">
				<RoleInputField shell=shell field=RoleField::Current />
				<RoleInputField shell=shell field=RoleField::Dream />
			</div>
		</header>
	}
}

#[component]
fn RoleInputField(shell: RwSignal<ShellState>, field: RoleField) -> impl IntoView {
	let text = move || shell.with(|s| s.field(field).text.clone());
	let submitted = move || shell.with(|s| s.field(field).is_submitted());

	let suggestions = move || {
		let titles = shell.with(|s| s.suggestions(field));
		(!titles.is_empty()).then(|| {
			view! {
				<div class="suggestions">
					{titles
						.into_iter()
						.map(|title| {
							let pick = title.clone();
							view! {
								// mousedown fires before the input's blur
								<div
									class="suggestion-item"
									on:mousedown=move |_| {
										dispatch(shell, ShellAction::Select(field, pick.clone()))
									}
								>
									{title}
								</div>
							}
						})
						.collect_view()}
				</div>
			}
		})
	};

	let button = move || {
		if submitted() {
			view! {
				<button
					class="submit-button change-button"
					on:click=move |_| dispatch(shell, ShellAction::Revert(field))
				>
					"Change Role"
				</button>
			}
			.into_any()
		} else {
			view! {
				<button
					class="submit-button"
					disabled=move || !shell.with(|s| s.can_submit(field))
					on:click=move |_| dispatch(shell, ShellAction::Submit(field))
				>
					{field.submit_label()}
				</button>
			}
			.into_any()
		}
	};

	view! {
		<div class="role-input">
			<label class="input-label">{field.label()}</label>
			<div class="input-wrapper">
				<input
					type="text"
					class="job-input"
					class:submitted=submitted
					placeholder=field.placeholder()
					prop:value=text
					readonly=submitted
					on:input=move |ev| {
						dispatch(shell, ShellAction::Edit(field, event_target_value(&ev)))
					}
					on:focus=move |_| dispatch(shell, ShellAction::Focus(field))
					on:blur=move |_| dispatch(shell, ShellAction::Blur(field))
				/>
				{suggestions}
			</div>
			{button}
		</div>
	}
}
