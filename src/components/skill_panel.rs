//! Side panel for a selected skill.

use leptos::prelude::*;

use crate::pathway::DisplayNode;

/// Details of a clicked skill: description and related courses.
#[component]
pub fn SkillPanel(node: DisplayNode, on_close: Callback<()>) -> impl IntoView {
	let owned = node.is_current_skill;
	let courses = if node.courses.is_empty() {
		view! { <p class="no-courses">"No courses available for this skill."</p> }.into_any()
	} else {
		view! {
			<ul class="course-list">
				{node
					.courses
					.into_iter()
					.map(|course| view! { <li>{course}</li> })
					.collect_view()}
			</ul>
		}
		.into_any()
	};

	view! {
		<aside class="skill-panel">
			<div class="skill-panel-header">
				<h3 class="skill-panel-title">
					{node.title}
					{owned.then(|| view! { <span class="owned-mark">"✓"</span> })}
				</h3>
				<button class="close-panel-button" on:click=move |_| on_close.run(())>
					"✕"
				</button>
			</div>
			<div class="skill-panel-content">
				{owned
					.then(|| {
						view! {
							<div class="owned-banner">
								"✓ You already have this skill from your current role"
							</div>
						}
					})}
				<h4>"Description:"</h4>
				<p class="skill-description">{node.description}</p>
				<h4>"Related Courses:"</h4>
				{courses}
			</div>
		</aside>
	}
}
