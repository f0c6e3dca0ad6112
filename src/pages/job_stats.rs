//! Career statistics compared between the two roles.

use leptos::prelude::*;

use crate::pathway::PathwayRequest;
use crate::stats::{self, Better};

/// Side-by-side labour statistics for the submitted roles.
#[component]
pub fn JobStats(#[prop(into)] pair: Signal<Option<PathwayRequest>>) -> impl IntoView {
	let content = move || {
		let Some(request) = pair.get() else {
			return view! {
				<div class="status-panel">
					<p class="status-title">"Awaiting Role Submissions"</p>
					<p>
						"Select and submit your Current Role and Dream Role in the header above to view comparison statistics."
					</p>
				</div>
			}
			.into_any();
		};
		let Some(rows) = stats::comparison(&request.current_job, &request.dream_job) else {
			return view! {
				<div class="status-panel">
					<p class="status-title">"Role data not found."</p>
					<p>"Statistics are available for Software Developers, Data Scientists, Computer Systems Analysts and Financial Analysts."</p>
				</div>
			}
			.into_any();
		};

		view! {
			<table class="stats-table">
				<thead>
					<tr>
						<th>"Metric"</th>
						<th>{request.current_job}</th>
						<th>{request.dream_job}</th>
					</tr>
				</thead>
				<tbody>
					{rows
						.into_iter()
						.map(|row| {
							view! {
								<tr>
									<td class="stat-label">{row.metric.label()}</td>
									<td class="stat-value" class:highlighted={row.better == Better::Current}>
										{row.current}
									</td>
									<td class="stat-value" class:highlighted={row.better == Better::Dream}>
										{row.dream}
									</td>
								</tr>
							}
						})
						.collect_view()}
				</tbody>
			</table>
			<p class="stat-note">"Note: figures are illustrative labour-market data for the demo roles."</p>
		}
		.into_any()
	};

	view! {
		<div class="main-content">
			<div class="map-heading">
				<h1>"BLS Career Outlook Comparison"</h1>
				<p class="subtitle">
					"Compare key statistics from the Bureau of Labor Statistics for your current and dream roles."
				</p>
			</div>
			{content}
		</div>
	}
}
