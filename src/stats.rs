//! Labour-market figures for the career comparison page.
//!
//! The figures are a fixed table for the demo roles. For every numeric
//! metric the better of the two roles is highlighted; education is text and
//! never compared.

use std::cmp::Ordering;

/// A row of the comparison table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
	/// Median annual wage.
	MedianWage,
	/// Projected ten-year growth.
	JobGrowth,
	/// Employment count.
	TotalJobs,
	/// Typical entry-level education.
	Education,
}

impl Metric {
	/// Table order.
	pub const ALL: [Metric; 4] = [
		Self::MedianWage,
		Self::JobGrowth,
		Self::TotalJobs,
		Self::Education,
	];

	/// Row heading.
	pub fn label(self) -> &'static str {
		match self {
			Self::MedianWage => "Median Annual Wage",
			Self::JobGrowth => "Projected Job Growth (2022-32)",
			Self::TotalJobs => "Total Number of Jobs",
			Self::Education => "Typical Entry-Level Education",
		}
	}

	fn is_numeric(self) -> bool {
		!matches!(self, Self::Education)
	}
}

/// Figures for one role, as display text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobStats {
	/// e.g. `"$130,160"`.
	pub median_wage: &'static str,
	/// e.g. `"1,795,300"`.
	pub total_jobs: &'static str,
	/// e.g. `"25%"`.
	pub job_growth: &'static str,
	/// Free text.
	pub education: &'static str,
}

impl JobStats {
	/// Display value of `metric`.
	pub fn value(&self, metric: Metric) -> &'static str {
		match metric {
			Metric::MedianWage => self.median_wage,
			Metric::JobGrowth => self.job_growth,
			Metric::TotalJobs => self.total_jobs,
			Metric::Education => self.education,
		}
	}
}

const TABLE: &[(&str, JobStats)] = &[
	(
		"Software Developers",
		JobStats {
			median_wage: "$130,160",
			total_jobs: "1,800,000",
			job_growth: "25%",
			education: "Bachelor's degree",
		},
	),
	(
		"Data Scientists",
		JobStats {
			median_wage: "$103,500",
			total_jobs: "179,000",
			job_growth: "35%",
			education: "Master's degree",
		},
	),
	(
		"Computer Systems Analysts",
		JobStats {
			median_wage: "$102,280",
			total_jobs: "619,000",
			job_growth: "10%",
			education: "Bachelor's degree",
		},
	),
	(
		"Financial Analysts",
		JobStats {
			median_wage: "$99,880",
			total_jobs: "360,000",
			job_growth: "8%",
			education: "Bachelor's degree",
		},
	),
];

/// Figures for an exact (trimmed) role title.
pub fn lookup(role: &str) -> Option<&'static JobStats> {
	let role = role.trim();
	TABLE.iter().find(|(name, _)| *name == role).map(|(_, s)| s)
}

/// Number inside a display value: `"$130,160"` is 130160, `"25%"` is 25.
pub fn parse_numeric(value: &str) -> Option<f64> {
	let digits: String = value
		.chars()
		.filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
		.collect();
	digits.parse().ok()
}

/// Which side of a comparison to highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Better {
	/// Current role's value is higher.
	Current,
	/// Dream role's value is higher.
	Dream,
	/// Tie, text metric or unparsable value.
	Neither,
}

/// Higher is better for every numeric metric. Ties and unparsable values
/// highlight neither side.
pub fn compare(metric: Metric, current: &str, dream: &str) -> Better {
	if !metric.is_numeric() {
		return Better::Neither;
	}
	let (Some(a), Some(b)) = (parse_numeric(current), parse_numeric(dream)) else {
		return Better::Neither;
	};
	match a.partial_cmp(&b) {
		Some(Ordering::Greater) => Better::Current,
		Some(Ordering::Less) => Better::Dream,
		_ => Better::Neither,
	}
}

/// One metric for both roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
	/// Row metric.
	pub metric: Metric,
	/// Current role's value.
	pub current: &'static str,
	/// Dream role's value.
	pub dream: &'static str,
	/// Side to highlight.
	pub better: Better,
}

/// One row per metric, or `None` if either role has no figures.
pub fn comparison(current_role: &str, dream_role: &str) -> Option<Vec<ComparisonRow>> {
	let (current, dream) = (lookup(current_role)?, lookup(dream_role)?);
	Some(
		Metric::ALL
			.into_iter()
			.map(|metric| {
				let (a, b) = (current.value(metric), dream.value(metric));
				ComparisonRow {
					metric,
					current: a,
					dream: b,
					better: compare(metric, a, b),
				}
			})
			.collect(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_currency_counts_and_percentages() {
		assert_eq!(parse_numeric("$130,160"), Some(130160.0));
		assert_eq!(parse_numeric("1,800,000"), Some(1_800_000.0));
		assert_eq!(parse_numeric("25%"), Some(25.0));
		assert_eq!(parse_numeric("Bachelor's degree"), None);
	}

	#[test]
	fn higher_number_wins() {
		assert_eq!(compare(Metric::MedianWage, "$130,160", "$103,500"), Better::Current);
		assert_eq!(compare(Metric::JobGrowth, "25%", "35%"), Better::Dream);
		assert_eq!(compare(Metric::TotalJobs, "10", "10"), Better::Neither);
	}

	#[test]
	fn education_is_never_highlighted() {
		assert_eq!(
			compare(Metric::Education, "Master's degree", "Bachelor's degree"),
			Better::Neither
		);
	}

	#[test]
	fn comparison_covers_every_metric() {
		let rows = comparison("Software Developers", "Data Scientists").unwrap();
		assert_eq!(rows.len(), Metric::ALL.len());
		assert_eq!(rows[0].metric.label(), "Median Annual Wage");
		assert_eq!(rows[0].better, Better::Current);
		assert_eq!(rows[1].better, Better::Dream);
		assert_eq!(rows[3].better, Better::Neither);
	}

	#[test]
	fn unknown_role_has_no_comparison() {
		assert!(comparison("Software Developers", "Astronauts").is_none());
		assert!(lookup(" Financial Analysts ").is_some());
	}
}
