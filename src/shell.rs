//! State of the presentation shell: which page is showing and what the two
//! role inputs hold.
//!
//! The shell state is a plain value. UI events become [`ShellAction`]s and
//! [`ShellState::reduce`] returns the next state.

use crate::pathway::PathwayRequest;

/// Most suggestions shown under a role input.
pub const SUGGESTION_LIMIT: usize = 10;

/// Pages reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
	/// Landing page.
	#[default]
	Home,
	/// Pathway graph.
	ComplexMap,
	/// Placeholder map.
	BasicMap,
	/// Stats comparison.
	JobStats,
}

impl Page {
	/// Navigation order.
	pub const ALL: [Page; 4] = [Self::Home, Self::ComplexMap, Self::BasicMap, Self::JobStats];

	/// Heading of the page.
	pub fn title(self) -> &'static str {
		match self {
			Self::Home => "Skill Mapper",
			Self::ComplexMap => "Complex Skill Map",
			Self::BasicMap => "Basic Course Map",
			Self::JobStats => "Career Stats Comparison",
		}
	}

	/// Text of the navigation button.
	pub fn nav_label(self) -> &'static str {
		match self {
			Self::Home => "Home",
			Self::ComplexMap => "Complex Map",
			Self::BasicMap => "Basic Map",
			Self::JobStats => "Job Stats",
		}
	}

	/// Pages that show the role inputs above their content.
	pub fn has_role_inputs(self) -> bool {
		!matches!(self, Self::Home)
	}
}

/// One of the two role inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoleField {
	/// The role held today.
	Current,
	/// The role aimed for.
	Dream,
}

impl RoleField {
	/// Field label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Current => "Current Role",
			Self::Dream => "Dream Role",
		}
	}

	/// Text of the field's submit button.
	pub fn submit_label(self) -> &'static str {
		match self {
			Self::Current => "Submit Current Role",
			Self::Dream => "Submit Dream Role",
		}
	}

	/// Placeholder of the empty field.
	pub fn placeholder(self) -> &'static str {
		match self {
			Self::Current => "e.g. Software Developers",
			Self::Dream => "e.g. Data Scientists",
		}
	}
}

/// One role input box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleInput {
	/// What the box shows.
	pub text: String,
	/// Last submitted title. Only counts while it still equals `text`.
	pub submitted: Option<String>,
	/// Whether the box has focus.
	pub focused: bool,
}

impl RoleInput {
	/// Locked by a submit.
	pub fn is_submitted(&self) -> bool {
		self.submitted.as_deref() == Some(self.text.as_str())
	}

	fn submitted_title(&self) -> Option<&str> {
		self.is_submitted().then_some(self.text.as_str())
	}
}

/// UI events fed to [`ShellState::reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
	/// Switch page.
	Navigate(Page),
	/// Typing into an unlocked field.
	Edit(RoleField, String),
	/// Open the field's suggestions.
	Focus(RoleField),
	/// Close the field's suggestions.
	Blur(RoleField),
	/// A suggestion was picked: fill the field and close the list.
	Select(RoleField, String),
	/// Lock the field if its title is valid.
	Submit(RoleField),
	/// "Change Role": forget the submission so the field can be edited.
	Revert(RoleField),
	/// Job titles arrived from the backend.
	DirectoryLoaded(Vec<String>),
}

/// Everything the shell renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
	/// Visible page.
	pub page: Page,
	/// Current role input.
	pub current: RoleInput,
	/// Dream role input.
	pub dream: RoleInput,
	/// Known job titles; empty until loaded or when unavailable.
	pub directory: Vec<String>,
}

impl ShellState {
	/// Input behind `field`.
	pub fn field(&self, field: RoleField) -> &RoleInput {
		match field {
			RoleField::Current => &self.current,
			RoleField::Dream => &self.dream,
		}
	}

	fn field_mut(&mut self, field: RoleField) -> &mut RoleInput {
		match field {
			RoleField::Current => &mut self.current,
			RoleField::Dream => &mut self.dream,
		}
	}

	/// A title is accepted when the directory knows it. With no directory
	/// at all, any non-blank title is accepted.
	pub fn is_valid_title(&self, title: &str) -> bool {
		let title = title.trim();
		if title.is_empty() {
			return false;
		}
		self.directory.is_empty() || self.directory.iter().any(|t| t == title)
	}

	/// Whether `field`'s submit button is enabled.
	pub fn can_submit(&self, field: RoleField) -> bool {
		let input = self.field(field);
		!input.is_submitted() && self.is_valid_title(&input.text)
	}

	/// Suggestions to show under `field`; empty unless it is focused and
	/// still editable.
	pub fn suggestions(&self, field: RoleField) -> Vec<String> {
		let input = self.field(field);
		if !input.focused || input.is_submitted() {
			return Vec::new();
		}
		filter_suggestions(&self.directory, &input.text, SUGGESTION_LIMIT)
	}

	/// Both roles, once both are submitted.
	pub fn submitted_pair(&self) -> Option<PathwayRequest> {
		PathwayRequest::new(
			self.current.submitted_title()?,
			self.dream.submitted_title()?,
		)
	}

	/// Next state after `action`.
	pub fn reduce(mut self, action: ShellAction) -> Self {
		match action {
			ShellAction::Navigate(page) => self.page = page,
			ShellAction::Edit(field, text) => {
				let input = self.field_mut(field);
				if !input.is_submitted() {
					input.text = text;
				}
			}
			ShellAction::Focus(field) => self.field_mut(field).focused = true,
			ShellAction::Blur(field) => self.field_mut(field).focused = false,
			ShellAction::Select(field, title) => {
				let input = self.field_mut(field);
				if !input.is_submitted() {
					input.text = title;
					input.focused = false;
				}
			}
			ShellAction::Submit(field) => {
				if self.can_submit(field) {
					let input = self.field_mut(field);
					input.text = input.text.trim().to_string();
					input.submitted = Some(input.text.clone());
					input.focused = false;
				}
			}
			ShellAction::Revert(field) => self.field_mut(field).submitted = None,
			ShellAction::DirectoryLoaded(jobs) => self.directory = jobs,
		}
		self
	}
}

/// Case-insensitive substring matches of `query`, in directory order. A blank
/// query matches nothing.
pub fn filter_suggestions(directory: &[String], query: &str, limit: usize) -> Vec<String> {
	let query = query.trim().to_lowercase();
	if query.is_empty() {
		return Vec::new();
	}
	directory
		.iter()
		.filter(|title| title.to_lowercase().contains(&query))
		.take(limit)
		.cloned()
		.collect()
}
