//! Backend location and the layers that may override it.
//!
//! Precedence, lowest first: the built-in default, the
//! `SKILL_MAPPER_BACKEND_URL` variable seen at build time, then a
//! `<script id="skill-mapper-config" type="application/json">` element in the
//! host page. A broken override is logged and skipped.

use log::warn;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Backend used when nothing overrides it.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Build-time environment variable naming the backend.
pub const BACKEND_URL_ENV: &str = "SKILL_MAPPER_BACKEND_URL";

/// Id of the optional JSON config element in the host page.
pub const CONFIG_ELEMENT_ID: &str = "skill-mapper-config";

/// Why a configured backend url was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Not a url at all.
	#[error("invalid backend url {url:?}: {source}")]
	InvalidUrl {
		/// The rejected text.
		url: String,
		/// Parser error.
		#[source]
		source: url::ParseError,
	},

	/// A url such as `mailto:` that cannot take a path.
	#[error("backend url {0:?} cannot carry path segments")]
	NotABase(String),

	/// The config element is not valid JSON.
	#[error("malformed config element: {0}")]
	Malformed(#[from] serde_json::Error),
}

/// Shape of the page-level config element.
#[derive(Debug, Default, Deserialize)]
struct PageConfig {
	#[serde(default)]
	backend_url: Option<String>,
}

/// Runtime configuration of the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
	/// Base url of the pathway backend.
	pub backend_url: Url,
}

impl AppConfig {
	/// Parse and validate a backend url.
	pub fn from_backend_url(raw: &str) -> Result<Self, ConfigError> {
		let backend_url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
			url: raw.to_string(),
			source,
		})?;
		if backend_url.cannot_be_a_base() {
			return Err(ConfigError::NotABase(raw.to_string()));
		}
		Ok(Self { backend_url })
	}

	/// Resolve the layered config. `page_json` is the text of the config
	/// element, if the host page has one.
	pub fn resolve(build_env: Option<&str>, page_json: Option<&str>) -> Self {
		let mut config = Self::default();

		if let Some(raw) = build_env.filter(|s| !s.trim().is_empty()) {
			match Self::from_backend_url(raw) {
				Ok(c) => config = c,
				Err(e) => warn!("ignoring {}: {}", BACKEND_URL_ENV, e),
			}
		}

		if let Some(json) = page_json.filter(|s| !s.trim().is_empty()) {
			match Self::from_page_json(json) {
				Ok(Some(c)) => config = c,
				Ok(None) => {}
				Err(e) => warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e),
			}
		}

		config
	}

	fn from_page_json(json: &str) -> Result<Option<Self>, ConfigError> {
		let page: PageConfig = serde_json::from_str(json)?;
		page.backend_url
			.as_deref()
			.map(Self::from_backend_url)
			.transpose()
	}

	/// Config for the running page: build env plus the DOM element.
	pub fn load() -> Self {
		Self::resolve(option_env!("SKILL_MAPPER_BACKEND_URL"), page_config_text().as_deref())
	}
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend url parses"),
		}
	}
}

fn page_config_text() -> Option<String> {
	use wasm_bindgen::JsCast;
	use web_sys::HtmlScriptElement;

	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_points_at_localhost() {
		let config = AppConfig::resolve(None, None);
		assert_eq!(config.backend_url.as_str(), "http://localhost:8000/");
	}

	#[test]
	fn build_env_overrides_default() {
		let config = AppConfig::resolve(Some("https://api.example.org/skills"), None);
		assert_eq!(config.backend_url.as_str(), "https://api.example.org/skills");
	}

	#[test]
	fn page_element_overrides_build_env() {
		let config = AppConfig::resolve(
			Some("https://build.example.org"),
			Some(r#"{"backend_url": "http://10.0.0.5:9000"}"#),
		);
		assert_eq!(config.backend_url.as_str(), "http://10.0.0.5:9000/");
	}

	#[test]
	fn broken_overrides_fall_through() {
		let config = AppConfig::resolve(Some("not a url"), Some("{ nope"));
		assert_eq!(config, AppConfig::default());

		let config = AppConfig::resolve(Some("http://keep.example.org"), Some(r#"{}"#));
		assert_eq!(config.backend_url.host_str(), Some("keep.example.org"));
	}

	#[test]
	fn rejects_urls_without_a_base() {
		assert!(matches!(
			AppConfig::from_backend_url("mailto:someone@example.org"),
			Err(ConfigError::NotABase(_))
		));
	}
}
