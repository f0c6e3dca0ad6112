//! Client for the job directory and pathway endpoints.

use log::{info, warn};
use url::Url;

use super::error::FetchError;
use super::transport::{BrowserTransport, HttpResponse, Transport};
use super::types::{JobDirectory, RawPathwayPayload};
use crate::config::AppConfig;

/// Anything that can produce a pathway payload for a pair of roles.
#[allow(async_fn_in_trait)]
pub trait PathwayBackend {
	/// Pathway between `job1` (current role) and `job2` (dream role).
	async fn fetch_pathway(
		&self,
		job1: &str,
		job2: &str,
	) -> Result<RawPathwayPayload, FetchError>;
}

/// Typed access to the backend's `/jobs`, `/pathway` and `/docs` endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
	base: Url,
	transport: T,
}

impl ApiClient<BrowserTransport> {
	/// Client that talks to the configured backend through `fetch()`.
	pub fn for_browser(config: &AppConfig) -> Self {
		Self::new(config, BrowserTransport)
	}
}

impl<T: Transport> ApiClient<T> {
	/// Client over an arbitrary transport.
	pub fn new(config: &AppConfig, transport: T) -> Self {
		Self {
			base: config.backend_url.clone(),
			transport,
		}
	}

	/// Backend base url.
	pub fn base_url(&self) -> &Url {
		&self.base
	}

	/// Append path segments to the base url, percent-encoding each one.
	fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
		let mut url = self.base.clone();
		{
			let mut path = url
				.path_segments_mut()
				.map_err(|_| FetchError::InvalidUrl(self.base.to_string()))?;
			path.pop_if_empty();
			for segment in segments {
				path.push(segment);
			}
		}
		Ok(url)
	}

	/// `{base}/jobs`.
	pub fn jobs_url(&self) -> Result<Url, FetchError> {
		self.endpoint(&["jobs"])
	}

	/// `{base}/pathway/{job1}/{job2}`, with both titles encoded as single segments.
	pub fn pathway_url(&self, job1: &str, job2: &str) -> Result<Url, FetchError> {
		self.endpoint(&["pathway", job1, job2])
	}

	async fn get_ok(&self, url: &Url) -> Result<HttpResponse, FetchError> {
		let response = self.transport.get(url).await?;
		if !response.is_success() {
			return Err(FetchError::Status {
				url: url.to_string(),
				status: response.status,
				status_text: response.status_text,
			});
		}
		Ok(response)
	}

	/// Job titles known to the backend.
	///
	/// The directory only feeds autocomplete, so any failure degrades to an
	/// empty list instead of blocking the page.
	pub async fn list_jobs(&self) -> Vec<String> {
		match self.try_list_jobs().await {
			Ok(jobs) => {
				info!("job directory loaded: {} titles", jobs.len());
				jobs
			}
			Err(e) => {
				warn!("job directory unavailable: {}", e);
				Vec::new()
			}
		}
	}

	/// Like [`list_jobs`](Self::list_jobs), but failures are returned.
	pub async fn try_list_jobs(&self) -> Result<Vec<String>, FetchError> {
		let url = self.jobs_url()?;
		let response = self.get_ok(&url).await?;
		let directory: JobDirectory =
			serde_json::from_str(&response.body).map_err(|e| FetchError::Decode {
				url: url.to_string(),
				message: e.to_string(),
			})?;
		if let Some(error) = &directory.error {
			warn!("job directory reported an error: {}", error);
		}
		Ok(directory.jobs.unwrap_or_default())
	}

	/// Raw pathway graph between two roles.
	///
	/// A 2xx body carrying an `error` field is still returned; rejecting it is
	/// the transform's job.
	pub async fn fetch_pathway(
		&self,
		job1: &str,
		job2: &str,
	) -> Result<RawPathwayPayload, FetchError> {
		let url = self.pathway_url(job1, job2)?;
		let response = self.get_ok(&url).await?;
		serde_json::from_str(&response.body).map_err(|e| FetchError::Decode {
			url: url.to_string(),
			message: e.to_string(),
		})
	}

	/// Whether the backend answers at all (its `/docs` page).
	pub async fn check_health(&self) -> bool {
		let Ok(url) = self.endpoint(&["docs"]) else {
			return false;
		};
		match self.transport.get(&url).await {
			Ok(response) => response.is_success(),
			Err(e) => {
				warn!("backend health check failed: {}", e);
				false
			}
		}
	}
}

impl<T: Transport> PathwayBackend for ApiClient<T> {
	async fn fetch_pathway(
		&self,
		job1: &str,
		job2: &str,
	) -> Result<RawPathwayPayload, FetchError> {
		Self::fetch_pathway(self, job1, job2).await
	}
}
