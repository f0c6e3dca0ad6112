//! HTTP seam between the API client and the browser.

use gloo_net::http::Request;
use url::Url;

use super::error::FetchError;

/// Status line and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Reason phrase, possibly empty.
	pub status_text: String,
	/// Body as text.
	pub body: String,
}

impl HttpResponse {
	/// True for any 2xx status.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Performs a GET and hands back the raw response.
///
/// Only transport-level failures are errors here; status handling belongs to
/// the caller.
#[allow(async_fn_in_trait)]
pub trait Transport {
	/// GET `url`.
	async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

/// `fetch()` through gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
	async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
		let network = |e: gloo_net::Error| FetchError::Network {
			url: url.to_string(),
			message: e.to_string(),
		};
		let response = Request::get(url.as_str()).send().await.map_err(network)?;
		let status = response.status();
		let status_text = response.status_text();
		let body = response.text().await.map_err(network)?;
		Ok(HttpResponse {
			status,
			status_text,
			body,
		})
	}
}
