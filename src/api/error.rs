//! Errors raised while talking to the backend.

use thiserror::Error;

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
	/// The request never completed.
	#[error("request to {url} failed: {message}")]
	Network {
		/// Requested url.
		url: String,
		/// Browser-side reason.
		message: String,
	},

	/// The server answered outside the 2xx range.
	#[error("{url} answered {status} {status_text}")]
	Status {
		/// Requested url.
		url: String,
		/// HTTP status code.
		status: u16,
		/// Reason phrase sent with the status.
		status_text: String,
	},

	/// The body was not the JSON we expected.
	#[error("could not decode response from {url}: {message}")]
	Decode {
		/// Requested url.
		url: String,
		/// Decoder error.
		message: String,
	},

	/// The base url cannot take path segments.
	#[error("cannot build request url: {0}")]
	InvalidUrl(String),
}

impl FetchError {
	/// HTTP status, when the server answered at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// True when the response arrived but its body was unusable.
	pub fn is_decode(&self) -> bool {
		matches!(self, Self::Decode { .. })
	}
}
