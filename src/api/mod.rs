//! HTTP/JSON access to the pathway backend.

mod client;
mod error;
mod transport;
pub mod types;

pub use client::{ApiClient, PathwayBackend};
pub use error::FetchError;
pub use transport::{BrowserTransport, HttpResponse, Transport};
pub use types::{JobDirectory, RawCourse, RawEdge, RawNode, RawPathwayPayload};
