//! JSON retrieval with a typed outcome
//!
//! [`fetch_json`] tells callers exactly how a request failed.
//! [`fetch_json_or_none`] keeps the older page contract: any failure is
//! reported once on the diagnostic channel and the caller gets `None`.

use serde::de::DeserializeOwned;

use crate::diagnostics::Diagnostics;
use crate::dom::{RawResponse, TextSource};
use crate::error::{Error, Result};
use crate::result::ResultExt;

/// Outcome of a JSON request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// 2xx response with a body that parsed as `T`
    Success(T),
    /// HTTP 404
    NotFound,
    /// Any other non-2xx status
    HttpStatus(u16),
    /// The request never completed
    TransportError(String),
    /// The body could not be read or did not parse as `T`
    ParseError(String),
}

impl<T: DeserializeOwned> FetchOutcome<T> {
    /// Classify a completed response.
    ///
    /// Bodies nested deeper than `serde_json`'s recursion limit (128
    /// levels) are rejected as [`FetchOutcome::ParseError`] rather than
    /// risking stack exhaustion in the browser.
    #[must_use]
    pub fn from_response(response: &RawResponse) -> Self {
        match response.status {
            _ if response.is_ok() => match serde_json::from_str(&response.body) {
                Ok(value) => Self::Success(value),
                Err(e) => Self::ParseError(e.to_string()),
            },
            404 => Self::NotFound,
            status => Self::HttpStatus(status),
        }
    }
}

impl<T> FetchOutcome<T> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Convert to a [`Result`] carrying `url` in the error.
    ///
    /// # Errors
    ///
    /// Every non-success variant maps to its matching [`Error`].
    pub fn into_result(self, url: &str) -> Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::NotFound => Err(Error::not_found(url)),
            Self::HttpStatus(status) => Err(Error::http_status(url, status)),
            Self::TransportError(reason) => Err(Error::transport(url, reason)),
            Self::ParseError(reason) => Err(Error::json_parse_failed(url, reason)),
        }
    }

    /// Collapse to an `Option`, reporting one diagnostic on failure.
    pub fn into_option<D: Diagnostics + ?Sized>(self, url: &str, diagnostics: &D) -> Option<T> {
        self.into_result(url)
            .into_option_reported(diagnostics, &format!("Failed to fetch JSON from {url}"))
    }
}

/// GET `url` and parse the body as JSON.
pub async fn fetch_json<T, S>(source: &S, url: &str) -> FetchOutcome<T>
where
    T: DeserializeOwned,
    S: TextSource,
{
    match source.get(url).await {
        Ok(response) => {
            tracing::debug!(url, status = response.status, "JSON response received");
            FetchOutcome::from_response(&response)
        }
        Err(Error::Decode { reason, .. }) => FetchOutcome::ParseError(reason),
        Err(e) => FetchOutcome::TransportError(e.to_string()),
    }
}

/// GET `url` and parse the body as JSON, yielding `None` on any failure.
pub async fn fetch_json_or_none<T, S, D>(source: &S, url: &str, diagnostics: &D) -> Option<T>
where
    T: DeserializeOwned,
    S: TextSource,
    D: Diagnostics + ?Sized,
{
    fetch_json(source, url).await.into_option(url, diagnostics)
}
