//! HTTP retrieval with `gloo-net`

use folio_core::Error;
use folio_core::dom::{RawResponse, TextSource};
use gloo_net::http::Request;

/// [`TextSource`] backed by the browser's `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl TextSource for HttpSource {
    async fn get(&self, url: &str) -> folio_core::Result<RawResponse> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| Error::transport(url, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::decode(url, e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
