//! Fragment loader
//!
//! Fills placeholder containers with shared page fragments. Each slot is an
//! independent task: a missing container is skipped silently, a failed fetch
//! is reported and leaves the container untouched, and nothing is retried.
//! The fetched markup is inserted verbatim whatever the HTTP status.

use futures::future::join_all;

use crate::config::FragmentSlot;
use crate::diagnostics::Diagnostics;
use crate::dom::{DomHost, TextSource};

/// What happened to one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Container filled with `bytes` of markup
    Loaded { bytes: usize },
    /// No element matched the selector
    MissingContainer,
    /// Lookup or fetch failed; container left as it was
    Failed { reason: String },
}

/// Per-slot result of a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub selector: String,
    pub url: String,
    pub status: LoadStatus,
}

impl LoadReport {
    fn new(slot: &FragmentSlot, status: LoadStatus) -> Self {
        Self {
            selector: slot.selector.clone(),
            url: slot.url.clone(),
            status,
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded { .. })
    }
}

/// Counts across a batch of reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub missing: usize,
    pub failed: usize,
}

impl LoadSummary {
    #[must_use]
    pub fn from_reports(reports: &[LoadReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |summary, report| match report.status {
                LoadStatus::Loaded { .. } => Self {
                    loaded: summary.loaded.saturating_add(1),
                    ..summary
                },
                LoadStatus::MissingContainer => Self {
                    missing: summary.missing.saturating_add(1),
                    ..summary
                },
                LoadStatus::Failed { .. } => Self {
                    failed: summary.failed.saturating_add(1),
                    ..summary
                },
            })
    }
}

impl std::fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} loaded, {} missing, {} failed",
            self.loaded, self.missing, self.failed
        )
    }
}

/// Fill one container with the fragment at `slot.url`.
pub async fn load_component<H, S, D>(
    host: &H,
    source: &S,
    diagnostics: &D,
    slot: &FragmentSlot,
) -> LoadReport
where
    H: DomHost,
    S: TextSource,
    D: Diagnostics + ?Sized,
{
    let container = match host.query(&slot.selector) {
        Ok(Some(container)) => container,
        Ok(None) => {
            tracing::debug!(selector = %slot.selector, "no container, skipping fragment");
            return LoadReport::new(slot, LoadStatus::MissingContainer);
        }
        Err(e) => {
            diagnostics.error(&format!("Failed to load {}: {e}", slot.url));
            return LoadReport::new(slot, LoadStatus::Failed { reason: e.to_string() });
        }
    };

    match source.get(&slot.url).await {
        Ok(response) => {
            host.set_inner_html(&container, &response.body);
            tracing::debug!(
                selector = %slot.selector,
                url = %slot.url,
                status = response.status,
                "fragment loaded"
            );
            LoadReport::new(
                slot,
                LoadStatus::Loaded {
                    bytes: response.body.len(),
                },
            )
        }
        Err(e) => {
            diagnostics.error(&format!("Failed to load {}: {e}", slot.url));
            LoadReport::new(slot, LoadStatus::Failed { reason: e.to_string() })
        }
    }
}

/// Load every slot concurrently. Reports come back in slot order.
pub async fn load_components<H, S, D>(
    host: &H,
    source: &S,
    diagnostics: &D,
    slots: &[FragmentSlot],
) -> Vec<LoadReport>
where
    H: DomHost,
    S: TextSource,
    D: Diagnostics + ?Sized,
{
    join_all(
        slots
            .iter()
            .map(|slot| load_component(host, source, diagnostics, slot)),
    )
    .await
}
