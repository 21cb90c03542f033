//! Integration tests for page startup
//!
//! Drives the public API the way the browser entry point does: parse the
//! site config, load every fragment, then summarize.

use folio_core::diagnostics::MemoryDiagnostics;
use folio_core::dom::RawResponse;
use folio_core::loader::{LoadStatus, LoadSummary, load_components};
use folio_core::testing::{FakeDom, StubSource};
use folio_core::{ResultExt, SiteConfig};

const SITE_TOML: &str = r#"
[[fragments]]
selector = "header"
url = "components/header.html"

[[fragments]]
selector = "footer"
url = "components/footer.html"

[[fragments]]
selector = ".sidebar-container"
url = "components/sidebar.html"

[message]
kind = "success"
duration_ms = 3000
"#;

#[tokio::test]
async fn test_startup_with_missing_sidebar() -> Result<(), String> {
    let config = SiteConfig::from_toml_str(SITE_TOML).map_err(|e| e.to_string())?;
    let dom = FakeDom::with_containers(&["header", "footer"]);
    let source = StubSource::new()
        .with_response("components/header.html", RawResponse::new(200, "<nav></nav>"))
        .with_response("components/footer.html", RawResponse::new(200, "<p>(c)</p>"))
        .with_response("components/sidebar.html", RawResponse::new(200, "<aside></aside>"));
    let diagnostics = MemoryDiagnostics::new();

    let reports = load_components(&dom, &source, &diagnostics, &config.fragments).await;

    assert_eq!(LoadSummary::from_reports(&reports).to_string(), "2 loaded, 1 missing, 0 failed");
    assert_eq!(dom.markup("header").as_deref(), Some("<nav></nav>"));
    assert_eq!(dom.markup("footer").as_deref(), Some("<p>(c)</p>"));
    assert!(diagnostics.errors().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_startup_with_broken_config_falls_back_to_defaults() -> Result<(), String> {
    let diagnostics = MemoryDiagnostics::new();
    let config = SiteConfig::from_toml_str("[[fragments]]\nselector = \"\"\nurl = \"x.html\"")
        .or_default_reported(&diagnostics, "Invalid site config", SiteConfig::default());

    assert_eq!(config, SiteConfig::default());
    assert_eq!(diagnostics.errors().len(), 1);

    let dom = FakeDom::with_containers(&["header", "footer", ".sidebar-container"]);
    let reports = load_components(&dom, &StubSource::new(), &diagnostics, &config.fragments).await;

    assert!(
        reports
            .iter()
            .all(|report| matches!(report.status, LoadStatus::Failed { .. }))
    );
    // One config diagnostic plus one per unreachable fragment
    assert_eq!(diagnostics.errors().len(), 4);
    Ok(())
}
