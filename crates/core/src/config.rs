//! Site configuration
//!
//! The fragment mapping and helper defaults are plain data handed to the
//! loader at startup. Every section is optional in TOML; anything left out
//! takes the built-in default.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default class applied by `show_message`
pub const DEFAULT_MESSAGE_KIND: &str = "success";

/// Default time a message stays visible
pub const DEFAULT_MESSAGE_DURATION_MS: u32 = 3000;

/// Default quiet period for debounced callbacks
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// A placeholder container and the fragment that fills it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSlot {
    /// CSS selector of the container
    pub selector: String,
    /// Resource locator of the fragment markup
    pub url: String,
}

impl FragmentSlot {
    pub fn new(selector: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            url: url.into(),
        }
    }
}

/// Defaults for transient messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageDefaults {
    pub kind: String,
    pub duration_ms: u32,
}

impl Default for MessageDefaults {
    fn default() -> Self {
        Self {
            kind: DEFAULT_MESSAGE_KIND.to_string(),
            duration_ms: DEFAULT_MESSAGE_DURATION_MS,
        }
    }
}

/// Defaults for debounced callbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceDefaults {
    pub wait_ms: u32,
}

impl Default for DebounceDefaults {
    fn default() -> Self {
        Self {
            wait_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Everything the page glue needs at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub fragments: Vec<FragmentSlot>,
    pub message: MessageDefaults,
    pub debounce: DebounceDefaults,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fragments: default_fragments(),
            message: MessageDefaults::default(),
            debounce: DebounceDefaults::default(),
        }
    }
}

/// The header, footer and optional sidebar every page shares.
#[must_use]
pub fn default_fragments() -> Vec<FragmentSlot> {
    vec![
        FragmentSlot::new("header", "components/header.html"),
        FragmentSlot::new("footer", "components/footer.html"),
        FragmentSlot::new(".sidebar-container", "components/sidebar.html"),
    ]
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TomlParseFailed`] for malformed TOML and
    /// [`Error::InvalidConfig`] if validation fails.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| Error::toml_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every slot is usable and slots target disjoint containers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending slot.
    pub fn validate(&self) -> Result<()> {
        if let Some(slot) = self
            .fragments
            .iter()
            .find(|slot| slot.selector.trim().is_empty())
        {
            return Err(Error::invalid_config(format!(
                "fragment '{}' has an empty selector",
                slot.url
            )));
        }

        if let Some(slot) = self.fragments.iter().find(|slot| slot.url.trim().is_empty()) {
            return Err(Error::invalid_config(format!(
                "selector '{}' has an empty fragment url",
                slot.selector
            )));
        }

        if let Some(selector) = self
            .fragments
            .iter()
            .map(|slot| slot.selector.as_str())
            .duplicates()
            .next()
        {
            return Err(Error::invalid_config(format!(
                "selector '{selector}' is mapped more than once"
            )));
        }

        if self.message.kind.chars().any(char::is_whitespace) {
            return Err(Error::invalid_config(format!(
                "message kind '{}' must be a single class name",
                self.message.kind
            )));
        }

        Ok(())
    }
}
