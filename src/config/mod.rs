//! Site descriptor management.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Descriptor section definitions
//! │   ├── nav        # theme.nav entries
//! │   ├── sidebar    # theme.sidebar table and resolution
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util           # External-link detection, descriptor discovery
//! └── mod.rs         # SiteDescriptor / SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! A descriptor is parsed permissively ([`SiteDescriptor`]), then validated
//! in one pass that collects every problem before failing, and finally
//! converted into the immutable [`SiteConfig`] the build engine consumes.

pub mod section;
pub mod types;
pub mod util;

// Re-export from section/
pub use section::{
    FALLBACK_PREFIX, NavEntry, NavItem, PageRef, SidebarItems, SidebarMap, SidebarSection,
    ThemeConfig, ThemeDescriptor,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{ffi::OsStr, fs, path::Path};

const F_TITLE: FieldPath = FieldPath::new("title");
const F_BASE: FieldPath = FieldPath::new("base");

// ============================================================================
// raw descriptor
// ============================================================================

/// Site descriptor as parsed from `sitenav.toml` (or a JSON equivalent).
///
/// All fields are defaulted so that parsing stays permissive; required
/// fields are enforced by [`SiteDescriptor::load`], which reports every
/// missing or malformed value in a single diagnostics pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDescriptor {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// URL path prefix the site is served under (e.g. "/docs/").
    pub base: String,

    /// Navigation, sidebar, and cosmetic options.
    pub theme: ThemeDescriptor,
}

impl SiteDescriptor {
    /// Parse a TOML descriptor with unknown field detection.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (descriptor, ignored) = Self::parse_toml_with_ignored(content)?;
        warn_unknown_fields(&ignored);
        Ok(descriptor)
    }

    /// Parse a JSON descriptor with unknown field detection.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let (descriptor, ignored) = Self::parse_json_with_ignored(content)?;
        warn_unknown_fields(&ignored);
        Ok(descriptor)
    }

    /// Read a descriptor file, dispatching on the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        crate::debug!("config"; "reading descriptor from {}", path.display());

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Self::from_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigError::Format(path.to_path_buf())),
        }
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_toml_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let descriptor = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((descriptor, ignored))
    }

    /// Parse JSON content, collecting any unknown fields.
    fn parse_json_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let descriptor =
            serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })?;
        Ok((descriptor, ignored))
    }

    /// Validate the descriptor and build the immutable [`SiteConfig`].
    ///
    /// Collects all validation errors and returns them at once; a failed
    /// load leaves nothing half-configured.
    pub fn load(&self) -> Result<SiteConfig, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.validate_metadata(&mut diag);
        self.theme.sidebar.validate(&mut diag);

        let mut nav = Vec::with_capacity(self.theme.nav.len());
        for item in &self.theme.nav {
            if let Some(entry) = item.resolve(&mut diag) {
                nav.push(entry);
            }
        }

        diag.into_result().map_err(ConfigError::Diagnostics)?;

        Ok(SiteConfig {
            title: self.title.clone(),
            description: self.description.clone(),
            base: self.base.clone(),
            theme: ThemeConfig {
                last_updated: self.theme.last_updated.clone(),
                nav,
                sidebar: SidebarMap::from_items(&self.theme.sidebar),
            },
        })
    }

    /// Validate top-level site metadata.
    fn validate_metadata(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(F_TITLE, "required field is missing or empty");
        }

        if self.base.is_empty() {
            diag.error_with_hint(
                F_BASE,
                "required field is missing or empty",
                "set the URL path prefix the site is served under, e.g. \"/docs/\"",
            );
        } else if util::is_external_link(&self.base) {
            diag.error_with_hint(
                F_BASE,
                format!("`{}` is a full URL, expected a path prefix", self.base),
                "keep only the path component, e.g. \"/docs/\"",
            );
        } else if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                F_BASE,
                format!("`{}` is not a well-formed path prefix", self.base),
                "a base path starts and ends with '/', e.g. \"/docs/\"",
            );
        }
    }
}

/// Warn about descriptor fields no struct consumed.
///
/// Unknown fields are authoring mistakes more often than forward
/// compatibility, but they never invalidate the descriptor.
fn warn_unknown_fields(fields: &[String]) {
    if fields.is_empty() {
        return;
    }
    log!("warning"; "unknown descriptor fields, ignoring:");
    for field in fields {
        eprintln!("- {field}");
    }
}

// ============================================================================
// validated configuration
// ============================================================================

/// Validated, immutable site configuration handed to the build engine.
///
/// Constructed once by [`SiteDescriptor::load`] at build start and read-only
/// afterwards; share it by reference across any number of workers. It
/// serializes back to descriptor-shaped output, so a round trip through
/// [`SiteDescriptor::from_str`] and [`SiteDescriptor::load`] yields an equal
/// value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// URL path prefix the site is served under.
    pub base: String,

    /// Validated navigation, sidebar, and cosmetic options.
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Resolve the sidebar section for a request path.
    ///
    /// Longest-prefix match over the declared prefixes, with the `"/"`
    /// entry as fallback. See [`SidebarMap::resolve`].
    pub fn resolve_sidebar(&self, request_path: &str) -> &SidebarSection {
        self.theme.sidebar.resolve(request_path)
    }

    /// Prefix an internal page path with the configured base path.
    ///
    /// External URLs pass through unchanged; the navigation bar may point
    /// anywhere.
    pub fn base_join(&self, link: &str) -> String {
        if util::is_external_link(link) {
            return link.to_string();
        }

        // `base` is validated to end with '/'
        let trimmed = link.trim_start_matches('/');
        if trimmed.is_empty() {
            return self.base.clone();
        }
        format!("{}{}", self.base, trimmed)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a descriptor with the minimal required metadata plus `extra`.
/// Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_descriptor(extra: &str) -> SiteDescriptor {
    let content = format!("title = \"Test\"\ndescription = \"Test\"\nbase = \"/\"\n{extra}");
    let (descriptor, ignored) = SiteDescriptor::parse_toml_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test descriptor has unknown fields: {:?}",
        ignored
    );
    descriptor
}

// ============================================================================
// tests
// ============================================================================
