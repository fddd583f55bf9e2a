//! Navigation bar entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.nav]]
//! text = "Documentation"
//! items = [
//!     { text = "Installation", link = "/documentation/installation" },
//!     { text = "Reference", link = "/documentation/reference" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::is_external_link;

const FIELD: FieldPath = FieldPath::new("theme.nav");

// ============================================================================
// Raw entry
// ============================================================================

/// Navigation entry as written in the descriptor.
///
/// Carries both the `link` and the `items` shape; [`NavItem::resolve`]
/// enforces that exactly one of them is present before handing out the
/// tagged [`NavEntry`] form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display text shown in the navigation bar.
    #[serde(default)]
    pub text: String,

    /// Target of a plain link entry. Site-absolute path or full URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Sub-entries of a dropdown group entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavItem>>,
}

impl NavItem {
    /// Validate this raw entry and convert it to the tagged form.
    ///
    /// Returns `None` when the entry shape is unusable; the failure is
    /// recorded in `diag`, so the caller bails once after the whole pass.
    pub fn resolve(&self, diag: &mut ConfigDiagnostics) -> Option<NavEntry> {
        let label = self.label();

        if self.text.is_empty() {
            diag.error(FIELD, format!("entry {label} is missing `text`"));
        }

        match (&self.link, &self.items) {
            (None, None) => {
                diag.error_with_hint(
                    FIELD,
                    format!("entry {label} has neither `link` nor `items`"),
                    "add `link = \"/path\"` for a plain link, or `items` for a dropdown group",
                );
                None
            }
            (Some(_), Some(_)) => {
                diag.error(
                    FIELD,
                    format!("entry {label} has both `link` and `items`, pick one"),
                );
                None
            }
            (Some(link), None) => {
                validate_link(link, &label, diag);
                Some(NavEntry::Link {
                    text: self.text.clone(),
                    link: link.clone(),
                })
            }
            (None, Some(items)) => {
                if items.is_empty() {
                    diag.error(FIELD, format!("group {label} has no items"));
                }
                let items = items.iter().filter_map(|item| item.resolve(diag)).collect();
                Some(NavEntry::Group {
                    text: self.text.clone(),
                    items,
                })
            }
        }
    }

    /// Quoted display text for diagnostics, `<unnamed>` when text is empty.
    fn label(&self) -> String {
        if self.text.is_empty() {
            "<unnamed>".to_string()
        } else {
            format!("\"{}\"", self.text)
        }
    }
}

/// Validate a single link target.
///
/// External URLs pass through untouched; internal links must be
/// site-absolute so the build engine can prefix them with the base path.
fn validate_link(link: &str, label: &str, diag: &mut ConfigDiagnostics) {
    if link.is_empty() {
        diag.error(FIELD, format!("entry {label} has an empty link"));
    } else if !is_external_link(link) && !link.starts_with('/') {
        diag.error_with_hint(
            FIELD,
            format!("entry {label}: internal link `{link}` must start with '/'"),
            "use a site-absolute path like \"/documentation/installation\", or a full URL for external links",
        );
    }
}

// ============================================================================
// Tagged entry
// ============================================================================

/// Validated navigation entry: a direct link or a labeled group of links.
///
/// Serializes back to the raw descriptor shape, so a loaded configuration
/// round-trips through the descriptor parser unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Plain link entry.
    Link { text: String, link: String },

    /// Dropdown group with sub-entries.
    Group { text: String, items: Vec<NavEntry> },
}

impl NavEntry {
    /// Display text of this entry.
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }

    /// Link target, `None` for groups.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Link { link, .. } => Some(link),
            Self::Group { .. } => None,
        }
    }

    /// Check if this entry points outside the site.
    pub fn is_external(&self) -> bool {
        self.link().is_some_and(is_external_link)
    }
}

// ============================================================================
// tests
// ============================================================================
