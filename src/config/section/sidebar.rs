//! Sidebar configuration and prefix resolution.
//!
//! The sidebar table maps URL path prefixes to the ordered list of pages
//! shown next to any page under that prefix. The `"/"` entry is the
//! fallback used when nothing more specific matches.
//!
//! # Example
//!
//! ```toml
//! [theme.sidebar]
//! "/documentation/" = [
//!     ["installation", "Installation"],
//!     ["reference", "Reference"],
//! ]
//! "/" = [["", "Home"]]
//! ```

use rustc_hash::FxHashSet;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::log;

const FIELD: FieldPath = FieldPath::new("theme.sidebar");

/// Path prefix whose section is used when no other prefix matches.
pub const FALLBACK_PREFIX: &str = "/";

/// Shared result for a resolution miss with no declared fallback.
static EMPTY_SECTION: SidebarSection = SidebarSection { pages: Vec::new() };

// ============================================================================
// Page references
// ============================================================================

/// One sidebar page reference.
///
/// A bare string names the page by path (empty string = the section index
/// page); a two-element array adds an explicit display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    /// Page path only; display text is taken from the page itself.
    Path(String),
    /// `(page_path, display_text)` pair.
    Titled(String, String),
}

impl PageRef {
    /// Page path relative to the section prefix.
    pub fn path(&self) -> &str {
        match self {
            Self::Path(path) | Self::Titled(path, _) => path,
        }
    }

    /// Explicit display text, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Path(_) => None,
            Self::Titled(_, title) => Some(title),
        }
    }
}

// ============================================================================
// Raw sidebar table
// ============================================================================

/// Sidebar table as written in the descriptor: declaration-ordered
/// `(prefix, pages)` pairs.
///
/// A plain map type would silently keep only the last entry for a
/// duplicated prefix in JSON input, so entries are collected verbatim and
/// duplicates rejected in [`SidebarItems::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarItems(pub Vec<(String, Vec<PageRef>)>);

impl SidebarItems {
    /// Validate prefixes and per-prefix page lists.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();

        for (prefix, pages) in &self.0 {
            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    FIELD,
                    format!("prefix `{prefix}` must start with '/'"),
                    "sidebar prefixes are site-absolute, e.g. \"/documentation/\"",
                );
            }

            if !seen.insert(prefix.as_str()) {
                diag.error(FIELD, format!("duplicate prefix `{prefix}`"));
            }

            // The fallback may be empty; a declared prefix without pages
            // would render a blank sidebar for its whole subtree.
            if pages.is_empty() && prefix != FALLBACK_PREFIX {
                diag.error_with_hint(
                    FIELD,
                    format!("prefix `{prefix}` declares no pages"),
                    "list at least one page, or remove the prefix",
                );
            }
        }
    }
}

impl<'de> Deserialize<'de> for SidebarItems {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairVisitor;

        impl<'de> Visitor<'de> for PairVisitor {
            type Value = SidebarItems;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table mapping path prefixes to page lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((prefix, pages)) = map.next_entry::<String, Vec<PageRef>>()? {
                    entries.push((prefix, pages));
                }
                Ok(SidebarItems(entries))
            }
        }

        deserializer.deserialize_map(PairVisitor)
    }
}

impl Serialize for SidebarItems {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (prefix, pages) in &self.0 {
            map.serialize_entry(prefix, pages)?;
        }
        map.end()
    }
}

// ============================================================================
// Validated sidebar
// ============================================================================

/// Ordered list of page links shown for one path prefix.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SidebarSection {
    pages: Vec<PageRef>,
}

impl SidebarSection {
    pub fn new(pages: Vec<PageRef>) -> Self {
        Self { pages }
    }

    /// Pages in declaration order.
    pub fn pages(&self) -> &[PageRef] {
        &self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Declaration-ordered prefix → section mapping with longest-prefix lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarMap {
    entries: Vec<(String, SidebarSection)>,
}

impl SidebarMap {
    /// Build the validated map from raw descriptor entries.
    pub(crate) fn from_items(items: &SidebarItems) -> Self {
        let entries = items
            .0
            .iter()
            .map(|(prefix, pages)| (prefix.clone(), SidebarSection::new(pages.clone())))
            .collect();
        Self { entries }
    }

    /// Resolve the sidebar section for a request path.
    ///
    /// Longest declared prefix wins; the `"/"` entry is used when no other
    /// prefix matches. A path that matches nothing and has no fallback gets
    /// the shared empty section: missing sidebar coverage degrades the
    /// display, it must not stop a build.
    pub fn resolve(&self, request_path: &str) -> &SidebarSection {
        let mut best: Option<(&str, &SidebarSection)> = None;
        for (prefix, section) in &self.entries {
            if prefix != FALLBACK_PREFIX
                && request_path.starts_with(prefix.as_str())
                && best.is_none_or(|(found, _)| prefix.len() > found.len())
            {
                best = Some((prefix, section));
            }
        }

        if let Some((_, section)) = best {
            return section;
        }
        if let Some(fallback) = self.fallback() {
            return fallback;
        }

        log!(
            "warning";
            "no sidebar prefix matches `{request_path}` and no \"{FALLBACK_PREFIX}\" fallback is declared"
        );
        &EMPTY_SECTION
    }

    /// Section declared for an exact prefix.
    pub fn get(&self, prefix: &str) -> Option<&SidebarSection> {
        self.entries
            .iter()
            .find(|(declared, _)| declared == prefix)
            .map(|(_, section)| section)
    }

    /// The `"/"` fallback section, if declared.
    pub fn fallback(&self) -> Option<&SidebarSection> {
        self.get(FALLBACK_PREFIX)
    }

    /// Declared `(prefix, section)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SidebarSection)> {
        self.entries
            .iter()
            .map(|(prefix, section)| (prefix.as_str(), section))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SidebarMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, section) in &self.entries {
            map.serialize_entry(prefix, section)?;
        }
        map.end()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_descriptor;

    fn sample_map() -> SidebarMap {
        let config = test_parse_descriptor(
            r#"[theme.sidebar]
"/documentation/" = [["installation", "Installation"], ["reference", "Reference"]]
"/" = [["", "Home"]]"#,
        );
        SidebarMap::from_items(&config.theme.sidebar)
    }

    #[test]
    fn test_prefix_match() {
        let map = sample_map();

        let section = map.resolve("/documentation/installation");
        assert_eq!(section.pages().len(), 2);
        assert_eq!(section.pages()[0].path(), "installation");
        assert_eq!(section.pages()[0].title(), Some("Installation"));
    }

    #[test]
    fn test_fallback_match() {
        let map = sample_map();

        let section = map.resolve("/about");
        assert_eq!(section.pages().len(), 1);
        assert_eq!(section.pages()[0].path(), "");
        assert_eq!(section.pages()[0].title(), Some("Home"));
    }

    #[test]
    fn test_longest_prefix_wins() {
        let config = test_parse_descriptor(
            r#"[theme.sidebar]
"/documentation/" = [["overview", "Overview"]]
"/documentation/api/" = [["endpoints", "Endpoints"]]
"/" = [["", "Home"]]"#,
        );
        let map = SidebarMap::from_items(&config.theme.sidebar);

        let section = map.resolve("/documentation/api/endpoints");
        assert_eq!(section.pages()[0].path(), "endpoints");

        // Shorter prefix still covers the rest of the subtree
        let section = map.resolve("/documentation/overview");
        assert_eq!(section.pages()[0].path(), "overview");
    }

    #[test]
    fn test_miss_without_fallback_is_empty() {
        let config = test_parse_descriptor(
            r#"[theme.sidebar]
"/documentation/" = [["installation", "Installation"]]"#,
        );
        let map = SidebarMap::from_items(&config.theme.sidebar);

        let section = map.resolve("/about");
        assert!(section.is_empty());
    }

    #[test]
    fn test_bare_string_page_ref() {
        let config = test_parse_descriptor(
            r#"[theme.sidebar]
"/guide/" = ["installation", ["reference", "Reference"]]"#,
        );
        let map = SidebarMap::from_items(&config.theme.sidebar);

        let section = map.resolve("/guide/installation");
        assert_eq!(section.pages()[0].path(), "installation");
        assert_eq!(section.pages()[0].title(), None);
        assert_eq!(section.pages()[1].title(), Some("Reference"));
    }

    #[test]
    fn test_validate_accepts_sample() {
        let config = test_parse_descriptor(
            r#"[theme.sidebar]
"/documentation/" = [["installation", "Installation"]]
"/" = []"#,
        );

        let mut diag = ConfigDiagnostics::new();
        config.theme.sidebar.validate(&mut diag);
        // Empty fallback is fine; it only covers otherwise-unmatched pages.
        assert!(diag.is_empty(), "unexpected: {:?}", diag.errors());
    }

    #[test]
    fn test_validate_rejects_empty_declared_prefix() {
        let config = test_parse_descriptor("[theme.sidebar]\n\"/documentation/\" = []");

        let mut diag = ConfigDiagnostics::new();
        config.theme.sidebar.validate(&mut diag);
        assert!(diag.has_errors());
        assert!(diag.errors()[0].message.contains("declares no pages"));
    }

    #[test]
    fn test_validate_rejects_relative_prefix() {
        let config = test_parse_descriptor(
            "[theme.sidebar]\n\"documentation\" = [[\"installation\", \"Installation\"]]",
        );

        let mut diag = ConfigDiagnostics::new();
        config.theme.sidebar.validate(&mut diag);
        assert!(diag.has_errors());
        assert!(diag.errors()[0].message.contains("must start with '/'"));
    }

    #[test]
    fn test_validate_rejects_duplicate_prefix() {
        // TOML rejects duplicate keys at parse time; build the raw entries
        // directly, as JSON input would produce them.
        let items = SidebarItems(vec![
            ("/".into(), vec![PageRef::Path("".into())]),
            ("/".into(), vec![PageRef::Path("index".into())]),
        ]);

        let mut diag = ConfigDiagnostics::new();
        items.validate(&mut diag);
        assert!(diag.has_errors());
        assert!(diag.errors()[0].message.contains("duplicate prefix"));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let config = test_parse_descriptor(
            r#"[theme.sidebar]
"/b/" = [["x", "X"]]
"/a/" = [["y", "Y"]]"#,
        );
        let map = SidebarMap::from_items(&config.theme.sidebar);

        let prefixes: Vec<&str> = map.entries().map(|(prefix, _)| prefix).collect();
        assert_eq!(prefixes, ["/b/", "/a/"]);
    }
}
