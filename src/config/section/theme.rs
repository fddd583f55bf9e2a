//! `[theme]` section: navigation, sidebar, and cosmetic display options.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! last_updated = "Last Updated"
//!
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [theme.sidebar]
//! "/" = [["", "Home"]]
//! ```

use serde::{Deserialize, Serialize};

use super::nav::{NavEntry, NavItem};
use super::sidebar::{SidebarItems, SidebarMap};

/// Theme options as written in the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDescriptor {
    /// Display label for the "last updated" timestamp. Cosmetic, passed
    /// through to the build engine unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Navigation bar entries, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar table keyed by path prefix.
    pub sidebar: SidebarItems,
}

/// Validated theme options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    pub nav: Vec<NavEntry>,

    pub sidebar: SidebarMap,
}

// ============================================================================
// tests
// ============================================================================
