//! Descriptor section definitions.
//!
//! Each module corresponds to a part of the descriptor:
//!
//! | Module    | Descriptor keys   | Purpose                              |
//! |-----------|-------------------|--------------------------------------|
//! | `nav`     | `theme.nav`       | Navigation bar entries               |
//! | `sidebar` | `theme.sidebar`   | Per-prefix sidebar page lists        |
//! | `theme`   | `[theme]`         | Theme options (nav, sidebar, labels) |

pub mod nav;
pub mod sidebar;
pub mod theme;

// Re-export section types
pub use nav::{NavEntry, NavItem};
pub use sidebar::{FALLBACK_PREFIX, PageRef, SidebarItems, SidebarMap, SidebarSection};
pub use theme::{ThemeConfig, ThemeDescriptor};
