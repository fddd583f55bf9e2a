//! Site descriptor loading and navigation resolution for documentation sites.
//!
//! A documentation site is described by a small declarative descriptor:
//! title, description, the URL base path the site is served under, the
//! navigation bar entries, and the sidebar shown next to each page. This
//! crate parses that descriptor (TOML or JSON), validates it in a single
//! pass that reports every problem at once, and hands the consuming build
//! engine an immutable [`SiteConfig`].
//!
//! The loaded configuration is a plain value: no global state, no interior
//! mutability. Share it by reference across as many build workers as
//! needed.
//!
//! # Example
//!
//! ```
//! use sitenav::SiteDescriptor;
//!
//! let descriptor = SiteDescriptor::from_str(r#"
//! title = "Acme Docs"
//! description = "Documentation for the Acme toolchain"
//! base = "/acme/"
//!
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.nav]]
//! text = "Github"
//! link = "https://github.com/acme/acme"
//!
//! [theme.sidebar]
//! "/guide/" = [["installation", "Installation"], ["reference", "Reference"]]
//! "/" = [["", "Home"]]
//! "#)?;
//!
//! let config = descriptor.load()?;
//! let section = config.resolve_sidebar("/guide/installation");
//! assert_eq!(section.pages().len(), 2);
//! # Ok::<(), sitenav::ConfigError>(())
//! ```

pub mod config;
pub mod logger;

pub use config::{
    ConfigDiagnostics, ConfigError, FieldPath, NavEntry, PageRef, SidebarMap, SidebarSection,
    SiteConfig, SiteDescriptor, ThemeConfig,
};
