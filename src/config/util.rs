//! Descriptor utility functions.

use std::path::{Path, PathBuf};

/// Default descriptor file name searched by [`find_descriptor_file`].
pub const DESCRIPTOR_FILE: &str = "sitenav.toml";

/// Check if a link is external (has a URL scheme like https:, mailto:, etc.)
///
/// Internal links are site-absolute paths and never parse as standalone
/// URLs, so a successful parse is exactly the external case.
///
/// # Examples
/// ```
/// use sitenav::config::util::is_external_link;
/// assert!(is_external_link("https://github.com/acme/acme"));
/// assert!(is_external_link("mailto:docs@acme.dev"));
/// assert!(!is_external_link("/documentation/installation"));
/// assert!(!is_external_link("installation"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    url::Url::parse(link).is_ok()
}

/// Find a descriptor file by searching upward from `start_dir`
///
/// Walks up parent directories until finding `name`
/// Returns the absolute path to the descriptor file if found
///
/// # Example
/// ```text
/// /home/user/site/content/guide/   ← start_dir
/// /home/user/site/sitenav.toml     ← found!
/// ```
pub fn find_descriptor_file(name: &Path, start_dir: &Path) -> Option<PathBuf> {
    // An absolute name is taken as-is, no search
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    // Walk up from start_dir looking for the descriptor file
    let mut current = start_dir;
    loop {
        let candidate = current.join(name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
