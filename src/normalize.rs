//! Path normalization functions.
//!
//! This module provides the purely lexical half of path resolution:
//! - Normalizing directory separators for the platform
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//!
//! None of these functions touch the filesystem beyond reading the current
//! working directory, and none of them can fail.

use std::env;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Normalize directory separators to the platform separator.
///
/// Every `\` and every `/` in the input is rewritten to
/// [`std::path::MAIN_SEPARATOR`]. This is pure character substitution: no
/// absolutization, no existence checks, no trimming. Optional inputs
/// propagate naturally via `Option::map`:
///
/// ```
/// use pathroot::normalize_separators;
///
/// let missing: Option<&str> = None;
/// assert_eq!(missing.map(normalize_separators), None);
/// ```
///
/// # Examples
///
/// ```
/// use pathroot::normalize_separators;
/// use std::path::MAIN_SEPARATOR;
///
/// let normalized = normalize_separators("a\\b/c");
/// let expected = format!("a{0}b{0}c", MAIN_SEPARATOR);
/// assert_eq!(normalized, expected);
/// ```
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| match c {
            '\\' | '/' => MAIN_SEPARATOR,
            other => other,
        })
        .collect()
}

/// Resolve `.` and `..` components in a path lexically.
///
/// Current-directory components are dropped and parent-directory components
/// pop the preceding normal component. A `..` that would escape the root is
/// clamped (ignored), matching standard absolutization semantics; leading
/// `..` components of a relative path are preserved.
///
/// # Examples
///
/// ```
/// use pathroot::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// // Clamps at the root rather than failing
/// let resolved = resolve_components(Path::new("/a/../../b"));
/// assert_eq!(resolved, PathBuf::from("/b"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {
                // Skip "." - it doesn't change the path
            }
            Component::ParentDir => {
                let last_is_normal = matches!(
                    result.components().next_back(),
                    Some(Component::Normal(_))
                );
                if last_is_normal {
                    result.pop();
                } else if !has_root {
                    // Leading ".." of a relative path is kept as-is
                    result.push(component);
                }
                // At the root: clamp
            }
        }
    }

    // Ensure we at least have a root if we started with one
    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    result
}

/// Expand a path to absolute form against the current working directory,
/// then resolve `.` and `..` components.
///
/// If the working directory cannot be read, the path is resolved lexically
/// without being made absolute; callers of the resolution pipeline accept a
/// best-effort result rather than an error.
pub(crate) fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    resolve_components(&joined)
}
