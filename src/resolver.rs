//! Full path resolution with graceful symlink handling.
//!
//! This module provides the `PathResolver` type and the [`resolve_full_path`]
//! convenience function built on a process-wide resolver. Resolution combines
//! path fragments, normalizes separators, expands to an absolute path and, on
//! platforms that support it, resolves symlinks to the real on-disk location.
//!
//! Symlink resolution is capability-gated: the resolver carries a one-way
//! latch that starts from platform detection and is permanently cleared the
//! first time the underlying real-path primitive reports itself unavailable.
//! Resolution itself never fails; every failure mode degrades to a
//! best-effort absolutized path or to `None` for empty input.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::normalize::{absolutize, normalize_separators};

/// Alternate directory separator accepted on every platform.
const ALT_SEPARATOR: char = '/';

/// Signature of the real-path primitive.
///
/// The primitive mirrors `realpath(3)` semantics: per-path failures (the path
/// does not exist, a component is not a directory, permission is denied) are
/// reported as an empty path, while `Err` means the primitive itself is
/// unavailable and trips the resolver's capability latch.
pub type RealPathFn = fn(&Path) -> io::Result<PathBuf>;

/// Default real-path primitive backed by [`std::fs::canonicalize`].
fn system_real_path(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(real) => Ok(real),
        Err(err) if err.kind() == ErrorKind::Unsupported => Err(err),
        // realpath(3) reports per-path failures with a null result rather
        // than an unavailable primitive
        Err(_) => Ok(PathBuf::new()),
    }
}

/// Process-wide resolver backing [`resolve_full_path`].
static DEFAULT_RESOLVER: PathResolver = PathResolver::new();

/// Resolves path fragments to full, symlink-free absolute paths.
///
/// Each resolver carries its own capability latch; the crate-level
/// [`resolve_full_path`] function delegates to a shared process-wide
/// resolver, which is what most callers want. Constructing a private
/// resolver is useful for injecting a different real-path primitive.
///
/// # Examples
///
/// ```
/// use pathroot::PathResolver;
///
/// let resolver = PathResolver::new();
/// let full = resolver.resolve_full_path(["/tmp", "x/"]).unwrap();
/// assert!(full.is_absolute());
/// ```
#[derive(Debug)]
pub struct PathResolver {
    /// The real-path primitive invoked when the latch is set.
    real_path: RealPathFn,
    /// One-way capability latch: initialized from platform detection,
    /// cleared at most once on primitive failure, never re-set. Relaxed
    /// ordering suffices; a lost update merely costs one redundant call.
    have_real_path: AtomicBool,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    /// Create a resolver using the platform real-path primitive.
    ///
    /// Symlink resolution starts enabled on Unix systems and disabled
    /// elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathroot::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// assert_eq!(resolver.link_resolution_enabled(), cfg!(unix));
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            real_path: system_real_path,
            have_real_path: AtomicBool::new(cfg!(unix)),
        }
    }

    /// Replace the real-path primitive and re-arm the latch.
    ///
    /// Intended for tests and embedders that supply their own resolution
    /// strategy. The returned resolver has link resolution enabled.
    #[must_use]
    pub fn with_real_path(mut self, real_path: RealPathFn) -> Self {
        self.real_path = real_path;
        self.have_real_path = AtomicBool::new(true);
        self
    }

    /// Whether symlink resolution is currently enabled on this resolver.
    ///
    /// Starts from platform detection and transitions to `false` at most
    /// once, after the first primitive failure.
    #[must_use]
    pub fn link_resolution_enabled(&self) -> bool {
        self.have_real_path.load(Ordering::Relaxed)
    }

    /// Resolve path fragments to a full path.
    ///
    /// Fragments are combined with standard path-join semantics (a later
    /// absolute fragment replaces everything built so far), separators are
    /// normalized to the platform separator, the result is expanded to an
    /// absolute path against the current working directory, symlinks are
    /// resolved when the capability latch is set, and trailing separators
    /// are stripped.
    ///
    /// Returns `None` for an empty fragment list or fragments that combine
    /// to an empty string. This operation never fails: if the real-path
    /// primitive is unavailable or breaks, the latch is cleared for the
    /// lifetime of the resolver and the absolutized path is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathroot::PathResolver;
    /// use std::path::PathBuf;
    ///
    /// let resolver = PathResolver::new();
    ///
    /// assert_eq!(resolver.resolve_full_path(Vec::<&str>::new()), None);
    ///
    /// let full = resolver.resolve_full_path(["/tmp/x/"]).unwrap();
    /// assert_eq!(resolver.resolve_full_path(["/tmp/x"]), Some(full));
    /// ```
    pub fn resolve_full_path<I, S>(&self, fragments: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fragments = fragments.into_iter();
        let mut combined = PathBuf::from(fragments.next()?.as_ref());
        for fragment in fragments {
            combined.push(fragment.as_ref());
        }

        // Fragments are &str, so the combined path is always valid UTF-8
        let combined = combined.into_os_string().into_string().ok()?;
        if combined.is_empty() {
            return None;
        }

        let normalized = normalize_separators(&combined);
        let mut full = absolutize(Path::new(&normalized));

        if self.have_real_path.load(Ordering::Relaxed) {
            match (self.real_path)(&full) {
                Ok(real) if !real.as_os_str().is_empty() => full = real,
                // Empty result: the path has no real-path expansion (e.g. it
                // does not exist); keep the absolutized form
                Ok(_) => {}
                Err(err) => {
                    self.have_real_path.store(false, Ordering::Relaxed);
                    log::debug!("disabling symlink resolution after primitive failure: {err}");
                }
            }
        }

        let text = full.to_string_lossy();
        if text.is_empty() {
            return None;
        }

        let trimmed = if text.ends_with(MAIN_SEPARATOR) {
            text.trim_end_matches(MAIN_SEPARATOR)
        } else if text.ends_with(ALT_SEPARATOR) {
            text.trim_end_matches(ALT_SEPARATOR)
        } else {
            text.as_ref()
        };

        Some(PathBuf::from(trimmed))
    }
}

/// Resolve path fragments to a full path using the process-wide resolver.
///
/// See [`PathResolver::resolve_full_path`] for the full contract. The
/// process-wide resolver shares a single capability latch, so a primitive
/// failure anywhere in the process disables symlink resolution everywhere,
/// permanently.
///
/// # Examples
///
/// ```
/// use pathroot::resolve_full_path;
///
/// assert_eq!(resolve_full_path(Vec::<&str>::new()), None);
///
/// let full = resolve_full_path(["/tmp", "a", "b/"]).unwrap();
/// assert!(full.is_absolute());
/// assert!(!full.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR));
/// ```
pub fn resolve_full_path<I, S>(fragments: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_RESOLVER.resolve_full_path(fragments)
}
