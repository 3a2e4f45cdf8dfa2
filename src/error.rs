//! Error types for the pathroot library.
//!
//! Path resolution itself is infallible by contract; the error surface here
//! exists for repository discovery, using `thiserror` for ergonomic handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathroot error.
///
/// # Examples
///
/// ```
/// use pathroot::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/repo"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathroot library.
#[derive(Debug, Error)]
pub enum Error {
    /// The upward repository search walked off every existing directory
    /// without finding a `.git` marker directory.
    #[error("{} is not in a git repository", path.display())]
    RepositoryNotFound {
        /// The path the search started from.
        path: PathBuf,
    },

    /// An I/O error occurred.
    ///
    /// Only produced by [`find_repository_root_from_executable`] when the
    /// current executable path cannot be determined; the core operations
    /// never surface this variant.
    ///
    /// [`find_repository_root_from_executable`]: crate::find_repository_root_from_executable
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error indicates that no repository root was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathroot::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::RepositoryNotFound { path: PathBuf::from("/nowhere") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RepositoryNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_not_found_display() {
        let err = Error::RepositoryNotFound {
            path: PathBuf::from("/some/orphan/path"),
        };
        let display = format!("{err}");
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/some/orphan/path"));
        assert!(display.contains("is not in a git repository"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "exe not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        let err = Error::RepositoryNotFound {
            path: PathBuf::from("/x"),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::RepositoryNotFound {
                path: PathBuf::from("/x"),
            })
        }

        assert!(returns_result().is_err());
    }
}
