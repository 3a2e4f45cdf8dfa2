//! Git repository root discovery.
//!
//! This module locates the root of a git working tree by walking upward from
//! a starting path until a directory containing a `.git` marker directory is
//! found. The walk is existence-gated: it terminates with
//! [`Error::RepositoryNotFound`] as soon as the candidate path no longer
//! exists on disk, which covers both bogus starting paths and walks that
//! ascend past the top of the tree.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::resolver::resolve_full_path;

/// Name of the marker directory denoting a git working tree root.
pub const GIT_DIR_NAME: &str = ".git";

/// Find the root directory of the git repository containing `start`.
///
/// Starting at `start`, each candidate is checked for a `.git` subdirectory;
/// if present, the fully resolved candidate path is returned. Otherwise the
/// walk moves to the parent directory and repeats. Seeding the search with a
/// file path works naturally: the marker probe under a file never exists, so
/// the walk ascends into the containing directory on the next step.
///
/// The walk always terminates: [`Path::parent`] returns `None` at the
/// filesystem root, and the parent chain of a relative path ends at the
/// empty path, which fails the existence check.
///
/// # Errors
///
/// Returns [`Error::RepositoryNotFound`] if `start` does not exist or no
/// ancestor of `start` contains a `.git` directory.
///
/// # Examples
///
/// ```no_run
/// use pathroot::find_repository_root;
/// use std::path::Path;
///
/// let root = find_repository_root(Path::new("/home/user/repo/src/deep"))?;
/// assert!(root.join(".git").is_dir());
/// # Ok::<(), pathroot::Error>(())
/// ```
pub fn find_repository_root(start: impl AsRef<Path>) -> Result<PathBuf> {
    let start = start.as_ref();
    let mut current = start.to_path_buf();

    // exists() is true for files and directories alike, matching the
    // "file or directory" gate of the walk
    while current.exists() {
        if current.join(GIT_DIR_NAME).is_dir() {
            log::debug!("repository root found at {}", current.display());
            let text = current.to_string_lossy().into_owned();
            return Ok(resolve_full_path([text]).unwrap_or(current));
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            // Walked past the filesystem root
            None => break,
        }
    }

    Err(Error::RepositoryNotFound {
        path: start.to_path_buf(),
    })
}

/// Find the repository root containing the current executable.
///
/// Convenience wrapper around [`find_repository_root`] seeded with
/// [`std::env::current_exe`]. Useful for tools that live inside the
/// repository they operate on.
///
/// # Errors
///
/// Returns [`Error::Io`] if the current executable path cannot be
/// determined, or [`Error::RepositoryNotFound`] if the executable is not
/// inside a git repository.
pub fn find_repository_root_from_executable() -> Result<PathBuf> {
    find_repository_root(env::current_exe()?)
}
