#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathroot
//!
//! A small library for exhaustive filesystem path resolution and git
//! repository root discovery.
//!
//! Two components are provided:
//!
//! - [`resolve_full_path`]: combines path fragments into a single absolute,
//!   separator-normalized path with trailing separators stripped and, on
//!   platforms that support it, symlinks resolved to their real target.
//! - [`find_repository_root`]: walks upward from a starting path until it
//!   finds a directory containing a `.git` marker directory.
//!
//! Path resolution never fails: symlink resolution degrades gracefully to
//! plain absolutization if the underlying primitive is unavailable or breaks
//! at runtime. Repository discovery fails only with
//! [`Error::RepositoryNotFound`] when the upward walk runs out of existing
//! directories.
//!
//! ## Examples
//!
//! ```no_run
//! use pathroot::{find_repository_root, resolve_full_path};
//!
//! let full = resolve_full_path(["/tmp", "project", "src/"]).unwrap();
//! assert!(full.is_absolute());
//!
//! let root = find_repository_root(&full)?;
//! assert!(root.join(".git").is_dir());
//! # Ok::<(), pathroot::Error>(())
//! ```

pub mod error;
pub mod normalize;
pub mod repo;
pub mod resolver;
pub mod testdata;

// Re-export key items at crate root for convenience
pub use error::{Error, Result};
pub use normalize::normalize_separators;
pub use repo::{find_repository_root, find_repository_root_from_executable, GIT_DIR_NAME};
pub use resolver::{resolve_full_path, PathResolver};
