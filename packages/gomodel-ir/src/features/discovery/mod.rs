//! Package discovery
//!
//! Filesystem walk that turns a root directory into a [`PackageTree`] of
//! parsed files.

pub mod application;
pub mod domain;

pub use application::PackageDiscoverer;
pub use domain::{CancellationToken, FileNode, PackageNode, PackageTree};
