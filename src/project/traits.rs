//! Project adapter trait definition

use std::path::Path;

use crate::project::error::ProjectError;
use crate::project::types::ProjectKind;
use crate::version::Version;

/// A directory bound to one manifest convention
///
/// Implementations never print; every failure is returned to the caller.
pub trait Project {
    /// Check whether `workdir` follows this adapter's convention
    fn is_me(&self, workdir: &Path) -> bool;

    /// Returns the kind this adapter handles
    fn kind(&self) -> ProjectKind;

    /// Returns the directory this adapter was built for
    fn work_dir(&self) -> &Path;

    /// Read the version recorded in the manifest
    fn get_version(&self) -> Result<Version, ProjectError>;

    /// Rewrite the version recorded in the manifest, leaving the rest of the file untouched
    fn set_version(&self, version: &Version) -> Result<(), ProjectError>;
}
