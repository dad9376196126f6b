//! Cargo.toml adapter

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::project::error::ProjectError;
use crate::project::manifest;
use crate::project::traits::Project;
use crate::project::types::ProjectKind;
use crate::version::Version;

/// Adapter for Rust projects
pub struct RustProject {
    workdir: PathBuf,
    /// Regex for a top-level `version = "..."` line; inline tables such as
    /// `serde = { version = "1.0" }` do not start a line and are skipped
    version_re: Regex,
}

impl RustProject {
    pub const MANIFEST: &'static str = "Cargo.toml";

    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            version_re: Regex::new(r#"(?m)^[ \t]*version[ \t]*=[ \t]*["']([^"'\r\n]+)["']"#)
                .expect("rust version pattern is valid"),
        }
    }

    pub fn detect(workdir: &Path) -> bool {
        manifest::file_exists(workdir, Self::MANIFEST)
    }

    fn manifest_path(&self) -> PathBuf {
        self.workdir.join(Self::MANIFEST)
    }
}

impl Project for RustProject {
    fn is_me(&self, workdir: &Path) -> bool {
        Self::detect(workdir)
    }

    fn kind(&self) -> ProjectKind {
        ProjectKind::Rust
    }

    fn work_dir(&self) -> &Path {
        &self.workdir
    }

    fn get_version(&self) -> Result<Version, ProjectError> {
        manifest::read_version(&self.manifest_path(), &self.version_re)
    }

    fn set_version(&self, version: &Version) -> Result<(), ProjectError> {
        manifest::write_version(&self.manifest_path(), &self.version_re, version)
    }
}
