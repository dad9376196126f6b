//! pubspec.yaml adapter
//!
//! Flutter stores the build number after a `+` in the same field
//! (`version: 1.2.3+4`). Everything after the first `+` becomes the
//! version's build metadata, verbatim.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::project::error::ProjectError;
use crate::project::manifest;
use crate::project::traits::Project;
use crate::project::types::ProjectKind;
use crate::version::Version;

/// Adapter for Flutter/Dart projects
pub struct FlutterProject {
    workdir: PathBuf,
    /// Regex for the top-level key; nested `version:` entries under
    /// dependencies are indented and never match
    version_re: Regex,
}

impl FlutterProject {
    pub const MANIFEST: &'static str = "pubspec.yaml";

    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            version_re: Regex::new(r#"(?m)^version[ \t]*:[ \t]*["']?([^\s"'#]+)["']?"#)
                .expect("flutter version pattern is valid"),
        }
    }

    pub fn detect(workdir: &Path) -> bool {
        manifest::file_exists(workdir, Self::MANIFEST)
    }

    fn manifest_path(&self) -> PathBuf {
        self.workdir.join(Self::MANIFEST)
    }
}

impl Project for FlutterProject {
    fn is_me(&self, workdir: &Path) -> bool {
        Self::detect(workdir)
    }

    fn kind(&self) -> ProjectKind {
        ProjectKind::Flutter
    }

    fn work_dir(&self) -> &Path {
        &self.workdir
    }

    fn get_version(&self) -> Result<Version, ProjectError> {
        let path = self.manifest_path();
        let raw = manifest::read_field(&path, &self.version_re)?;

        let (base, build) = raw.split_once('+').unwrap_or((raw.as_str(), ""));
        let mut version = manifest::parse_version(&path, base)?;
        if !build.is_empty() {
            version.build = build.to_string();
        }
        Ok(version)
    }

    fn set_version(&self, version: &Version) -> Result<(), ProjectError> {
        manifest::write_version(&self.manifest_path(), &self.version_re, version)
    }
}
