//! pyproject.toml adapter
//!
//! Reads the `version = "..."` assignment of `[project]` or `[tool.poetry]`.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::project::error::ProjectError;
use crate::project::manifest;
use crate::project::traits::Project;
use crate::project::types::ProjectKind;
use crate::version::Version;

/// Adapter for Python projects
pub struct PythonProject {
    workdir: PathBuf,
    version_re: Regex,
}

impl PythonProject {
    pub const MANIFEST: &'static str = "pyproject.toml";

    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            // Match: version = "1.2.3" (TOML basic or literal string)
            version_re: Regex::new(r#"(?m)^[ \t]*version[ \t]*=[ \t]*["']([^"'\r\n]+)["']"#)
                .expect("python version pattern is valid"),
        }
    }

    pub fn detect(workdir: &Path) -> bool {
        manifest::file_exists(workdir, Self::MANIFEST)
    }

    fn manifest_path(&self) -> PathBuf {
        self.workdir.join(Self::MANIFEST)
    }
}

impl Project for PythonProject {
    fn is_me(&self, workdir: &Path) -> bool {
        Self::detect(workdir)
    }

    fn kind(&self) -> ProjectKind {
        ProjectKind::Python
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
