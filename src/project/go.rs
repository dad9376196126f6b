//! Go adapter
//!
//! Go modules have no version field. The version is the whole content of a
//! `version.txt` (typically pulled in with `//go:embed`) found anywhere under
//! the module root, e.g.:
//!
//! ```text
//! go.mod
//! internal/buildinfo/version.txt   <- "1.4.2"
//! ```

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::project::error::ProjectError;
use crate::project::manifest;
use crate::project::traits::Project;
use crate::project::types::ProjectKind;
use crate::version::Version;

/// Adapter for Go projects
pub struct GoProject {
    workdir: PathBuf,
    /// Result of the downward `version.txt` search, resolved on first use
    version_file: OnceCell<Option<PathBuf>>,
}

impl GoProject {
    pub const MANIFEST: &'static str = "go.mod";
    pub const VERSION_FILE: &'static str = "version.txt";

    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            version_file: OnceCell::new(),
        }
    }

    pub fn detect(workdir: &Path) -> bool {
        manifest::file_exists(workdir, Self::MANIFEST)
    }

    fn version_file(&self) -> Option<&Path> {
        self.version_file
            .get_or_init(|| {
                let found = manifest::find_file_down(&self.workdir, Self::VERSION_FILE);
                debug!(
                    "Searched {:?} for {}: {:?}",
                    self.workdir,
                    Self::VERSION_FILE,
                    found
                );
                found
            })
            .as_deref()
    }

    fn missing(&self) -> ProjectError {
        ProjectError::VersionFileMissing {
            file_name: Self::VERSION_FILE,
            workdir: self.workdir.clone(),
        }
    }
}

impl Project for GoProject {
    fn is_me(&self, workdir: &Path) -> bool {
        Self::detect(workdir)
    }

    fn kind(&self) -> ProjectKind {
        ProjectKind::Go
    }

    fn work_dir(&self) -> &Path {
        &self.workdir
    }

    fn get_version(&self) -> Result<Version, ProjectError> {
        let path = self.version_file().ok_or_else(|| self.missing())?;
        let content = fs::read_to_string(path).map_err(|source| ProjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        manifest::parse_version(path, content.trim())
    }

    fn set_version(&self, version: &Version) -> Result<(), ProjectError> {
        let path = self.version_file().ok_or_else(|| self.missing())?;
        fs::write(path, version.to_string()).map_err(|source| ProjectError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Set version {} in {:?}", version, path);
        Ok(())
    }
}
