use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::editor::EditError;
use crate::project::types::ProjectKind;
use crate::version::{Version, VersionError};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("{file_name} not found under {}, please create one", workdir.display())]
    VersionFileMissing {
        file_name: &'static str,
        workdir: PathBuf,
    },

    #[error("parse version from {} failed: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: VersionError,
    },

    #[error(
        "version mismatch between {first} ({first_version}) and {second} ({second_version}) projects"
    )]
    Mismatch {
        first: ProjectKind,
        first_version: Version,
        second: ProjectKind,
        second_version: Version,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no supported projects detected in {}", .0.display())]
    NoProjects(PathBuf),

    #[error("{kind} project: {source}")]
    Member {
        kind: ProjectKind,
        #[source]
        source: Box<ProjectError>,
    },
}

impl ProjectError {
    /// True when the manifest, the version file or the version field is absent.
    ///
    /// A [`ProjectError::Member`] never counts, whatever its source.
    pub fn is_not_found(&self) -> bool {
        match self {
            ProjectError::Edit(e) => e.is_not_found(),
            ProjectError::VersionFileMissing { .. } => true,
            _ => false,
        }
    }
}
