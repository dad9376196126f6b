//! Adapter for directories that match more than one project kind
//!
//! Reads require every member to agree on the version (build metadata
//! included). Writes go to every member in scan order and stop at the first
//! failure; members already written are not rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::project::error::ProjectError;
use crate::project::registry::Registry;
use crate::project::traits::Project;
use crate::project::types::ProjectKind;
use crate::version::Version;

pub struct CompositeProject {
    workdir: PathBuf,
    members: Vec<Box<dyn Project>>,
}

impl CompositeProject {
    pub fn new(workdir: impl Into<PathBuf>, members: Vec<Box<dyn Project>>) -> Self {
        Self {
            workdir: workdir.into(),
            members,
        }
    }

    /// Build a composite from every kind `registry` detects in `workdir`.
    ///
    /// The scan runs once; the member list is fixed for the lifetime of the value.
    pub fn scan(registry: &Registry, workdir: &Path) -> Self {
        Self::new(workdir, registry.scan(workdir))
    }

    fn wrap(kind: ProjectKind, err: ProjectError) -> ProjectError {
        ProjectError::Member {
            kind,
            source: Box::new(err),
        }
    }
}

impl Project for CompositeProject {
    fn is_me(&self, workdir: &Path) -> bool {
        workdir == self.workdir && self.members.len() > 1
    }

    fn kind(&self) -> ProjectKind {
        ProjectKind::Composite
    }

    fn work_dir(&self) -> &Path {
        &self.workdir
    }

    fn get_version(&self) -> Result<Version, ProjectError> {
        let mut members = self.members.iter();
        let first = members
            .next()
            .ok_or_else(|| ProjectError::NoProjects(self.workdir.clone()))?;
        let reference = first
            .get_version()
            .map_err(|e| Self::wrap(first.kind(), e))?;
        debug!("{} project reports version {}", first.kind(), reference);

        for member in members {
            let version = member
                .get_version()
                .map_err(|e| Self::wrap(member.kind(), e))?;
            if version != reference {
                return Err(ProjectError::Mismatch {
                    first: first.kind(),
                    first_version: reference,
                    second: member.kind(),
                    second_version: version,
                });
            }
        }

        Ok(reference)
    }

    fn set_version(&self, version: &Version) -> Result<(), ProjectError> {
        if self.members.is_empty() {
            return Err(ProjectError::NoProjects(self.workdir.clone()));
        }

        for member in &self.members {
            member
                .set_version(version)
                .map_err(|e| Self::wrap(member.kind(), e))?;
            info!("{} project set to {}", member.kind(), version);
        }

        Ok(())
    }
}
