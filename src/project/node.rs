//! package.json adapter

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::project::error::ProjectError;
use crate::project::manifest;
use crate::project::traits::Project;
use crate::project::types::ProjectKind;
use crate::version::Version;

/// Adapter for Node projects
pub struct NodeProject {
    workdir: PathBuf,
    /// Regex for the version key: `"version": "1.2.3"`
    version_re: Regex,
}

impl NodeProject {
    pub const MANIFEST: &'static str = "package.json";

    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            // Not line-anchored: minified manifests keep everything on one line
            version_re: Regex::new(r#""version"\s*:\s*"([^"\\\r\n]+)""#)
                .expect("node version pattern is valid"),
        }
    }

    pub fn detect(workdir: &Path) -> bool {
        manifest::file_exists(workdir, Self::MANIFEST)
    }

    fn manifest_path(&self) -> PathBuf {
        self.workdir.join(Self::MANIFEST)
    }
}

impl Project for NodeProject {
    fn is_me(&self, workdir: &Path) -> bool {
        Self::detect(workdir)
    }

    fn kind(&self) -> ProjectKind {
        ProjectKind::Node
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_with(content: &str) -> (TempDir, NodeProject) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), content).unwrap();
        let project = NodeProject::new(dir.path());
        (dir, project)
    }

    #[test]
    fn get_version_reads_pretty_printed_manifest() {
        let (_dir, project) = project_with(
            r#"{
  "name": "demo",
  "version": "1.2.3",
  "dependencies": {
    "lodash": "^4.17.21"
  }
}
"#,
        );

        assert_eq!(project.get_version().unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn get_version_reads_single_line_manifest() {
        let (_dir, project) = project_with(r#"{"name":"demo","version":"0.4.0-beta.1"}"#);

        assert_eq!(project.get_version().unwrap().to_string(), "0.4.0-beta.1");
    }

    #[test]
    fn set_version_rewrites_only_the_value() {
        let (dir, project) = project_with(
            "{\n  \"name\": \"demo\",\n  \"version\": \"1.2.3\",\n  \"private\": true\n}\n",
        );

        project.set_version(&Version::new(1, 3, 0)).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            "{\n  \"name\": \"demo\",\n  \"version\": \"1.3.0\",\n  \"private\": true\n}\n"
        );
    }

    #[test]
    fn get_version_reports_missing_field() {
        let (_dir, project) = project_with(r#"{"name":"demo"}"#);

        let err = project.get_version().unwrap_err();

        assert!(err.is_not_found(), "unexpected error: {err}");
    }

    #[test]
    fn get_version_reports_invalid_version() {
        let (_dir, project) = project_with(r#"{"version":"1.2"}"#);

        assert!(matches!(
            project.get_version(),
            Err(ProjectError::Parse { .. })
        ));
    }

    #[test]
    fn is_me_checks_for_manifest() {
        let (dir, project) = project_with("{}");
        let empty = TempDir::new().unwrap();

        assert!(project.is_me(dir.path()));
        assert!(!project.is_me(empty.path()));
        assert_eq!(project.kind(), ProjectKind::Node);
        assert_eq!(project.work_dir(), dir.path());
    }
}
