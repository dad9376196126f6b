//! Detection registry
//!
//! Holds an ordered, immutable list of kind descriptors. The order decides
//! both detection and composite member order.

use std::path::Path;

use tracing::debug;

use crate::project::composite::CompositeProject;
use crate::project::error::ProjectError;
use crate::project::flutter::FlutterProject;
use crate::project::go::GoProject;
use crate::project::node::NodeProject;
use crate::project::python::PythonProject;
use crate::project::rust::RustProject;
use crate::project::traits::Project;
use crate::project::types::ProjectKind;

/// Detection predicate and constructor for one project kind
#[derive(Clone, Copy)]
pub struct KindDescriptor {
    pub kind: ProjectKind,
    pub detect: fn(&Path) -> bool,
    pub build: fn(&Path) -> Box<dyn Project>,
}

impl KindDescriptor {
    pub fn new(
        kind: ProjectKind,
        detect: fn(&Path) -> bool,
        build: fn(&Path) -> Box<dyn Project>,
    ) -> Self {
        Self {
            kind,
            detect,
            build,
        }
    }
}

#[derive(Clone)]
pub struct Registry {
    descriptors: Vec<KindDescriptor>,
}

impl Registry {
    pub fn new(descriptors: Vec<KindDescriptor>) -> Self {
        Self { descriptors }
    }

    /// The built-in kinds in detection order: Python, Go, Node, Flutter, Rust
    pub fn standard() -> Self {
        Self::new(vec![
            KindDescriptor::new(ProjectKind::Python, PythonProject::detect, |dir| {
                Box::new(PythonProject::new(dir))
            }),
            KindDescriptor::new(ProjectKind::Go, GoProject::detect, |dir| {
                Box::new(GoProject::new(dir))
            }),
            KindDescriptor::new(ProjectKind::Node, NodeProject::detect, |dir| {
                Box::new(NodeProject::new(dir))
            }),
            KindDescriptor::new(ProjectKind::Flutter, FlutterProject::detect, |dir| {
                Box::new(FlutterProject::new(dir))
            }),
            KindDescriptor::new(ProjectKind::Rust, RustProject::detect, |dir| {
                Box::new(RustProject::new(dir))
            }),
        ])
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProjectKind> + '_ {
        self.descriptors.iter().map(|d| d.kind)
    }

    /// Kinds whose predicate matches `workdir`, in registry order
    pub fn detect(&self, workdir: &Path) -> Vec<ProjectKind> {
        let kinds: Vec<ProjectKind> = self
            .descriptors
            .iter()
            .filter(|d| (d.detect)(workdir))
            .map(|d| d.kind)
            .collect();
        debug!("Detected {:?} in {:?}", kinds, workdir);
        kinds
    }

    /// Single matching kind, [`ProjectKind::Composite`] for several, [`ProjectKind::Unknown`] for none
    pub fn which(&self, workdir: &Path) -> ProjectKind {
        match self.detect(workdir).as_slice() {
            [] => ProjectKind::Unknown,
            [kind] => *kind,
            _ => ProjectKind::Composite,
        }
    }

    /// Build an adapter for every kind that matches `workdir`, in registry order
    pub fn scan(&self, workdir: &Path) -> Vec<Box<dyn Project>> {
        self.descriptors
            .iter()
            .filter(|d| (d.detect)(workdir))
            .map(|d| (d.build)(workdir))
            .collect()
    }

    /// Build the adapter for `kind` without running detection
    ///
    /// Returns `None` for [`ProjectKind::Unknown`] and kinds the registry does not hold.
    pub fn project(&self, kind: ProjectKind, workdir: &Path) -> Option<Box<dyn Project>> {
        match kind {
            ProjectKind::Composite => Some(Box::new(CompositeProject::scan(self, workdir))),
            ProjectKind::Unknown => None,
            _ => self
                .descriptors
                .iter()
                .find(|d| d.kind == kind)
                .map(|d| (d.build)(workdir)),
        }
    }

    /// Detect `workdir` and build the adapter that governs it.
    ///
    /// One match yields that kind's adapter; several yield a composite.
    pub fn resolve(&self, workdir: &Path) -> Result<Box<dyn Project>, ProjectError> {
        let mut members = self.scan(workdir);
        match members.len() {
            0 => Err(ProjectError::NoProjects(workdir.to_path_buf())),
            1 => Ok(members.remove(0)),
            _ => Ok(Box::new(CompositeProject::new(workdir, members))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    const PYPROJECT: &str = "[tool.poetry]\nname = \"demo\"\nversion = \"1.2.3\"\n";
    const PACKAGE_JSON: &str = r#"{"name":"demo","version":"1.2.3"}"#;
    const PUBSPEC: &str = "name: demo\nversion: 1.2.3+4\n";
    const CARGO_TOML: &str = "[package]\nname = \"demo\"\nversion = \"1.2.3\"\n";
    const GO_MOD: &str = "module example.com/demo\n";

    fn dir_with(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[rstest]
    #[case(&[("pyproject.toml", PYPROJECT)], ProjectKind::Python)]
    #[case(&[("package.json", PACKAGE_JSON)], ProjectKind::Node)]
    #[case(&[("pubspec.yaml", PUBSPEC)], ProjectKind::Flutter)]
    #[case(&[("Cargo.toml", CARGO_TOML)], ProjectKind::Rust)]
    #[case(&[("go.mod", GO_MOD)], ProjectKind::Go)]
    #[case(&[("pyproject.toml", PYPROJECT), ("package.json", PACKAGE_JSON)], ProjectKind::Composite)]
    #[case(&[("README.md", "# demo")], ProjectKind::Unknown)]
    #[case(&[], ProjectKind::Unknown)]
    fn which_returns_expected(#[case] files: &[(&str, &str)], #[case] expected: ProjectKind) {
        let dir = dir_with(files);

        assert_eq!(Registry::standard().which(dir.path()), expected);
    }

    #[test]
    fn scan_follows_registry_order() {
        let dir = dir_with(&[
            ("Cargo.toml", CARGO_TOML),
            ("package.json", PACKAGE_JSON),
            ("pyproject.toml", PYPROJECT),
        ]);

        let kinds: Vec<ProjectKind> = Registry::standard()
            .scan(dir.path())
            .iter()
            .map(|p| p.kind())
            .collect();

        assert_eq!(
            kinds,
            vec![ProjectKind::Python, ProjectKind::Node, ProjectKind::Rust]
        );
    }

    #[test]
    fn resolve_returns_single_adapter_for_one_match() {
        let dir = dir_with(&[("pyproject.toml", PYPROJECT)]);

        let project = Registry::standard().resolve(dir.path()).unwrap();

        assert_eq!(project.kind(), ProjectKind::Python);
        assert_eq!(project.get_version().unwrap().to_string(), "1.2.3");
    }

    #[test]
    fn resolve_returns_composite_for_several_matches() {
        let dir = dir_with(&[("pyproject.toml", PYPROJECT), ("Cargo.toml", CARGO_TOML)]);

        let project = Registry::standard().resolve(dir.path()).unwrap();

        assert_eq!(project.kind(), ProjectKind::Composite);
        assert!(project.is_me(dir.path()));
    }

    #[test]
    fn resolve_fails_for_unknown_directory() {
        let dir = dir_with(&[]);

        assert!(matches!(
            Registry::standard().resolve(dir.path()),
            Err(ProjectError::NoProjects(_))
        ));
    }

    #[rstest]
    #[case(ProjectKind::Node)]
    #[case(ProjectKind::Go)]
    #[case(ProjectKind::Composite)]
    fn project_builds_requested_kind(#[case] kind: ProjectKind) {
        let dir = dir_with(&[]);

        let project = Registry::standard().project(kind, dir.path()).unwrap();

        assert_eq!(project.kind(), kind);
        assert_eq!(project.work_dir(), dir.path());
    }

    #[test]
    fn project_returns_none_for_unknown() {
        let dir = dir_with(&[]);

        assert!(
            Registry::standard()
                .project(ProjectKind::Unknown, dir.path())
                .is_none()
        );
    }

    #[test]
    fn custom_registry_only_knows_its_kinds() {
        let registry = Registry::new(vec![KindDescriptor::new(
            ProjectKind::Rust,
            RustProject::detect,
            |dir| Box::new(RustProject::new(dir)),
        )]);
        let dir = dir_with(&[("pyproject.toml", PYPROJECT), ("Cargo.toml", CARGO_TOML)]);

        assert_eq!(registry.which(dir.path()), ProjectKind::Rust);
        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![ProjectKind::Rust]);
        assert!(registry.project(ProjectKind::Python, dir.path()).is_none());
    }
}
