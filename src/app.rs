//! One verit invocation: resolve the project, update its version, optionally tag.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::changelog;
use crate::config::Config;
use crate::git::{CommandRunner, Git};
use crate::project::{Project, ProjectError, ProjectKind, Registry};
use crate::version::{Bump, Version};

/// Which tagging step runs after the version update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagMode {
    #[default]
    None,
    Local,
    /// Create the tag and force-push it to the configured remote
    Push,
}

impl TagMode {
    pub fn from_flags(tag: bool, push: bool) -> Self {
        match (tag, push) {
            (_, true) => TagMode::Push,
            (true, false) => TagMode::Local,
            (false, false) => TagMode::None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub work_dir: PathBuf,
    /// Explicit version; bump directives are ignored when set
    pub set_version: Option<Version>,
    pub major: Bump,
    pub minor: Bump,
    pub patch: Bump,
    pub build: Option<String>,
    pub tag: TagMode,
}

impl Options {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    fn bumps(&self) -> bool {
        [self.major, self.minor, self.patch]
            .iter()
            .any(|bump| *bump != Bump::Keep)
    }
}

/// State of the project after a run
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub kind: ProjectKind,
    pub work_dir: PathBuf,
    pub version: Version,
    /// Whether the manifest was written
    pub changed: bool,
    pub tag: Option<String>,
}

impl Outcome {
    pub fn describe(&self) -> String {
        format!(
            "'{}' project in '{}' version is '{}'",
            self.kind,
            self.work_dir.display(),
            self.version
        )
    }
}

pub fn run<R: CommandRunner>(
    registry: &Registry,
    options: &Options,
    runner: R,
) -> anyhow::Result<Outcome> {
    let config = Config::load(&options.work_dir)?;
    let project = registry.resolve(&options.work_dir)?;

    let changed = update_version(project.as_ref(), options)?;

    let tag = match options.tag {
        TagMode::None => None,
        mode => Some(create_tag(
            project.as_ref(),
            &config,
            mode == TagMode::Push,
            runner,
        )?),
    };

    let version = project.get_version()?;
    Ok(Outcome {
        kind: project.kind(),
        work_dir: project.work_dir().to_path_buf(),
        version,
        changed,
        tag,
    })
}

/// Apply the explicit version or bump directives, then the build metadata.
///
/// Writes at most once and returns whether it wrote.
fn update_version(project: &dyn Project, options: &Options) -> Result<bool, ProjectError> {
    if options.set_version.is_none() && !options.bumps() && options.build.is_none() {
        debug!("No version change requested");
        return Ok(false);
    }

    let mut version = match &options.set_version {
        Some(version) => version.clone(),
        None => {
            let mut version = current_or_default(project)?;
            version.bump_major(options.major);
            version.bump_minor(options.minor);
            version.bump_patch(options.patch);
            version
        }
    };

    if let Some(build) = &options.build {
        version.build = build.clone();
    }

    project.set_version(&version)?;
    info!(
        "'{}' project in {:?} set to version '{}'",
        project.kind(),
        project.work_dir(),
        version
    );
    Ok(true)
}

fn current_or_default(project: &dyn Project) -> Result<Version, ProjectError> {
    match project.get_version() {
        Ok(version) => Ok(version),
        Err(e) if e.is_not_found() => {
            warn!("{}, using default version '0.0.0'", e);
            Ok(Version::default())
        }
        Err(e) => Err(e),
    }
}

fn create_tag<R: CommandRunner>(
    project: &dyn Project,
    config: &Config,
    push: bool,
    runner: R,
) -> anyhow::Result<String> {
    let version = project
        .get_version()
        .context("resolve version before tagging failed")?;
    let workdir = project.work_dir();

    if config.changelog.require_entry {
        changelog::ensure_updated(workdir, &config.changelog.file, &version.to_string())?;
    }

    let git = Git::with_runner(workdir, runner);
    git.ensure_clean(push)?;

    let name = config.tag_name(&version);
    git.create_tag(&name)?;
    if push {
        git.push_tag(&config.tag.remote, &name)?;
    }

    Ok(name)
}
