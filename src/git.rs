//! Git integration for release tagging
//!
//! All operations shell out to the `git` binary through [`CommandRunner`];
//! failures surface git's own stderr verbatim.

use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed: {stderr}")]
    Failed { command: String, stderr: String },

    #[error("git working tree has uncommitted changes")]
    Dirty,

    #[error("git branch is ahead of {upstream} by {count} commit(s); push your changes first")]
    Ahead { upstream: String, count: u32 },
}

/// Captured result of one git invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Seam for running git so tagging logic can be tested without a repository
#[cfg_attr(test, automock)]
pub trait CommandRunner {
    /// Run `git <args>` inside `dir`
    fn run(&self, dir: &Path, args: &[String]) -> Result<CommandOutput, GitError>;
}

/// Runs the `git` found on `PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl CommandRunner for SystemGit {
    fn run(&self, dir: &Path, args: &[String]) -> Result<CommandOutput, GitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command_line(args),
                source,
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Git operations scoped to one working directory
pub struct Git<R: CommandRunner = SystemGit> {
    dir: PathBuf,
    runner: R,
}

impl<R: CommandRunner> Git<R> {
    pub fn with_runner(dir: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            dir: dir.into(),
            runner,
        }
    }

    /// Fail unless the tree has no uncommitted changes and, when
    /// `check_pushed` is set, the branch is not ahead of its upstream.
    pub fn ensure_clean(&self, check_pushed: bool) -> Result<(), GitError> {
        let status = self.run(&["status", "--porcelain"])?;
        if !status.trim().is_empty() {
            return Err(GitError::Dirty);
        }

        if check_pushed {
            let branch = self.run(&["status", "--porcelain=v2", "--branch"])?;
            if let Some((upstream, count)) = parse_ahead(&branch) {
                return Err(GitError::Ahead { upstream, count });
            }
        }

        Ok(())
    }

    pub fn create_tag(&self, name: &str) -> Result<(), GitError> {
        self.run(&["tag", name])?;
        info!("Created tag {}", name);
        Ok(())
    }

    /// Force-push `name` to `remote`, replacing a tag of the same name there.
    pub fn push_tag(&self, remote: &str, name: &str) -> Result<(), GitError> {
        self.run(&["push", "--force", remote, name])?;
        info!("Pushed tag {} to {}", name, remote);
        Ok(())
    }

    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        debug!("Running {} in {:?}", command_line(&args), self.dir);

        let output = self.runner.run(&self.dir, &args)?;
        if output.success {
            return Ok(output.stdout);
        }

        let stderr = match output.stderr.trim() {
            "" => output.stdout.trim(),
            stderr => stderr,
        };
        Err(GitError::Failed {
            command: command_line(&args),
            stderr: stderr.to_string(),
        })
    }
}

fn command_line(args: &[String]) -> String {
    std::iter::once("git")
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read the upstream name and ahead count from `git status --porcelain=v2 --branch`.
///
/// Returns `None` when there is no upstream or the branch is not ahead.
fn parse_ahead(status: &str) -> Option<(String, u32)> {
    let mut upstream: Option<&str> = None;

    for line in status.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("# branch.upstream") {
            upstream = Some(rest.split_whitespace().next().unwrap_or(""));
            continue;
        }

        let Some(name) = upstream else {
            continue;
        };

        if let Some(rest) = line.strip_prefix("# branch.ab") {
            let mut fields = rest.split_whitespace();
            let (Some(ahead), Some(_behind)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Ok(count) = ahead.trim_start_matches('+').parse::<u32>() else {
                continue;
            };
            if count == 0 {
                return None;
            }
            let name = if name.is_empty() { "@{u}" } else { name };
            return Some((name.to_string(), count));
        }
    }

    None
}
