//! Changelog entry check
//!
//! A version counts as documented when a Markdown heading in the changelog
//! carries it as one of its whitespace-separated tokens, e.g.
//! `## [0.2.0] - 2025-10-14` or `## v1.3.0`. Body text does not count.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("{} has no heading for version {version}", path.display())]
    MissingEntry { path: PathBuf, version: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check that `file_name` in `workdir` has a heading for `version`.
///
/// A missing changelog, or an empty version, has nothing to enforce and passes.
pub fn ensure_updated(workdir: &Path, file_name: &str, version: &str) -> Result<(), ChangelogError> {
    let version = version.trim();
    if version.is_empty() {
        return Ok(());
    }

    let path = workdir.join(file_name);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No changelog at {:?}, skipping check", path);
            return Ok(());
        }
        Err(source) => return Err(ChangelogError::Read { path, source }),
    };

    let target = VersionTarget::new(version);
    if content.lines().any(|line| is_version_heading(line, &target)) {
        Ok(())
    } else {
        Err(ChangelogError::MissingEntry {
            path,
            version: version.to_string(),
        })
    }
}

struct VersionTarget<'a> {
    exact: &'a str,
    bare: &'a str,
}

impl<'a> VersionTarget<'a> {
    fn new(version: &'a str) -> Self {
        Self {
            exact: version,
            bare: strip_v(version),
        }
    }

    fn matches(&self, token: &str) -> bool {
        !token.is_empty() && (token == self.exact || strip_v(token) == self.bare)
    }
}

fn strip_v(s: &str) -> &str {
    s.strip_prefix(['v', 'V']).unwrap_or(s)
}

fn is_version_heading(line: &str, target: &VersionTarget<'_>) -> bool {
    let Some(header) = line.trim().strip_prefix('#') else {
        return false;
    };

    header
        .trim_start_matches('#')
        .split_whitespace()
        .map(normalize_token)
        .any(|token| target.matches(token))
}

const WRAPPERS: [char; 11] = ['[', ']', '(', ')', '{', '}', '<', '>', '`', '*', '_'];
const TRAILING: [char; 6] = [':', ',', ';', '.', '!', '?'];

fn normalize_token(token: &str) -> &str {
    token
        .trim_end_matches(TRAILING)
        .trim_matches(WRAPPERS)
        .trim_end_matches(TRAILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    const RELEASED: &str = "# Changelog\n\n## [0.2.0] - 2025-10-14\n\n### Added\n\n- Something nice\n";

    fn changelog(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CHANGELOG.md"), content).unwrap();
        dir
    }

    #[rstest]
    #[case("1.0.0")]
    #[case("")]
    fn missing_changelog_is_satisfied(#[case] version: &str) {
        let dir = TempDir::new().unwrap();

        assert!(ensure_updated(dir.path(), "CHANGELOG.md", version).is_ok());
    }

    #[rstest]
    #[case(RELEASED, "0.2.0", true)]
    #[case(RELEASED, "v0.2.0", true)]
    #[case(RELEASED, "V0.2.0", true)]
    #[case(RELEASED, "0.3.0", false)]
    #[case("# Changelog\n\n## v1.3.0\n", "1.3.0", true)]
    #[case("# Changelog\n\n## v1.3.0\n", "v1.3.0", true)]
    #[case("### Release 2.0.0: the big one\n", "2.0.0", true)]
    #[case("## `4.1.0`, finally\n", "4.1.0", true)]
    #[case("# Changelog\n\n## [Unreleased]\n\nNo release info.\n", "0.9.0", false)]
    #[case("# Changelog\n\n## [Unreleased]\n\nSee version 2.0.0 for more.\n", "2.0.0", false)]
    #[case("## [1.2.30]\n", "1.2.3", false)]
    fn heading_tokens_decide(#[case] content: &str, #[case] version: &str, #[case] expected: bool) {
        let dir = changelog(content);

        assert_eq!(
            ensure_updated(dir.path(), "CHANGELOG.md", version).is_ok(),
            expected
        );
    }

    #[test]
    fn missing_entry_names_version() {
        let dir = changelog(RELEASED);

        let err = ensure_updated(dir.path(), "CHANGELOG.md", "0.3.0").unwrap_err();

        assert!(matches!(err, ChangelogError::MissingEntry { ref version, .. } if version == "0.3.0"));
    }

    #[test]
    fn unreadable_changelog_fails() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("CHANGELOG.md")).unwrap();

        assert!(matches!(
            ensure_updated(dir.path(), "CHANGELOG.md", "1.0.0"),
            Err(ChangelogError::Read { .. })
        ));
    }
}
