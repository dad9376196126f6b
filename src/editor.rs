//! Single-match text editing
//!
//! Every field-based project reads and rewrites its version through the two
//! primitives here. A pattern may carry at most one capture group: with no
//! group the whole match is the field, with one group only the group is.

use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("{} should be a file", .0.display())]
    NotAFile(PathBuf),

    #[error("pattern {pattern} not found in {}", path.display())]
    PatternNotFound { pattern: String, path: PathBuf },

    #[error("pattern {pattern} has {groups} capture groups; at most one is allowed")]
    TooManyCaptures { pattern: String, groups: usize },

    #[error("pattern {pattern} matches {count} times in {}; expected exactly one", path.display())]
    MultipleMatches {
        pattern: String,
        path: PathBuf,
        count: usize,
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
}

impl EditError {
    /// True when the file or the field is absent, as opposed to malformed.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EditError::FileNotFound(_) | EditError::PatternNotFound { .. }
        )
    }
}

/// Return the text of the first match of `pattern` in `path`.
pub fn extract_one(path: &Path, pattern: &Regex) -> Result<String, EditError> {
    check_captures(pattern)?;
    let content = read_file(path)?;

    let span = match_spans(&content, pattern)
        .next()
        .ok_or_else(|| not_found(path, pattern))?;

    Ok(content[span].to_string())
}

/// Replace the single match of `pattern` in `path` with `replacement`.
///
/// Only the matched span (or its capture group) changes; every other byte,
/// line endings included, is written back untouched and the file keeps its
/// permissions. A second match is an error and leaves the file alone.
pub fn replace_one(path: &Path, pattern: &Regex, replacement: &str) -> Result<(), EditError> {
    check_captures(pattern)?;
    let content = read_file(path)?;

    let spans: Vec<Range<usize>> = match_spans(&content, pattern).collect();
    let span = match spans.as_slice() {
        [] => return Err(not_found(path, pattern)),
        [span] => span.clone(),
        _ => {
            return Err(EditError::MultipleMatches {
                pattern: pattern.as_str().to_string(),
                path: path.to_path_buf(),
                count: spans.len(),
            });
        }
    };

    debug!(
        "Replacing '{}' with '{}' in {:?}",
        &content[span.clone()],
        replacement,
        path
    );

    let mut updated = String::with_capacity(content.len() + replacement.len());
    updated.push_str(&content[..span.start]);
    updated.push_str(replacement);
    updated.push_str(&content[span.end..]);

    // Writing to the existing file truncates it in place, so its mode is kept.
    fs::write(path, updated).map_err(|source| EditError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn check_captures(pattern: &Regex) -> Result<(), EditError> {
    // captures_len counts the implicit whole-match group
    let groups = pattern.captures_len() - 1;
    if groups > 1 {
        return Err(EditError::TooManyCaptures {
            pattern: pattern.as_str().to_string(),
            groups,
        });
    }
    Ok(())
}

/// Spans of the field in each match: group 1 when present, else the whole match.
fn match_spans<'a>(
    content: &'a str,
    pattern: &'a Regex,
) -> impl Iterator<Item = Range<usize>> + 'a {
    pattern.captures_iter(content).filter_map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.range())
    })
}

fn read_file(path: &Path) -> Result<String, EditError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => EditError::FileNotFound(path.to_path_buf()),
        _ => EditError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    if metadata.is_dir() {
        return Err(EditError::NotAFile(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| EditError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn not_found(path: &Path, pattern: &Regex) -> EditError {
    EditError::PatternNotFound {
        pattern: pattern.as_str().to_string(),
        path: path.to_path_buf(),
    }
}
