//! Shared helpers for manifests whose version lives in a single field

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::editor;
use crate::project::error::ProjectError;
use crate::version::Version;

pub(crate) fn file_exists(workdir: &Path, file_name: &str) -> bool {
    workdir.join(file_name).exists()
}

/// Extract the version field matched by `pattern` from `path` as raw text
pub(crate) fn read_field(path: &Path, pattern: &Regex) -> Result<String, ProjectError> {
    let raw = editor::extract_one(path, pattern)?;
    debug!("Found version field '{}' in {:?}", raw, path);
    Ok(raw.trim().to_string())
}

pub(crate) fn parse_version(path: &Path, raw: &str) -> Result<Version, ProjectError> {
    Version::parse(raw).map_err(|source| ProjectError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_version(path: &Path, pattern: &Regex) -> Result<Version, ProjectError> {
    let raw = read_field(path, pattern)?;
    parse_version(path, &raw)
}

pub(crate) fn write_version(
    path: &Path,
    pattern: &Regex,
    version: &Version,
) -> Result<(), ProjectError> {
    editor::replace_one(path, pattern, &version.to_string())?;
    info!("Set version {} in {:?}", version, path);
    Ok(())
}

/// Search `root` and its subdirectories for a file named `file_name`.
///
/// A directory's own files are visited before any of its subdirectories;
/// siblings are visited in name order.
pub(crate) fn find_file_down(root: &Path, file_name: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| entry.file_type().is_file() && entry.file_name() == file_name)
        .map(|entry| entry.into_path())
}
