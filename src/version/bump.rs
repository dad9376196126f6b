//! Version component bump directives

use std::str::FromStr;

use crate::version::error::VersionError;
use crate::version::semver::Version;

/// What to do with one component of a version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bump {
    /// Leave the component (and everything below it) untouched
    #[default]
    Keep,
    /// Add one to the component
    Increase,
    /// Set the component to a literal value
    Set(u64),
}

impl Bump {
    /// Returns the new component value, or `None` for [`Bump::Keep`].
    fn apply(self, current: u64) -> Option<u64> {
        match self {
            Bump::Keep => None,
            Bump::Increase => Some(current.saturating_add(1)),
            Bump::Set(value) => Some(value),
        }
    }
}

impl FromStr for Bump {
    type Err = VersionError;

    /// Accepts `keep`, `inc`/`increase` (case-insensitive) or a non-negative integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(Bump::Keep),
            "inc" | "increase" => Ok(Bump::Increase),
            other => other
                .parse::<u64>()
                .map(Bump::Set)
                .map_err(|_| VersionError::InvalidComponent(s.to_string())),
        }
    }
}

impl Version {
    /// Bump the major component. Any change resets minor and patch to 0.
    pub fn bump_major(&mut self, bump: Bump) {
        let Some(major) = bump.apply(self.major) else {
            return;
        };
        self.major = major;
        self.minor = 0;
        self.patch = 0;
    }

    /// Bump the minor component. Any change resets patch to 0.
    pub fn bump_minor(&mut self, bump: Bump) {
        let Some(minor) = bump.apply(self.minor) else {
            return;
        };
        self.minor = minor;
        self.patch = 0;
    }

    /// Bump the patch component. Lower components are untouched.
    pub fn bump_patch(&mut self, bump: Bump) {
        if let Some(patch) = bump.apply(self.patch) {
            self.patch = patch;
        }
    }
}
