use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;

/// A semantic version as recorded in a project manifest.
///
/// Ordering is derived field by field: `major`, `minor`, `patch`, then
/// `prerelease` and `build` compared as plain strings. This is not full
/// semver precedence: an empty prerelease sorts *before* any non-empty one,
/// numeric identifiers compare lexically (`rc.10` < `rc.9`), and build
/// metadata breaks ties instead of being ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: String,
    pub build: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            ..Self::default()
        }
    }

    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    ///
    /// The whole input must match; surrounding whitespace, a `v` prefix,
    /// partial versions and leading zeros in numeric components are rejected.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let parsed = semver::Version::parse(text).map_err(|e| VersionError::Invalid {
            input: text.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease: parsed.pre.as_str().to_string(),
            build: parsed.build.as_str().to_string(),
        })
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cmp::Ordering;

    #[rstest]
    #[case("1.2.3", 1, 2, 3, "", "")]
    #[case("0.1.0-alpha", 0, 1, 0, "alpha", "")]
    #[case("2.10.5+build.11", 2, 10, 5, "", "build.11")]
    #[case("3.4.5-rc.1+sha.abcdef", 3, 4, 5, "rc.1", "sha.abcdef")]
    #[case("0.0.0", 0, 0, 0, "", "")]
    fn parse_extracts_all_components(
        #[case] input: &str,
        #[case] major: u64,
        #[case] minor: u64,
        #[case] patch: u64,
        #[case] prerelease: &str,
        #[case] build: &str,
    ) {
        let version = Version::parse(input).unwrap();

        assert_eq!(
            version,
            Version {
                major,
                minor,
                patch,
                prerelease: prerelease.to_string(),
                build: build.to_string(),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("1.0")]
    #[case("1.0.0.0")]
    #[case("01.2.3")]
    #[case("1.02.3")]
    #[case("a.b.c")]
    #[case("v1.2.3")]
    #[case(" 1.2.3")]
    #[case("1.2.3 ")]
    #[case("1.2.3-")]
    #[case("1.2.3-01")]
    #[case("1.2.3+")]
    fn parse_rejects_malformed_input(#[case] input: &str) {
        let result = Version::parse(input);

        assert!(
            matches!(result, Err(VersionError::Invalid { .. })),
            "expected {input:?} to be rejected, got {result:?}"
        );
    }

    #[rstest]
    #[case("1.2.3")]
    #[case("10.20.30-beta.2")]
    #[case("1.0.0+0017")]
    #[case("1.0.0-x-y-z.0+exp.sha.5114f85")]
    fn display_round_trips_parsed_text(#[case] input: &str) {
        assert_eq!(Version::parse(input).unwrap().to_string(), input);
    }

    #[test]
    fn new_formats_plain_triple() {
        let version = Version::new(4, 0, 12);

        assert_eq!(version.to_string(), "4.0.12");
        assert_eq!(Version::parse("4.0.12").unwrap(), version);
    }

    #[rstest]
    #[case("1.2.3", "1.2.3", Ordering::Equal)]
    #[case("1.2.4", "1.2.3", Ordering::Greater)]
    #[case("1.2.3", "1.3.0", Ordering::Less)]
    #[case("2.0.0", "1.9.9", Ordering::Greater)]
    #[case("1.2.3-alpha", "1.2.3-beta", Ordering::Less)]
    // plain string comparison: an empty prerelease sorts first
    #[case("1.2.3", "1.2.3-alpha", Ordering::Less)]
    // numeric identifiers are not compared numerically
    #[case("1.0.0-rc.10", "1.0.0-rc.9", Ordering::Less)]
    // build metadata is the final tiebreaker
    #[case("1.0.0+2", "1.0.0+1", Ordering::Greater)]
    #[case("1.0.0", "1.0.0+1", Ordering::Less)]
    fn ordering_compares_fields_lexicographically(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        let a = Version::parse(a).unwrap();
        let b = Version::parse(b).unwrap();

        assert_eq!(a.cmp(&b), expected);
        assert_eq!(b.cmp(&a), expected.reverse());
        assert_eq!(a == b, expected == Ordering::Equal);
    }

    #[test]
    fn equality_includes_build_metadata() {
        let a = Version::parse("1.2.3+4").unwrap();
        let b = Version::parse("1.2.3+5").unwrap();

        assert_ne!(a, b);
        assert!(a < b);
    }
}
