//! Common types for project adapters

use std::fmt;

/// Manifest convention governing a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// Node (package.json)
    Node,
    /// Python (pyproject.toml)
    Python,
    /// Go (go.mod + version.txt)
    Go,
    /// Flutter/Dart (pubspec.yaml)
    Flutter,
    /// Rust (Cargo.toml)
    Rust,
    /// More than one of the above in the same directory
    Composite,
    /// None of the above
    Unknown,
}

impl ProjectKind {
    /// Returns the display name of the project kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Node => "Node",
            ProjectKind::Python => "Python",
            ProjectKind::Go => "Go",
            ProjectKind::Flutter => "Flutter",
            ProjectKind::Rust => "Rust",
            ProjectKind::Composite => "Composite",
            ProjectKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "node" => Ok(ProjectKind::Node),
            "python" => Ok(ProjectKind::Python),
            "go" => Ok(ProjectKind::Go),
            "flutter" => Ok(ProjectKind::Flutter),
            "rust" => Ok(ProjectKind::Rust),
            "composite" | "mix" => Ok(ProjectKind::Composite),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("node", Ok(ProjectKind::Node))]
    #[case("Python", Ok(ProjectKind::Python))]
    #[case("GO", Ok(ProjectKind::Go))]
    #[case("flutter", Ok(ProjectKind::Flutter))]
    #[case("rust", Ok(ProjectKind::Rust))]
    #[case("mix", Ok(ProjectKind::Composite))]
    #[case("composite", Ok(ProjectKind::Composite))]
    #[case("unknown", Err(()))]
    #[case("java", Err(()))]
    fn from_str_returns_expected(#[case] input: &str, #[case] expected: Result<ProjectKind, ()>) {
        assert_eq!(input.parse::<ProjectKind>(), expected);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ProjectKind::Flutter.to_string(), "Flutter");
        assert_eq!(ProjectKind::Unknown.to_string(), "Unknown");
    }
}
