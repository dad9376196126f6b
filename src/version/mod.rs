//! Semantic version value and bump directives
//!
//! # Modules
//!
//! - [`semver`]: The [`Version`] value with parsing, formatting and ordering
//! - [`bump`]: [`Bump`] directives and the cascading bump operations
//! - [`error`]: Error type for version parsing

pub mod bump;
pub mod error;
pub mod semver;

pub use bump::Bump;
pub use error::VersionError;
pub use semver::Version;
