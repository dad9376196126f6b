//! Project detection and version adapters
//!
//! # Modules
//!
//! - [`traits`]: The [`Project`] adapter trait
//! - [`types`]: [`ProjectKind`]
//! - [`registry`]: Ordered kind descriptors, detection and adapter construction
//! - [`composite`]: Adapter reconciling several kinds in one directory
//! - [`node`], [`python`], [`rust`], [`flutter`], [`go`]: Per-ecosystem adapters
//! - [`error`]: Error type shared by all adapters

pub mod composite;
pub mod error;
pub mod flutter;
pub mod go;
mod manifest;
pub mod node;
pub mod python;
pub mod registry;
pub mod rust;
pub mod traits;
pub mod types;

pub use composite::CompositeProject;
pub use error::ProjectError;
pub use flutter::FlutterProject;
pub use go::GoProject;
pub use node::NodeProject;
pub use python::PythonProject;
pub use registry::{KindDescriptor, Registry};
pub use rust::RustProject;
pub use traits::Project;
pub use types::ProjectKind;
