//! Core types and resolution logic for the lodestar autoload system.
//!
//! This crate maps namespace-qualified names onto candidate source file
//! paths. A host runtime mounts namespaces at directories, then asks the
//! resolver where the file implementing a given name should live; checking
//! that the file exists and performing the actual load is the host's job.

mod error;
mod manifest;
mod name;
mod registry;
mod resolver;

// Re-export core types
pub use error::{Error, Result};
pub use manifest::{Mount, MountManifest};
pub use registry::Registry;
pub use resolver::Resolver;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
