//! Host-side glue for the lodestar autoload system.
//!
//! The core resolver only turns qualified names into candidate paths. This
//! crate supplies the collaborator side: a chain of autoload hooks with
//! idempotent install/uninstall, the file-existence check, and dispatch to
//! whatever loading mechanism the embedding runtime provides.

mod chain;
mod hook;
mod loader;

pub use chain::{LoaderChain, ResolveHook};
pub use hook::resolver_hook;
pub use loader::SourceLoader;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
