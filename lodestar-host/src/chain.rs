//! Autoload hook chain.
//!
//! The chain is the seam between the host runtime's "unknown name
//! referenced" event and the resolvers that know where source files live.
//! Hooks are consulted in order; the first one whose candidate path exists
//! on disk wins.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use lodestar_core::Result;

use crate::loader::SourceLoader;

/// A resolve callback installed on the chain.
pub type ResolveHook = Arc<dyn Fn(&str) -> Option<PathBuf> + Send + Sync>;

struct Hook {
    name: String,
    resolve: ResolveHook,
}

/// Ordered set of resolve hooks driving on-demand source loading.
///
/// Hooks are identified by a caller-chosen name. Installing a name twice or
/// uninstalling a name that is not present are safe no-ops, so setup and
/// teardown paths can run unconditionally.
pub struct LoaderChain {
    hooks: Vec<Hook>,
}

impl LoaderChain {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Install a hook under `name`. With `prepend` the hook is consulted
    /// before the ones already installed. No-op if `name` is taken.
    pub fn install(&mut self, name: &str, resolve: ResolveHook, prepend: bool) {
        if self.is_installed(name) {
            return;
        }
        debug!("installing autoload hook '{}'", name);

        let hook = Hook {
            name: name.to_string(),
            resolve,
        };
        if prepend {
            self.hooks.insert(0, hook);
        } else {
            self.hooks.push(hook);
        }
    }

    /// Remove the hook installed under `name`, if any.
    pub fn uninstall(&mut self, name: &str) {
        if let Some(position) = self.hooks.iter().position(|h| h.name == name) {
            debug!("uninstalling autoload hook '{}'", name);
            self.hooks.remove(position);
        }
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.hooks.iter().any(|h| h.name == name)
    }

    /// Locate the file implementing `qualified`.
    ///
    /// Hooks that yield no candidate, or a candidate with no file behind it,
    /// are skipped and the next hook gets a chance.
    pub fn locate(&self, qualified: &str) -> Option<PathBuf> {
        for hook in &self.hooks {
            if let Some(path) = (hook.resolve)(qualified) {
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }

    /// Locate and load the file implementing `qualified`.
    ///
    /// Returns `Ok(false)` when there was nothing to load; a missing file is
    /// an expected outcome, not an error.
    pub fn load(&self, qualified: &str, loader: &mut dyn SourceLoader) -> Result<bool> {
        match self.locate(qualified) {
            Some(path) => {
                debug!("loading '{}' from {}", qualified, path.display());
                loader.load_source(&path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
