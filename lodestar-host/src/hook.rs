use std::sync::{Arc, RwLock};

use lodestar_core::Resolver;

use crate::chain::ResolveHook;

/// Wrap a shared resolver as a chain hook.
///
/// The resolver's registry and cache are guarded by the lock, so one
/// resolver can keep serving lookups while the composition root retains a
/// handle for further mounts.
pub fn resolver_hook(resolver: Arc<RwLock<Resolver>>) -> ResolveHook {
    Arc::new(move |qualified| resolver.write().unwrap().resolve(qualified))
}
