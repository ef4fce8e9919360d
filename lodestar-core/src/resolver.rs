//! Qualified-name resolution with per-prefix outcome caching.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::Result;
use crate::manifest::MountManifest;
use crate::name;
use crate::registry::Registry;

/// Resolves namespace-qualified names to candidate source file paths.
///
/// The resolver owns its [`Registry`] together with a cache of every
/// namespace prefix it has ever been asked about, so repeated lookups under
/// one prefix never re-run the matcher. Whether the candidate file actually
/// exists is the caller's concern; `resolve` only derives the path.
pub struct Resolver {
    registry: Registry,
    cache: HashMap<String, Option<PathBuf>>,
    extension: String,
}

impl Resolver {
    /// Create a resolver producing candidate files with the given extension.
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            registry: Registry::new(),
            cache: HashMap::new(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Build a resolver from a mount manifest.
    pub fn from_manifest(manifest: &MountManifest) -> Result<Self> {
        let mut resolver = Self::new(manifest.extension.as_str());
        for mount in &manifest.mounts {
            resolver.add(&mount.namespace, &mount.path)?;
        }
        Ok(resolver)
    }

    /// Mount a namespace at a base directory.
    ///
    /// Prefixes that were looked up before the mount keep their recorded
    /// outcome for the lifetime of the resolver; a new mount only affects
    /// prefixes that have not been attempted yet.
    pub fn add(&mut self, namespace: &str, path: impl AsRef<Path>) -> Result<()> {
        self.registry.add(namespace, path)
    }

    /// Resolve a qualified name to a candidate file path.
    ///
    /// The final segment of `qualified` is the entity's own short name; the
    /// segments before it form its namespace. Returns `None` when the entity
    /// lives in the root namespace or no mounted namespace is a prefix of
    /// its namespace. The returned path is not checked for existence.
    pub fn resolve(&mut self, qualified: &str) -> Option<PathBuf> {
        let folded = name::fold(qualified);
        let folded = folded.trim_start_matches(name::SEPARATOR);
        let (prefix, entity) = folded.rsplit_once(name::SEPARATOR)?;
        if prefix.is_empty() {
            return None;
        }

        if let Some(outcome) = self.cache.get(prefix) {
            trace!("prefix '{}' served from cache", prefix);
            return outcome
                .as_ref()
                .map(|dir| candidate(dir, entity, &self.extension));
        }

        let outcome = self.registry.find_mount(prefix).map(|(namespace, base)| {
            let mut dir = base.to_path_buf();
            if prefix.len() > namespace.len() {
                for segment in prefix[namespace.len() + 1..].split(name::SEPARATOR) {
                    dir.push(segment);
                }
            }
            dir
        });
        trace!("prefix '{}' matched: {}", prefix, outcome.is_some());

        self.cache.insert(prefix.to_string(), outcome.clone());
        outcome.map(|dir| candidate(&dir, entity, &self.extension))
    }

    /// Number of namespace prefixes with a recorded outcome.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

fn candidate(dir: &Path, entity: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", entity, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lua_resolver() -> Resolver {
        Resolver::new("lua")
    }

    #[test]
    fn resolves_an_entity_under_a_mount() {
        let mut resolver = lua_resolver();
        resolver.add("vendor\\package", "/pkgs/vendor").unwrap();

        let path = resolver.resolve("vendor\\package\\module\\thing").unwrap();
        assert_eq!(path, Path::new("/pkgs/vendor/package/module/thing.lua"));
    }

    #[test]
    fn an_exact_namespace_match_has_no_remainder() {
        let mut resolver = lua_resolver();
        resolver.add("vendor\\package", "/pkgs/vendor").unwrap();

        let path = resolver.resolve("vendor\\package\\thing").unwrap();
        assert_eq!(path, Path::new("/pkgs/vendor/package/thing.lua"));
    }

    #[test]
    fn root_entities_never_resolve() {
        let mut resolver = lua_resolver();
        resolver.add("vendor", "/pkgs").unwrap();

        assert!(resolver.resolve("thing").is_none());
        assert!(resolver.resolve("\\thing").is_none());
        // The root prefix is not even recorded.
        assert_eq!(resolver.cache_len(), 0);
    }

    #[test]
    fn any_casing_computes_the_same_path() {
        let mut resolver = lua_resolver();
        resolver.add("INSENSITIVE\\PACKAGE", "/srv/pkgs").unwrap();

        let upper = resolver
            .resolve("Insensitive\\Package\\Module\\Thing")
            .unwrap();
        let lower = resolver
            .resolve("insensitive\\package\\module\\thing")
            .unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, Path::new("/srv/pkgs/package/module/thing.lua"));
    }

    #[test]
    fn subnamespace_mounts_override_their_parent() {
        let mut resolver = lua_resolver();
        resolver.add("package", "/a").unwrap();
        resolver.add("package\\sub", "/b").unwrap();

        let sub = resolver.resolve("package\\sub\\thing").unwrap();
        assert_eq!(sub, Path::new("/b/sub/thing.lua"));

        let other = resolver.resolve("package\\other\\thing").unwrap();
        assert_eq!(other, Path::new("/a/package/other/thing.lua"));
    }

    #[test]
    fn failed_prefixes_stay_failed_after_a_later_mount() {
        let mut resolver = lua_resolver();
        assert!(resolver.resolve("vendor\\package\\thing").is_none());

        resolver.add("vendor\\package", "/pkgs/vendor").unwrap();
        assert!(resolver.resolve("vendor\\package\\thing").is_none());
        // A prefix first attempted after the mount resolves normally.
        assert!(resolver.resolve("vendor\\package\\sub\\thing").is_some());
    }

    #[test]
    fn repeated_lookups_reuse_the_recorded_outcome() {
        let mut resolver = lua_resolver();
        resolver.add("vendor\\package", "/pkgs/vendor").unwrap();

        let first = resolver.resolve("vendor\\package\\thing").unwrap();
        assert_eq!(resolver.cache_len(), 1);

        let second = resolver.resolve("vendor\\package\\other").unwrap();
        assert_eq!(first, Path::new("/pkgs/vendor/package/thing.lua"));
        assert_eq!(second, Path::new("/pkgs/vendor/package/other.lua"));
        assert_eq!(resolver.cache_len(), 1);
    }

    #[test]
    fn a_leading_dot_on_the_extension_is_optional() {
        let mut resolver = Resolver::new(".lua");
        resolver.add("pkg", "/srv").unwrap();

        let path = resolver.resolve("pkg\\thing").unwrap();
        assert_eq!(path, Path::new("/srv/pkg/thing.lua"));
    }

    #[test]
    fn dot_delimited_names_resolve_like_backslash_ones() {
        let mut resolver = lua_resolver();
        resolver.add("vendor.package", "/pkgs/vendor").unwrap();

        let path = resolver.resolve("vendor.package.thing").unwrap();
        assert_eq!(path, Path::new("/pkgs/vendor/package/thing.lua"));
    }
}
