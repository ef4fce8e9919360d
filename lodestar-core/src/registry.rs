//! Namespace mount registry and longest-prefix matching.
//!
//! The registry maps normalized namespaces to base directories and keeps a
//! compiled matcher over all of them. The matcher is an alternation ordered
//! longest-first, so when several mounted namespaces are prefixes of one
//! candidate the most specific mount wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::name;

/// Mapping from normalized namespaces to base directories.
pub struct Registry {
    mounts: HashMap<String, PathBuf>,
    matcher: Option<Regex>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            mounts: HashMap::new(),
            matcher: None,
        }
    }

    /// Mount a namespace at a base directory.
    ///
    /// The namespace is canonicalized and case-folded, and its final segment
    /// is appended to `path` to form the base directory, regardless of the
    /// literal tail of the path argument. Mounting a namespace that is
    /// already mounted overwrites the previous mapping.
    pub fn add(&mut self, namespace: &str, path: impl AsRef<Path>) -> Result<()> {
        let namespace = name::fold(namespace);
        let namespace = name::trim(&namespace);
        if namespace.is_empty() {
            return Err(Error::InvalidNamespace(
                "mounting the root namespace is not supported".to_string(),
            ));
        }

        let tail = namespace.rsplit(name::SEPARATOR).next().unwrap_or(namespace);
        let base = path.as_ref().join(tail);
        debug!("mounting namespace '{}' at {}", namespace, base.display());

        self.mounts.insert(namespace.to_string(), base);
        self.rebuild_matcher()
    }

    /// Find the most specific mounted namespace that is a prefix of `name`.
    ///
    /// `name` must already be normalized. A mounted namespace qualifies when
    /// it equals `name` or is followed in `name` by a separator; the longest
    /// qualifying namespace is returned with its base directory.
    pub fn find_mount(&self, name: &str) -> Option<(&str, &Path)> {
        let matcher = self.matcher.as_ref()?;
        let captured = matcher.captures(name)?.get(1)?;
        let (namespace, base) = self.mounts.get_key_value(captured.as_str())?;
        Some((namespace.as_str(), base.as_path()))
    }

    /// Number of mounted namespaces.
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    fn rebuild_matcher(&mut self) -> Result<()> {
        let mut namespaces: Vec<&str> = self.mounts.keys().map(String::as_str).collect();
        // Longer namespaces first, so the alternation prefers the most
        // specific mount.
        namespaces.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = namespaces
            .iter()
            .map(|ns| regex::escape(ns))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"^({})(?:\\|$)", alternation);
        self.matcher = Some(Regex::new(&pattern).map_err(anyhow::Error::from)?);
        Ok(())
    }
}
