//! Normalization of namespace-qualified names.
//!
//! Names arrive dot- or backslash-delimited and in arbitrary casing; the
//! registry and cache only ever see the canonical form produced here.

/// Canonical namespace separator.
pub(crate) const SEPARATOR: char = '\\';

/// Canonicalize separators and case-fold a raw name.
pub(crate) fn fold(raw: &str) -> String {
    raw.replace('.', "\\").to_lowercase()
}

/// Strip leading and trailing separators.
pub(crate) fn trim(raw: &str) -> &str {
    raw.trim_matches(SEPARATOR)
}
