//! Annotation lookup with container-specific over pod-wide precedence.

use std::collections::BTreeMap;

/// Resolve the effective value of `key` for `container`.
///
/// `"<prefix>.<container>/<key>"` strictly wins over `"<prefix>/<key>"`;
/// when both are present this is a total order, not a merge. Exact key
/// matches only — no partial matches, no case folding, no wildcards.
pub fn resolve<'a>(
    annotations: &'a BTreeMap<String, String>,
    prefix: &str,
    container: &str,
    key: &str,
) -> Option<&'a str> {
    let scoped = format!("{}.{}/{}", prefix, container, key);
    if let Some(value) = annotations.get(&scoped) {
        return Some(value.as_str());
    }
    let pod_wide = format!("{}/{}", prefix, key);
    annotations.get(&pod_wide).map(String::as_str)
}
