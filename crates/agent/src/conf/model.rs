//! Model — BuilderConfig for the pod log annotation builder.

use serde::{Deserialize, Serialize};

/// Options recognized by the builder registry at plugin-instantiation time.
///
/// Constructed once per builder and never mutated afterwards, so a builder
/// holding it can be shared across threads without coordination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Annotation key namespace (e.g. `"foo"` matches `foo/pattern` and
    /// `foo.<container>/pattern`). An empty prefix degrades container-specific
    /// lookups to pod-wide lookups under the same key namespace.
    pub prefix: String,
    /// Fallback namespace label for pods that carry no explicit namespace.
    pub default_namespace: String,
    /// Base directory under which per-container log directories live.
    pub logs_path: String,
    /// Routing token written into the logz fields of every module config
    /// that carries routing fields. May be empty.
    pub logz_token: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            prefix: "".to_string(),
            default_namespace: "default".to_string(),
            logs_path: "/var/lib/docker/containers/".to_string(),
            logz_token: "".to_string(),
        }
    }
}
