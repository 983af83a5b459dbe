//! Path templating for container log globs.
//!
//! Pure string operations; the emitted glob is never checked against the
//! filesystem here — the tailing engine owns that.

/// Strip a runtime URI scheme (`docker://`, `containerd://`, ...) from a
/// container ID. IDs without a scheme pass through unchanged.
fn strip_runtime_scheme(container_id: &str) -> &str {
    match container_id.split_once("://") {
        Some((_, id)) => id,
        None => container_id,
    }
}

/// Glob matching every log file under the container's log directory,
/// with exactly one path separator between `logs_path` and the ID.
pub fn container_log_glob(logs_path: &str, container_id: &str) -> String {
    format!(
        "{}/{}/*.log",
        logs_path.trim_end_matches('/'),
        strip_runtime_scheme(container_id)
    )
}
