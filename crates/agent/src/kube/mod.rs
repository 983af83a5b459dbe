//! Kube — read-only accessors over decoded Pod snapshots.
//!
//! The watch/cache layer hands this core already-decoded
//! [`k8s_openapi::api::core::v1::Pod`] values. The k8s-openapi model wraps
//! nearly everything in `Option`; these helpers flatten the fields the
//! discovery core reads so missing metadata never becomes a panic path.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{ContainerStatus, Pod};

/// Pod annotations, if any were set.
pub fn annotations(pod: &Pod) -> Option<&BTreeMap<String, String>> {
    pod.metadata.annotations.as_ref()
}

/// Container statuses in API order; empty when the pod carries no status yet.
pub fn container_statuses(pod: &Pod) -> &[ContainerStatus] {
    pod.status
        .as_ref()
        .and_then(|status| status.container_statuses.as_deref())
        .unwrap_or(&[])
}

/// The pod's namespace, or `default_namespace` when the pod carries none.
pub fn namespace_of(pod: &Pod, default_namespace: &str) -> String {
    pod.metadata
        .namespace
        .clone()
        .unwrap_or_else(|| default_namespace.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::PodStatus;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    // ── container_statuses ───────────────────────────────────────

    #[test]
    fn test_container_statuses_missing_status_is_empty() {
        let pod = Pod::default();
        assert!(container_statuses(&pod).is_empty());
    }

    #[test]
    fn test_container_statuses_missing_list_is_empty() {
        let pod = Pod {
            status: Some(PodStatus::default()),
            ..Default::default()
        };
        assert!(container_statuses(&pod).is_empty());
    }

    #[test]
    fn test_container_statuses_preserves_order() {
        let pod = Pod {
            status: Some(PodStatus {
                container_statuses: Some(vec![
                    ContainerStatus {
                        name: "nginx".to_string(),
                        ..Default::default()
                    },
                    ContainerStatus {
                        name: "apache".to_string(),
                        ..Default::default()
                    },
                ]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let names: Vec<_> = container_statuses(&pod).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["nginx", "apache"]);
    }

    // ── annotations ──────────────────────────────────────────────

    #[test]
    fn test_annotations_missing_is_none() {
        let pod = Pod::default();
        assert!(annotations(&pod).is_none());
    }

    // ── namespace_of ─────────────────────────────────────────────

    #[test]
    fn test_namespace_of_present() {
        let pod = Pod {
            metadata: ObjectMeta {
                namespace: Some("foo".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(namespace_of(&pod, "abc"), "foo");
    }

    #[test]
    fn test_namespace_of_falls_back() {
        let pod = Pod::default();
        assert_eq!(namespace_of(&pod, "abc"), "abc");
    }
}
