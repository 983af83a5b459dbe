//! Builder — assembles per-container module configs from pod annotations.
//!
//! Implements the builder contract consumed by the registry: one module
//! config per container status, in API order. Missing annotations are a
//! normal silent path, never an error — an operator typo must not block the
//! log pipeline.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::Pod;
use serde_json::Value;
use tracing::trace;

use super::annotations::resolve;
use super::module_config::{MatchMode, ModuleConfig};
use super::path::container_log_glob;
use crate::conf::{BuilderConfig, ConfigError};
use crate::kube;

/// Annotation key selecting the multiline join pattern.
pub const PATTERN: &str = "pattern";
/// Annotation key selecting the logz codec tag.
pub const LOGZ_CODEC: &str = "logzCodec";
/// Annotation key selecting the logz environment tag.
pub const LOGZ_ENV: &str = "logzEnv";

// Fixed multiline policy; annotations select only the pattern today.
const MULTILINE_NEGATE: bool = false;
const MULTILINE_MATCH: MatchMode = MatchMode::After;

/// Contract consumed by the builder registry.
pub trait ModuleConfigBuilder: Send + Sync {
    /// One module config per container status on the pod, in input order.
    fn build_module_configs(&self, pod: &Pod) -> Vec<ModuleConfig>;
}

/// Builds log input module configs from pod annotations.
///
/// Holds only the immutable [`BuilderConfig`], so a single builder can serve
/// concurrent invocations without coordination.
pub struct PodLogAnnotationBuilder {
    config: BuilderConfig,
}

impl PodLogAnnotationBuilder {
    /// Construct from raw registry options.
    ///
    /// Fails only when the options cannot be decoded into a
    /// [`BuilderConfig`]; a well-formed but empty option map is valid and
    /// yields the built-in defaults.
    pub fn new(opts: Value) -> Result<Self, ConfigError> {
        Ok(Self {
            config: BuilderConfig::from_value(opts)?,
        })
    }

    /// Construct from an already-decoded configuration.
    pub fn from_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }
}

impl ModuleConfigBuilder for PodLogAnnotationBuilder {
    fn build_module_configs(&self, pod: &Pod) -> Vec<ModuleConfig> {
        let empty = BTreeMap::new();
        let annotations = kube::annotations(pod).unwrap_or(&empty);
        let statuses = kube::container_statuses(pod);
        let mut configs = Vec::with_capacity(statuses.len());

        for status in statuses {
            let mut conf = ModuleConfig::new(container_log_glob(
                &self.config.logs_path,
                status.container_id.as_deref().unwrap_or(""),
            ));

            if let Some(pattern) = resolve(annotations, &self.config.prefix, &status.name, PATTERN)
            {
                trace!("container {} uses multiline pattern {}", status.name, pattern);
                conf.set_multiline(pattern, MULTILINE_NEGATE, MULTILINE_MATCH);
            }

            let codec = resolve(annotations, &self.config.prefix, &status.name, LOGZ_CODEC);
            let env = resolve(annotations, &self.config.prefix, &status.name, LOGZ_ENV);
            if codec.is_some() || env.is_some() {
                // Unresolved fields are still written as empty strings.
                conf.set_logz_fields(
                    &self.config.logz_token,
                    codec.unwrap_or(""),
                    env.unwrap_or(""),
                );
            }

            configs.push(conf);
        }

        configs
    }
}
