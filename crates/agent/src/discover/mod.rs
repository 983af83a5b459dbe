//! Discover module — per-container log input configs from pod annotations.

pub mod annotations;
pub mod builder;
pub mod module_config;
pub mod path;

pub use builder::{ModuleConfigBuilder, PodLogAnnotationBuilder};
pub use module_config::{MatchMode, ModuleConfig, MultilineConfig};
