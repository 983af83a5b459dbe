//! Conf module — builder configuration model and option decoding.

pub mod model;
pub mod load;

pub use load::ConfigError;
pub use model::BuilderConfig;
