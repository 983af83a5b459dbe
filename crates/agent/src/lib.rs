// Domain-driven module structure for the pod log discovery core.

// Core infrastructure
pub mod conf;
pub mod kube;

// Domain modules
pub mod discover;
