//! Secret detection: pattern catalog, registry, and scan engine

pub mod engine;
pub mod patterns;
pub mod registry;

pub use engine::{DetectionEngine, DetectionResult, SecretFinding};
pub use patterns::Category;
pub use registry::PatternRegistry;
