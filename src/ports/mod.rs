//! Ports - Trait definitions implemented by adapters.

pub mod extractor;
pub mod llm;
pub mod repository;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
