//! videoservice - Transcript and study-question service
//!
//! Hexagonal Architecture:
//! - domain/: Pure business logic (subtitles, prompts, question parsing)
//! - ports/: Trait definitions
//! - adapters/: Concrete implementations (MongoDB, yt-dlp, Bedrock, HTTP)
//! - application/: The `VideoService` use cases
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use application::VideoService;
pub use config::ServiceConfig;
pub use error::ServiceError;
