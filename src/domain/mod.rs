//! Domain layer - Pure business logic.

pub mod evaluation;
pub mod prompt;
pub mod questions;
pub mod transcript;
pub mod video;
