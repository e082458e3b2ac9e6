//! Adapters - Concrete implementations of ports.

pub mod bedrock;
pub mod http;
pub mod mongo;
pub mod ytdlp;
