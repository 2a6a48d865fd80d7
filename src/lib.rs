pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod record;

// Re-export the engine API
pub use engine::*;
