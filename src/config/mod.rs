//! Configuration module for the shelter CLI
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ShelterPaths;
pub use settings::Settings;
