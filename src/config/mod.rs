//! Configuration module
//!
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
