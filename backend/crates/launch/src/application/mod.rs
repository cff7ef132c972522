//! Application Layer - Use Cases

pub mod config;
pub mod validate_launch;

pub use config::LaunchConfig;
pub use validate_launch::{ValidateLaunchUseCase, Verdict};
