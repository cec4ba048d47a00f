pub mod auth;
pub mod config;
pub mod error;
pub mod location;
#[cfg(target_os = "espidf")]
pub mod network;
pub mod portal;
pub mod provisioning;
pub mod settings;

pub use error::{HlError, Result};
pub use settings::Settings;
