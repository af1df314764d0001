//! Shared configuration and error types.

pub mod config;
pub mod error;

pub use config::WorldConfig;
pub use error::BodyError;
