//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → schema.rs (LoggerConfig, env override)
//!     → LogFacade::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow empty or missing config
//! - Level names are checked by serde; the env override is checked explicitly
//! - Config is read once; the facade never changes level afterwards

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoggerConfig, TransportKind, LEVEL_ENV};
