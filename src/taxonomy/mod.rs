//! Closed enumerations shared by every subsystem.
//!
//! # Data Flow
//! ```text
//! facade method
//!     → level.rs (fixed severity per method)
//!     → category.rs (fixed tag per method)
//!     → error_code.rs (caller-supplied code + default description)
//!     → RenderedRecord
//! ```
//!
//! # Design Decisions
//! - Lookups are exhaustive `match` expressions: a new variant without a
//!   description or wire name does not compile
//! - Wire names are stable; downstream line parsers depend on them

pub mod category;
pub mod error_code;
pub mod level;

pub use category::{LogCategory, ParseCategoryError};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use level::{LogLevel, ParseLevelError};
