//! Metadata payloads.
//!
//! # Data Flow
//! ```text
//! caller value (json!, scalar, Serialize type, &dyn Error)
//!     → value.rs (Metadata tagged union)
//!     → serializer.rs (printable text or None)
//!     → format::line ([Metadata] section)
//! ```
//!
//! # Design Decisions
//! - Structure is checked before truthiness: `{}` and `[]` render, `""` and `0` do not
//! - Errors are captured eagerly as text, so payloads stay `Clone + Send`
//! - Owned trees cannot be cyclic; encoding failures still degrade to a fallback string

pub mod serializer;
pub mod value;

pub use serializer::MetadataSerializer;
pub use value::{CapturedError, Metadata};
