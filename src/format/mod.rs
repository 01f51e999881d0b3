//! Line formatting.
//!
//! The renderer is registered as the engine's format function. Its output is
//! the wire contract for anything parsing log text downstream (shippers,
//! grep-based alerting), so labels and order never change.

pub mod line;

pub use line::render_line;
