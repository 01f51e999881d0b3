//! Metadata to printable text.

use serde::Serialize;

use super::value::Metadata;

/// Prefix of the text emitted when JSON encoding fails.
const UNSERIALIZABLE_PREFIX: &str = "[unserializable metadata: ";

/// Turns a metadata payload into the text of the `[Metadata]` section.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataSerializer;

impl MetadataSerializer {
    /// Serialize a payload.
    ///
    /// Objects and arrays (even empty ones) are JSON-encoded, with embedded
    /// errors replaced by their formatted text. Truthy scalars are
    /// stringified. Falsy scalars (`""`, `0`, `false`, null) yield `None`:
    /// they have no printable form and the section is dropped.
    pub fn serialize(metadata: &Metadata) -> Option<String> {
        if metadata.is_structured() {
            return Some(Self::to_json(metadata));
        }
        if !metadata.is_truthy() {
            return None;
        }
        match metadata {
            Metadata::String(s) => Some(s.clone()),
            Metadata::Number(n) => Some(n.to_string()),
            Metadata::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// JSON encoding with a fallback text; a log call never fails.
    ///
    /// A `Metadata` tree always encodes, since keys are strings, numbers are
    /// finite and errors are captured as text. The fallback covers any other
    /// `Serialize` payload.
    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string(value).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Metadata serialization failed");
            format!("{UNSERIALIZABLE_PREFIX}{err}]")
        })
    }
}
