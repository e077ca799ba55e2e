//! Wire size measurement.

use serde::Serialize;

/// A serialized value and its exact size on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub serialized: String,
    /// Length of the UTF-8 encoding, not the character count
    pub bytes: usize,
}

/// Serialize `value` to compact JSON and count its UTF-8 bytes.
///
/// # Panics
///
/// Panics if `value` cannot be represented as JSON (for example a map with
/// non-string keys). Display values never hit this.
pub fn measure<T: Serialize + ?Sized>(value: &T) -> Measurement {
    let serialized = serde_json::to_string(value)
        .unwrap_or_else(|e| panic!("display value failed to serialize: {}", e));
    let bytes = serialized.len();
    Measurement { serialized, bytes }
}
