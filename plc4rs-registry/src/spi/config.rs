use serde::{Deserialize, Serialize};

/// What a decoder does with a wire ordinal that names no member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownValuePolicy {
    /// Fail the field, and with it the enclosing message.
    Reject,
    /// Keep the raw byte as [`WireValue::Unknown`](crate::spi::codec::WireValue::Unknown).
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub unknown_values: UnknownValuePolicy,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        DecodeConfig {
            unknown_values: UnknownValuePolicy::Reject,
        }
    }
}

impl DecodeConfig {
    pub fn preserving() -> Self {
        DecodeConfig {
            unknown_values: UnknownValuePolicy::Preserve,
        }
    }
}
