use serde::{Deserialize, Serialize};

/// Knobs that change how strictly a packet is decoded.
///
/// The defaults accept everything real exporters are known to send.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How options template scope/option lengths that are not a multiple of
    /// a field descriptor are handled
    #[serde(default)]
    pub field_alignment: FieldAlignment,
}

/// Policy for options template field regions whose byte length is not a
/// multiple of 4.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldAlignment {
    /// Keep the whole field descriptors and skip the partial remainder
    #[default]
    Lenient,
    /// Reject the packet with `DecodeError::MisalignedFieldRegion`
    Strict,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            field_alignment: FieldAlignment::Strict,
        }
    }
}
