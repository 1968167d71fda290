use thiserror::Error;

/// Errors raised while decoding a NetFlow V9 packet.
///
/// Every variant is terminal for the packet being decoded: no partially
/// decoded [`Packet`](crate::Packet) is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A packet header or flow set header is cut short
    #[error("Incomplete header, missing at least {0} bytes")]
    TruncatedHeader(usize),

    /// A flow set declares more body bytes than the packet carries
    #[error("Incomplete flowset body, missing at least {0} bytes")]
    TruncatedBody(usize),

    /// A flow set declares a length smaller than its own header
    #[error("Invalid flowset length {0}, must be at least 4")]
    InvalidFlowSetLength(u16),

    /// A template or options template record header is cut short
    #[error("Incomplete template record header, missing at least {0} bytes")]
    TruncatedTemplateHeader(usize),

    /// A template or options template field list is cut short
    #[error("Incomplete template field list, missing at least {0} bytes")]
    TruncatedFields(usize),

    /// Options template scope/option lengths that are not whole field
    /// descriptors, reported only under strict field alignment
    #[error(
        "Options template {template_id} has misaligned field region \
         (scope length {scope_length}, option length {option_length})"
    )]
    MisalignedFieldRegion {
        template_id: u16,
        scope_length: u16,
        option_length: u16,
    },

    /// Packet version is not 9
    #[error("Incompatible protocol version v{0}, only v9 is supported")]
    UnsupportedVersion(u16),

    /// Bytes left over once the flowset loop finished
    #[error("Extra {0} bytes at the end of the packet")]
    TrailingBytes(usize),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DecodeError>;
