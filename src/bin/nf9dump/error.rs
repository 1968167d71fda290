use thiserror::Error;

/// Custom error types for the capture inspector
#[derive(Error, Debug)]
pub enum NetflowError {
    /// YAML parsing errors
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Capture file errors
    #[error("Capture error: {0}")]
    Capture(#[from] pcap_file::PcapError),

    /// Unsupported capture contents
    #[error("Unsupported capture: {0}")]
    UnsupportedCapture(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NetflowError>;
