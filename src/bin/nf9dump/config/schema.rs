use netflow_v9_decoder::DecodeOptions;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Decoder strictness
    #[serde(default)]
    pub decode: DecodeOptions,

    /// Which datagrams of the capture carry NetFlow V9
    #[serde(default)]
    pub capture: Capture,

    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Capture {
    /// UDP destination ports to decode
    #[serde(default = "default_ports")]
    pub ports: Vec<u16>,
}

impl Default for Capture {
    fn default() -> Self {
        Capture {
            ports: default_ports(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Output {
    #[serde(default)]
    pub mode: OutputMode,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Field layout of every template and options template
    Templates,
    /// Data records decoded with previously seen templates
    #[default]
    Data,
}

fn default_ports() -> Vec<u16> {
    vec![2055, 9995]
}
