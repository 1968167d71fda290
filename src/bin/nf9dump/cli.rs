use crate::config::OutputMode;
use clap::Parser;
use std::path::PathBuf;

/// NetFlow V9 capture inspector
#[derive(Parser, Debug)]
#[command(name = "nf9dump")]
#[command(about = "Decode NetFlow V9 packets from a pcap capture")]
#[command(version)]
pub struct Cli {
    /// Path to the pcap capture to decode
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to YAML configuration file
    ///
    /// If not provided, datagrams to UDP ports 2055 and 9995 are decoded
    /// leniently and data records are printed.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// What to print (overrides config file output mode)
    #[arg(short, long, value_enum, value_name = "MODE")]
    pub mode: Option<OutputMode>,

    /// UDP destination port carrying NetFlow V9 (overrides config file
    /// ports, may be repeated)
    #[arg(short, long, value_name = "PORT")]
    pub port: Vec<u16>,

    /// Reject options templates whose scope or option length is not a
    /// multiple of a field descriptor
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    ///
    /// Logs every datagram, decode failures and data flowsets that have
    /// no known template yet.
    #[arg(short, long)]
    pub verbose: bool,
}
