mod capture;
mod cli;
mod config;
mod error;
mod report;
mod template_cache;

use capture::{CaptureReader, Datagram};
use clap::Parser;
use cli::Cli;
use config::{Config, OutputMode, parse_yaml_file, validate_config};
use error::Result;
use netflow_v9_decoder::{DecodeOptions, decode_with};
use std::io::{self, Write};
use template_cache::TemplateCache;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    init_tracing(args.verbose);

    let config = load_config(&args)?;
    validate_config(&config)?;

    let mut capture = CaptureReader::open(&args.input, &config.capture.ports)?;
    info!(
        input = %args.input.display(),
        ports = ?config.capture.ports,
        "decoding capture"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut cache = TemplateCache::new();
    let mut stats = Stats::default();

    while let Some(datagram) = capture.next_datagram() {
        process_datagram(
            &mut out,
            &datagram?,
            &config,
            &mut cache,
            &mut stats,
        )?;
    }
    out.flush()?;

    info!(
        datagrams = stats.datagrams,
        decoded = stats.decoded,
        failed = stats.failed,
        templates = cache.len(),
        "done"
    );

    Ok(())
}

#[derive(Debug, Default)]
struct Stats {
    datagrams: u64,
    decoded: u64,
    failed: u64,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the config file if given, then apply command line overrides
fn load_config(args: &Cli) -> Result<Config> {
    let mut config = if let Some(ref config_path) = args.config {
        debug!("Loading configuration from {:?}", config_path);
        parse_yaml_file(config_path)?
    } else {
        Config::default()
    };

    if let Some(mode) = args.mode {
        config.output.mode = mode;
    }
    if !args.port.is_empty() {
        config.capture.ports = args.port.clone();
    }
    if args.strict {
        config.decode = DecodeOptions::strict();
    }

    Ok(config)
}

/// Decode one datagram and print it. Undecodable datagrams are logged and
/// skipped so one bad exporter does not stop the whole capture.
fn process_datagram<W: Write>(
    out: &mut W,
    datagram: &Datagram,
    config: &Config,
    cache: &mut TemplateCache,
    stats: &mut Stats,
) -> Result<()> {
    stats.datagrams += 1;

    let packet = match decode_with(&datagram.payload, &config.decode) {
        Ok(packet) => packet,
        Err(e) => {
            stats.failed += 1;
            warn!(source = %datagram.source, "skipping datagram: {}", e);
            return Ok(());
        }
    };
    stats.decoded += 1;

    debug!(
        source = %datagram.source,
        source_id = packet.source_id,
        sequence_number = packet.sequence_number,
        flow_sets = packet.flow_sets.len(),
        "decoded packet"
    );

    match config.output.mode {
        OutputMode::Templates => report::write_templates(out, datagram.source, &packet)?,
        OutputMode::Data => {
            cache.update(datagram.source, &packet);
            report::write_data(out, datagram.source, &packet, cache)?;
        }
    }

    Ok(())
}
