//! Interactive recorder for the Amua BLE audio peripheral.
//!
//! Scans for a known device, opens the notification stream, and drives the
//! capture session from line-oriented stdin commands (`start_stream`,
//! `stop_stream`, `start_record`, `stop_record`, `save_record`, `exit`).
//! On exit the full capture is exported as a WAV file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use amua_capture_ble::BleCentral;
use amua_capture_core::storage::metadata;
use amua_capture_core::{dispatch, CaptureConfig, CaptureError, Command, CommandInput, StreamSession};

#[derive(Parser, Debug)]
#[command(name = "amua-record", about = "Stream and record audio from an Amua BLE peripheral")]
struct Args {
    /// Peripheral hardware address to accept (repeatable; defaults to the
    /// known Amua devices)
    #[arg(long = "address")]
    addresses: Vec<String>,

    /// Required substring of the advertised device name
    #[arg(long, default_value = "Amua")]
    name_marker: String,

    /// Scan timeout in seconds
    #[arg(long, default_value_t = 10)]
    scan_timeout: u64,

    /// Destination for the end-of-session capture export
    #[arg(long, default_value = "recorded_audio.wav")]
    output: PathBuf,

    /// Increase log verbosity (-v: debug, -vv: trace with packet hexdumps)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Stdin-backed command source.
struct ConsoleInput;

impl CommandInput for ConsoleInput {
    fn next_command(&mut self) -> Option<Command> {
        let line = prompt(
            "Enter command (start_stream/stop_stream/start_record/stop_record/save_record/exit): ",
        )?;
        Some(Command::parse(&line))
    }

    fn save_destination(&mut self) -> Option<PathBuf> {
        let line = prompt("Enter filename: ")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CaptureError> {
    let mut config = CaptureConfig::default();
    if !args.addresses.is_empty() {
        config.device_filter.allowed_addresses = args.addresses;
    }
    config.device_filter.name_marker = args.name_marker;
    config.scan_timeout = Duration::from_secs(args.scan_timeout);
    config.validate().map_err(CaptureError::ConfigurationFailed)?;

    let central = BleCentral::new()?;

    let Some(device) = central.locate(&config)? else {
        log::info!("Device not found");
        return Ok(());
    };

    let transport = central.connect(device, &config)?;
    let mut session = StreamSession::new(transport, config);

    let mut input = ConsoleInput;
    dispatch::run(&mut session, &mut input);

    let diagnostics = session.diagnostics();
    log::info!(
        "Session summary: {} notifications, {} samples, {} suppressed early, {} decode errors, {} sequence gaps",
        diagnostics.notifications,
        diagnostics.samples_captured,
        diagnostics.suppressed_early,
        diagnostics.decode_errors,
        diagnostics.sequence_gaps
    );

    if let Some(result) = session.export_capture(&args.output)? {
        metadata::write_metadata(&result.metadata, &result.file_path)?;
        log::info!(
            "Saved {} samples to {}",
            result.sample_count,
            result.file_path.display()
        );
    }

    let transport = session.into_transport();
    if let Err(e) = transport.disconnect() {
        log::warn!("Disconnect failed: {}", e);
    }

    Ok(())
}
