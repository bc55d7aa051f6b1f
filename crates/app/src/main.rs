use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use audio_level_core::{meter_base64, CaptureConfig, MeterFrame};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() -> audio_level_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyse { data, input, json } => {
            run_analyse(data.as_deref(), input.as_deref(), json)
        }
        Commands::Stream {
            input,
            config,
            json,
        } => run_stream(input.as_deref(), config.as_deref(), json),
    }
}

fn run_analyse(
    data: Option<&str>,
    input: Option<&Path>,
    json: bool,
) -> audio_level_core::Result<()> {
    tracing::info!("analysing single buffer");

    let owned;
    let encoded = match (data, input) {
        (Some(data), _) => data,
        (None, Some(path)) => {
            owned = std::fs::read_to_string(path)?;
            owned.trim()
        }
        (None, None) => return Err("no encoded buffer: pass DATA or --input".into()),
    };

    let frame = meter_base64(encoded)?;
    print_frame(&frame, json)
}

fn run_stream(
    input: Option<&Path>,
    config: Option<&Path>,
    json: bool,
) -> audio_level_core::Result<()> {
    tracing::info!(?input, "metering chunk stream");

    if let Some(path) = config {
        let config = CaptureConfig::from_json_file(path)?;
        if !config.is_supported() {
            return Err(format!(
                "unsupported capture format: {} bits per sample",
                config.bits_per_sample
            )
            .into());
        }
        tracing::info!(
            sample_rate = config.sample_rate,
            channels = config.channels,
            buffer_size = config.buffer_size,
            "capture context loaded"
        );
    }

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    // One chunk per line; output is emitted in arrival order.
    for line in reader.lines() {
        let line = line?;
        let encoded = line.trim();
        if encoded.is_empty() {
            continue;
        }
        let frame = meter_base64(encoded)?;
        print_frame(&frame, json)?;
    }

    Ok(())
}

fn print_frame(frame: &MeterFrame, json: bool) -> audio_level_core::Result<()> {
    if json {
        println!("{}", serde_json::to_string(frame)?);
    } else {
        println!(
            "power {:>3}/100  peak {:>4} dBFS  mean {:>4} dBFS  ({} samples)",
            frame.power_level, frame.peak_dbfs, frame.mean_dbfs, frame.sample_count
        );
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Loudness meter for base64-encoded PCM streams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Meter a single base64-encoded PCM buffer.
    Analyse {
        /// Base64 payload passed directly on the command line.
        data: Option<String>,
        /// Read the payload from a file instead.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Emit the frame as JSON instead of a meter line.
        #[arg(long)]
        json: bool,
    },
    /// Meter line-delimited base64 chunks from stdin or a file.
    Stream {
        /// Path to a file of chunks; defaults to stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Capture context JSON (sample rate, channels, buffer size).
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Emit each frame as JSON instead of a meter line.
        #[arg(long)]
        json: bool,
    },
}
