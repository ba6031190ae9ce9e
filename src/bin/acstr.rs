use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use acstr::{compress, decompress, StaticByteModel};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "acstr", version, about = "Arithmetic-coded strings")]
struct Cli {
    #[arg(short, long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a blob.
    Compress {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Model::English)]
        model: Model,
    },
    /// Restore a file from a blob.
    Decompress {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Model::English)]
        model: Model,
    },
    /// Report how well a file compresses.
    Stats {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Model::English)]
        model: Model,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Model {
    /// Brown Corpus byte frequencies.
    English,
    /// All bytes equally likely.
    Uniform,
}

impl Model {
    fn build(self) -> StaticByteModel {
        match self {
            Model::English => StaticByteModel::english(),
            Model::Uniform => StaticByteModel::uniform(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compress {
            input,
            output,
            model,
        } => {
            let data = fs::read(&input)?;
            let t0 = Instant::now();
            let blob = compress(&data, &model.build())?;
            info!(
                input = %input.display(),
                bytes_in = data.len(),
                bytes_out = blob.len(),
                elapsed_us = t0.elapsed().as_micros() as u64,
                "compressed"
            );
            fs::write(&output, blob)?;
        }
        Commands::Decompress {
            input,
            output,
            model,
        } => {
            let blob = fs::read(&input)?;
            let t0 = Instant::now();
            let data = decompress(&blob, &model.build())?;
            info!(
                input = %input.display(),
                bytes_in = blob.len(),
                bytes_out = data.len(),
                elapsed_us = t0.elapsed().as_micros() as u64,
                "decompressed"
            );
            fs::write(&output, data)?;
        }
        Commands::Stats { input, model } => {
            let data = fs::read(&input)?;
            let blob = compress(&data, &model.build())?;
            let ratio = if data.is_empty() {
                0.0
            } else {
                blob.len() as f64 / data.len() as f64
            };
            println!("input:  {} bytes", data.len());
            println!("blob:   {} bytes", blob.len());
            println!("ratio:  {:.3}", ratio);
            println!("bits/B: {:.3}", ratio * 8.0);
        }
    }
    Ok(())
}
