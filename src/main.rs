//! facekit CLI - surfacing G-code generator
//!
//! Reads a JSON or TOML job file and writes a millimeter G-code program.

use anyhow::Result;
use clap::{Parser, Subcommand};
use facekit::{commands, init_logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "facekit")]
#[command(version = facekit::VERSION)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
#[command(about = "Generate surfacing (facing) G-code for CNC mills", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a program from a job file
    Generate {
        /// Job file (.toml or .json)
        job: PathBuf,
        /// Directory the <program_name>.nc file is written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
        /// Print the program to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Write a job file with default values
    Init {
        /// Destination (.toml or .json)
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Show level, pass and arc counts and the estimated cutting time
    Summary {
        /// Job file (.toml or .json)
        job: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            job,
            output_dir,
            stdout,
        } => {
            if stdout {
                print!("{}", commands::render(&job)?);
            } else {
                let path = commands::generate(&job, &output_dir)?;
                println!("{}", path.display());
            }
        }
        Commands::Init { path, force } => {
            commands::init_job(&path, force)?;
        }
        Commands::Summary { job, json } => {
            let summary = commands::summarize(&job)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
        }
    }

    Ok(())
}
