use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::RenderBackend;

/// fibprime - Fibonacci sequences, their primes, and plots of both
#[derive(Parser)]
#[command(name = "fibprime")]
#[command(about = "Generate a Fibonacci sequence, count its primes, and plot it")]
#[command(version)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sequence, report its primes, and render it
    Run {
        /// Number of terms (prompted on stdin when omitted)
        #[arg(allow_negative_numbers = true)]
        terms: Option<String>,

        /// Path to a JSON run configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Renderer to run; repeat for several (pixel, chart, plot3d)
        #[arg(short, long = "backend")]
        backends: Vec<RenderBackend>,

        /// Directory to write images into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Skip rendering, only print the results
        #[arg(long)]
        no_render: bool,

        /// Print the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether a single number is prime
    Check {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Print the π-scaled primes of a sequence and the gaps between them
    Distances {
        #[arg(allow_negative_numbers = true)]
        terms: i64,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// Write a default configuration file
    InitConfig {
        /// Where to write the configuration
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
