//! fibprime - Main entry point
//!
//! Parses the command line, runs the sequence engine, prints the results and
//! hands them to the configured renderers.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use fibprime::cli::{Cli, Commands};
use fibprime::input::{coerce_terms, prompt_for_terms};
use fibprime::{generate_fibonacci, is_prime_signed, prime_distances, render_all};
use fibprime::{RenderBackend, RunConfig, SequenceReport};

/// Initialize the tracing subscriber; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application entry point
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);
    debug!("CLI arguments parsed");

    let result = match cli.command {
        Some(Commands::Run {
            terms,
            config,
            backends,
            output_dir,
            no_render,
            json,
        }) => {
            let options = RunOptions {
                terms,
                config,
                backends,
                output_dir,
                no_render,
                json,
            };
            run(options)
        }
        Some(Commands::Check { number }) => {
            check(number);
            Ok(())
        }
        Some(Commands::Distances { terms }) => distances(terms),
        Some(Commands::Validate { config }) => validate(&config),
        Some(Commands::InitConfig { path }) => init_config(&path),
        None => {
            info!("No command specified, running interactively");
            run(RunOptions::default())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Flags of the `run` subcommand
#[derive(Default)]
struct RunOptions {
    terms: Option<String>,
    config: Option<PathBuf>,
    backends: Vec<RenderBackend>,
    output_dir: Option<PathBuf>,
    no_render: bool,
    json: bool,
}

/// Merge config file and command-line flags; flags win
fn resolve_config(options: &RunOptions) -> Result<RunConfig> {
    let mut config = match &options.config {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            RunConfig::load_from_file(path)?
        }
        None => RunConfig::default(),
    };

    if let Some(text) = &options.terms {
        config.terms = Some(coerce_terms(text));
    }
    if let Some(dir) = &options.output_dir {
        config.output_dir = dir.clone();
    }
    if !options.backends.is_empty() {
        config.backends = options.backends.clone();
    }
    if options.no_render {
        config.backends.clear();
    }

    config.validate().context("Invalid run configuration")?;
    Ok(config)
}

fn run(options: RunOptions) -> Result<()> {
    let config = resolve_config(&options)?;

    // In JSON mode stdout carries exactly one document, so the prompt goes to stderr
    let terms = match config.terms {
        Some(terms) => terms,
        None => {
            let stdin = io::stdin();
            if options.json {
                prompt_for_terms(&mut stdin.lock(), &mut io::stderr())?
            } else {
                prompt_for_terms(&mut stdin.lock(), &mut io::stdout())?
            }
        }
    };

    if options.json {
        return run_json(terms, &config);
    }

    if terms <= 0 {
        println!("Please enter a positive integer.");
        return Ok(());
    }

    let report = SequenceReport::build(terms)?;
    info!(
        "Generated {} terms, {} prime",
        report.sequence.len(),
        report.prime_count
    );
    println!("{}", report.summary());

    let written = render_all(&report, &config)?;
    let mut stdout = io::stdout().lock();
    for path in written {
        writeln!(stdout, "Saved {}", path.display())?;
    }

    Ok(())
}

/// `run --json`: one JSON document on stdout, everything else on stderr
fn run_json(terms: i64, config: &RunConfig) -> Result<()> {
    let report = SequenceReport::build(terms)?;
    info!(
        "Generated {} terms, {} prime",
        report.sequence.len(),
        report.prime_count
    );

    // Renderers refuse empty reports; a non-positive request still gets a report
    let written = if report.is_empty() {
        warn!("No terms generated for {}, skipping rendering", terms);
        Vec::new()
    } else {
        render_all(&report, config)?
    };
    for path in &written {
        info!("Saved {}", path.display());
    }

    let json = report
        .to_json(&written)
        .context("Failed to serialize report to JSON")?;
    println!("{}", json);
    Ok(())
}

fn check(number: i64) {
    if is_prime_signed(number) {
        println!("{} is prime", number);
    } else {
        println!("{} is not prime", number);
    }
}

fn distances(terms: i64) -> Result<()> {
    let sequence = generate_fibonacci(terms)?;
    let (scaled, gaps) = prime_distances(&sequence).into_parts();

    println!("Primes scaled by pi: {}", format_floats(&scaled));
    println!("Distances between consecutive primes: {}", format_floats(&gaps));
    Ok(())
}

fn format_floats(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{:.6}", v)).collect();
    format!("[{}]", items.join(", "))
}

fn validate(path: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", path);
    let config = RunConfig::load_from_file(path)?;
    config.validate()?;
    info!("Configuration validation successful");
    println!("✓ Configuration file is valid: {}", path.display());
    Ok(())
}

fn init_config(path: &Path) -> Result<()> {
    RunConfig::new().save_to_file(path)?;
    println!("✓ Wrote default configuration to {}", path.display());
    Ok(())
}

