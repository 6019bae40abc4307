//! cool - CLI

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use cool_lang::util::config::InterpreterConfig;
use cool_lang::util::diagnostic::render_all;
use cool_lang::util::logger::{self, LogLevel};
use cool_lang::{check_file, run_file, Outcome, NAME, VERSION};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

/// Native stack for the evaluator thread
const EVALUATOR_STACK_SIZE: usize = 512 * 1024 * 1024;

/// Interpreter for the COOL classroom language
#[derive(Parser, Debug)]
#[command(name = "cool")]
#[command(version = VERSION)]
#[command(about = "Type check and run COOL programs", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./cool.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Heap size that triggers a garbage collection
    #[arg(long, value_name = "N", global = true)]
    gc_threshold: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a COOL source file
    Run {
        /// Source file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Check source file for errors (type checking only)
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = InterpreterConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(threshold) = args.gc_threshold {
        config.gc.threshold = threshold;
    }
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.log.level
    };
    logger::init_with_level(level);

    if args.verbose {
        eprintln!("{} version: {}", NAME, VERSION);
        eprintln!("Host: {}", std::env::consts::OS);
    }

    let outcome = match args.command {
        Commands::Run { file } => {
            let outcome = thread::Builder::new()
                .name("evaluator".to_string())
                .stack_size(EVALUATOR_STACK_SIZE)
                .spawn(move || run_file(&file, &config))
                .context("Failed to spawn evaluator thread")?
                .join()
                .map_err(|_| anyhow!("Evaluator thread panicked"))??;
            report(&outcome);
            outcome
        }
        Commands::Check { file } => {
            let outcome = check_file(&file)
                .with_context(|| format!("Failed to check: {}", file.display()))?;
            report(&outcome);
            if outcome == Outcome::Finished {
                println!("All checks passed");
            }
            outcome
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
            Outcome::Finished
        }
    };

    Ok(ExitCode::from(outcome.exit_code() as u8))
}

fn report(outcome: &Outcome) {
    let diagnostics = outcome.diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", render_all(diagnostics));
    }
}
