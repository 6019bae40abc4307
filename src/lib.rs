//! COOL language interpreter
//!
//! A front end (lexer, parser, class hierarchy and feature analysis, static
//! type checking) and a tree-walking interpreter whose objects are
//! reclaimed by a mark-and-sweep collector.
//!
//! # Example
//!
//! ```no_run
//! use cool_lang::util::config::InterpreterConfig;
//! use cool_lang::{run, Outcome, Result};
//!
//! fn main() -> Result<()> {
//!     let code = r#"
//!         class Main inherits IO {
//!             main() : Object { out_string("Hello, World!\n") };
//!         };
//!     "#;
//!     let outcome = run(code, &InterpreterConfig::default())?;
//!     assert_eq!(outcome, Outcome::Finished);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/cool-lang")]
#![warn(rust_2018_idioms)]

pub mod backends;
pub mod frontend;
pub mod runtime;
pub mod util;

pub use anyhow::{Context, Result};

use backends::interpreter::Interpreter;
use backends::{ExecutionOutcome, ExecutorConfig};
use frontend::{CompiledProgram, Compiler};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};
use util::config::InterpreterConfig;
use util::diagnostic::{Diagnostic, IntoDiagnostic};

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "cool";

/// How a run or check ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The program ran to completion, or passed every check
    Finished,
    /// `abort` was called on an object of this class
    Aborted { class: String },
    /// Static analysis rejected the program
    CompileFailed(Vec<Diagnostic>),
    /// Evaluation stopped on a runtime error
    RuntimeFailed(Diagnostic),
}

impl Outcome {
    /// Process exit status: 0 for success and abort, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Finished | Outcome::Aborted { .. } => 0,
            Outcome::CompileFailed(_) | Outcome::RuntimeFailed(_) => 1,
        }
    }

    /// Diagnostics to report, if any
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Outcome::CompileFailed(diagnostics) => diagnostics,
            Outcome::RuntimeFailed(diagnostic) => std::slice::from_ref(diagnostic),
            _ => &[],
        }
    }
}

impl From<&InterpreterConfig> for ExecutorConfig {
    fn from(config: &InterpreterConfig) -> Self {
        ExecutorConfig {
            max_call_depth: config.runtime.max_call_depth,
            gc_threshold: config.gc.threshold,
        }
    }
}

fn compile(source: &str) -> std::result::Result<CompiledProgram, Outcome> {
    Compiler::new()
        .compile(source)
        .map_err(|e| Outcome::CompileFailed(e.diagnostics()))
}

/// Compile and run source code on stdin/stdout
pub fn run(
    source: &str,
    config: &InterpreterConfig,
) -> Result<Outcome> {
    let stdin = std::io::stdin();
    run_with_io(source, config, stdin.lock(), std::io::stdout())
}

/// Compile and run source code with explicit input and output
pub fn run_with_io(
    source: &str,
    config: &InterpreterConfig,
    input: impl BufRead,
    output: impl Write,
) -> Result<Outcome> {
    debug!("run called");
    let compiled = match compile(source) {
        Ok(compiled) => compiled,
        Err(outcome) => return Ok(outcome),
    };

    let mut interpreter = Interpreter::with_io(&compiled, config.into(), input, output);
    let outcome = match interpreter.run() {
        Ok(ExecutionOutcome::Finished) => Outcome::Finished,
        Ok(ExecutionOutcome::Aborted { class }) => Outcome::Aborted { class },
        Err(error) => Outcome::RuntimeFailed(error.to_diagnostic()),
    };
    info!("Run finished: {:?}", outcome);
    Ok(outcome)
}

/// Run a source file
pub fn run_file(
    path: &Path,
    config: &InterpreterConfig,
) -> Result<Outcome> {
    debug!("Running file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    run(&source, config)
}

/// Run every static check without evaluating
pub fn check(source: &str) -> Outcome {
    match compile(source) {
        Ok(_) => Outcome::Finished,
        Err(outcome) => outcome,
    }
}

/// Check a source file
pub fn check_file(path: &Path) -> Result<Outcome> {
    debug!("Checking file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(check(&source))
}
