//! Frontend compilation pipeline
//!
//! Tokenize, parse, build the program model and type check. Any phase that
//! reports errors stops the pipeline.

use crate::util::diagnostic::{Diagnostic, IntoDiagnostic};
use thiserror::Error;
use tracing::debug;

pub mod lexer;
pub mod model;
pub mod parser;
pub mod typecheck;

use lexer::LexError;
use model::{ProgramModel, SemanticError};
use parser::ast::Program;
use parser::ParseError;
use typecheck::TypeError;

/// A program that passed every static check
#[derive(Debug, Clone)]
pub struct CompiledProgram {
    /// AST with every expression typed
    pub program: Program,
    pub model: ProgramModel,
}

/// Compiler front end
#[derive(Debug, Default)]
pub struct Compiler {
    compiled: usize,
}

impl Compiler {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of programs this compiler accepted
    pub fn compiled_count(&self) -> usize {
        self.compiled
    }

    /// Compile source text
    pub fn compile(
        &mut self,
        source: &str,
    ) -> Result<CompiledProgram, CompileError> {
        debug!("Compiling source code ({} bytes)", source.len());
        let tokens = lexer::tokenize(source).map_err(CompileError::Lex)?;
        debug!("Tokenized into {} tokens", tokens.len());

        let mut program = parser::parse(&tokens).map_err(CompileError::Parse)?;
        debug!("Parsing successful, got {} classes", program.classes.len());

        let model = ProgramModel::build(&program).map_err(CompileError::Semantic)?;

        typecheck::check_program(&mut program, &model).map_err(CompileError::Type)?;
        debug!("Type checking successful");
        self.compiled += 1;

        Ok(CompiledProgram { program, model })
    }
}

/// Compilation errors, one variant per phase
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{} lexical error(s)", .0.len())]
    Lex(Vec<LexError>),

    #[error("{} syntax error(s)", .0.len())]
    Parse(Vec<ParseError>),

    #[error("{0}")]
    Semantic(SemanticError),

    #[error("{} type error(s)", .0.len())]
    Type(Vec<TypeError>),
}

impl CompileError {
    /// Every reported problem as a diagnostic, in source order per phase
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            CompileError::Lex(errors) => errors.iter().map(IntoDiagnostic::to_diagnostic).collect(),
            CompileError::Parse(errors) => {
                errors.iter().map(IntoDiagnostic::to_diagnostic).collect()
            }
            CompileError::Semantic(error) => vec![error.to_diagnostic()],
            CompileError::Type(errors) => {
                errors.iter().map(IntoDiagnostic::to_diagnostic).collect()
            }
        }
    }
}
