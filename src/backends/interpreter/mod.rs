//! Tree-walking interpreter
//!
//! Evaluates a type-checked program directly on its AST. Objects live in an
//! `ObjectHeap` and are reclaimed by the mark-and-sweep `Collector`.

mod builtins;
mod eval;
pub mod executor;
pub mod frames;


pub use executor::Interpreter;
pub use frames::Context;
