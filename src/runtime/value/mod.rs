//! Runtime value model
//!
//! `Value` for everything an expression evaluates to, `Instance` for the
//! heap records behind object references.

pub mod runtime_value;
pub use runtime_value::*;

#[cfg(test)]
mod tests;
