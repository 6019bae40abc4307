//! Runtime system
//!
//! The value model and the garbage-collected object heap.

pub mod gc;
pub mod value;
