//! Native methods of the built-in classes
//!
//! `Object`, `IO` and `String` methods have no source body; calls that
//! resolve to them are handled here.

use super::executor::Interpreter;
use crate::backends::{ExecutorResult, RuntimeError, Termination};
use crate::frontend::parser::ast::{IO, OBJECT, STRING};
use crate::runtime::value::Value;
use crate::util::span::Span;
use std::io::Write;
use std::sync::Arc;
use tracing::trace;

impl Interpreter<'_> {
    pub(super) fn call_builtin(
        &mut self,
        owner: &str,
        name: &str,
        receiver: Value,
        args: &[Value],
        span: Span,
    ) -> ExecutorResult<Value> {
        trace!("builtin {}.{}", owner, name);
        match (owner, name, args) {
            (OBJECT, "abort", []) => {
                let class = self.class_of(&receiver).unwrap_or_else(|| "void".to_string());
                writeln!(self.output, "{} abort and exit.", class)
                    .and_then(|_| self.output.flush())
                    .map_err(|e| io_error(e, span))?;
                Err(Termination::Abort { class })
            }
            (OBJECT, "type_name", []) => {
                let class = self.class_of(&receiver).unwrap_or_else(|| "void".to_string());
                Ok(Value::string(class))
            }
            (OBJECT, "copy", []) => self.shallow_copy(receiver, span),
            (IO, "out_string", [Value::Str(text)]) => {
                self.write_out(text, span)?;
                Ok(receiver)
            }
            (IO, "out_int", [Value::Int(n)]) => {
                self.write_out(&n.to_string(), span)?;
                Ok(receiver)
            }
            (IO, "in_string", []) => {
                let line = self.read_line(span)?.unwrap_or_default();
                Ok(Value::string(line))
            }
            (IO, "in_int", []) => {
                let line = self.read_line(span)?.unwrap_or_default();
                line.trim()
                    .parse::<i64>()
                    .map(Value::Int)
                    .map_err(|_| RuntimeError::InvalidInput { input: line, span }.into())
            }
            (STRING, "length", []) => {
                let text = expect_str(&receiver, span)?;
                Ok(Value::Int(text.chars().count() as i64))
            }
            (STRING, "concat", [Value::Str(other)]) => {
                let text = expect_str(&receiver, span)?;
                Ok(Value::string(format!("{}{}", text, other)))
            }
            (STRING, "substr", [Value::Int(index), Value::Int(length)]) => {
                let text = expect_str(&receiver, span)?;
                substr(text, *index, *length, span)
            }
            _ => Err(RuntimeError::internal(
                format!("no native implementation for {}.{}", owner, name),
                span,
            )
            .into()),
        }
    }

    /// New instance with the same class and attribute values
    fn shallow_copy(
        &mut self,
        receiver: Value,
        span: Span,
    ) -> ExecutorResult<Value> {
        let Value::Object(handle) = receiver else {
            return Ok(receiver);
        };
        let instance = self
            .heap
            .get(handle)
            .cloned()
            .ok_or_else(|| RuntimeError::internal("copy of a freed object", span))?;
        let copy = self.heap.allocate(instance);
        self.constructing.push(copy);
        self.maybe_collect();
        self.constructing.pop();
        self.heap.register(copy);
        Ok(Value::Object(copy))
    }

    fn write_out(
        &mut self,
        text: &str,
        span: Span,
    ) -> Result<(), RuntimeError> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| io_error(e, span))
    }

    /// One line without its terminator; `None` at end of input
    fn read_line(
        &mut self,
        span: Span,
    ) -> Result<Option<String>, RuntimeError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| io_error(e, span))?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

fn io_error(
    error: std::io::Error,
    span: Span,
) -> RuntimeError {
    RuntimeError::Io {
        message: error.to_string(),
        span,
    }
}

fn expect_str(
    value: &Value,
    span: Span,
) -> Result<&Arc<str>, RuntimeError> {
    match value {
        Value::Str(text) => Ok(text),
        other => Err(RuntimeError::internal(
            format!("expected a String receiver, found '{}'", other),
            span,
        )),
    }
}

/// Character-based substring; the range must lie inside the string
fn substr(
    text: &str,
    index: i64,
    length: i64,
    span: Span,
) -> ExecutorResult<Value> {
    let len = text.chars().count();
    let in_range = index >= 0
        && length >= 0
        && index
            .checked_add(length)
            .is_some_and(|end| end as u64 <= len as u64);
    if !in_range {
        return Err(RuntimeError::SubstrOutOfRange {
            index,
            length,
            len,
            span,
        }
        .into());
    }
    let slice: String = text
        .chars()
        .skip(index as usize)
        .take(length as usize)
        .collect();
    Ok(Value::string(slice))
}
