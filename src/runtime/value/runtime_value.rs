//! Runtime values
//!
//! Primitives are stored inline. Class instances live in the object heap and
//! are referenced by handle, so object graphs with cycles need no owning
//! pointers.

use crate::frontend::parser::ast::{BOOL, INT, STRING};
use crate::runtime::gc::Handle;
use crate::util::symbol_table::SymbolTable;
use std::fmt;
use std::sync::Arc;

/// A runtime value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(Arc<str>),
    /// The uninitialized reference
    #[default]
    Void,
    /// Reference to a heap instance
    Object(Handle),
}

impl Value {
    /// Default value of an attribute or `let` binding of the given type
    pub fn zero(type_name: &str) -> Self {
        match type_name {
            INT => Value::Int(0),
            BOOL => Value::Bool(false),
            STRING => Value::Str(Arc::from("")),
            _ => Value::Void,
        }
    }

    pub fn string(text: impl Into<Arc<str>>) -> Self {
        Value::Str(text.into())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    pub fn as_handle(&self) -> Option<Handle> {
        match self {
            Value::Object(handle) => Some(*handle),
            _ => None,
        }
    }

    /// Class of a primitive value
    pub fn primitive_class(&self) -> Option<&'static str> {
        match self {
            Value::Int(_) => Some(INT),
            Value::Bool(_) => Some(BOOL),
            Value::Str(_) => Some(STRING),
            Value::Void | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
            Value::Void => write!(f, "void"),
            Value::Object(handle) => write!(f, "<object {}>", handle),
        }
    }
}

/// Instance of a class: its runtime class and attribute values
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub class: String,
    pub fields: SymbolTable<Value>,
}

impl Instance {
    /// Instance with no attributes bound yet
    pub fn new(class: impl Into<String>) -> Self {
        let mut fields = SymbolTable::new();
        fields.enter_scope();
        Self {
            class: class.into(),
            fields,
        }
    }

    /// Heap handles held directly by this instance
    pub fn children(&self) -> impl Iterator<Item = Handle> + '_ {
        self.fields.values().filter_map(Value::as_handle)
    }
}
