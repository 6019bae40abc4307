//! Activation frames
//!
//! Each method activation, and each attribute-initialization pass, runs in
//! its own `Context`: the receiver plus the locals bound so far (formals,
//! `let` and `case` bindings). Names not bound locally resolve to the
//! receiver's attributes.

use crate::runtime::gc::Handle;
use crate::runtime::value::Value;
use crate::util::symbol_table::SymbolTable;

/// Evaluation context of one activation
#[derive(Debug, Clone)]
pub struct Context {
    /// The receiver, bound to `self`
    pub self_value: Value,
    /// Formals and local bindings, innermost scope last
    pub locals: SymbolTable<Value>,
}

impl Context {
    /// Fresh activation on `self_value` with one empty scope
    pub fn new(self_value: Value) -> Self {
        let mut locals = SymbolTable::new();
        locals.enter_scope();
        Self { self_value, locals }
    }

    /// Activation with the formals already bound
    pub fn with_args<'a>(
        self_value: Value,
        bindings: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Self {
        let mut context = Self::new(self_value);
        for (name, value) in bindings {
            context.locals.add_id(name, value);
        }
        context
    }

    /// Heap handles this context keeps alive
    pub fn roots(&self) -> impl Iterator<Item = Handle> + '_ {
        self.self_value
            .as_handle()
            .into_iter()
            .chain(self.locals.values().filter_map(Value::as_handle))
    }
}
