//! Interpreter executor
//!
//! Owns the object heap and the activation stack, creates objects and
//! performs method dispatch. Expression rules live in `eval`, native
//! methods in `builtins`.

use super::frames::Context;
use crate::backends::{
    ExecutionOutcome, ExecutorConfig, ExecutorResult, RuntimeError, Termination,
};
use crate::frontend::model::{AttrDeclaration, ProgramModel};
use crate::frontend::parser::ast::{Program, MAIN_CLASS, MAIN_METHOD};
use crate::frontend::typecheck::Type;
use crate::frontend::CompiledProgram;
use crate::runtime::gc::{Collector, GcConfig, Handle, ObjectHeap};
use crate::runtime::value::{Instance, Value};
use crate::util::span::Span;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// Tree-walking interpreter over a compiled program
pub struct Interpreter<'p> {
    pub(super) program: &'p Program,
    pub(super) model: &'p ProgramModel,
    pub(super) heap: ObjectHeap,
    pub(super) collector: Collector,
    /// Live activations, innermost last
    pub(super) contexts: Vec<Context>,
    /// Instances whose attributes are still being initialized
    pub(super) constructing: Vec<Handle>,
    /// Evaluated values not yet stored in any context or instance
    pub(super) temporaries: Vec<Value>,
    pub(super) config: ExecutorConfig,
    pub(super) depth: usize,
    pub(super) input: Box<dyn BufRead + 'p>,
    pub(super) output: Box<dyn Write + 'p>,
}

impl fmt::Debug for Interpreter<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("heap_size", &self.heap.size())
            .field("contexts", &self.contexts.len())
            .field("config", &self.config)
            .field("depth", &self.depth)
            .finish()
    }
}

impl<'p> Interpreter<'p> {
    /// Interpreter reading stdin and writing stdout
    pub fn new(compiled: &'p CompiledProgram) -> Self {
        Self::with_config(compiled, ExecutorConfig::default())
    }

    pub fn with_config(
        compiled: &'p CompiledProgram,
        config: ExecutorConfig,
    ) -> Self {
        Self::with_io(
            compiled,
            config,
            io::BufReader::new(io::stdin()),
            io::stdout(),
        )
    }

    /// Interpreter with explicit input and output streams
    pub fn with_io(
        compiled: &'p CompiledProgram,
        config: ExecutorConfig,
        input: impl BufRead + 'p,
        output: impl Write + 'p,
    ) -> Self {
        Self {
            program: &compiled.program,
            model: &compiled.model,
            heap: ObjectHeap::new(),
            collector: Collector::new(GcConfig {
                threshold: config.gc_threshold,
            }),
            contexts: Vec::new(),
            constructing: Vec::new(),
            temporaries: Vec::new(),
            config,
            depth: 0,
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    pub fn heap(&self) -> &ObjectHeap {
        &self.heap
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    /// Run `new Main` then `main()` on it
    pub fn run(&mut self) -> Result<ExecutionOutcome, RuntimeError> {
        let model = self.model;
        if !model.classes.contains(MAIN_CLASS) {
            return Err(RuntimeError::NoEntryPoint {
                reason: format!("class '{}' is not defined", MAIN_CLASS),
            });
        }
        if model
            .methods
            .lookup(&model.classes, MAIN_CLASS, MAIN_METHOD, &[])
            .is_err()
        {
            return Err(RuntimeError::NoEntryPoint {
                reason: format!(
                    "class '{}' has no method '{}()'",
                    MAIN_CLASS, MAIN_METHOD
                ),
            });
        }

        debug!("Starting execution of {}.{}()", MAIN_CLASS, MAIN_METHOD);
        let result = self.run_main();
        let flushed = self.output.flush();

        let outcome = match result {
            Ok(_) => ExecutionOutcome::Finished,
            Err(Termination::Abort { class }) => ExecutionOutcome::Aborted { class },
            Err(Termination::Error(error)) => return Err(error),
        };
        flushed.map_err(|e| RuntimeError::Io {
            message: e.to_string(),
            span: Span::dummy(),
        })?;
        debug!(
            "Execution finished: {} collection(s), {} object(s) freed",
            self.collector.collections(),
            self.collector.total_freed()
        );
        Ok(outcome)
    }

    fn run_main(&mut self) -> ExecutorResult<Value> {
        let main = self.instantiate(MAIN_CLASS, Span::dummy())?;
        self.invoke(main, MAIN_CLASS, MAIN_METHOD, Vec::new(), Span::dummy())
    }

    /// Current activation
    pub(super) fn context(&self) -> Result<&Context, RuntimeError> {
        self.contexts
            .last()
            .ok_or_else(|| RuntimeError::internal("no active context", Span::dummy()))
    }

    pub(super) fn context_mut(&mut self) -> Result<&mut Context, RuntimeError> {
        self.contexts
            .last_mut()
            .ok_or_else(|| RuntimeError::internal("no active context", Span::dummy()))
    }

    /// Runtime class name of a value; `None` for void
    pub(super) fn class_of(
        &self,
        value: &Value,
    ) -> Option<String> {
        match value {
            Value::Object(handle) => self.heap.get(*handle).map(|i| i.class.clone()),
            other => other.primitive_class().map(str::to_string),
        }
    }

    /// Runtime type used for overload resolution
    fn runtime_type(
        &self,
        value: &Value,
    ) -> Type {
        self.class_of(value).map(Type::Named).unwrap_or(Type::None)
    }

    /// Create and initialize an instance of `class`.
    ///
    /// Attributes are seeded with zero values, root class first, then their
    /// initializers run in the same order with `self` bound to the new
    /// object. The collector may run before the instance is registered.
    pub(super) fn instantiate(
        &mut self,
        class: &str,
        span: Span,
    ) -> ExecutorResult<Value> {
        let model = self.model;
        let program = self.program;
        trace!("new {}", class);

        let chain: Vec<&AttrDeclaration> = model.attributes.chain(&model.classes, class).collect();
        let mut instance = Instance::new(class);
        for attr in &chain {
            instance
                .fields
                .add_id(attr.name.clone(), Value::zero(&attr.type_name));
        }
        let handle = self.heap.allocate(instance);
        self.constructing.push(handle);

        self.contexts.push(Context::new(Value::Object(handle)));
        let initialized = self.run_initializers(program, handle, &chain, span);
        self.contexts.pop();
        initialized?;

        self.maybe_collect();
        self.constructing.pop();
        self.heap.register(handle);
        Ok(Value::Object(handle))
    }

    fn run_initializers(
        &mut self,
        program: &'p Program,
        handle: Handle,
        chain: &[&AttrDeclaration],
        span: Span,
    ) -> ExecutorResult<()> {
        for attr in chain.iter().filter(|a| a.has_init) {
            let init = attr
                .feature
                .attr(program)
                .and_then(|def| def.init.as_ref())
                .ok_or_else(|| RuntimeError::internal("missing attribute initializer", span))?;
            let value = self.eval(init)?;
            let instance = self
                .heap
                .get_mut(handle)
                .ok_or_else(|| RuntimeError::internal("instance freed during construction", span))?;
            instance.fields.update(&attr.name, value);
        }
        Ok(())
    }

    /// Collect if the heap has reached its threshold
    pub(super) fn maybe_collect(&mut self) {
        if !self.collector.should_collect(&self.heap) {
            return;
        }
        let roots: Vec<Handle> = self
            .contexts
            .iter()
            .flat_map(Context::roots)
            .chain(self.constructing.iter().copied())
            .chain(self.temporaries.iter().filter_map(Value::as_handle))
            .collect();
        self.collector.collect(&mut self.heap, roots);
    }

    /// Call `name` on `receiver`, resolving it in `class`
    pub(super) fn invoke(
        &mut self,
        receiver: Value,
        class: &str,
        name: &str,
        args: Vec<Value>,
        span: Span,
    ) -> ExecutorResult<Value> {
        let model = self.model;
        let program = self.program;

        let arg_types: Vec<Type> = args.iter().map(|a| self.runtime_type(a)).collect();
        let decl = model
            .methods
            .lookup(&model.classes, class, name, &arg_types)
            .map_err(|_| {
                RuntimeError::internal(format!("cannot resolve '{}' in class '{}'", name, class), span)
            })?;

        let is_builtin = program
            .classes
            .get(decl.feature.class)
            .is_some_and(|c| c.builtin);
        if is_builtin {
            let mark = self.temporaries.len();
            self.temporaries.push(receiver.clone());
            self.temporaries.extend(args.iter().cloned());
            let result = self.call_builtin(&decl.owner, name, receiver, &args, span);
            self.temporaries.truncate(mark);
            return result;
        }

        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::StackOverflow {
                limit: self.config.max_call_depth,
                span,
            }
            .into());
        }
        let method = decl
            .feature
            .method(program)
            .ok_or_else(|| RuntimeError::internal("method body not found", span))?;

        let bindings = method
            .formals
            .iter()
            .map(|f| f.name.value.as_str())
            .zip(args);
        self.contexts.push(Context::with_args(receiver, bindings));
        self.depth += 1;
        let result = self.eval(&method.body);
        self.depth -= 1;
        self.contexts.pop();
        result
    }
}
