//! Expression evaluation

use super::executor::Interpreter;
use crate::backends::{ExecutorResult, RuntimeError};
use crate::frontend::parser::ast::*;
use crate::runtime::value::Value;
use crate::util::span::Span;
use std::sync::Arc;

impl<'p> Interpreter<'p> {
    /// Evaluate an expression in the current context
    pub(super) fn eval(
        &mut self,
        expr: &'p Expr,
    ) -> ExecutorResult<Value> {
        let span = expr.span;
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Str(s) => Ok(Value::Str(Arc::from(s.as_str()))),
            ExprKind::NoExpr => Ok(Value::Void),
            ExprKind::Id(name) => Ok(self.lookup_id(name, span)?),
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.assign(name, value.clone())?;
                Ok(value)
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right, span),
            ExprKind::Unary { op, operand } => match (op, self.eval(operand)?) {
                (UnOp::Neg, Value::Int(n)) => Ok(Value::Int(n.wrapping_neg())),
                (UnOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
                (_, other) => Err(RuntimeError::internal(
                    format!("bad operand '{}' for unary operator", other),
                    span,
                )
                .into()),
            },
            ExprKind::IsVoid(operand) => Ok(Value::Bool(self.eval(operand)?.is_void())),
            ExprKind::New(type_name) => {
                let class = if type_name.value == SELF_TYPE {
                    let self_value = self.context()?.self_value.clone();
                    self.class_of(&self_value)
                        .ok_or_else(|| RuntimeError::internal("SELF_TYPE of void", span))?
                } else {
                    type_name.value.clone()
                };
                self.instantiate(&class, span)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_bool(cond)? {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            }
            ExprKind::While { cond, body } => {
                while self.eval_bool(cond)? {
                    self.eval(body)?;
                }
                Ok(Value::Void)
            }
            ExprKind::Block(exprs) => {
                let mut last = Value::Void;
                for e in exprs {
                    last = self.eval(e)?;
                }
                Ok(last)
            }
            ExprKind::Let { bindings, body } => {
                self.context_mut()?.locals.enter_scope();
                let result = self.eval_let(bindings, body);
                self.context_mut()?.locals.exit_scope();
                result
            }
            ExprKind::Case {
                scrutinee,
                branches,
            } => self.eval_case(scrutinee, branches, span),
            ExprKind::Dispatch { method, args } => {
                let mark = self.temporaries.len();
                let args = self.eval_args(args)?;
                let receiver = self.context()?.self_value.clone();
                let class = self
                    .class_of(&receiver)
                    .ok_or_else(|| RuntimeError::internal("self is void", span))?;
                let result = self.invoke(receiver, &class, &method.value, args, method.span);
                self.temporaries.truncate(mark);
                result
            }
            ExprKind::StaticDispatch {
                receiver,
                type_name,
                method,
                args,
            } => {
                let mark = self.temporaries.len();
                let args = self.eval_args(args)?;
                let receiver = self.eval(receiver)?;
                self.temporaries.push(receiver.clone());
                let class = match (type_name, self.class_of(&receiver)) {
                    (_, None) => {
                        return Err(RuntimeError::DispatchOnVoid {
                            method: method.value.clone(),
                            span: method.span,
                        }
                        .into());
                    }
                    (Some(target), Some(_)) => target.value.clone(),
                    (None, Some(runtime)) => runtime,
                };
                let result = self.invoke(receiver, &class, &method.value, args, method.span);
                self.temporaries.truncate(mark);
                result
            }
        }
    }

    /// Evaluate arguments left to right, keeping each one rooted
    fn eval_args(
        &mut self,
        args: &'p [Expr],
    ) -> ExecutorResult<Vec<Value>> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.eval(arg)?;
            self.temporaries.push(value.clone());
            values.push(value);
        }
        Ok(values)
    }

    fn eval_bool(
        &mut self,
        expr: &'p Expr,
    ) -> ExecutorResult<bool> {
        match self.eval(expr)? {
            Value::Bool(b) => Ok(b),
            other => Err(RuntimeError::internal(
                format!("expected a Bool, found '{}'", other),
                expr.span,
            )
            .into()),
        }
    }

    fn eval_binary(
        &mut self,
        op: BinOp,
        left: &'p Expr,
        right: &'p Expr,
        span: Span,
    ) -> ExecutorResult<Value> {
        let left = self.eval(left)?;
        self.temporaries.push(left.clone());
        let right = self.eval(right);
        self.temporaries.pop();
        let right = right?;

        if op == BinOp::Eq {
            return Ok(Value::Bool(left == right));
        }

        let (Value::Int(a), Value::Int(b)) = (&left, &right) else {
            return Err(RuntimeError::internal(
                format!("bad operands '{}' {} '{}'", left, op.symbol(), right),
                span,
            )
            .into());
        };
        let (a, b) = (*a, *b);
        let value = match op {
            BinOp::Add => Value::Int(a.wrapping_add(b)),
            BinOp::Sub => Value::Int(a.wrapping_sub(b)),
            BinOp::Mul => Value::Int(a.wrapping_mul(b)),
            BinOp::Div => {
                if b == 0 {
                    return Err(RuntimeError::DivideByZero { span }.into());
                }
                Value::Int(a.wrapping_div(b))
            }
            BinOp::Lt => Value::Bool(a < b),
            BinOp::Le => Value::Bool(a <= b),
            BinOp::Eq => Value::Bool(a == b),
        };
        Ok(value)
    }

    fn eval_let(
        &mut self,
        bindings: &'p [LetBinding],
        body: &'p Expr,
    ) -> ExecutorResult<Value> {
        for binding in bindings {
            let value = match &binding.init {
                Some(init) => self.eval(init)?,
                None => Value::zero(&binding.type_name.value),
            };
            self.context_mut()?
                .locals
                .add_id(binding.name.value.clone(), value);
        }
        self.eval(body)
    }

    /// Climb from the runtime class; the first ancestor with a branch wins
    fn eval_case(
        &mut self,
        scrutinee: &'p Expr,
        branches: &'p [CaseBranch],
        span: Span,
    ) -> ExecutorResult<Value> {
        let value = self.eval(scrutinee)?;
        let Some(class) = self.class_of(&value) else {
            return Err(RuntimeError::CaseNotMatched {
                class: "void".to_string(),
                span,
            }
            .into());
        };

        let model = self.model;
        let branch = model
            .classes
            .ancestors(&class)
            .find_map(|ancestor| branches.iter().find(|b| b.type_name.value == ancestor));
        let Some(branch) = branch else {
            return Err(RuntimeError::CaseNotMatched { class, span }.into());
        };

        let context = self.context_mut()?;
        context.locals.enter_scope();
        context.locals.add_id(branch.name.value.clone(), value);
        let result = self.eval(&branch.body);
        self.context_mut()?.locals.exit_scope();

        let result = result?;
        if result.is_void() {
            return Err(RuntimeError::UnexpectedVoid {
                branch: branch.type_name.value.clone(),
                span: branch.span,
            }
            .into());
        }
        Ok(result)
    }

    /// Locals first, then the receiver's attributes
    fn lookup_id(
        &self,
        name: &str,
        span: Span,
    ) -> Result<Value, RuntimeError> {
        let context = self.context()?;
        if name == SELF {
            return Ok(context.self_value.clone());
        }
        if let Some(value) = context.locals.lookup(name) {
            return Ok(value.clone());
        }
        context
            .self_value
            .as_handle()
            .and_then(|h| self.heap.get(h))
            .and_then(|instance| instance.fields.lookup(name))
            .cloned()
            .ok_or_else(|| RuntimeError::internal(format!("unbound identifier '{}'", name), span))
    }

    fn assign(
        &mut self,
        name: &Ident,
        value: Value,
    ) -> Result<(), RuntimeError> {
        let context = self
            .contexts
            .last_mut()
            .ok_or_else(|| RuntimeError::internal("no active context", name.span))?;
        if context.locals.update(&name.value, value.clone()) {
            return Ok(());
        }
        let updated = context
            .self_value
            .as_handle()
            .and_then(|h| self.heap.get_mut(h))
            .is_some_and(|instance| instance.fields.update(&name.value, value));
        if updated {
            Ok(())
        } else {
            Err(RuntimeError::internal(
                format!("unbound identifier '{}'", name.value),
                name.span,
            ))
        }
    }
}
