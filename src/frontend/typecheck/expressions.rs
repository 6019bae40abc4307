//! Expression typing rules

use super::checker::TypeChecker;
use super::errors::TypeError;
use super::types::{is_parent, lub, Type};
use crate::frontend::model::LookupError;
use crate::frontend::parser::ast::*;
use crate::util::span::Span;

impl TypeChecker<'_> {
    /// Type an expression and record the result on the node
    pub(super) fn check_expr(
        &mut self,
        expr: &mut Expr,
    ) -> Type {
        let span = expr.span;
        let ty = match &mut expr.kind {
            ExprKind::Int(_) => Type::named(INT),
            ExprKind::Str(_) => Type::named(STRING),
            ExprKind::Bool(_) => Type::named(BOOL),
            ExprKind::NoExpr => Type::None,
            ExprKind::Id(name) => self.check_id(name, span),
            ExprKind::Assign { name, value } => self.check_assign(name, value),
            ExprKind::Binary { op, left, right } => self.check_binary(*op, left, right),
            ExprKind::Unary { op, operand } => self.check_unary(*op, operand),
            ExprKind::IsVoid(operand) => {
                self.check_expr(operand);
                Type::named(BOOL)
            }
            ExprKind::New(type_name) => {
                if type_name.value == SELF_TYPE {
                    Type::SelfType(self.class.clone())
                } else if self.check_type_defined(type_name) {
                    Type::named(type_name.value.clone())
                } else {
                    Type::None
                }
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.expect_bool(cond);
                let then_ty = self.check_expr(then_branch);
                let else_ty = self.check_expr(else_branch);
                lub(&self.model.classes, [&then_ty, &else_ty])
            }
            ExprKind::While { cond, body } => {
                self.expect_bool(cond);
                self.check_expr(body);
                Type::named(OBJECT)
            }
            ExprKind::Block(exprs) => {
                let mut last = Type::None;
                for e in exprs.iter_mut() {
                    last = self.check_expr(e);
                }
                last
            }
            ExprKind::Let { bindings, body } => self.check_let(bindings, body),
            ExprKind::Case {
                scrutinee,
                branches,
            } => self.check_case(scrutinee, branches),
            ExprKind::Dispatch { method, args } => {
                let arg_types = self.check_args(args);
                let class = self.class.clone();
                match self.resolve(&class, method, &arg_types) {
                    Some(return_type) => Type::of(&return_type, &class),
                    None => Type::None,
                }
            }
            ExprKind::StaticDispatch {
                receiver,
                type_name,
                method,
                args,
            } => self.check_static_dispatch(receiver, type_name.as_ref(), method, args),
        };
        expr.ty = ty.clone();
        ty
    }

    fn check_id(
        &mut self,
        name: &str,
        span: Span,
    ) -> Type {
        let Some(type_name) = self.env.lookup(name).cloned() else {
            self.errors.add_error(TypeError::IdUndefined {
                name: name.to_string(),
                span,
            });
            return Type::None;
        };
        if type_name != SELF_TYPE && !self.model.classes.contains(&type_name) {
            self.errors.add_error(TypeError::TypeUndefined {
                name: type_name,
                span,
            });
            return Type::None;
        }
        Type::of(&type_name, &self.class)
    }

    fn check_assign(
        &mut self,
        name: &Ident,
        value: &mut Expr,
    ) -> Type {
        let found = self.check_expr(value);
        if name.value == SELF {
            self.errors
                .add_error(TypeError::assign_to_self("assignment", name.span));
            return Type::None;
        }
        let Some(declared) = self.env.lookup(&name.value) else {
            self.errors.add_error(TypeError::IdUndefined {
                name: name.value.clone(),
                span: name.span,
            });
            return Type::None;
        };
        let declared = Type::of(declared, &self.class);
        if !is_parent(&self.model.classes, &found, &declared) {
            self.errors
                .add_error(TypeError::not_subtype(&found, &declared, value.span));
            return Type::None;
        }
        found
    }

    fn check_binary(
        &mut self,
        op: BinOp,
        left: &mut Expr,
        right: &mut Expr,
    ) -> Type {
        let left_ty = self.check_expr(left);
        let right_ty = self.check_expr(right);

        if op == BinOp::Eq {
            if left_ty.is_none() || right_ty.is_none() {
                return Type::named(BOOL);
            }
            let basic = |t: &Type| t.class_name().is_some_and(is_basic_class) && !matches!(t, Type::SelfType(_));
            if (basic(&left_ty) || basic(&right_ty)) && left_ty != right_ty {
                self.errors.add_error(TypeError::IncomparableTypes {
                    left: left_ty.to_string(),
                    right: right_ty.to_string(),
                    span: left.span.to(right.span),
                });
                return Type::None;
            }
            return Type::named(BOOL);
        }

        let left_ok = self.expect_named(INT, &left_ty, left.span);
        let right_ok = self.expect_named(INT, &right_ty, right.span);
        if !(left_ok && right_ok) {
            return Type::None;
        }
        if op.is_arithmetic() {
            Type::named(INT)
        } else {
            Type::named(BOOL)
        }
    }

    fn check_unary(
        &mut self,
        op: UnOp,
        operand: &mut Expr,
    ) -> Type {
        let ty = self.check_expr(operand);
        let expected = match op {
            UnOp::Neg => INT,
            UnOp::Not => BOOL,
        };
        if self.expect_named(expected, &ty, operand.span) {
            Type::named(expected)
        } else {
            Type::None
        }
    }

    fn check_let(
        &mut self,
        bindings: &mut [LetBinding],
        body: &mut Expr,
    ) -> Type {
        self.env.enter_scope();
        for binding in bindings.iter_mut() {
            let defined = self.check_type_defined(&binding.type_name);
            if let Some(init) = binding.init.as_mut() {
                let found = self.check_expr(init);
                let declared = Type::of(&binding.type_name, &self.class);
                if defined && !is_parent(&self.model.classes, &found, &declared) {
                    self.errors
                        .add_error(TypeError::not_subtype(&found, &declared, init.span));
                }
            }
            if binding.name.value == SELF {
                self.errors
                    .add_error(TypeError::assign_to_self("let binding", binding.name.span));
                continue;
            }
            self.env
                .add_id(binding.name.value.clone(), binding.type_name.value.clone());
        }
        let ty = self.check_expr(body);
        self.env.exit_scope();
        ty
    }

    fn check_case(
        &mut self,
        scrutinee: &mut Expr,
        branches: &mut [CaseBranch],
    ) -> Type {
        self.check_expr(scrutinee);

        let mut seen: Vec<&str> = Vec::new();
        let mut duplicates = Vec::new();
        for branch in branches.iter() {
            if seen.contains(&branch.type_name.value.as_str()) {
                duplicates.push(TypeError::DuplicateBranchType {
                    name: branch.type_name.value.clone(),
                    span: branch.type_name.span,
                });
            } else {
                seen.push(&branch.type_name.value);
            }
        }
        for error in duplicates {
            self.errors.add_error(error);
        }

        let mut branch_types = Vec::with_capacity(branches.len());
        for branch in branches.iter_mut() {
            if branch.name.value == SELF {
                self.errors
                    .add_error(TypeError::assign_to_self("case branch", branch.name.span));
            }
            self.check_type_defined(&branch.type_name);
            self.env.enter_scope();
            if branch.name.value != SELF {
                self.env
                    .add_id(branch.name.value.clone(), branch.type_name.value.clone());
            }
            branch_types.push(self.check_expr(&mut branch.body));
            self.env.exit_scope();
        }
        lub(&self.model.classes, &branch_types)
    }

    fn check_static_dispatch(
        &mut self,
        receiver: &mut Expr,
        type_name: Option<&Ident>,
        method: &Ident,
        args: &mut [Expr],
    ) -> Type {
        let receiver_ty = self.check_expr(receiver);
        let arg_types = self.check_args(args);

        let class = match type_name {
            Some(target) => {
                if target.value == SELF_TYPE || !self.model.classes.contains(&target.value) {
                    self.errors.add_error(TypeError::TypeUndefined {
                        name: target.value.clone(),
                        span: target.span,
                    });
                    return Type::None;
                }
                let target_ty = Type::named(target.value.clone());
                if !is_parent(&self.model.classes, &receiver_ty, &target_ty) {
                    self.errors.add_error(TypeError::not_subtype(
                        &receiver_ty,
                        &target_ty,
                        receiver.span,
                    ));
                    return Type::None;
                }
                target.value.clone()
            }
            None => match receiver_ty.class_name() {
                Some(name) => name.to_string(),
                None => return Type::None,
            },
        };

        match self.resolve(&class, method, &arg_types) {
            Some(return_type) if return_type == SELF_TYPE => receiver_ty,
            Some(return_type) => Type::named(return_type),
            None => Type::None,
        }
    }

    fn check_args(
        &mut self,
        args: &mut [Expr],
    ) -> Vec<Type> {
        args.iter_mut().map(|arg| self.check_expr(arg)).collect()
    }

    /// Look a method up in `class`, returning its written return type
    fn resolve(
        &mut self,
        class: &str,
        method: &Ident,
        arg_types: &[Type],
    ) -> Option<String> {
        let lookup = self
            .model
            .methods
            .lookup(&self.model.classes, class, &method.value, arg_types);
        match lookup {
            Ok(decl) => Some(decl.return_type.clone()),
            Err(reason) => {
                let args = arg_types
                    .iter()
                    .map(Type::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                let name = method.value.clone();
                let class = class.to_string();
                let span = method.span;
                self.errors.add_error(match reason {
                    LookupError::Undefined => TypeError::MethodUndefined {
                        name,
                        args,
                        class,
                        span,
                    },
                    LookupError::Ambiguous => TypeError::AmbiguousOverload {
                        name,
                        args,
                        class,
                        span,
                    },
                });
                None
            }
        }
    }

    fn expect_bool(
        &mut self,
        cond: &mut Expr,
    ) {
        let ty = self.check_expr(cond);
        self.expect_named(BOOL, &ty, cond.span);
    }

    /// Accepts the named type or the absent type
    fn expect_named(
        &mut self,
        expected: &str,
        found: &Type,
        span: Span,
    ) -> bool {
        if found.is_none() || found.is(expected) {
            return true;
        }
        self.errors
            .add_error(TypeError::expected_type(expected, found, span));
        false
    }
}
