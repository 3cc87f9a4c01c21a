//! Expression type checking

use super::TypeChecker;
use crate::ast::{BinaryOp, Expr, ExprKind, Line, UnaryOp};
use crate::diagnostic::ErrorKind;
use crate::types::Type;

impl TypeChecker {
    /// Check an expression, cache its type on the node and return it
    ///
    /// Failed checks yield `Void` so the enclosing expression can keep going.
    pub(super) fn check_expr(&mut self, expr: &Expr) -> Type {
        let ty = match &expr.kind {
            ExprKind::Int(_) => Type::Int,
            ExprKind::Float(_) => Type::Float,
            ExprKind::String(_) => Type::String,
            ExprKind::Bool(_) => Type::Bool,
            ExprKind::NoExpr => Type::Void,
            ExprKind::Object(name) => self.check_object(name, expr.line),
            ExprKind::Assign { target, value } => self.check_assign(target, value, expr.line),
            ExprKind::Binary { op, lhs, rhs } => self.check_binary(*op, lhs, rhs, expr.line),
            ExprKind::Unary { op, operand } => self.check_unary(*op, operand, expr.line),
            ExprKind::Call { callee, args } => self.check_call(callee, args, expr.line),
        };
        expr.ty.set(Some(ty));
        ty
    }

    fn check_object(&mut self, name: &str, line: Line) -> Type {
        match self.lookup_variable(name) {
            Some(ty) => ty,
            None => {
                self.report_undefined_variable(name, line);
                Type::Void
            }
        }
    }

    fn check_assign(&mut self, target: &str, value: &Expr, line: Line) -> Type {
        let value_ty = self.check_expr(value);

        match self.lookup_variable(target) {
            None => self.report_undefined_variable(target, line),
            Some(target_ty) if target_ty != value_ty => {
                let msg = format!(
                    "Cannot assign {} to '{}' of type {}",
                    value_ty, target, target_ty
                );
                self.error(line, ErrorKind::AssignmentTypeMismatch, msg);
            }
            Some(_) => {}
        }

        value_ty
    }

    fn check_binary(&mut self, op: BinaryOp, lhs: &Expr, rhs: &Expr, line: Line) -> Type {
        let left = self.check_expr(lhs);
        let right = self.check_expr(rhs);

        let (result, kind) = match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => (
                Type::arithmetic_result(left, right),
                ErrorKind::ArithmeticTypeMismatch,
            ),
            BinaryOp::Mod => (
                both(left, right, Type::Int).then_some(Type::Int),
                ErrorKind::ArithmeticTypeMismatch,
            ),
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Ge | BinaryOp::Gt => (
                (left.is_numeric() && right.is_numeric()).then_some(Type::Bool),
                ErrorKind::RelationalTypeMismatch,
            ),
            BinaryOp::Eq | BinaryOp::Ne => (
                (left.is_equatable() && right.is_equatable()).then_some(Type::Bool),
                ErrorKind::EqualityTypeMismatch,
            ),
            BinaryOp::And | BinaryOp::Or | BinaryOp::Xor => (
                both(left, right, Type::Bool).then_some(Type::Bool),
                ErrorKind::LogicalTypeMismatch,
            ),
            BinaryOp::BitAnd | BinaryOp::BitOr => (
                both(left, right, Type::Int).then_some(Type::Int),
                ErrorKind::BitwiseTypeMismatch,
            ),
        };

        if let Some(ty) = result {
            return ty;
        }

        let msg = match kind {
            ErrorKind::RelationalTypeMismatch | ErrorKind::EqualityTypeMismatch => format!(
                "Cannot compare {} and {} with '{}'",
                left,
                right,
                op.symbol()
            ),
            _ => format!("Cannot apply '{}' to {} and {}", op.symbol(), left, right),
        };
        self.error(line, kind, msg).label = format!("{} {} {}", left, op.symbol(), right);
        Type::Void
    }

    fn check_unary(&mut self, op: UnaryOp, operand: &Expr, line: Line) -> Type {
        let ty = self.check_expr(operand);

        match op {
            // Negation always yields Int, even for a Float or rejected operand
            UnaryOp::Neg => {
                if !ty.is_numeric() {
                    let msg = format!("Cannot negate a value of type {}", ty);
                    self.error(line, ErrorKind::UnaryTypeMismatch, msg);
                }
                Type::Int
            }
            UnaryOp::Not if ty == Type::Bool => Type::Bool,
            UnaryOp::BitNot if ty == Type::Int => Type::Int,
            UnaryOp::Not | UnaryOp::BitNot => {
                let kind = if op == UnaryOp::Not {
                    ErrorKind::LogicalTypeMismatch
                } else {
                    ErrorKind::BitwiseTypeMismatch
                };
                let msg = format!("Cannot apply '{}' to {}", op.symbol(), ty);
                self.error(line, kind, msg);
                Type::Void
            }
        }
    }

    fn check_call(&mut self, callee: &str, args: &[Expr], line: Line) -> Type {
        // Arguments are checked exactly once, whatever happens to the callee
        let arg_types: Vec<Type> = args.iter().map(|arg| self.check_expr(arg)).collect();

        let name = self.interner.intern(callee);
        if name == self.builtins.print_intrinsic {
            self.check_print_call(callee, &arg_types, line);
            return Type::Void;
        }

        let Some(signature) = self.calls.get(name).cloned() else {
            let msg = format!("Function '{}' is not defined", callee);
            self.error(line, ErrorKind::UndefinedFunction, msg);
            return Type::Void;
        };

        if signature.arity() != arg_types.len() {
            let msg = format!(
                "Function '{}' expects {} argument{}, found {}",
                callee,
                signature.arity(),
                if signature.arity() == 1 { "" } else { "s" },
                arg_types.len()
            );
            self.error(line, ErrorKind::ArgumentCountMismatch, msg)
                .notes
                .push(format!("'{}' is declared at line {}", callee, signature.line));
            return signature.return_type;
        }

        for (((param, expected), found), arg) in signature
            .params
            .iter()
            .zip(arg_types.iter().copied())
            .zip(args)
        {
            if *expected != found {
                let msg = format!(
                    "Argument '{}' of '{}' expects {}, found {}",
                    self.name(*param),
                    callee,
                    expected,
                    found
                );
                self.error(arg.line, ErrorKind::ArgumentTypeMismatch, msg);
            }
        }

        signature.return_type
    }

    fn check_print_call(&mut self, callee: &str, arg_types: &[Type], line: Line) {
        match arg_types.first() {
            None => {
                let msg = format!("'{}' requires at least one argument", callee);
                self.error(line, ErrorKind::MissingArguments, msg);
            }
            Some(&first) if first != Type::String => {
                let msg = format!(
                    "First argument of '{}' must be String, found {}",
                    callee, first
                );
                self.error(line, ErrorKind::ArgumentTypeMismatch, msg).label =
                    "format string".to_string();
            }
            Some(_) => {}
        }
    }

    /// Innermost binding of a variable name
    fn lookup_variable(&self, name: &str) -> Option<Type> {
        // A name never interned cannot be bound
        self.interner
            .get(name)
            .and_then(|symbol| self.scopes.resolve(symbol))
    }

    fn report_undefined_variable(&mut self, name: &str, line: Line) {
        let msg = format!("Variable '{}' is not defined", name);
        self.error(line, ErrorKind::UndefinedSymbol, msg);
    }
}

fn both(left: Type, right: Type, expected: Type) -> bool {
    left == expected && right == expected
}
