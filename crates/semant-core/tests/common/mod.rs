//! Shared test utilities
//!
//! Builders for hand-assembled programs plus diagnostic assertions. Every
//! builder takes the source line explicitly so tests can assert locations.

#![allow(dead_code)]

use semant_core::ast::{
    BinaryOp, Decl, Expr, ExprKind, FunctionDecl, Line, Program, Stmt, StmtBlock, UnaryOp,
    VariableDecl,
};
use semant_core::{Diagnostic, DiagnosticLevel, ErrorKind, TypeChecker, Type};

pub use pretty_assertions::{assert_eq, assert_ne};

// ============================================================================
// Expressions
// ============================================================================

pub fn int(value: i64, line: Line) -> Expr {
    Expr::new(ExprKind::Int(value), line)
}

pub fn float(value: f64, line: Line) -> Expr {
    Expr::new(ExprKind::Float(value), line)
}

pub fn string(value: &str, line: Line) -> Expr {
    Expr::new(ExprKind::String(value.to_string()), line)
}

pub fn boolean(value: bool, line: Line) -> Expr {
    Expr::new(ExprKind::Bool(value), line)
}

/// Literal of the given type; `Void` yields an empty expression
pub fn literal_of(ty: Type, line: Line) -> Expr {
    match ty {
        Type::Int => int(1, line),
        Type::Float => float(1.5, line),
        Type::String => string("s", line),
        Type::Bool => boolean(true, line),
        Type::Void => Expr::empty(line),
    }
}

pub fn var(name: &str, line: Line) -> Expr {
    Expr::new(ExprKind::Object(name.to_string()), line)
}

pub fn assign(target: &str, value: Expr, line: Line) -> Expr {
    Expr::new(
        ExprKind::Assign {
            target: target.to_string(),
            value: Box::new(value),
        },
        line,
    )
}

pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, line: Line) -> Expr {
    Expr::new(
        ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        line,
    )
}

pub fn unary(op: UnaryOp, operand: Expr, line: Line) -> Expr {
    Expr::new(
        ExprKind::Unary {
            op,
            operand: Box::new(operand),
        },
        line,
    )
}

pub fn call(callee: &str, args: Vec<Expr>, line: Line) -> Expr {
    Expr::new(
        ExprKind::Call {
            callee: callee.to_string(),
            args,
        },
        line,
    )
}

// ============================================================================
// Statements and declarations
// ============================================================================

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::Expr(expr)
}

pub fn ret(value: Expr, line: Line) -> Stmt {
    Stmt::Return { value, line }
}

pub fn ret_void(line: Line) -> Stmt {
    ret(Expr::empty(line), line)
}

pub fn if_stmt(cond: Expr, then_block: StmtBlock, else_block: Option<StmtBlock>) -> Stmt {
    let line = cond.line;
    Stmt::If {
        cond,
        then_block,
        else_block,
        line,
    }
}

pub fn while_stmt(cond: Expr, body: StmtBlock) -> Stmt {
    let line = cond.line;
    Stmt::While { cond, body, line }
}

pub fn decl(name: &str, ty: Type, line: Line) -> VariableDecl {
    VariableDecl {
        name: name.to_string(),
        ty,
        line,
    }
}

pub fn block(vars: Vec<VariableDecl>, stmts: Vec<Stmt>) -> StmtBlock {
    let line = vars
        .first()
        .map(|v| v.line)
        .or_else(|| stmts.first().map(Stmt::line))
        .unwrap_or(1);
    StmtBlock { vars, stmts, line }
}

pub fn global(name: &str, ty: Type, line: Line) -> Decl {
    Decl::Variable(decl(name, ty, line))
}

pub fn function(
    name: &str,
    return_type: Type,
    params: Vec<VariableDecl>,
    body: StmtBlock,
    line: Line,
) -> Decl {
    Decl::Function(FunctionDecl {
        name: name.to_string(),
        return_type,
        params,
        body,
        line,
    })
}

/// `void main() { <stmts> return; }` declared at line 1
pub fn main_with(vars: Vec<VariableDecl>, mut stmts: Vec<Stmt>) -> Decl {
    let end = stmts.iter().map(Stmt::line).max().unwrap_or(1) + 1;
    stmts.push(ret_void(end));
    function("main", Type::Void, vec![], block(vars, stmts), 1)
}

pub fn empty_main() -> Decl {
    main_with(vec![], vec![])
}

pub fn program(decls: Vec<Decl>) -> Program {
    Program { decls }
}

// ============================================================================
// Checking and assertions
// ============================================================================

pub fn check(program: &Program) -> Vec<Diagnostic> {
    TypeChecker::new().check(program)
}

pub fn assert_no_errors(diagnostics: &[Diagnostic]) {
    let errors: Vec<_> = diagnostics
        .iter()
        .filter(|d| d.level == DiagnosticLevel::Error)
        .collect();
    assert!(
        errors.is_empty(),
        "Expected no errors, got: {:?}",
        errors.iter().map(|d| &d.message).collect::<Vec<_>>()
    );
}

pub fn assert_has_error(diagnostics: &[Diagnostic], kind: ErrorKind) {
    let found = diagnostics.iter().any(|d| d.kind == kind);
    assert!(
        found,
        "Expected diagnostic {:?} ({}), got: {:?}",
        kind,
        kind.code(),
        diagnostics
            .iter()
            .map(|d| format!("{} {}", d.code, d.message))
            .collect::<Vec<_>>()
    );
}

pub fn count_kind(diagnostics: &[Diagnostic], kind: ErrorKind) -> usize {
    diagnostics.iter().filter(|d| d.kind == kind).count()
}

/// Codes of all diagnostics, in report order
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.code.as_str()).collect()
}
