//! Type checker benchmarks
//!
//! Measures whole-program analysis on generated programs:
//! - Many small functions calling each other
//! - Deeply nested blocks (scope stack depth)
//! - Long expression chains

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use semant_core::ast::{
    BinaryOp, Decl, Expr, ExprKind, FunctionDecl, Program, Stmt, StmtBlock, VariableDecl,
};
use semant_core::{Type, TypeChecker};

fn expr(kind: ExprKind) -> Expr {
    Expr::new(kind, 1)
}

fn var(name: &str) -> Expr {
    expr(ExprKind::Object(name.to_string()))
}

fn add(lhs: Expr, rhs: Expr) -> Expr {
    expr(ExprKind::Binary {
        op: BinaryOp::Add,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

fn function(name: &str, return_type: Type, params: Vec<VariableDecl>, stmts: Vec<Stmt>) -> Decl {
    Decl::Function(FunctionDecl {
        name: name.to_string(),
        return_type,
        params,
        body: StmtBlock {
            vars: vec![],
            stmts,
            line: 1,
        },
        line: 1,
    })
}

fn void_main() -> Decl {
    function(
        "main",
        Type::Void,
        vec![],
        vec![Stmt::Return {
            value: Expr::empty(1),
            line: 1,
        }],
    )
}

/// `n` functions, each adding its parameter to the result of the previous one
fn call_chain(n: usize) -> Program {
    let mut decls = vec![void_main()];
    for i in 0..n {
        let value = if i == 0 {
            var("x")
        } else {
            add(
                var("x"),
                expr(ExprKind::Call {
                    callee: format!("f{}", i - 1),
                    args: vec![var("x")],
                }),
            )
        };
        decls.push(function(
            &format!("f{}", i),
            Type::Int,
            vec![VariableDecl {
                name: "x".to_string(),
                ty: Type::Int,
                line: 1,
            }],
            vec![Stmt::Return { value, line: 1 }],
        ));
    }
    Program { decls }
}

/// `depth` nested blocks, each declaring a local that shadows the outer one
fn nested_blocks(depth: usize) -> Program {
    let mut inner = StmtBlock {
        vars: vec![],
        stmts: vec![Stmt::Expr(add(var("v"), var("v")))],
        line: 1,
    };
    for _ in 0..depth {
        inner = StmtBlock {
            vars: vec![VariableDecl {
                name: "v".to_string(),
                ty: Type::Float,
                line: 1,
            }],
            stmts: vec![Stmt::Block(inner)],
            line: 1,
        };
    }
    let mut main = void_main();
    if let Decl::Function(func) = &mut main {
        func.body.stmts.insert(0, Stmt::Block(inner));
    }
    Program { decls: vec![main] }
}

/// `len` additions of Int and Float literals in one expression
fn long_expression(len: usize) -> Program {
    let mut value = expr(ExprKind::Int(0));
    for i in 0..len {
        let literal = if i % 2 == 0 {
            expr(ExprKind::Float(1.0))
        } else {
            expr(ExprKind::Int(1))
        };
        value = add(value, literal);
    }
    let mut main = void_main();
    if let Decl::Function(func) = &mut main {
        func.body.stmts.insert(0, Stmt::Expr(value));
    }
    Program { decls: vec![main] }
}

fn bench_call_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("typecheck_call_chain");
    for n in [10, 100, 1000] {
        let program = call_chain(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &program, |b, program| {
            b.iter(|| TypeChecker::new().check(black_box(program)));
        });
    }
    group.finish();
}

fn bench_nested_blocks(c: &mut Criterion) {
    let program = nested_blocks(200);
    c.bench_function("typecheck_nested_blocks_200", |b| {
        b.iter(|| TypeChecker::new().check(black_box(&program)));
    });
}

fn bench_long_expression(c: &mut Criterion) {
    let program = long_expression(2000);
    c.bench_function("typecheck_long_expression_2k", |b| {
        b.iter(|| TypeChecker::new().check(black_box(&program)));
    });
}

criterion_group!(
    benches,
    bench_call_chain,
    bench_nested_blocks,
    bench_long_expression
);
criterion_main!(benches);
