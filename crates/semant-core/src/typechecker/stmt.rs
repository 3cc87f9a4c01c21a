//! Statement checking

use super::TypeChecker;
use crate::ast::{Line, Stmt, StmtBlock};
use crate::diagnostic::ErrorKind;

impl TypeChecker {
    /// Check a block in the current frame
    ///
    /// Callers decide whether the block gets a frame of its own.
    pub(super) fn check_block(&mut self, block: &StmtBlock) {
        for var in &block.vars {
            self.declare_local(var);
        }
        for stmt in &block.stmts {
            self.check_stmt(stmt);
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) => {
                self.check_expr(expr);
            }

            Stmt::If {
                cond,
                then_block,
                else_block,
                ..
            } => {
                self.check_expr(cond);
                self.flow.enter_conditional();
                self.in_scope(|checker| checker.check_block(then_block));
                if let Some(else_block) = else_block {
                    self.in_scope(|checker| checker.check_block(else_block));
                }
                self.flow.exit_conditional();
            }

            Stmt::While { cond, body, .. } => {
                self.check_expr(cond);
                self.check_loop_body(body);
            }

            Stmt::For {
                init,
                cond,
                step,
                body,
                ..
            } => {
                self.check_expr(init);
                self.check_expr(cond);
                self.check_expr(step);
                self.check_loop_body(body);
            }

            Stmt::Return { value, line } => {
                let found = self.check_expr(value);
                if found != self.return_type {
                    let msg = format!(
                        "Return type mismatch: expected {}, found {}",
                        self.return_type, found
                    );
                    self.error(*line, ErrorKind::ReturnTypeMismatch, msg);
                }
                // Only a return outside every if and loop counts
                self.flow.record_return();
            }

            Stmt::Break { line } => self.check_loop_control("break", *line),
            Stmt::Continue { line } => self.check_loop_control("continue", *line),

            Stmt::Block(block) => {
                self.in_scope(|checker| checker.check_block(block));
            }
        }
    }

    fn check_loop_body(&mut self, body: &StmtBlock) {
        self.flow.enter_loop();
        self.in_scope(|checker| checker.check_block(body));
        self.flow.exit_loop();
    }

    fn check_loop_control(&mut self, keyword: &str, line: Line) {
        if !self.flow.in_loop() {
            let msg = format!("'{}' used outside of a loop", keyword);
            self.error(line, ErrorKind::MisplacedLoopControl, msg);
        }
    }
}
