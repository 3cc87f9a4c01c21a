//! Abstract Syntax Tree (AST) definitions
//!
//! The tree is produced by the front end and handed to the checker fully
//! built. Every node carries the 1-based source line it came from.

use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::path::Path;
use thiserror::Error;

/// AST schema version
///
/// This version number is included in JSON documents to ensure compatibility.
/// Increment when making breaking changes to the AST structure.
pub const AST_VERSION: u32 = 1;

/// Source line number (1-based)
pub type Line = u32;

/// Top-level program: globals and functions in source order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub decls: Vec<Decl>,
}

impl Program {
    /// Function declarations in source order
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> + '_ {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Function(func) => Some(func),
            Decl::Variable(_) => None,
        })
    }

    /// Global variable declarations in source order
    pub fn globals(&self) -> impl Iterator<Item = &VariableDecl> + '_ {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Variable(var) => Some(var),
            Decl::Function(_) => None,
        })
    }
}

/// Versioned AST wrapper for JSON serialization
///
/// This struct wraps a Program with version metadata for stable JSON input
/// and output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedProgram {
    /// AST schema version
    pub ast_version: u32,
    /// The actual program AST
    #[serde(flatten)]
    pub program: Program,
}

/// Errors raised while loading an AST document
#[derive(Error, Debug)]
pub enum AstError {
    #[error("Failed to read AST file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed AST document: {0}")]
    Json(#[from] serde_json::Error),
}

impl VersionedProgram {
    /// Create a new versioned program wrapper
    pub fn new(program: Program) -> Self {
        Self {
            ast_version: AST_VERSION,
            program,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    ///
    /// Expression chains nest deeply, so serde_json's recursion limit is
    /// lifted and the stack is grown on demand instead.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let versioned = Self::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(versioned)
    }

    /// Read and deserialize an AST document from disk
    pub fn from_path(path: &Path) -> Result<Self, AstError> {
        let json = std::fs::read_to_string(path).map_err(|source| AstError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    /// Whether this document was written by a newer AST schema
    pub fn is_newer_than_supported(&self) -> bool {
        self.ast_version > AST_VERSION
    }
}

impl From<Program> for VersionedProgram {
    fn from(program: Program) -> Self {
        Self::new(program)
    }
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Variable(VariableDecl),
    Function(FunctionDecl),
}

impl Decl {
    pub fn is_function(&self) -> bool {
        matches!(self, Decl::Function(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Decl::Variable(var) => &var.name,
            Decl::Function(func) => &func.name,
        }
    }

    pub fn line(&self) -> Line {
        match self {
            Decl::Variable(var) => var.line,
            Decl::Function(func) => func.line,
        }
    }
}

/// Variable declaration: a global, a parameter, or a block local
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub line: Line,
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub return_type: Type,
    #[serde(default)]
    pub params: Vec<VariableDecl>,
    pub body: StmtBlock,
    pub line: Line,
}

/// Statement block: local declarations first, then statements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StmtBlock {
    #[serde(default)]
    pub vars: Vec<VariableDecl>,
    #[serde(default)]
    pub stmts: Vec<Stmt>,
    pub line: Line,
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Expr(Expr),
    If {
        cond: Expr,
        then_block: StmtBlock,
        #[serde(default)]
        else_block: Option<StmtBlock>,
        line: Line,
    },
    While {
        cond: Expr,
        body: StmtBlock,
        line: Line,
    },
    For {
        init: Expr,
        cond: Expr,
        step: Expr,
        body: StmtBlock,
        line: Line,
    },
    Return {
        value: Expr,
        line: Line,
    },
    Break {
        line: Line,
    },
    Continue {
        line: Line,
    },
    Block(StmtBlock),
}

impl Stmt {
    pub fn line(&self) -> Line {
        match self {
            Stmt::Expr(expr) => expr.line,
            Stmt::If { line, .. }
            | Stmt::While { line, .. }
            | Stmt::For { line, .. }
            | Stmt::Return { line, .. }
            | Stmt::Break { line }
            | Stmt::Continue { line } => *line,
            Stmt::Block(block) => block.line,
        }
    }
}

/// Expression node
///
/// `ty` caches the static type computed by the checker. It is an ephemeral
/// annotation: not serialized and excluded from equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: Line,
    #[serde(skip)]
    pub ty: Cell<Option<Type>>,
}

impl Expr {
    pub fn new(kind: ExprKind, line: Line) -> Self {
        Self {
            kind,
            line,
            ty: Cell::new(None),
        }
    }

    /// Empty expression, e.g. the value of a bare `return;`
    pub fn empty(line: Line) -> Self {
        Self::new(ExprKind::NoExpr, line)
    }

    /// Type cached by the checker, if this node has been checked
    pub fn cached_type(&self) -> Option<Type> {
        self.ty.get()
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        // ty is a checker annotation, not part of the tree
        self.kind == other.kind && self.line == other.line
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    /// Variable reference
    Object(String),
    Assign {
        target: String,
        value: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Call {
        callee: String,
        #[serde(default)]
        args: Vec<Expr>,
    },
    NoExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Le,
    Ge,
    Gt,
    Eq,
    Ne,
    And,
    Or,
    Xor,
    BitAnd,
    BitOr,
}

impl BinaryOp {
    /// Source spelling of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Gt => ">",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Xor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}
