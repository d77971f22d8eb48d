use crate::Span;

/// A complete program
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub content: Span<Block>,
}

/// A block (= set of instructions)
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub instructions: Vec<Span<Instruction>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Variable declaration
    DeclareVar {
        name: Span<String>,
        init_expr: Span<Expr>,
    },

    /// Variable assignment
    AssignVar {
        name: Span<String>,
        expr: Span<Expr>,
    },

    /// Field assignment (creates the field if it doesn't exist yet)
    AssignField {
        target: Span<Expr>,
        field: Span<String>,
        expr: Span<Expr>,
    },

    /// Class declaration
    ClassDecl { name: Span<String> },

    /// Conditional
    ///
    /// Its value is the value of the executed block, if any
    IfCond {
        cond: Span<Expr>,
        body: Span<Block>,
        els: Option<Span<Block>>,
    },

    /// Expression evaluation
    ///
    /// If this is the last instruction of a program, its value is the program's result
    Expr(Span<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),
    Variable(Span<String>),

    /// Read a field from an instance
    FieldAccess {
        target: Box<Span<Expr>>,
        field: Span<String>,
    },

    /// Call a function (or a class)
    FnCall {
        callee: Box<Span<Expr>>,
        args: Span<Vec<Span<Expr>>>,
    },

    /// Logical negation
    Not(Box<Span<Expr>>),

    /// Equality check
    Eq {
        left: Box<Span<Expr>>,
        right: Box<Span<Expr>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}
