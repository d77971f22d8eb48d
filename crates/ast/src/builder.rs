//!
//! Programmatic construction of programs
//!
//! Every element built here gets a synthetic location.
//!
//! ```
//! use quill_ast::builder::*;
//!
//! let program = program([
//!     class("Person"),
//!     declare("p", call(var("Person"), [])),
//!     assign_field(var("p"), "name", string("Bob")),
//!     expr(call(var("hasField"), [var("p"), string("name")])),
//! ]);
//!
//! assert_eq!(program.content.data.instructions.len(), 4);
//! ```
//!

use crate::{
    Span,
    ast::{Block, Expr, Instruction, LiteralValue, Program},
};

pub fn program(instructions: impl IntoIterator<Item = Instruction>) -> Program {
    Program {
        content: block(instructions),
    }
}

pub fn block(instructions: impl IntoIterator<Item = Instruction>) -> Span<Block> {
    Span::synthetic(Block {
        instructions: instructions.into_iter().map(Span::synthetic).collect(),
    })
}

pub fn declare(name: &str, init_expr: Expr) -> Instruction {
    Instruction::DeclareVar {
        name: Span::synthetic(name.to_owned()),
        init_expr: Span::synthetic(init_expr),
    }
}

pub fn assign(name: &str, expr: Expr) -> Instruction {
    Instruction::AssignVar {
        name: Span::synthetic(name.to_owned()),
        expr: Span::synthetic(expr),
    }
}

pub fn assign_field(target: Expr, field: &str, expr: Expr) -> Instruction {
    Instruction::AssignField {
        target: Span::synthetic(target),
        field: Span::synthetic(field.to_owned()),
        expr: Span::synthetic(expr),
    }
}

pub fn class(name: &str) -> Instruction {
    Instruction::ClassDecl {
        name: Span::synthetic(name.to_owned()),
    }
}

pub fn if_cond(
    cond: Expr,
    body: impl IntoIterator<Item = Instruction>,
    els: Option<Vec<Instruction>>,
) -> Instruction {
    Instruction::IfCond {
        cond: Span::synthetic(cond),
        body: block(body),
        els: els.map(block),
    }
}

pub fn expr(expr: Expr) -> Instruction {
    Instruction::Expr(Span::synthetic(expr))
}

pub fn var(name: &str) -> Expr {
    Expr::Variable(Span::synthetic(name.to_owned()))
}

pub fn field(target: Expr, field: &str) -> Expr {
    Expr::FieldAccess {
        target: Box::new(Span::synthetic(target)),
        field: Span::synthetic(field.to_owned()),
    }
}

pub fn call(callee: Expr, args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::FnCall {
        callee: Box::new(Span::synthetic(callee)),
        args: Span::synthetic(args.into_iter().map(Span::synthetic).collect()),
    }
}

pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(Span::synthetic(expr)))
}

pub fn eq(left: Expr, right: Expr) -> Expr {
    Expr::Eq {
        left: Box::new(Span::synthetic(left)),
        right: Box::new(Span::synthetic(right)),
    }
}

pub fn null() -> Expr {
    Expr::Literal(LiteralValue::Null)
}

pub fn bool(value: bool) -> Expr {
    Expr::Literal(LiteralValue::Boolean(value))
}

pub fn int(value: i64) -> Expr {
    Expr::Literal(LiteralValue::Integer(value))
}

pub fn float(value: f64) -> Expr {
    Expr::Literal(LiteralValue::Float(value))
}

pub fn string(value: &str) -> Expr {
    Expr::Literal(LiteralValue::String(value.to_owned()))
}
