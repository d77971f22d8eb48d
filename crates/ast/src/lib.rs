//!
//! Quill's abstract syntax tree
//!
//! Programs are produced by a front-end (not part of this workspace) and handed
//! to the runtime in this form. The [`builder`] module allows constructing them
//! directly from Rust code.
//!

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![forbid(unused_crate_dependencies)]

pub mod ast;
pub mod builder;
mod location;

pub use location::{CodeRange, RuntimeCodeRange, Span};
