//!
//! Runtime of the Quill language.
//!
//! Executes already-parsed programs in a reusable [`context::Context`].
//! Native functions are provided by a separate crate and injected when creating the context.
//!

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

pub mod conf;
pub mod context;
pub mod display;
pub mod errors;
pub mod exec;
pub mod expr;
pub mod functions;
pub mod gc;
pub mod props;
pub mod values;
