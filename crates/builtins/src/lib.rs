//!
//! Quill's native library
//!
//! This crate contains utilities to generate the native library's content,
//! which is then provided to the runtime's context.
//!

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

mod builder;
mod functions;

pub mod helpers;

pub use builder::build_native_lib_content;
