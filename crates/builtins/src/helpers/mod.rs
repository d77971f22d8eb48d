//! This module contains helpers that enable creating parts of the native library

pub mod fns;
pub mod types;
