//!
//! This module contains all native functions
//!
//! Each function has its own dedicated module.
//!

use crate::functions_set;

functions_set! {
    // List all native functions
    fn native_functions => {
        mod clock;
        mod has_field;
    }
}
