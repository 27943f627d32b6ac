//! Utility macros and functions for the field crate.
//!
//! This module provides helper macros that are used internally
//! by the field parser implementation.

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
/// The field automaton uses it for its guard checks, where a violated condition
/// means the line is malformed at a known offset.
///
/// # Arguments
///
/// * `$predicate` - A boolean expression that should evaluate to true
/// * `$error` - The error value to return if the predicate is false
///
/// # Example
///
/// ```ignore
/// ensure!(!line.is_empty(), MalformedField::at(0));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
