//! Static checking module.
//!
//! This module validates a parsed program before it is run. In a single pass
//! it:
//!
//! - Declares every parameter and data item, rejecting duplicates
//! - Resolves identifier references, rejecting undeclared ones
//! - Requires `WRITE` and `CONCATENATE` arguments to be strings
//! - Rejects literal assignments that can never coerce to the target type
//!
//! Every problem is collected; the caller runs the program only if none
//! were found.

pub mod checker;
pub mod symbol_table;

#[cfg(test)]
mod tests;
