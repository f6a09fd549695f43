//! Evaluation module.
//!
//! A checked program is lowered to a list of steps and then run by a single
//! driver loop:
//!
//! - `compiler` lowers the syntax tree to [`step::Step`]s
//! - `runtime` executes steps, reading input and writing output
//! - `store` holds the runtime variables
//! - `input` abstracts where parameter values come from
//!
//! Any runtime error is fatal: execution stops at the failing step.

pub mod compiler;
pub mod input;
pub mod runtime;
pub mod step;
pub mod store;
