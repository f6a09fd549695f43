//! Error types and error handling.
//!
//! Every stage reports problems through the same [`errors::Error`] type: a
//! position plus an [`errors::ErrorImpl`] describing what went wrong.
//!
//! - Syntax errors stop the pipeline before checking
//! - Diagnostics are collected by the checker and reported together
//! - Runtime errors abort a running program at the first failure
//!
//! All of them render as `<source>:<line> <message>.`

pub mod errors;
