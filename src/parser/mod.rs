//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens into a
//! [`Program`](crate::ast::ast::Program). It handles:
//!
//! - The `REPORT` header
//! - `PARAMETER` and `DATA` declarations, in that order
//! - Assignment, `WRITE` and `CONCATENATE` statements
//! - Identifier and literal expressions
//!
//! Statements and expressions are dispatched through lookup tables keyed by
//! the current token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
