//! # nagare_parser
//!
//! Parser support for the Nagare query language.
//!
//! This crate provides:
//! - A [`Parser`] trait for implementing Nagare front-ends
//! - [`collect_errors`], which harvests the failure nodes a recovering
//!   parser embedded in the tree
//!
//! ## Architecture
//!
//! Parsers convert source text into `nagare_ast` nodes, allocating them in
//! a caller-supplied arena. Syntax errors do not abort a parse: they are
//! represented as failure nodes in the produced tree and gathered back out
//! afterwards.
//!
//! ## Example
//!
//! ```rust,ignore
//! use nagare_ast::AstArena;
//! use nagare_parser::{Parser, collect_errors};
//!
//! let arena = AstArena::new();
//! let program = my_parser.parse(&arena, source)?;
//!
//! for error in collect_errors(program, 0) {
//!     eprintln!("{error}");
//! }
//! ```

mod collect;
mod error;
mod traits;

pub use collect::collect_errors;
pub use error::ParseError;
pub use traits::Parser;
