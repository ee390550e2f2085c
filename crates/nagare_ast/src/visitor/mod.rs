//! Visitor protocol for AST traversal.
//!
//! This module provides the [`Visitor`] capability trait and the [`walk`]
//! function that drives a depth-first traversal with it.
//!
//! # Overview
//!
//! [`walk`] enters a node by calling `visitor.visit(Some(node))`. The
//! visitor answers with `None` to skip the subtree, or with the visitor to
//! use for the node's children — itself, or a different one to give the
//! subtree its own context. Once the children are done, the active visitor
//! receives a single `visit(None)` exit sentinel.
//!
//! # Example
//!
//! ```rust
//! use nagare_ast::{AstArena, Identifier, Node, Span};
//! use nagare_ast::visitor::{Visitor, walk};
//!
//! struct NameCollector<'a> {
//!     names: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for NameCollector<'a> {
//!     fn visit(&mut self, node: Option<Node<'a>>) -> Option<&mut dyn Visitor<'a>> {
//!         if let Some(Node::Identifier(id)) = node {
//!             self.names.push(id.name);
//!         }
//!         Some(self)
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let id = arena.alloc(Identifier {
//!     span: Span::new(0, 4),
//!     name: arena.alloc_str("rate"),
//! });
//!
//! let mut collector = NameCollector { names: Vec::new() };
//! walk(&mut collector, Node::Identifier(id));
//! assert_eq!(collector.names, vec!["rate"]);
//! ```

mod visit;
mod walk;

pub use visit::Visitor;
pub use walk::walk;
