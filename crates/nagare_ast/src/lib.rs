//! # nagare_ast
//!
//! AST definitions for the Nagare query language.
//!
//! This crate provides the node types produced by a Nagare front-end and a
//! visitor protocol for traversing them.
//!
//! ## Architecture
//!
//! - Nodes are allocated in a per-file arena (`bumpalo` via [`AstArena`])
//!   and borrow their children from it, so a whole tree shares one lifetime
//! - [`Node`] is a `Copy` sum type over the closed set of node variants;
//!   the walker in [`visitor`] matches it exhaustively, so adding a variant
//!   forces the traversal to handle it
//! - Parse failures are ordinary nodes ([`BadStatement`], [`BadExpression`])
//!   carrying the [`Diagnostic`] capability, not control-flow errors
//!
//! ## Example
//!
//! ```rust
//! use nagare_ast::{AstArena, Expression, IntegerLiteral, Node, Span};
//!
//! let arena = AstArena::new();
//! let literal = arena.alloc(IntegerLiteral {
//!     span: Span::new(0, 2),
//!     value: 42,
//! });
//!
//! let node = Node::from(Expression::Integer(literal));
//! assert_eq!(node.span(), Span::new(0, 2));
//! ```

mod arena;
mod node;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use node::{
    ArrayExpression, ArrowFunctionExpression, BadExpression, BadStatement, BinaryExpression,
    BinaryOperator, BlockStatement, BooleanLiteral, CallExpression, ConditionalExpression,
    DateTimeLiteral, Diagnostic, DurationLiteral, Expression, ExpressionStatement, FloatLiteral,
    FunctionBody, Identifier, IndexExpression, IntegerLiteral, LogicalExpression, LogicalOperator,
    MemberExpression, Node, ObjectExpression, OptionStatement, PipeExpression, PipeLiteral,
    Program, Property, RegexpLiteral, ReturnStatement, Statement, StringLiteral, UnaryExpression,
    UnaryOperator, UnsignedIntegerLiteral, VariableDeclaration, VariableDeclarator,
};
pub use span::{Location, Position, Span};

// Re-export the visitor entry points for convenience
pub use visitor::{Visitor, walk};
