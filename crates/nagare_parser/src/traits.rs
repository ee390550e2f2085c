//! Parser trait definition.

use nagare_ast::{AstArena, Program};

use crate::ParseError;

/// Trait for producing a Nagare AST from source text.
///
/// Implementations must produce a finite, acyclic tree whose children are
/// enumerable in declared order; the traversal in `nagare_ast::visitor`
/// relies on this and performs no cycle detection.
///
/// A recovering parser represents syntax errors as `BadStatement` /
/// `BadExpression` nodes inside the tree rather than failing — collect them
/// afterwards with [`collect_errors`](crate::collect_errors). `Err` is
/// reserved for failures that prevent producing a tree at all.
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Parses `source` into a program rooted in `arena`.
    fn parse<'a>(
        &self,
        arena: &'a AstArena,
        source: &str,
    ) -> Result<&'a Program<'a>, ParseError>;
}
