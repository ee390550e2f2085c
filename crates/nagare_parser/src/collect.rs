//! Harvesting of parse failures embedded in an AST.
//!
//! A recovering parser does not abort on a syntax error; it embeds a
//! failure node and keeps going. This module walks a finished tree and
//! gathers those failures back out as [`ParseError`]s.

use nagare_ast::Node;
use nagare_ast::visitor::{Visitor, walk};

use crate::ParseError;

/// Collects the parse failures embedded in the tree rooted at `root`.
///
/// Failures are returned in pre-order (document order) of first encounter,
/// without deduplication. A tree with no failures yields an empty vector.
///
/// If `limit` is positive, collection stops once that many failures have
/// been gathered: the traversal short-circuits at every node entered from
/// then on. `0` means unlimited.
///
/// # Example
///
/// ```rust
/// use nagare_ast::{AstArena, BadExpression, Expression, ExpressionStatement, Program, Span, Statement};
/// use nagare_parser::collect_errors;
///
/// let arena = AstArena::new();
/// let bad = arena.alloc(BadExpression {
///     span: Span::new(0, 3),
///     message: "bad token",
/// });
/// let statement = arena.alloc(ExpressionStatement {
///     span: Span::new(0, 3),
///     expression: Expression::Bad(bad),
/// });
/// let body = arena.alloc_slice_copy(&[Statement::Expression(statement)]);
/// let program = arena.alloc(Program {
///     span: Span::new(0, 3),
///     body,
/// });
///
/// let errors = collect_errors(program, 0);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message(), "bad token");
/// ```
pub fn collect_errors<'a>(root: impl Into<Node<'a>>, limit: usize) -> Vec<ParseError> {
    let mut collector = ErrorCollector {
        errors: Vec::new(),
        limit,
    };
    walk(&mut collector, root.into());
    collector.errors
}

/// Visitor that accumulates failure nodes until its limit is reached.
///
/// The limit check runs before anything else, so once the collector is
/// saturated every call — entry or exit — answers `None` and the walk
/// winds down without visiting further subtrees.
struct ErrorCollector {
    errors: Vec<ParseError>,
    limit: usize,
}

impl<'a> Visitor<'a> for ErrorCollector {
    fn visit(&mut self, node: Option<Node<'a>>) -> Option<&mut dyn Visitor<'a>> {
        if self.limit > 0 && self.errors.len() >= self.limit {
            return None;
        }
        let Some(node) = node else {
            return Some(self);
        };

        if let Some(diagnostic) = node.as_diagnostic() {
            self.errors
                .push(ParseError::syntax_at(diagnostic.message(), diagnostic.span()));
        }
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nagare_ast::{
        ArrayExpression, AstArena, BadExpression, BadStatement, BinaryExpression, BinaryOperator,
        Expression, ExpressionStatement, IntegerLiteral, Program, ReturnStatement, Span,
        Statement,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// `Program[ ExpressionStatement(Bad("bad token") + 1),
    ///           ReturnStatement(Bad("unexpected eof")) ]`
    fn example_program<'a>(arena: &'a AstArena) -> &'a Program<'a> {
        let bad_token = arena.alloc(BadExpression {
            span: Span::new(0, 3),
            message: "bad token",
        });
        let one = arena.alloc(IntegerLiteral {
            span: Span::new(6, 7),
            value: 1,
        });
        let sum = arena.alloc(BinaryExpression {
            span: Span::new(0, 7),
            operator: BinaryOperator::Add,
            left: Expression::Bad(bad_token),
            right: Expression::Integer(one),
        });
        let first = arena.alloc(ExpressionStatement {
            span: Span::new(0, 7),
            expression: Expression::Binary(sum),
        });

        let unexpected_eof = arena.alloc(BadExpression {
            span: Span::new(15, 15),
            message: "unexpected eof",
        });
        let second = arena.alloc(ReturnStatement {
            span: Span::new(8, 15),
            argument: Expression::Bad(unexpected_eof),
        });

        let body = arena.alloc_slice_copy(&[
            Statement::Expression(first),
            Statement::Return(second),
        ]);
        arena.alloc(Program {
            span: Span::new(0, 15),
            body,
        })
    }

    #[test]
    fn collects_failures_in_document_order() {
        let arena = AstArena::new();
        let program = example_program(&arena);

        let errors = collect_errors(program, 0);

        assert_eq!(
            errors,
            vec![
                ParseError::syntax_at("bad token", Span::new(0, 3)),
                ParseError::syntax_at("unexpected eof", Span::new(15, 15)),
            ]
        );
    }

    #[rstest]
    #[case::unlimited(0, vec!["bad token", "unexpected eof"])]
    #[case::capped_below(1, vec!["bad token"])]
    #[case::capped_exactly(2, vec!["bad token", "unexpected eof"])]
    #[case::capped_above(3, vec!["bad token", "unexpected eof"])]
    fn limit_caps_the_number_collected(#[case] limit: usize, #[case] expected: Vec<&str>) {
        let arena = AstArena::new();
        let program = example_program(&arena);

        let errors = collect_errors(program, limit);
        let messages: Vec<_> = errors.iter().map(|e| e.message()).collect();

        assert_eq!(messages, expected);
    }

    #[test]
    fn saturation_skips_subtrees_entered_afterwards() {
        let arena = AstArena::new();

        let first = arena.alloc(BadExpression {
            span: Span::new(0, 1),
            message: "first",
        });
        let second = arena.alloc(BadExpression {
            span: Span::new(2, 3),
            message: "second",
        });
        // Two more failures inside a later sibling subtree.
        let third = arena.alloc(BadExpression {
            span: Span::new(5, 6),
            message: "third",
        });
        let fourth = arena.alloc(BadExpression {
            span: Span::new(7, 8),
            message: "fourth",
        });
        let elements =
            arena.alloc_slice_copy(&[Expression::Bad(third), Expression::Bad(fourth)]);
        let array = arena.alloc(ArrayExpression {
            span: Span::new(4, 9),
            elements,
        });

        let statements = [
            Expression::Bad(first),
            Expression::Bad(second),
            Expression::Array(array),
        ]
        .map(|expression| {
            Statement::Expression(arena.alloc(ExpressionStatement {
                span: Node::from(expression).span(),
                expression,
            }))
        });
        let body = arena.alloc_slice_copy(&statements);
        let program = arena.alloc(Program {
            span: Span::new(0, 9),
            body,
        });

        let messages: Vec<_> = collect_errors(program, 2)
            .into_iter()
            .map(|e| e.message().to_owned())
            .collect();

        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn tree_without_failures_yields_empty_vec() {
        let arena = AstArena::new();
        let one = arena.alloc(IntegerLiteral {
            span: Span::new(0, 1),
            value: 1,
        });
        let statement = arena.alloc(ExpressionStatement {
            span: Span::new(0, 1),
            expression: Expression::Integer(one),
        });
        let body = arena.alloc_slice_copy(&[Statement::Expression(statement)]);
        let program = arena.alloc(Program {
            span: Span::new(0, 1),
            body,
        });

        assert!(collect_errors(program, 0).is_empty());
    }

    #[test]
    fn repeated_collection_over_the_same_tree_is_identical() {
        let arena = AstArena::new();
        let program = example_program(&arena);

        let first = collect_errors(program, 2);
        let second = collect_errors(program, 2);

        assert_eq!(first, second);
    }

    #[test]
    fn bare_failure_node_as_root_is_collected() {
        let bad = BadStatement {
            span: Span::new(0, 4),
            message: "unexpected token",
        };

        let errors = collect_errors(Node::BadStatement(&bad), 0);

        assert_eq!(
            errors,
            vec![ParseError::syntax_at("unexpected token", Span::new(0, 4))]
        );
    }
}
