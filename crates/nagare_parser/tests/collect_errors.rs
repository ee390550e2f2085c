//! End-to-end test: a recovering fixture parser feeding error collection.

use nagare_ast::{
    AstArena, BadStatement, Expression, ExpressionStatement, IntegerLiteral, Program, Span,
    Statement,
};
use nagare_parser::{ParseError, Parser, collect_errors};
use pretty_assertions::assert_eq;

/// Parses newline-separated integer statements. Any line that is not an
/// integer becomes a `BadStatement` covering the line.
struct IntegerLineParser;

impl Parser for IntegerLineParser {
    fn name(&self) -> &str {
        "integer-lines"
    }

    fn parse<'a>(
        &self,
        arena: &'a AstArena,
        source: &str,
    ) -> Result<&'a Program<'a>, ParseError> {
        let mut body = Vec::new();
        let mut offset = 0u32;

        for line in source.lines() {
            let span = Span::new(offset, offset + line.len() as u32);
            if !line.is_empty() {
                match line.parse::<i64>() {
                    Ok(value) => {
                        let literal = arena.alloc(IntegerLiteral { span, value });
                        let statement = arena.alloc(ExpressionStatement {
                            span,
                            expression: Expression::Integer(literal),
                        });
                        body.push(Statement::Expression(statement));
                    }
                    Err(_) => {
                        let message =
                            arena.alloc_str(&format!("expected integer, found {line:?}"));
                        let statement = arena.alloc(BadStatement { span, message });
                        body.push(Statement::Bad(statement));
                    }
                }
            }
            offset = span.end + 1;
        }

        let body = arena.alloc_slice_copy(&body);
        Ok(arena.alloc(Program {
            span: Span::new(0, source.len() as u32),
            body,
        }))
    }
}

#[test]
fn collects_every_failure_a_recovering_parse_left_behind() {
    let arena = AstArena::new();
    let parser = IntegerLineParser;
    assert_eq!(parser.name(), "integer-lines");

    let program = parser.parse(&arena, "1\nfoo\n2\nbar\n").unwrap();
    let errors = collect_errors(program, 0);

    assert_eq!(
        errors,
        vec![
            ParseError::syntax_at("expected integer, found \"foo\"", Span::new(2, 5)),
            ParseError::syntax_at("expected integer, found \"bar\"", Span::new(8, 11)),
        ]
    );
}

#[test]
fn limit_applies_across_a_parsed_tree() {
    let arena = AstArena::new();
    let program = IntegerLineParser.parse(&arena, "x\ny\nz\n").unwrap();

    let errors = collect_errors(program, 1);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "expected integer, found \"x\"");
}

#[test]
fn clean_parse_collects_nothing() {
    let arena = AstArena::new();
    let program = IntegerLineParser.parse(&arena, "1\n2\n3\n").unwrap();

    assert!(collect_errors(program, 0).is_empty());
}
