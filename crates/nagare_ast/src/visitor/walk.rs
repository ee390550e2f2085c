//! Depth-first walk over the AST.

use crate::node::Node;

use super::visit::Visitor;

/// Walks the tree rooted at `node` in depth-first order, driven by `visitor`.
///
/// The walk enters `node` with `visitor.visit(Some(node))`. If that call
/// returns `None`, the node's entire subtree is skipped and no exit sentinel
/// is sent for it. Otherwise every child is walked in declared field order
/// with the returned visitor (each child independently — one child
/// short-circuiting does not affect its siblings), and the returned visitor
/// finally receives a single `visit(None)` exit sentinel, leaf nodes
/// included.
///
/// The walker holds no state of its own: it never mutates the tree,
/// allocates nothing per node, and may run concurrently from independent
/// call sites on disjoint trees. It assumes the tree is acyclic; a cyclic
/// input does not terminate.
pub fn walk<'a>(visitor: &mut dyn Visitor<'a>, node: Node<'a>) {
    let Some(w) = visitor.visit(Some(node)) else {
        return;
    };

    match node {
        Node::Program(n) => {
            for statement in n.body {
                walk(w, Node::from(*statement));
            }
        }
        Node::ExpressionStatement(n) => {
            walk(w, n.expression.into());
        }
        Node::ReturnStatement(n) => {
            walk(w, n.argument.into());
        }
        Node::OptionStatement(n) => {
            walk(w, n.declaration.into());
        }
        Node::BlockStatement(n) => {
            for statement in n.body {
                walk(w, Node::from(*statement));
            }
        }
        Node::VariableDeclaration(n) => {
            for declarator in n.declarations {
                walk(w, declarator.into());
            }
        }
        Node::VariableDeclarator(n) => {
            walk(w, n.id.into());
            walk(w, n.init.into());
        }
        Node::ArrayExpression(n) => {
            for element in n.elements {
                walk(w, Node::from(*element));
            }
        }
        Node::ArrowFunctionExpression(n) => {
            for param in n.params {
                walk(w, param.into());
            }
            walk(w, n.body.into());
        }
        Node::BinaryExpression(n) => {
            walk(w, n.left.into());
            walk(w, n.right.into());
        }
        Node::CallExpression(n) => {
            walk(w, n.callee.into());
            for argument in n.arguments {
                walk(w, Node::from(*argument));
            }
        }
        Node::ConditionalExpression(n) => {
            walk(w, n.test.into());
            walk(w, n.consequent.into());
            walk(w, n.alternate.into());
        }
        Node::IndexExpression(n) => {
            walk(w, n.array.into());
            walk(w, n.index.into());
        }
        Node::LogicalExpression(n) => {
            walk(w, n.left.into());
            walk(w, n.right.into());
        }
        Node::MemberExpression(n) => {
            walk(w, n.object.into());
            walk(w, n.property.into());
        }
        Node::ObjectExpression(n) => {
            for property in n.properties {
                walk(w, property.into());
            }
        }
        Node::PipeExpression(n) => {
            walk(w, n.argument.into());
            walk(w, n.call.into());
        }
        Node::UnaryExpression(n) => {
            walk(w, n.argument.into());
        }
        Node::Property(n) => {
            walk(w, n.key.into());
            if let Some(value) = n.value {
                walk(w, value.into());
            }
        }

        // Names, literals and embedded failures carry no children.
        Node::Identifier(_)
        | Node::BadStatement(_)
        | Node::BadExpression(_)
        | Node::BooleanLiteral(_)
        | Node::DateTimeLiteral(_)
        | Node::DurationLiteral(_)
        | Node::FloatLiteral(_)
        | Node::IntegerLiteral(_)
        | Node::PipeLiteral(_)
        | Node::RegexpLiteral(_)
        | Node::StringLiteral(_)
        | Node::UnsignedIntegerLiteral(_) => {}
    }

    w.visit(None);
}
