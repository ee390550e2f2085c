//! Node definitions for the Nagare AST.
//!
//! The tree is immutable once built: node structs are `Copy`, borrow their
//! children and string data from an [`AstArena`](crate::AstArena), and are
//! grouped into the [`Statement`], [`Expression`] and [`Node`] sum types.
//! [`Node`] is the closed set the walker dispatches over — adding a variant
//! here forces the traversal in `visitor::walk` to handle it.

use serde::Serialize;

use crate::Span;

/// Binary operators, in source form via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    RegexMatch,
    NotRegexMatch,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Eq => "==",
            BinaryOperator::Neq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Lte => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Gte => ">=",
            BinaryOperator::RegexMatch => "=~",
            BinaryOperator::NotRegexMatch => "!~",
        };
        write!(f, "{}", token)
    }
}

/// Logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalOperator {
    And,
    Or,
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "and"),
            LogicalOperator::Or => write!(f, "or"),
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    Neg,
    Not,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Neg => write!(f, "-"),
            UnaryOperator::Not => write!(f, "not"),
        }
    }
}

// === Root ===

/// Root node of a parsed source file.
///
/// Statements appear in `body` in source order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Program<'a> {
    pub span: Span,
    pub body: &'a [Statement<'a>],
}

// === Statements ===

/// A statement consisting of a single expression.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExpressionStatement<'a> {
    pub span: Span,
    pub expression: Expression<'a>,
}

/// `return <argument>`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReturnStatement<'a> {
    pub span: Span,
    pub argument: Expression<'a>,
}

/// `option <declaration>` — a variable declaration scoped as an option.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionStatement<'a> {
    pub span: Span,
    pub declaration: &'a VariableDeclaration<'a>,
}

/// A braced sequence of statements, used as an arrow-function body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlockStatement<'a> {
    pub span: Span,
    pub body: &'a [Statement<'a>],
}

/// One or more variable declarators sharing a keyword.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VariableDeclaration<'a> {
    pub span: Span,
    pub declarations: &'a [VariableDeclarator<'a>],
}

/// A single `<id> = <init>` binding inside a declaration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VariableDeclarator<'a> {
    pub span: Span,
    pub id: &'a Identifier<'a>,
    pub init: Expression<'a>,
}

/// A statement the parser could not make sense of.
///
/// Recovering parsers embed these instead of aborting; see [`Diagnostic`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BadStatement<'a> {
    pub span: Span,
    pub message: &'a str,
}

// === Expressions ===

/// `[e1, e2, ...]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArrayExpression<'a> {
    pub span: Span,
    pub elements: &'a [Expression<'a>],
}

/// `(params) => body`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArrowFunctionExpression<'a> {
    pub span: Span,
    /// Parameters are properties: the key is the parameter name, the value
    /// its default, if any.
    pub params: &'a [Property<'a>],
    pub body: FunctionBody<'a>,
}

/// `left <op> right` for arithmetic and comparison operators.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BinaryExpression<'a> {
    pub span: Span,
    pub operator: BinaryOperator,
    pub left: Expression<'a>,
    pub right: Expression<'a>,
}

/// `callee(arg1, arg2, ...)`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CallExpression<'a> {
    pub span: Span,
    pub callee: Expression<'a>,
    pub arguments: &'a [Expression<'a>],
}

/// `if test then consequent else alternate`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConditionalExpression<'a> {
    pub span: Span,
    pub test: Expression<'a>,
    pub consequent: Expression<'a>,
    pub alternate: Expression<'a>,
}

/// `array[index]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndexExpression<'a> {
    pub span: Span,
    pub array: Expression<'a>,
    pub index: Expression<'a>,
}

/// `left and right` / `left or right`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LogicalExpression<'a> {
    pub span: Span,
    pub operator: LogicalOperator,
    pub left: Expression<'a>,
    pub right: Expression<'a>,
}

/// `object.property` or `object["property"]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MemberExpression<'a> {
    pub span: Span,
    pub object: Expression<'a>,
    /// An [`Identifier`] for dot access, a [`StringLiteral`] for bracket
    /// access.
    pub property: Expression<'a>,
}

/// `{key1: value1, key2: value2}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObjectExpression<'a> {
    pub span: Span,
    pub properties: &'a [Property<'a>],
}

/// `argument |> call` — feeds the argument into the call's pipe parameter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PipeExpression<'a> {
    pub span: Span,
    pub argument: Expression<'a>,
    pub call: &'a CallExpression<'a>,
}

/// `<op> argument`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnaryExpression<'a> {
    pub span: Span,
    pub operator: UnaryOperator,
    pub argument: Expression<'a>,
}

/// An expression the parser could not make sense of.
///
/// Recovering parsers embed these instead of aborting; see [`Diagnostic`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BadExpression<'a> {
    pub span: Span,
    pub message: &'a str,
}

// === Members and names ===

/// A key/value pair in an object literal or a parameter list.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Property<'a> {
    pub span: Span,
    pub key: &'a Identifier<'a>,
    /// Absent for a parameter without a default value.
    pub value: Option<Expression<'a>>,
}

/// A name referring to a binding.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Identifier<'a> {
    pub span: Span,
    pub name: &'a str,
}

// === Literals ===

/// `true` / `false`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BooleanLiteral {
    pub span: Span,
    pub value: bool,
}

/// An RFC 3339 date-time, kept as written in the source.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DateTimeLiteral<'a> {
    pub span: Span,
    pub value: &'a str,
}

/// A duration, normalized to nanoseconds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DurationLiteral {
    pub span: Span,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FloatLiteral {
    pub span: Span,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IntegerLiteral {
    pub span: Span,
    pub value: i64,
}

/// The pipe-parameter marker `<-` in a function's parameter defaults.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PipeLiteral {
    pub span: Span,
}

/// A regular expression literal, kept as written between the delimiters.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegexpLiteral<'a> {
    pub span: Span,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StringLiteral<'a> {
    pub span: Span,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnsignedIntegerLiteral {
    pub span: Span,
    pub value: u64,
}

// === Failure capability ===

/// Capability implemented by node variants that embed a recoverable parse
/// failure in the tree.
///
/// Error collection treats any node satisfying this trait as an error,
/// regardless of its structural kind. Classification of the failure is the
/// implementer's concern; this trait only describes it.
pub trait Diagnostic {
    /// Human-readable description of the failure.
    fn message(&self) -> &str;

    /// Source range the failure covers.
    fn span(&self) -> Span;
}

impl Diagnostic for BadStatement<'_> {
    fn message(&self) -> &str {
        self.message
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl Diagnostic for BadExpression<'_> {
    fn message(&self) -> &str {
        self.message
    }

    fn span(&self) -> Span {
        self.span
    }
}

// === Sum types ===

/// Any statement.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Statement<'a> {
    Expression(&'a ExpressionStatement<'a>),
    Return(&'a ReturnStatement<'a>),
    Option(&'a OptionStatement<'a>),
    Variable(&'a VariableDeclaration<'a>),
    Block(&'a BlockStatement<'a>),
    Bad(&'a BadStatement<'a>),
}

/// Any expression.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Expression<'a> {
    Array(&'a ArrayExpression<'a>),
    ArrowFunction(&'a ArrowFunctionExpression<'a>),
    Binary(&'a BinaryExpression<'a>),
    Call(&'a CallExpression<'a>),
    Conditional(&'a ConditionalExpression<'a>),
    Index(&'a IndexExpression<'a>),
    Logical(&'a LogicalExpression<'a>),
    Member(&'a MemberExpression<'a>),
    Object(&'a ObjectExpression<'a>),
    Pipe(&'a PipeExpression<'a>),
    Unary(&'a UnaryExpression<'a>),
    Identifier(&'a Identifier<'a>),
    Boolean(&'a BooleanLiteral),
    DateTime(&'a DateTimeLiteral<'a>),
    Duration(&'a DurationLiteral),
    Float(&'a FloatLiteral),
    Integer(&'a IntegerLiteral),
    PipeLit(&'a PipeLiteral),
    Regexp(&'a RegexpLiteral<'a>),
    String(&'a StringLiteral<'a>),
    UnsignedInteger(&'a UnsignedIntegerLiteral),
    Bad(&'a BadExpression<'a>),
}

/// The body of an arrow function: either a block or a bare expression.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum FunctionBody<'a> {
    Block(&'a BlockStatement<'a>),
    Expression(Expression<'a>),
}

/// Any node in the tree.
///
/// This is the closed set the walker dispatches over. `Node` is a `Copy`
/// wrapper of arena references, so it is passed by value everywhere.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Node<'a> {
    Program(&'a Program<'a>),

    // Statements
    ExpressionStatement(&'a ExpressionStatement<'a>),
    ReturnStatement(&'a ReturnStatement<'a>),
    OptionStatement(&'a OptionStatement<'a>),
    BlockStatement(&'a BlockStatement<'a>),
    VariableDeclaration(&'a VariableDeclaration<'a>),
    VariableDeclarator(&'a VariableDeclarator<'a>),
    BadStatement(&'a BadStatement<'a>),

    // Expressions
    ArrayExpression(&'a ArrayExpression<'a>),
    ArrowFunctionExpression(&'a ArrowFunctionExpression<'a>),
    BinaryExpression(&'a BinaryExpression<'a>),
    CallExpression(&'a CallExpression<'a>),
    ConditionalExpression(&'a ConditionalExpression<'a>),
    IndexExpression(&'a IndexExpression<'a>),
    LogicalExpression(&'a LogicalExpression<'a>),
    MemberExpression(&'a MemberExpression<'a>),
    ObjectExpression(&'a ObjectExpression<'a>),
    PipeExpression(&'a PipeExpression<'a>),
    UnaryExpression(&'a UnaryExpression<'a>),
    BadExpression(&'a BadExpression<'a>),

    // Members and names
    Property(&'a Property<'a>),
    Identifier(&'a Identifier<'a>),

    // Literals
    BooleanLiteral(&'a BooleanLiteral),
    DateTimeLiteral(&'a DateTimeLiteral<'a>),
    DurationLiteral(&'a DurationLiteral),
    FloatLiteral(&'a FloatLiteral),
    IntegerLiteral(&'a IntegerLiteral),
    PipeLiteral(&'a PipeLiteral),
    RegexpLiteral(&'a RegexpLiteral<'a>),
    StringLiteral(&'a StringLiteral<'a>),
    UnsignedIntegerLiteral(&'a UnsignedIntegerLiteral),
}

impl<'a> Node<'a> {
    /// Returns the source span of the wrapped node.
    pub fn span(&self) -> Span {
        match *self {
            Node::Program(n) => n.span,
            Node::ExpressionStatement(n) => n.span,
            Node::ReturnStatement(n) => n.span,
            Node::OptionStatement(n) => n.span,
            Node::BlockStatement(n) => n.span,
            Node::VariableDeclaration(n) => n.span,
            Node::VariableDeclarator(n) => n.span,
            Node::BadStatement(n) => n.span,
            Node::ArrayExpression(n) => n.span,
            Node::ArrowFunctionExpression(n) => n.span,
            Node::BinaryExpression(n) => n.span,
            Node::CallExpression(n) => n.span,
            Node::ConditionalExpression(n) => n.span,
            Node::IndexExpression(n) => n.span,
            Node::LogicalExpression(n) => n.span,
            Node::MemberExpression(n) => n.span,
            Node::ObjectExpression(n) => n.span,
            Node::PipeExpression(n) => n.span,
            Node::UnaryExpression(n) => n.span,
            Node::BadExpression(n) => n.span,
            Node::Property(n) => n.span,
            Node::Identifier(n) => n.span,
            Node::BooleanLiteral(n) => n.span,
            Node::DateTimeLiteral(n) => n.span,
            Node::DurationLiteral(n) => n.span,
            Node::FloatLiteral(n) => n.span,
            Node::IntegerLiteral(n) => n.span,
            Node::PipeLiteral(n) => n.span,
            Node::RegexpLiteral(n) => n.span,
            Node::StringLiteral(n) => n.span,
            Node::UnsignedIntegerLiteral(n) => n.span,
        }
    }

    /// Checks the failure capability: returns the node as a [`Diagnostic`]
    /// if this variant represents an embedded parse failure.
    pub fn as_diagnostic(&self) -> Option<&'a (dyn Diagnostic + 'a)> {
        match *self {
            Node::BadStatement(n) => Some(n),
            Node::BadExpression(n) => Some(n),
            _ => None,
        }
    }
}

impl<'a> From<Statement<'a>> for Node<'a> {
    fn from(statement: Statement<'a>) -> Self {
        match statement {
            Statement::Expression(n) => Node::ExpressionStatement(n),
            Statement::Return(n) => Node::ReturnStatement(n),
            Statement::Option(n) => Node::OptionStatement(n),
            Statement::Variable(n) => Node::VariableDeclaration(n),
            Statement::Block(n) => Node::BlockStatement(n),
            Statement::Bad(n) => Node::BadStatement(n),
        }
    }
}

impl<'a> From<Expression<'a>> for Node<'a> {
    fn from(expression: Expression<'a>) -> Self {
        match expression {
            Expression::Array(n) => Node::ArrayExpression(n),
            Expression::ArrowFunction(n) => Node::ArrowFunctionExpression(n),
            Expression::Binary(n) => Node::BinaryExpression(n),
            Expression::Call(n) => Node::CallExpression(n),
            Expression::Conditional(n) => Node::ConditionalExpression(n),
            Expression::Index(n) => Node::IndexExpression(n),
            Expression::Logical(n) => Node::LogicalExpression(n),
            Expression::Member(n) => Node::MemberExpression(n),
            Expression::Object(n) => Node::ObjectExpression(n),
            Expression::Pipe(n) => Node::PipeExpression(n),
            Expression::Unary(n) => Node::UnaryExpression(n),
            Expression::Identifier(n) => Node::Identifier(n),
            Expression::Boolean(n) => Node::BooleanLiteral(n),
            Expression::DateTime(n) => Node::DateTimeLiteral(n),
            Expression::Duration(n) => Node::DurationLiteral(n),
            Expression::Float(n) => Node::FloatLiteral(n),
            Expression::Integer(n) => Node::IntegerLiteral(n),
            Expression::PipeLit(n) => Node::PipeLiteral(n),
            Expression::Regexp(n) => Node::RegexpLiteral(n),
            Expression::String(n) => Node::StringLiteral(n),
            Expression::UnsignedInteger(n) => Node::UnsignedIntegerLiteral(n),
            Expression::Bad(n) => Node::BadExpression(n),
        }
    }
}

impl<'a> From<FunctionBody<'a>> for Node<'a> {
    fn from(body: FunctionBody<'a>) -> Self {
        match body {
            FunctionBody::Block(n) => Node::BlockStatement(n),
            FunctionBody::Expression(e) => Node::from(e),
        }
    }
}

impl<'a> From<&'a Program<'a>> for Node<'a> {
    fn from(program: &'a Program<'a>) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a VariableDeclaration<'a>> for Node<'a> {
    fn from(declaration: &'a VariableDeclaration<'a>) -> Self {
        Node::VariableDeclaration(declaration)
    }
}

impl<'a> From<&'a VariableDeclarator<'a>> for Node<'a> {
    fn from(declarator: &'a VariableDeclarator<'a>) -> Self {
        Node::VariableDeclarator(declarator)
    }
}

impl<'a> From<&'a Property<'a>> for Node<'a> {
    fn from(property: &'a Property<'a>) -> Self {
        Node::Property(property)
    }
}

impl<'a> From<&'a Identifier<'a>> for Node<'a> {
    fn from(identifier: &'a Identifier<'a>) -> Self {
        Node::Identifier(identifier)
    }
}

impl<'a> From<&'a CallExpression<'a>> for Node<'a> {
    fn from(call: &'a CallExpression<'a>) -> Self {
        Node::CallExpression(call)
    }
}

impl<'a> From<&'a BlockStatement<'a>> for Node<'a> {
    fn from(block: &'a BlockStatement<'a>) -> Self {
        Node::BlockStatement(block)
    }
}
