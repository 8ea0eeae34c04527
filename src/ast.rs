/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node owns its children, so a tree is always acyclic and never shares
/// sub-expressions. Two trees compare equal when they have the same shape,
/// operators and literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Integer(i64),
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node from two operands.
    ///
    /// ## Example
    /// ```
    /// use exprcalc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::Integer(2), BinaryOperator::Add, Expr::Integer(3));
    ///
    /// assert_eq!(expr.to_string(), "(2 + 3)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Gets the kind of `self`.
    /// ## Example
    /// ```
    /// use exprcalc::ast::{Expr, NodeKind, UnaryOperator};
    ///
    /// let expr = Expr::unary(UnaryOperator::Negate, Expr::Integer(5));
    ///
    /// assert_eq!(expr.kind(), NodeKind::MinusUnary);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Integer(_) => NodeKind::Int,
            Self::UnaryOp { op: UnaryOperator::Negate,
                            .. } => NodeKind::MinusUnary,
            Self::BinaryOp { op, .. } => match op {
                BinaryOperator::Add => NodeKind::Plus,
                BinaryOperator::Sub => NodeKind::Minus,
                BinaryOperator::Mul => NodeKind::Mul,
                BinaryOperator::Div => NodeKind::Div,
            },
        }
    }
}

/// The discriminant of an [`Expr`] node, one per grammar production.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Integer literal.
    Int,
    /// Binary `+`.
    Plus,
    /// Binary `-`.
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// Prefix `-`.
    MinusUnary,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

/// Renders the tree as fully parenthesized infix. Any tree produced by the
/// parser renders to text that lexes and parses back into an equal tree.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
