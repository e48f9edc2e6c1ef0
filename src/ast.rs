use std::str::FromStr;

use crate::error::RuntimeError;

/// A parsed program: the top-level statements in source order.
///
/// Order matters. A later `let` overwrites an earlier one and the value of
/// the last statement is the value of the whole program.
pub type Program = Vec<Node>;

/// An abstract syntax tree (AST) node.
///
/// `Node` is a closed set of five constructs. Expression nodes
/// (`IntLiteral`, `Identifier`, `BinaryExpr`) and statement nodes
/// (`LetStatement`, `ExitStatement`) share one type so that any of them can
/// appear at the top level of a [`Program`]. Children are boxed and owned
/// exclusively by their parent, so the structure is always a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An integer literal such as `42`.
    IntLiteral {
        /// The literal value.
        value: i32,
        /// Line number in the source code.
        line:  usize,
    },
    /// A reference to a variable. Resolved at evaluation time.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryExpr {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// `let <name> = <value>;`
    LetStatement {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `exit <value>;`
    ExitStatement {
        /// Expression producing the exit code.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Node {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use tally::ast::Node;
    ///
    /// let node = Node::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::IntLiteral { line, .. }
            | Self::Identifier { line, .. }
            | Self::BinaryExpr { line, .. }
            | Self::LetStatement { line, .. }
            | Self::ExitStatement { line, .. } => *line,
        }
    }

    /// Returns `true` for `let` and `exit` nodes.
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        matches!(self, Self::LetStatement { .. } | Self::ExitStatement { .. })
    }
}

/// Renders the node with every binary operation parenthesized, which makes
/// the left-to-right fold visible: `2 + 3 * 4` displays as `((2 + 3) * 4)`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntLiteral { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::BinaryExpr { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::LetStatement { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::ExitStatement { value, .. } => write!(f, "exit {value};"),
        }
    }
}

/// Represents a binary operator.
///
/// All four operators share a single precedence level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Converts an operator symbol into a [`BinaryOperator`].
///
/// This is where embedders building trees from their own operator symbols
/// get [`RuntimeError::UnknownOperator`]; the parser never produces an
/// operator outside the four, so evaluation cannot meet one.
///
/// ## Example
/// ```
/// use tally::{ast::BinaryOperator, error::RuntimeError};
///
/// assert_eq!("*".parse::<BinaryOperator>().unwrap(), BinaryOperator::Mul);
/// assert!(matches!("%".parse::<BinaryOperator>(),
///                  Err(RuntimeError::UnknownOperator { .. })));
/// ```
impl FromStr for BinaryOperator {
    type Err = RuntimeError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            _ => Err(RuntimeError::UnknownOperator { symbol: symbol.to_string() }),
        }
    }
}
