use crate::ast::Span;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A parsed clue: sub-tests plus how many of them must be true
///
/// `required_true = 1` on a single sub-test is an ordinary "this holds" clue;
/// `required_true = 1` on two sub-tests reads "exactly one of these";
/// `required_true = 0` reads "none of these".
#[derive(Debug, Clone, PartialEq)]
pub struct Clue {
    pub source: String,
    pub tests: Vec<Test>,
    pub required_true: usize,
}

/// One `left COMPARATOR right` sub-test
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    pub left: Operand,
    pub comparator: Comparator,
    pub right: Operand,
    pub span: Option<Span>,
}

/// An operand path plus the operations applied to it before comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub path: OperandPath,
    pub operations: Vec<Operation>,
    pub span: Option<Span>,
}

/// Reference to a category, an item, or an item reached through a link
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperandPath {
    /// `category` (right-hand side of `=` / `!=` only)
    Category(String),
    /// `category.item`
    Item { category: String, item: String },
    /// `category.item.other`: the item linked to `category.item` in `other`
    Linked {
        category: String,
        item: String,
        via: String,
    },
}

impl OperandPath {
    /// Path segments in source order
    pub fn segments(&self) -> Vec<&str> {
        match self {
            OperandPath::Category(category) => vec![category],
            OperandPath::Item { category, item } => vec![category, item],
            OperandPath::Linked {
                category,
                item,
                via,
            } => vec![category, item, via],
        }
    }

    /// Category of the final referent
    pub fn target_category(&self) -> &str {
        match self {
            OperandPath::Category(category) | OperandPath::Item { category, .. } => category,
            OperandPath::Linked { via, .. } => via,
        }
    }
}

/// Unary operations applied left to right to an operand's value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `#`: read the running text value as a number
    NumericCast,
    /// `+n`, `-n`, `*n`, `/n`
    Arithmetic(ArithmeticOperation, Decimal),
    /// `[k]`: the character at position `k` (negative counts from the end)
    Subscript(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArithmeticOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOperation {
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOperation::Add => "+",
            ArithmeticOperation::Subtract => "-",
            ArithmeticOperation::Multiply => "*",
            ArithmeticOperation::Divide => "/",
        }
    }

    /// Returns a human-readable name for the operation
    pub fn name(&self) -> &'static str {
        match self {
            ArithmeticOperation::Add => "addition",
            ArithmeticOperation::Subtract => "subtraction",
            ArithmeticOperation::Multiply => "multiplication",
            ArithmeticOperation::Divide => "division",
        }
    }
}

/// Comparators, listed in the order the grammar tries them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Comparator {
    /// `<=`
    LessThanOrEqual,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `==`: value equality after operations
    Equal,
    /// `!=`: left item is not linked to the right item
    IsNot,
    /// `=`: left item is linked to the right item
    Is,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::LessThanOrEqual => "<=",
            Comparator::GreaterThanOrEqual => ">=",
            Comparator::LessThan => "<",
            Comparator::GreaterThan => ">",
            Comparator::Equal => "==",
            Comparator::IsNot => "!=",
            Comparator::Is => "=",
        }
    }

    /// `=` and `!=` compare links rather than values
    pub fn is_link_test(&self) -> bool {
        matches!(self, Comparator::Is | Comparator::IsNot)
    }

    /// Returns a human-readable name for the comparator
    pub fn name(&self) -> &'static str {
        match self {
            Comparator::LessThanOrEqual => "less than or equal",
            Comparator::GreaterThanOrEqual => "greater than or equal",
            Comparator::LessThan => "less than",
            Comparator::GreaterThan => "greater than",
            Comparator::Equal => "equal",
            Comparator::IsNot => "is not",
            Comparator::Is => "is",
        }
    }
}

/// Running value of an operation chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(Decimal),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "Text",
            Value::Number(_) => "Number",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Number(number) => write!(f, "{}", number.normalize()),
        }
    }
}

impl fmt::Display for OperandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("."))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::NumericCast => write!(f, "#"),
            Operation::Arithmetic(op, operand) => write!(f, "{}{}", op.symbol(), operand),
            Operation::Subscript(index) => write!(f, "[{}]", index),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for operation in &self.operations {
            write!(f, " {}", operation)?;
        }
        Ok(())
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.comparator, self.right)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tests: Vec<String> = self.tests.iter().map(Test::to_string).collect();
        write!(f, "{}", tests.join(", "))
    }
}
