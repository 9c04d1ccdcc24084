use crate::ast::Span;
use std::fmt;
use std::sync::Arc;

/// Detailed error information pointing into the clue text
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub clue: Arc<str>,
    pub suggestion: Option<String>,
}

/// Error types for the Gridlock engine
///
/// Running out of candidate assignments is not an error: the solver reports
/// it as [`SolveOutcome::NoSolution`](crate::SolveOutcome::NoSolution).
#[derive(Debug, Clone)]
pub enum GridlockError {
    /// Clue text that does not follow the clue grammar
    MalformedClue(Box<ErrorDetails>),

    /// An operation token that is not `#`, `+n`, `-n`, `*n`, `/n` or `[k]`
    MalformedOperation(Box<ErrorDetails>),

    /// Puzzle shape problems: duplicate names, unequal category sizes
    InvalidPuzzle(String),

    UnknownCategory(String),

    UnknownItem { category: String, item: String },

    /// An item was asked for its link into a category before one was assigned
    BrokenLink {
        category: String,
        item: String,
        target: String,
    },

    /// A value that had to be numeric was text
    NotNumeric(String),

    /// A number compared against text
    TypeMismatch { left: String, right: String },

    IndexError { value: String, index: i64 },

    ArithmeticOverflow(String),

    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Multiple errors collected together
    MultipleErrors(Vec<GridlockError>),
}

impl GridlockError {
    /// Create a malformed clue error pointing at `span` inside `clue`
    pub fn malformed_clue(message: impl Into<String>, span: Span, clue: &str) -> Self {
        Self::MalformedClue(Box::new(ErrorDetails {
            message: message.into(),
            span,
            clue: Arc::from(clue),
            suggestion: None,
        }))
    }

    /// Create a malformed clue error with suggestion
    pub fn malformed_clue_with_suggestion(
        message: impl Into<String>,
        span: Span,
        clue: &str,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::MalformedClue(Box::new(ErrorDetails {
            message: message.into(),
            span,
            clue: Arc::from(clue),
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Create a malformed operation error pointing at the offending token
    pub fn malformed_operation(message: impl Into<String>, span: Span, clue: &str) -> Self {
        Self::MalformedOperation(Box::new(ErrorDetails {
            message: message.into(),
            span,
            clue: Arc::from(clue),
            suggestion: None,
        }))
    }

    /// Create a malformed operation error with suggestion
    pub fn malformed_operation_with_suggestion(
        message: impl Into<String>,
        span: Span,
        clue: &str,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::MalformedOperation(Box::new(ErrorDetails {
            message: message.into(),
            span,
            clue: Arc::from(clue),
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Details for the parse-time variants
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            GridlockError::MalformedClue(details) | GridlockError::MalformedOperation(details) => {
                Some(details.as_ref())
            }
            _ => None,
        }
    }
}

impl fmt::Display for GridlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridlockError::MalformedClue(details) => {
                write!(f, "Malformed clue: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(f, " at column {} of '{}'", details.span.col, details.clue)
            }
            GridlockError::MalformedOperation(details) => {
                write!(f, "Malformed operation: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(f, " at column {} of '{}'", details.span.col, details.clue)
            }
            GridlockError::InvalidPuzzle(msg) => write!(f, "Invalid puzzle: {}", msg),
            GridlockError::UnknownCategory(name) => write!(f, "Unknown category '{}'", name),
            GridlockError::UnknownItem { category, item } => {
                write!(f, "Unknown item '{}' in category '{}'", item, category)
            }
            GridlockError::BrokenLink {
                category,
                item,
                target,
            } => write!(
                f,
                "Broken link: {}.{} has no link into category '{}'",
                category, item, target
            ),
            GridlockError::NotNumeric(value) => write!(f, "Not a number: '{}'", value),
            GridlockError::TypeMismatch { left, right } => {
                write!(f, "Type mismatch: cannot compare {} with {}", left, right)
            }
            GridlockError::IndexError { value, index } => {
                write!(f, "Index {} out of range for '{}'", index, value)
            }
            GridlockError::ArithmeticOverflow(msg) => write!(f, "Arithmetic overflow: {}", msg),
            GridlockError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                suggestion,
            } => write!(
                f,
                "Resource limit exceeded: {} (limit {}, actual {}). {}",
                limit_name, limit_value, actual_value, suggestion
            ),
            GridlockError::MultipleErrors(errors) => {
                writeln!(f, "Multiple errors:")?;
                for (i, error) in errors.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, error)?;
                    if i < errors.len() - 1 {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GridlockError {}
