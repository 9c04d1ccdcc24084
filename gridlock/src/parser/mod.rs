use crate::ast::Span;
use crate::error::GridlockError;
use crate::resource_limits::ResourceLimits;
use crate::semantic::*;
use pest::Parser;
use pest_derive::Parser;
use tracing::warn;

pub mod operands;
pub mod operations;

#[derive(Parser)]
#[grammar = "src/parser/clue.pest"]
pub struct ClueParser;

/// Parse one clue string into its sub-tests.
///
/// Fails with `MalformedClue` when the text does not follow the grammar and
/// with `MalformedOperation` when an operation token is not recognised.
pub fn parse_clue(
    text: &str,
    required_true: usize,
    limits: &ResourceLimits,
) -> Result<Clue, GridlockError> {
    if text.len() > limits.max_clue_length_bytes {
        return Err(GridlockError::ResourceLimitExceeded {
            limit_name: "max_clue_length_bytes".to_string(),
            limit_value: limits.max_clue_length_bytes.to_string(),
            actual_value: text.len().to_string(),
            suggestion: "Split the clue into several shorter clues".to_string(),
        });
    }

    let pairs = ClueParser::parse(Rule::clue, text).map_err(|e| grammar_error(e, text))?;

    let mut tests = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::clue {
            for inner_pair in pair.into_inner() {
                if inner_pair.as_rule() == Rule::test {
                    tests.push(operands::parse_test(inner_pair, text)?);
                }
            }
        }
    }

    if tests.is_empty() {
        return Err(GridlockError::malformed_clue(
            "clue contains no sub-tests",
            Span::whole(text),
            text,
        ));
    }

    if tests.len() > limits.max_tests_per_clue {
        return Err(GridlockError::ResourceLimitExceeded {
            limit_name: "max_tests_per_clue".to_string(),
            limit_value: limits.max_tests_per_clue.to_string(),
            actual_value: tests.len().to_string(),
            suggestion: "Split the clue into several clues".to_string(),
        });
    }

    if required_true > tests.len() {
        warn!(
            clue = text,
            required_true,
            tests = tests.len(),
            "clue can never be satisfied"
        );
    }

    Ok(Clue {
        source: text.to_string(),
        tests,
        required_true,
    })
}

fn grammar_error(error: pest::error::Error<Rule>, text: &str) -> GridlockError {
    let span = match error.location {
        pest::error::InputLocation::Pos(pos) => Span::new(pos, pos),
        pest::error::InputLocation::Span((start, end)) => Span::new(start, end),
    };
    let message = error.variant.message().to_string();

    if !text.contains(['<', '>', '=']) {
        GridlockError::malformed_clue_with_suggestion(
            format!("no comparator found ({})", message),
            span,
            text,
            "every sub-test needs one of <=, >=, <, >, ==, != or =",
        )
    } else {
        GridlockError::malformed_clue(message, span, text)
    }
}
