use crate::ast::Span;
use crate::error::GridlockError;
use crate::parser::Rule;
use crate::semantic::*;
use pest::iterators::Pair;
use rust_decimal::Decimal;
use std::str::FromStr;

const OPERATION_HELP: &str = "operations are #, +n, -n, *n, /n and [k]";

/// Classify one whitespace-separated operation token.
///
/// `#` casts to a number, `+n` `-n` `*n` `/n` apply arithmetic with the
/// literal `n`, and `[k]` picks the character at index `k`.
pub(crate) fn parse_operation(pair: Pair<Rule>, text: &str) -> Result<Operation, GridlockError> {
    let token = pair.as_str();
    let span = Span::from_pest_span(pair.as_span());

    if token == "#" {
        return Ok(Operation::NumericCast);
    }

    if let Some(key) = token.strip_prefix('[') {
        return parse_subscript(key, span, text);
    }

    let mut chars = token.chars();
    let op = match chars.next() {
        Some('+') => ArithmeticOperation::Add,
        Some('-') => ArithmeticOperation::Subtract,
        Some('*') => ArithmeticOperation::Multiply,
        Some('/') => ArithmeticOperation::Divide,
        _ => {
            return Err(GridlockError::malformed_operation_with_suggestion(
                format!("unrecognized operation '{}'", token),
                span,
                text,
                OPERATION_HELP,
            ))
        }
    };

    let literal = chars.as_str();
    if literal.is_empty() {
        return Err(GridlockError::malformed_operation_with_suggestion(
            format!("{} is missing its number", op.name()),
            span,
            text,
            format!("write the number right after the sign, e.g. {}1", op.symbol()),
        ));
    }

    let operand = Decimal::from_str(literal).map_err(|_| {
        GridlockError::malformed_operation(
            format!("'{}' is not a number in {}", literal, op.name()),
            span,
            text,
        )
    })?;

    if op == ArithmeticOperation::Divide && operand.is_zero() {
        return Err(GridlockError::malformed_operation(
            "division by zero",
            span,
            text,
        ));
    }

    Ok(Operation::Arithmetic(op, operand))
}

fn parse_subscript(key: &str, span: Span, text: &str) -> Result<Operation, GridlockError> {
    let Some(key) = key.strip_suffix(']') else {
        return Err(GridlockError::malformed_operation_with_suggestion(
            "subscript is missing its closing ']'",
            span,
            text,
            OPERATION_HELP,
        ));
    };

    key.trim()
        .parse::<i64>()
        .map(Operation::Subscript)
        .map_err(|_| {
            GridlockError::malformed_operation_with_suggestion(
                format!("subscript key '{}' is not an integer", key),
                span,
                text,
                "index characters with [0], [1], ... or [-1] for the last",
            )
        })
}
