//! Operation chains and value comparison
//!
//! An operand's value starts as its item's name and is transformed by each
//! operation in turn. Text and numbers never mix silently: arithmetic on
//! text is `NotNumeric`, comparing a number with text is `TypeMismatch`.

use crate::{ArithmeticOperation, Comparator, GridlockError, GridlockResult, Operation, Value};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::str::FromStr;

/// Apply `operations` left to right, starting from the text `start`.
///
/// # Examples
/// ```text
/// "739"  #  +12   = 751
/// "lime" [0]      = "l"
/// "lime" [-1]     = "e"
/// "lime" +1       -> NotNumeric
/// ```
pub fn apply_operations(start: &str, operations: &[Operation]) -> GridlockResult<Value> {
    let mut value = Value::Text(start.to_string());
    for operation in operations {
        value = apply_operation(value, operation)?;
    }
    Ok(value)
}

fn apply_operation(value: Value, operation: &Operation) -> GridlockResult<Value> {
    match (operation, value) {
        (Operation::NumericCast, Value::Text(text)) => parse_number(&text).map(Value::Number),
        (Operation::NumericCast, number @ Value::Number(_)) => Ok(number),

        (Operation::Arithmetic(op, operand), Value::Number(n)) => {
            number_arithmetic(n, *op, *operand).map(Value::Number)
        }
        (Operation::Arithmetic(_, _), Value::Text(text)) => Err(GridlockError::NotNumeric(text)),

        (Operation::Subscript(index), Value::Text(text)) => subscript(&text, *index),
        (Operation::Subscript(_), Value::Number(n)) => Err(GridlockError::TypeMismatch {
            left: format!("Number {}", n.normalize()),
            right: "a subscript, which needs Text".to_string(),
        }),
    }
}

fn parse_number(text: &str) -> GridlockResult<Decimal> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| GridlockError::NotNumeric(text.to_string()))
}

/// Perform basic number arithmetic, failing instead of overflowing
fn number_arithmetic(
    left: Decimal,
    op: ArithmeticOperation,
    right: Decimal,
) -> GridlockResult<Decimal> {
    let result = match op {
        ArithmeticOperation::Add => left.checked_add(right),
        ArithmeticOperation::Subtract => left.checked_sub(right),
        ArithmeticOperation::Multiply => left.checked_mul(right),
        ArithmeticOperation::Divide => left.checked_div(right),
    };

    result.ok_or_else(|| {
        GridlockError::ArithmeticOverflow(format!(
            "{} {} {}",
            left.normalize(),
            op.symbol(),
            right.normalize()
        ))
    })
}

/// Character at `index`; negative indexes count from the end
fn subscript(text: &str, index: i64) -> GridlockResult<Value> {
    let len = text.chars().count() as i64;
    let position = if index < 0 { len + index } else { index };

    if position < 0 || position >= len {
        return Err(GridlockError::IndexError {
            value: text.to_string(),
            index,
        });
    }

    text.chars()
        .nth(position as usize)
        .map(|c| Value::Text(c.to_string()))
        .ok_or_else(|| GridlockError::IndexError {
            value: text.to_string(),
            index,
        })
}

/// Compare two values of the same type.
///
/// Numbers compare numerically, text lexicographically. `=` and `!=` never
/// reach here from the evaluator; given values they mean plain (in)equality.
pub fn compare_values(left: &Value, comparator: Comparator, right: &Value) -> GridlockResult<bool> {
    let ordering = match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.cmp(r),
        (Value::Text(l), Value::Text(r)) => l.cmp(r),
        _ => {
            return Err(GridlockError::TypeMismatch {
                left: format!("{} '{}'", left.type_name(), left),
                right: format!("{} '{}'", right.type_name(), right),
            })
        }
    };

    Ok(match comparator {
        Comparator::LessThan => ordering == Ordering::Less,
        Comparator::GreaterThan => ordering == Ordering::Greater,
        Comparator::LessThanOrEqual => ordering != Ordering::Greater,
        Comparator::GreaterThanOrEqual => ordering != Ordering::Less,
        Comparator::Equal | Comparator::Is => ordering == Ordering::Equal,
        Comparator::IsNot => ordering != Ordering::Equal,
    })
}
