use crate::ast::Span;
use crate::error::GridlockError;
use crate::parser::Rule;
use crate::semantic::*;
use pest::iterators::Pair;

pub(crate) fn parse_test(pair: Pair<Rule>, text: &str) -> Result<Test, GridlockError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut inner = pair.into_inner();

    let (Some(left_pair), Some(comparator_pair), Some(right_pair)) =
        (inner.next(), inner.next(), inner.next())
    else {
        return Err(GridlockError::malformed_clue(
            "sub-test needs two operands around a comparator",
            span,
            text,
        ));
    };

    let comparator = parse_comparator(&comparator_pair, text)?;
    let left = parse_operand(left_pair, comparator, text)?;
    let right = parse_operand(right_pair, comparator, text)?;

    if let OperandPath::Category(category) = &left.path {
        return Err(GridlockError::malformed_clue_with_suggestion(
            format!("left operand '{}' names a whole category", category),
            left.span.unwrap_or(span),
            text,
            "start a sub-test with category.item or category.item.other",
        ));
    }

    if matches!(right.path, OperandPath::Category(_)) && !comparator.is_link_test() {
        return Err(GridlockError::malformed_clue_with_suggestion(
            format!("a bare category cannot be compared with '{}'", comparator),
            right.span.unwrap_or(span),
            text,
            "compare against a whole category with = or != only",
        ));
    }

    Ok(Test {
        left,
        comparator,
        right,
        span: Some(span),
    })
}

fn parse_comparator(pair: &Pair<Rule>, text: &str) -> Result<Comparator, GridlockError> {
    match pair.as_str() {
        "<=" => Ok(Comparator::LessThanOrEqual),
        ">=" => Ok(Comparator::GreaterThanOrEqual),
        "<" => Ok(Comparator::LessThan),
        ">" => Ok(Comparator::GreaterThan),
        "==" => Ok(Comparator::Equal),
        "!=" => Ok(Comparator::IsNot),
        "=" => Ok(Comparator::Is),
        other => Err(GridlockError::malformed_clue(
            format!("unknown comparator '{}'", other),
            Span::from_pest_span(pair.as_span()),
            text,
        )),
    }
}

fn parse_operand(
    pair: Pair<Rule>,
    comparator: Comparator,
    text: &str,
) -> Result<Operand, GridlockError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut path = None;
    let mut operations = Vec::new();

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::path => path = Some(parse_path(inner_pair, text)?),
            Rule::operation => {
                if comparator.is_link_test() {
                    return Err(GridlockError::malformed_operation_with_suggestion(
                        format!(
                            "operation '{}' has no effect on '{}'",
                            inner_pair.as_str(),
                            comparator
                        ),
                        Span::from_pest_span(inner_pair.as_span()),
                        text,
                        "use == to compare values after operations",
                    ));
                }
                operations.push(crate::parser::operations::parse_operation(
                    inner_pair, text,
                )?);
            }
            _ => {}
        }
    }

    let path = path.ok_or_else(|| {
        GridlockError::malformed_clue("operand is missing its path", span, text)
    })?;

    Ok(Operand {
        path,
        operations,
        span: Some(span),
    })
}

fn parse_path(pair: Pair<Rule>, text: &str) -> Result<OperandPath, GridlockError> {
    let span = Span::from_pest_span(pair.as_span());
    let segments: Vec<String> = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::segment)
        .map(|p| p.as_str().to_string())
        .collect();

    match segments.as_slice() {
        [category] => Ok(OperandPath::Category(category.clone())),
        [category, item] => Ok(OperandPath::Item {
            category: category.clone(),
            item: item.clone(),
        }),
        [category, item, via] => Ok(OperandPath::Linked {
            category: category.clone(),
            item: item.clone(),
            via: via.clone(),
        }),
        _ => Err(GridlockError::malformed_clue_with_suggestion(
            format!(
                "operand path has {} segments, expected 1 to 3",
                segments.len()
            ),
            span,
            text,
            "write category, category.item or category.item.other",
        )),
    }
}
