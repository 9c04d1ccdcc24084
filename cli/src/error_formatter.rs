use ariadne::{Color, Label, Report, ReportKind, Source};
use gridlock::GridlockError;

/// Format a GridlockError with fancy terminal output using Ariadne
pub fn format_error(error: &GridlockError) -> String {
    match error {
        GridlockError::MalformedClue(details) | GridlockError::MalformedOperation(details) => {
            let mut output = Vec::new();

            let error_type = match error {
                GridlockError::MalformedClue(_) => "Malformed clue",
                _ => "Malformed operation",
            };

            let source_id = "clue";
            let end = details.span.end.max(details.span.start + 1);

            let mut report = Report::build(ReportKind::Error, source_id, details.span.start)
                .with_message(format!(
                    "{}: {} (at column {})",
                    error_type, details.message, details.span.col
                ))
                .with_label(
                    Label::new((source_id, details.span.start..end))
                        .with_message("")
                        .with_color(Color::Red),
                );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report
                .finish()
                .write((source_id, Source::from(details.clue.as_ref())), &mut output)
            {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => {
                    // Fallback to simple format
                    format!("{}", error)
                }
            }
        }
        GridlockError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        GridlockError::MultipleErrors(errors) => {
            let mut result = String::from("Multiple errors occurred:\n\n");
            for error in errors {
                result.push_str(&format_error(error));
                result.push_str("\n\n");
            }
            result
        }
        other => format!("Error: {}", other),
    }
}
