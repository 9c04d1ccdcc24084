use anyhow::{Context, Result};
use gridlock::{CategoryDefinition, ClueDefinition, Engine, PuzzleDefinition};
use inquire::{Confirm, CustomType, Text};

pub fn run_interactive() -> Result<PuzzleDefinition> {
    let category_count = prompt_count("How many categories?", 3)?;
    let item_count = prompt_count("How many items per category?", 3)?;

    let mut categories = Vec::with_capacity(category_count);
    for index in 0..category_count {
        categories.push(prompt_category(index, item_count)?);
    }

    let mut definition = PuzzleDefinition {
        categories,
        clues: Vec::new(),
    };
    let mut engine = Engine::new(definition.build_puzzle()?)?;

    println!("\nEnter clues, e.g. I.a=J.e or team.pin.score # < team.alley.score #");
    loop {
        let clue = Text::new("Clue:")
            .with_help_message("Leave empty or type 'done' to finish")
            .prompt()
            .context("Failed to get clue")?;
        let clue = clue.trim();
        if clue.is_empty() || clue == "done" {
            break;
        }

        let count = prompt_required_true(clue)?;
        match engine.add_clue(clue, count) {
            Ok(()) => definition.clues.push(ClueDefinition {
                clue: clue.to_string(),
                count,
            }),
            Err(e) => {
                eprintln!("{}", crate::error_formatter::format_error(&e));
                if !Confirm::new("Keep entering clues?")
                    .with_default(true)
                    .prompt()
                    .context("Failed to get confirmation")?
                {
                    break;
                }
            }
        }
    }

    println!();
    Ok(definition)
}

fn prompt_count(message: &str, default: usize) -> Result<usize> {
    loop {
        let count = CustomType::<usize>::new(message)
            .with_default(default)
            .with_error_message("Please enter a whole number")
            .prompt()
            .context("Failed to get number")?;
        if count > 0 {
            return Ok(count);
        }
        eprintln!("Please enter a number greater than zero");
    }
}

fn prompt_category(index: usize, item_count: usize) -> Result<CategoryDefinition> {
    let name = Text::new(&format!("Name of category {}:", index + 1))
        .prompt()
        .context("Failed to get category name")?
        .trim()
        .to_string();

    loop {
        let items = Text::new(&format!("Items of '{}':", name))
            .with_help_message(&format!("{} names separated by commas", item_count))
            .prompt()
            .context(format!("Failed to get items for {}", name))?;
        let items: Vec<String> = items
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();

        if items.len() == item_count {
            return Ok(CategoryDefinition { name, items });
        }
        eprintln!(
            "Expected {} items but got {}, please try again",
            item_count,
            items.len()
        );
    }
}

fn prompt_required_true(clue: &str) -> Result<usize> {
    CustomType::<usize>::new(&required_true_message(clue))
        .with_default(1)
        .with_help_message("Enter 0 for a clue that must be false")
        .with_error_message("Please enter a whole number")
        .prompt()
        .context("Failed to get required count")
}

fn required_true_message(clue: &str) -> String {
    match clue.split(',').count() {
        1 => "How many sub-tests must be true? (1 of 1)".to_string(),
        tests => format!("How many of the {} sub-tests must be true?", tests),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_test_clue_still_asks_for_count() {
        assert_eq!(
            required_true_message("I.a=J.d"),
            "How many sub-tests must be true? (1 of 1)"
        );
    }

    #[test]
    fn test_message_names_sub_test_count() {
        assert_eq!(
            required_true_message("I.a=J.d, I.b=J.d, I.c=J.d"),
            "How many of the 3 sub-tests must be true?"
        );
    }
}
