use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use gridlock::{Engine, SearchReport, SearchStats, Solution};

/// One line of `gridlock list` output
pub struct PuzzleSummary {
    file: String,
    shape: Option<(usize, usize, usize)>,
    error: Option<String>,
}

impl PuzzleSummary {
    pub fn loaded(file: String, categories: usize, items: usize, clues: usize) -> Self {
        Self {
            file,
            shape: Some((categories, items, clues)),
            error: None,
        }
    }

    pub fn failed(file: String, error: String) -> Self {
        Self {
            file,
            shape: None,
            error: Some(error),
        }
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_solution(&self, solution: &Solution) -> Result<String> {
        let table = solution.table()?;

        let mut grid = Table::new();
        grid.load_preset(UTF8_FULL);
        grid.set_header(Row::from(
            table
                .categories
                .iter()
                .map(|name| Cell::new(name).set_alignment(CellAlignment::Left))
                .collect::<Vec<_>>(),
        ));
        for row in &table.rows {
            grid.add_row(Row::from(row.iter().map(Cell::new).collect::<Vec<_>>()));
        }

        let mut output = grid.to_string();
        output.push('\n');
        output.push_str(&self.format_stats(solution.stats()));
        Ok(output)
    }

    pub fn format_solution_json(&self, solution: &Solution) -> Result<String> {
        let value = serde_json::json!({
            "solved": true,
            "solution": solution.table()?,
            "stats": solution.stats(),
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    }

    pub fn format_report(&self, report: &SearchReport) -> Result<String> {
        let verdict = match report.solutions {
            0 => "No solution".to_string(),
            1 => "1 solution (unique)".to_string(),
            n => format!("{} solutions", n),
        };

        let mut output = format!("{}\n", verdict);
        if let Some(first) = &report.first {
            output.push('\n');
            if report.solutions > 1 {
                output.push_str("First solution:\n");
            }
            output.push_str(&self.format_solution(first)?);
        } else {
            output.push_str(&self.format_stats(&report.stats));
        }
        Ok(output)
    }

    pub fn format_report_json(&self, report: &SearchReport) -> Result<String> {
        let first = report.first.as_ref().map(Solution::table).transpose()?;
        let value = serde_json::json!({
            "solutions": report.solutions,
            "unique": report.is_unique(),
            "first": first,
            "stats": report.stats,
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    }

    fn format_stats(&self, stats: &SearchStats) -> String {
        format!(
            "{} assignments explored in {} ms\n",
            stats.assignments_explored, stats.elapsed_ms
        )
    }

    /// Categories and normalized clues of a loaded puzzle
    pub fn format_check(&self, engine: &Engine) -> String {
        let puzzle = engine.puzzle();

        let mut categories = Table::new();
        categories.load_preset(UTF8_FULL);
        categories.set_header(Row::from(vec![
            Cell::new("Category").set_alignment(CellAlignment::Left),
            Cell::new("Items").set_alignment(CellAlignment::Left),
        ]));
        for category in puzzle.categories() {
            let items: Vec<&str> = category
                .items()
                .iter()
                .map(|&id| puzzle.item_by_id(id).name())
                .collect();
            categories.add_row(Row::from(vec![
                category.name().to_string(),
                items.join(", "),
            ]));
        }

        let mut output = categories.to_string();
        output.push('\n');

        if !engine.clues().is_empty() {
            let mut clues = Table::new();
            clues.load_preset(UTF8_FULL);
            clues.set_header(Row::from(vec![
                Cell::new("#").set_alignment(CellAlignment::Right),
                Cell::new("Clue").set_alignment(CellAlignment::Left),
                Cell::new("Need true").set_alignment(CellAlignment::Right),
            ]));
            for (index, clue) in engine.clues().iter().enumerate() {
                clues.add_row(Row::from(vec![
                    Cell::new(index + 1).set_alignment(CellAlignment::Right),
                    Cell::new(clue),
                    Cell::new(clue.required_true).set_alignment(CellAlignment::Right),
                ]));
            }
            output.push('\n');
            output.push_str(&clues.to_string());
            output.push('\n');
        }

        output.push_str(&format!(
            "\nOK: {} categories of {} items, {} clues\n",
            puzzle.categories().len(),
            puzzle.size(),
            engine.clues().len()
        ));
        output
    }

    pub fn format_puzzle_list(&self, summaries: &[PuzzleSummary]) -> String {
        if summaries.is_empty() {
            return "No puzzle definitions found.\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("File").set_alignment(CellAlignment::Left),
            Cell::new("Categories").set_alignment(CellAlignment::Right),
            Cell::new("Items").set_alignment(CellAlignment::Right),
            Cell::new("Clues").set_alignment(CellAlignment::Right),
            Cell::new("Status").set_alignment(CellAlignment::Left),
        ]));

        for summary in summaries {
            let row = match (summary.shape, &summary.error) {
                (Some((categories, items, clues)), _) => vec![
                    Cell::new(&summary.file),
                    Cell::new(categories).set_alignment(CellAlignment::Right),
                    Cell::new(items).set_alignment(CellAlignment::Right),
                    Cell::new(clues).set_alignment(CellAlignment::Right),
                    Cell::new("ok"),
                ],
                (None, error) => vec![
                    Cell::new(&summary.file),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new(error.as_deref().unwrap_or("failed")),
                ],
            };
            table.add_row(Row::from(row));
        }

        let loaded = summaries.iter().filter(|s| s.shape.is_some()).count();
        format!(
            "{}\n\n{} of {} puzzle definitions loaded\n",
            table,
            loaded,
            summaries.len()
        )
    }
}
