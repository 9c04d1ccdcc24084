




use crate::Puzzle;

/// Three categories of three items, no links beyond self-links
pub(crate) fn three_by_three() -> Puzzle {
    Puzzle::from_categories([
        ("I", vec!["a", "b", "c"]),
        ("J", vec!["d", "e", "f"]),
        ("K", vec!["g", "h", "i"]),
    ])
    .unwrap()
}

/// Link every pair of items on each row, in both directions
pub(crate) fn link_rows(puzzle: &mut Puzzle, rows: &[&[(&str, &str)]]) {
    for row in rows {
        for (i, (category, item)) in row.iter().enumerate() {
            for (other_category, other_item) in &row[i + 1..] {
                let from = puzzle.item_id(category, item).unwrap();
                let to = puzzle.item_id(other_category, other_item).unwrap();
                puzzle.set_link(from, to);
            }
        }
    }
}

/// The unique answer to the three-by-three puzzle in the crate docs
pub(crate) fn solved_three_by_three() -> Puzzle {
    let mut puzzle = three_by_three();
    link_rows(
        &mut puzzle,
        &[
            &[("I", "a"), ("J", "e"), ("K", "g")],
            &[("I", "b"), ("J", "f"), ("K", "i")],
            &[("I", "c"), ("J", "d"), ("K", "h")],
        ],
    );
    puzzle
}
