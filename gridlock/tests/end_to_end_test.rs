use gridlock::{Engine, GridlockError, Puzzle, PuzzleDefinition, ResourceLimits, SolveOutcome};

fn three_by_three() -> Puzzle {
    Puzzle::from_categories([
        ("I", vec!["a", "b", "c"]),
        ("J", vec!["d", "e", "f"]),
        ("K", vec!["g", "h", "i"]),
    ])
    .unwrap()
}

fn team_engine() -> Engine {
    let puzzle = Puzzle::from_categories([
        ("team", vec!["alley", "oddballs", "pin", "turkey"]),
        ("color", vec!["lime", "magenta", "silver", "yellow"]),
        ("score", vec!["715", "727", "739", "751"]),
    ])
    .unwrap();
    let mut engine = Engine::new(puzzle).unwrap();
    engine
        .add_clues([
            ("score.739=team.oddballs,score.739=team.alley", 1),
            ("color.magenta=team.oddballs,color.magenta=team.alley", 1),
            ("team.oddballs.score #==color.lime.score # +12", 1),
            ("team.alley=color.silver,team.alley=score.715", 1),
            ("team.pin=score.715", 1),
        ])
        .unwrap();
    engine
}

const RECYCLING: &str = r#"{
    "categories": [
        { "name": "material", "items": ["aluminum", "batteries", "glass", "paper"] },
        { "name": "day", "items": ["0", "1", "2", "3"] },
        { "name": "time", "items": ["5", "6", "7", "8"] },
        { "name": "color", "items": ["blue", "green", "orange", "yellow"] }
    ],
    "clues": [
        { "clue": "time.5=color.orange" },
        { "clue": "material.glass.day #==material.aluminum.day # +1" },
        { "clue": "material.paper=day.2,material.paper=time.7", "count": 1 },
        { "clue": "color.blue.time #==color.yellow.time # +1" },
        { "clue": "material.aluminum=time.6,material.aluminum=time.7" },
        { "clue": "day.3=time.7,day.3=time.8" },
        { "clue": "material.paper!=time.8" },
        { "clue": "material.batteries.day #==color.green.day # -1" },
        { "clue": "day.2!=time.8" },
        { "clue": "day.0!=color.blue" },
        { "clue": "day.1=material.aluminum,day.1=color.orange" }
    ]
}"#;

fn rows(outcome: SolveOutcome) -> Vec<Vec<String>> {
    let solution = outcome.into_solution().expect("Expected a solution");
    assert!(solution.puzzle().is_complete());
    assert!(solution.puzzle().is_consistent());
    solution.table().unwrap().rows
}

#[test]
fn test_three_by_three_unique_solution() {
    let mut engine = Engine::new(three_by_three()).unwrap();
    engine.add_clue("I.a=J.e", 1).unwrap();
    engine.add_clue("J.d!=I.b", 1).unwrap();
    engine.add_clue("I.a=K.g", 1).unwrap();
    engine.add_clue("J.f=K.i", 1).unwrap();

    let outcome = engine.solve().unwrap();
    assert_eq!(
        rows(outcome),
        vec![
            vec!["a", "e", "g"],
            vec!["b", "f", "i"],
            vec!["c", "d", "h"],
        ]
    );

    let report = engine.count_solutions().unwrap();
    assert!(report.is_unique());
    assert_eq!(report.stats.assignments_explored, 36);
}

#[test]
fn test_clue_free_puzzle_counts_every_assignment() {
    let engine = Engine::new(three_by_three()).unwrap();
    let report = engine.count_solutions().unwrap();
    assert_eq!(report.solutions, 36);

    let first = report.first.expect("Expected a first solution");
    assert_eq!(
        first.puzzle().to_string(),
        "a : d : g\nb : e : h\nc : f : i\n"
    );
}

#[test]
fn test_team_puzzle_returns_first_solution_in_enumeration_order() {
    let engine = team_engine();

    let outcome = engine.solve().unwrap();
    assert_eq!(
        rows(outcome),
        vec![
            vec!["alley", "silver", "739"],
            vec!["oddballs", "magenta", "727"],
            vec!["pin", "lime", "715"],
            vec!["turkey", "yellow", "751"],
        ]
    );

    let report = engine.count_solutions().unwrap();
    assert_eq!(report.solutions, 2);
    assert!(!report.is_unique());
    assert_eq!(report.stats.assignments_explored, 576);
}

#[test]
fn test_first_solution_stops_early() {
    let engine = team_engine();
    let outcome = engine.solve().unwrap();
    let explored = outcome.solution().unwrap().stats().assignments_explored;
    assert!(explored < 576);
}

#[test]
fn test_recycling_puzzle_from_definition() {
    let engine = PuzzleDefinition::from_json(RECYCLING)
        .unwrap()
        .into_engine(ResourceLimits::default())
        .unwrap();
    assert_eq!(engine.clues().len(), 11);

    let report = engine.count_solutions().unwrap();
    assert!(report.is_unique());

    assert_eq!(
        rows(engine.solve().unwrap()),
        vec![
            vec!["aluminum", "2", "6", "green"],
            vec!["batteries", "1", "5", "orange"],
            vec!["glass", "3", "8", "blue"],
            vec!["paper", "0", "7", "yellow"],
        ]
    );
}

#[test]
fn test_numeric_link_clue() {
    let puzzle = Puzzle::from_categories([("X", vec!["p", "q"]), ("Y", vec!["5", "6"])]).unwrap();
    let mut engine = Engine::new(puzzle).unwrap();
    engine.add_clue("X.p.Y #== X.q.Y # +1", 1).unwrap();

    let solution = engine.solve().unwrap().into_solution().unwrap();
    assert_eq!(solution.linked("X", "p", "Y").unwrap(), "6");
    assert_eq!(solution.linked("X", "q", "Y").unwrap(), "5");
}

#[test]
fn test_contradictory_clues_have_no_solution() {
    let mut engine = Engine::new(three_by_three()).unwrap();
    engine.add_clue("I.a=J.e", 1).unwrap();
    engine.add_clue("I.a!=J.e", 1).unwrap();

    let outcome = engine.solve().unwrap();
    assert!(matches!(outcome, SolveOutcome::NoSolution));

    let report = engine.count_solutions().unwrap();
    assert_eq!(report.solutions, 0);
    assert!(report.first.is_none());
    assert_eq!(report.stats.assignments_explored, 36);
}

#[test]
fn test_none_of_clue() {
    let mut engine = Engine::new(three_by_three()).unwrap();
    engine.add_clue("I.a=J.d,I.a=J.e", 0).unwrap();
    engine.add_clue("I.b=J.d,I.b=J.e", 0).unwrap();

    let report = engine.count_solutions().unwrap();
    // a and b both avoid d and e: impossible with only f left
    assert_eq!(report.solutions, 0);
}

#[test]
fn test_evaluation_error_aborts_search() {
    let mut engine = Engine::new(three_by_three()).unwrap();
    engine.add_clue("I.a.J # == I.b.J #", 1).unwrap();

    let result = engine.solve();
    assert!(matches!(result, Err(GridlockError::NotNumeric(_))));
}

#[test]
fn test_bad_definition_is_invalid_puzzle() {
    let result = PuzzleDefinition::from_json(r#"{ "categories": 3 }"#);
    assert!(matches!(result, Err(GridlockError::InvalidPuzzle(_))));

    let definition = PuzzleDefinition::from_json(
        r#"{ "categories": [ { "name": "I", "items": ["a"] }, { "name": "J", "items": [] } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        definition.into_engine(ResourceLimits::default()),
        Err(GridlockError::InvalidPuzzle(_))
    ));
}

#[test]
fn test_clue_and_its_negation_have_no_solution() {
    let mut engine = Engine::new(three_by_three()).unwrap();
    engine.add_clue("I.a=J.d", 1).unwrap();
    engine.add_clue("I.a=J.d", 0).unwrap();

    assert!(matches!(engine.solve().unwrap(), SolveOutcome::NoSolution));
}

#[test]
fn test_unreachable_count_has_no_solution() {
    let mut engine = Engine::new(three_by_three()).unwrap();
    engine.add_clue("I.a=J.e", 2).unwrap();

    assert!(matches!(engine.solve().unwrap(), SolveOutcome::NoSolution));
    let report = engine.count_solutions().unwrap();
    assert_eq!(report.solutions, 0);
    assert_eq!(report.stats.assignments_explored, 36);
}
