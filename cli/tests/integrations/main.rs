mod check;
mod interactive;
mod list;
mod solve;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const THREE_BY_THREE: &str = r#"{
    "categories": [
        { "name": "I", "items": ["a", "b", "c"] },
        { "name": "J", "items": ["d", "e", "f"] },
        { "name": "K", "items": ["g", "h", "i"] }
    ],
    "clues": [
        { "clue": "I.a=J.e" },
        { "clue": "J.d!=I.b" },
        { "clue": "I.a=K.g" },
        { "clue": "J.f=K.i" }
    ]
}"#;

pub const TEAMS: &str = r#"{
    "categories": [
        { "name": "team", "items": ["alley", "oddballs", "pin", "turkey"] },
        { "name": "color", "items": ["lime", "magenta", "silver", "yellow"] },
        { "name": "score", "items": ["715", "727", "739", "751"] }
    ],
    "clues": [
        { "clue": "score.739=team.oddballs,score.739=team.alley", "count": 1 },
        { "clue": "color.magenta=team.oddballs,color.magenta=team.alley", "count": 1 },
        { "clue": "team.oddballs.score #==color.lime.score # +12" },
        { "clue": "team.alley=color.silver,team.alley=score.715", "count": 1 },
        { "clue": "team.pin=score.715" }
    ]
}"#;

pub fn write_puzzle(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
