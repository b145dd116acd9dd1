// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use detective_quest::{ClueIndex, Exploration, Mansion, Step, SuspectRegistry};

/// Build the fixed mansion together with its freshly seeded suspect registry.
pub fn seeded_mansion() -> (Mansion, SuspectRegistry) {
    let mut registry = SuspectRegistry::new();
    let mansion = Mansion::build(&mut registry);
    (mansion, registry)
}

/// Run one session over `mansion`, feeding it `script` one character at a
/// time, and hand back each command's outcome plus the clue index.
///
/// The same mansion can be walked again by a later script, and clues
/// collected earlier stay collected; pass the returned clue index back in to
/// keep accumulating across walks.
pub fn run_script(
    mansion: &mut Mansion,
    clues: ClueIndex,
    script: &str,
) -> (Vec<Step>, ClueIndex) {
    let mut session = Exploration::begin(mansion, clues);
    let steps = script.chars().map(|ch| session.apply_char(ch)).collect();
    (steps, session.into_clues())
}
