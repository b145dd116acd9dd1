// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Behavior of the suspect registry seeded by mansion construction.

mod common;

use detective_quest::ClueIndex;

#[test]
fn test_seeding_registers_three_suspects() {
    let (_mansion, registry) = common::seeded_mansion();
    assert_eq!(registry.len(), 3);
    for name in ["Mordomo", "Cozinheira", "Jardineiro"] {
        assert!(registry.lookup(name).is_some(), "{} should be registered", name);
    }
}

#[test]
fn test_enumeration_is_bucket_order_newest_first() {
    let (_mansion, registry) = common::seeded_mansion();
    let names: Vec<&str> = registry.iter().map(|suspect| suspect.name()).collect();
    // 'M' lands in bucket 0; 'C' and 'J' collide in bucket 4, where the
    // later-seeded Jardineiro sits at the head of the chain.
    assert_eq!(names, vec!["Mordomo", "Jardineiro", "Cozinheira"]);
}

#[test]
fn test_each_seeded_suspect_has_two_citations() {
    let (_mansion, registry) = common::seeded_mansion();
    for suspect in registry.iter() {
        assert_eq!(suspect.citations(), 2, "{}", suspect.name());
    }
}

#[test]
fn test_clue_lists_are_newest_first() {
    let (_mansion, registry) = common::seeded_mansion();
    let mordomo = registry.lookup("Mordomo").expect("seeded");
    let clues: Vec<&str> = mordomo.clues().collect();
    assert_eq!(clues, vec!["Carta de divida", "Chave do Escritorio"]);
}

#[test]
fn test_verdict_is_the_first_seen_leader_on_a_tie() {
    let (_mansion, registry) = common::seeded_mansion();
    // All three suspects tie at two citations; enumeration order decides.
    let verdict = registry.most_likely().expect("seeded registry has citations");
    assert_eq!(verdict.name(), "Mordomo");
    assert_eq!(verdict.citations(), 2);
}

#[test]
fn test_exploring_never_touches_the_registry() {
    let (mut mansion, registry) = common::seeded_mansion();
    let before: Vec<(String, u64)> = registry
        .iter()
        .map(|suspect| (suspect.name().to_string(), suspect.citations()))
        .collect();
    let _ = common::run_script(&mut mansion, ClueIndex::new(), "edvd");
    let after: Vec<(String, u64)> = registry
        .iter()
        .map(|suspect| (suspect.name().to_string(), suspect.citations()))
        .collect();
    assert_eq!(before, after);
}
