// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of the Detective Quest mansion game.
//!
//! A single player explores the mansion of the late Sr. Black, collecting
//! the clues left behind, and at the end asks the evidence who is to blame.
//!
//! # Architecture
//!
//! Three data structures carry the whole game:
//!
//! ## Mansion (binary tree)
//!
//! The map is a binary tree of rooms, built once per session from a fixed
//! blueprint:
//! - Every room has up to two corridors, left and right
//! - Some rooms hold a one-time clue, removed when collected
//! - A room with no corridors is a dead end and finishes the exploration
//!
//! ## Clue index (binary search tree)
//!
//! Collected clues live in a binary search tree ordered by text:
//! - Duplicate texts are inserted once
//! - In-order traversal lists the clues alphabetically
//!
//! ## Suspect registry (chained hash table)
//!
//! Clue-to-suspect associations live in a hash table keyed by suspect name:
//! - The bucket is the name's first byte modulo the table capacity
//! - Each association bumps the suspect's citation count
//! - The verdict is the first suspect to reach the highest non-zero count
//!
//! An [`exploration::Exploration`] session ties the three together: commands
//! move the player, arrivals feed the clue index, and the driver renders
//! every outcome.

pub mod clues;
pub mod exploration;
pub mod mansion;
pub mod suspects;

// Re-export commonly used types
pub use clues::ClueIndex;
pub use exploration::{Arrival, Command, Counters, Direction, Exploration, Statistics, Step};
pub use mansion::{Mansion, RoomId};
pub use suspects::{Suspect, SuspectRegistry};
