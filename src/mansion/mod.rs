// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The mansion map: a fixed binary tree of rooms.
//!
//! Rooms live in an index-addressed arena owned by [`Mansion`]; child links
//! are [`RoomId`] indices rather than owned pointers, which keeps the
//! structure a plain tree (no cycles, no sharing) while letting a traversal
//! hold a cursor without borrowing into the arena.
//!
//! Construction always produces the same house, from the tables in
//! [`blueprint`], and as a side effect seeds the suspect registry with the
//! fixed pre-game associations: suspicion exists before the player takes a
//! single step.

pub mod blueprint;

use crate::suspects::SuspectRegistry;

/// Index of a room in the mansion's arena.
pub type RoomId = usize;

/// One room of the mansion.
///
/// A room optionally holds a clue text; collecting it takes the text out, so
/// a room yields its clue at most once over the whole session.
#[derive(Debug)]
pub struct Room {
    name: String,
    left: Option<RoomId>,
    right: Option<RoomId>,
    clue: Option<String>,
}

impl Room {
    fn from_spec(spec: &blueprint::RoomSpec) -> Self {
        Self {
            name: spec.name.to_owned(),
            left: spec.left,
            right: spec.right,
            clue: spec.clue.map(str::to_owned),
        }
    }

    /// Display name of the room.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Left child, if the corridor exists.
    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    /// Right child, if the corridor exists.
    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    /// Whether a clue is still waiting here.
    pub fn has_clue(&self) -> bool {
        self.clue.is_some()
    }

    /// True when the room has no children; reaching one ends exploration.
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Take the room's clue, if one is still waiting.
    ///
    /// The first call on a clue-bearing room yields the text and empties the
    /// slot; any later call yields `None`.
    pub fn collect_clue(&mut self) -> Option<String> {
        self.clue.take()
    }
}

/// The fixed mansion: an arena of rooms plus the entrance id.
#[derive(Debug)]
pub struct Mansion {
    rooms: Vec<Room>,
    entrance: RoomId,
}

impl Mansion {
    /// Build the fixed mansion and seed `registry` with the pre-game
    /// suspect associations.
    ///
    /// Seeding happens here because the blueprint is the single place that
    /// knows the initial suspicion data, exactly as it knows the layout.
    pub fn build(registry: &mut SuspectRegistry) -> Self {
        let rooms = blueprint::ROOMS.iter().map(Room::from_spec).collect();

        for (suspect, clue_text) in blueprint::SEED_ASSOCIATIONS {
            registry.associate(suspect, clue_text);
        }

        Self {
            rooms,
            entrance: blueprint::ENTRANCE,
        }
    }

    /// Id of the room the player starts in.
    pub fn entrance(&self) -> RoomId {
        self.entrance
    }

    /// Shared access to a room.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    /// Mutable access to a room (clue collection).
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id]
    }

    /// Number of rooms in the mansion.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// True for a mansion with no rooms (never the built one).
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
