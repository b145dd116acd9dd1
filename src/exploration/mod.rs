// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interactive exploration session.
//!
//! An [`Exploration`] walks a [`Mansion`] one command at a time, starting at
//! the entrance. Every command produces exactly one [`Step`] describing what
//! happened, and the driver renders that outcome however it likes; the
//! session itself never prints.
//!
//! # Arrival
//!
//! Arriving in a room is the only way anything is collected: the room's clue
//! (if still present) is removed from the room and inserted into the
//! session's [`ClueIndex`], so re-visiting a room never yields its clue
//! twice. Arriving in a dead end (a room with no corridors) finishes the
//! session, as does the quit command. A finished session answers every
//! further command with [`Step::Finished`].
//!
//! # Blocked moves and invalid input
//!
//! Moving toward a corridor that is not there, or typing a character that is
//! not a command, leaves the session exactly where it was. Both outcomes are
//! still reported (and counted) so the driver can tell the player.

pub mod command;
pub mod statistics;

pub use command::{Command, Direction};
pub use statistics::{Counters, Statistics};

use crate::clues::ClueIndex;
use crate::mansion::{Mansion, RoomId};

/// What happened when the player arrived in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    /// The room arrived in.
    pub room: RoomId,
    /// The clue collected on arrival, if the room still had one.
    pub clue: Option<String>,
    /// True when the room has no corridors, which finishes the session.
    pub dead_end: bool,
}

/// The outcome of applying one command (or one raw character).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The player walked into another room.
    Moved(Arrival),
    /// The tried corridor does not exist; the player stayed put.
    Blocked(Direction),
    /// The player asked to see the collected clues.
    ViewRequested,
    /// The player quit; the session is now finished.
    Quit,
    /// The character is not a command; the player stayed put.
    Invalid(char),
    /// The session was already finished, so the input was ignored.
    Finished,
}

/// A single player's walk through a mansion.
///
/// Borrows the mansion mutably for the whole session because collecting a
/// clue removes it from its room.
pub struct Exploration<'a> {
    mansion: &'a mut Mansion,
    clues: ClueIndex,
    statistics: Statistics,
    cursor: RoomId,
    finished: bool,
    first_arrival: Arrival,
}

impl<'a> Exploration<'a> {
    /// Start a session at the mansion's entrance.
    ///
    /// The entrance counts as arrived-in: its clue (the seeded mansion has
    /// none, but a custom one might) is collected immediately, and an
    /// entrance with no corridors finishes the session on the spot.
    pub fn begin(mansion: &'a mut Mansion, mut clues: ClueIndex) -> Self {
        let mut statistics = Statistics::new();
        let entrance = mansion.entrance();
        let first_arrival = Self::arrive(mansion, &mut clues, &mut statistics, entrance);
        let finished = first_arrival.dead_end;
        Exploration {
            mansion,
            clues,
            statistics,
            cursor: entrance,
            finished,
            first_arrival,
        }
    }

    /// Apply one raw input character.
    ///
    /// Unrecognized characters are reported as [`Step::Invalid`] rather than
    /// an error; the session keeps going.
    pub fn apply_char(&mut self, input: char) -> Step {
        if self.finished {
            return Step::Finished;
        }
        match Command::parse(input) {
            Some(command) => self.apply(command),
            None => {
                self.statistics.increment(Counters::InvalidCommands);
                Step::Invalid(input)
            }
        }
    }

    /// Apply one parsed command.
    pub fn apply(&mut self, command: Command) -> Step {
        if self.finished {
            return Step::Finished;
        }
        match command {
            Command::MoveLeft => self.advance(Direction::Left),
            Command::MoveRight => self.advance(Direction::Right),
            Command::ViewClues => {
                self.statistics.increment(Counters::ClueViews);
                Step::ViewRequested
            }
            Command::Quit => {
                self.finished = true;
                Step::Quit
            }
        }
    }

    /// Try to walk one corridor from the current room.
    fn advance(&mut self, direction: Direction) -> Step {
        let room = self.mansion.room(self.cursor);
        let target = match direction {
            Direction::Left => room.left(),
            Direction::Right => room.right(),
        };
        match target {
            Some(next) => {
                self.cursor = next;
                let arrival =
                    Self::arrive(self.mansion, &mut self.clues, &mut self.statistics, next);
                if arrival.dead_end {
                    self.finished = true;
                }
                Step::Moved(arrival)
            }
            None => {
                self.statistics.increment(Counters::BlockedMoves);
                Step::Blocked(direction)
            }
        }
    }

    /// Land in a room: collect its clue, if any, and report what was found.
    fn arrive(
        mansion: &mut Mansion,
        clues: &mut ClueIndex,
        statistics: &mut Statistics,
        room_id: RoomId,
    ) -> Arrival {
        statistics.increment(Counters::RoomsVisited);
        let room = mansion.room_mut(room_id);
        let clue = room.collect_clue();
        let dead_end = room.is_dead_end();
        if let Some(text) = clue.as_deref() {
            clues.insert(text);
            statistics.increment(Counters::CluesCollected);
        }
        Arrival {
            room: room_id,
            clue,
            dead_end,
        }
    }

    /// The room the player is currently in.
    pub fn current_room(&self) -> RoomId {
        self.cursor
    }

    /// Name of the room the player is currently in.
    pub fn current_room_name(&self) -> &str {
        self.mansion.room(self.cursor).name()
    }

    /// True when the current room has a left corridor.
    pub fn has_left(&self) -> bool {
        self.mansion.room(self.cursor).left().is_some()
    }

    /// True when the current room has a right corridor.
    pub fn has_right(&self) -> bool {
        self.mansion.room(self.cursor).right().is_some()
    }

    /// Name of the room through the left corridor, if there is one.
    pub fn left_room_name(&self) -> Option<&str> {
        self.mansion
            .room(self.cursor)
            .left()
            .map(|id| self.mansion.room(id).name())
    }

    /// Name of the room through the right corridor, if there is one.
    pub fn right_room_name(&self) -> Option<&str> {
        self.mansion
            .room(self.cursor)
            .right()
            .map(|id| self.mansion.room(id).name())
    }

    /// True once the player quit or hit a dead end.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// What happened on arrival at the entrance.
    pub fn first_arrival(&self) -> &Arrival {
        &self.first_arrival
    }

    /// The clues collected so far, in alphabetical order.
    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// The session counters so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// End the session and keep the collected clues.
    pub fn into_clues(self) -> ClueIndex {
        self.clues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suspects::SuspectRegistry;

    fn fresh_mansion() -> Mansion {
        let mut registry = SuspectRegistry::new();
        Mansion::build(&mut registry)
    }

    #[test]
    fn test_begin_arrives_at_entrance() {
        let mut mansion = fresh_mansion();
        let session = Exploration::begin(&mut mansion, ClueIndex::new());
        assert_eq!(session.current_room_name(), "Hall de Entrada");
        assert_eq!(session.first_arrival().clue, None);
        assert!(!session.first_arrival().dead_end);
        assert!(!session.is_finished());
        assert_eq!(session.statistics().get(Counters::RoomsVisited), 1);
    }

    #[test]
    fn test_moving_left_collects_the_clue_once() {
        let mut mansion = fresh_mansion();
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        let step = session.apply_char('e');
        match step {
            Step::Moved(arrival) => {
                assert_eq!(arrival.clue.as_deref(), Some("Um copo quebrado."));
                assert!(!arrival.dead_end);
            }
            other => panic!("expected a move, got {:?}", other),
        }
        assert_eq!(session.current_room_name(), "Sala de Estar");
        assert_eq!(session.clues().len(), 1);
        assert_eq!(session.statistics().get(Counters::CluesCollected), 1);
    }

    #[test]
    fn test_revisiting_a_room_yields_no_clue() {
        let mut mansion = fresh_mansion();
        {
            let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
            assert!(matches!(session.apply_char('e'), Step::Moved(_)));
        }
        // Same mansion, second walk through the same room.
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        match session.apply_char('e') {
            Step::Moved(arrival) => assert_eq!(arrival.clue, None),
            other => panic!("expected a move, got {:?}", other),
        }
        assert!(session.clues().is_empty());
    }

    #[test]
    fn test_blocked_move_stays_put() {
        let mut mansion = fresh_mansion();
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        // Sala de Estar, then Cozinha, which has no right corridor.
        session.apply_char('e');
        session.apply_char('e');
        assert_eq!(session.current_room_name(), "Cozinha");
        assert_eq!(session.apply_char('d'), Step::Blocked(Direction::Right));
        assert_eq!(session.current_room_name(), "Cozinha");
        assert!(!session.is_finished());
        assert_eq!(session.statistics().get(Counters::BlockedMoves), 1);
    }

    #[test]
    fn test_invalid_character_is_reported_and_ignored() {
        let mut mansion = fresh_mansion();
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        assert_eq!(session.apply_char('x'), Step::Invalid('x'));
        assert_eq!(session.current_room_name(), "Hall de Entrada");
        assert_eq!(session.statistics().get(Counters::InvalidCommands), 1);
    }

    #[test]
    fn test_view_request_does_not_move() {
        let mut mansion = fresh_mansion();
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        assert_eq!(session.apply_char('v'), Step::ViewRequested);
        assert_eq!(session.current_room_name(), "Hall de Entrada");
        assert_eq!(session.statistics().get(Counters::ClueViews), 1);
    }

    #[test]
    fn test_quit_finishes_the_session() {
        let mut mansion = fresh_mansion();
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        assert_eq!(session.apply_char('s'), Step::Quit);
        assert!(session.is_finished());
        assert_eq!(session.apply_char('e'), Step::Finished);
        assert_eq!(session.current_room_name(), "Hall de Entrada");
    }

    #[test]
    fn test_dead_end_finishes_the_session() {
        let mut mansion = fresh_mansion();
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        // Sala de Estar, Cozinha, then the Sotao dead end.
        session.apply_char('e');
        session.apply_char('e');
        match session.apply_char('e') {
            Step::Moved(arrival) => {
                assert!(arrival.dead_end);
                assert_eq!(arrival.clue, None);
            }
            other => panic!("expected a move, got {:?}", other),
        }
        assert_eq!(session.current_room_name(), "Sotao");
        assert!(session.is_finished());
        assert_eq!(session.apply_char('d'), Step::Finished);
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let mut mansion = fresh_mansion();
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        assert!(matches!(session.apply_char('E'), Step::Moved(_)));
        assert_eq!(session.current_room_name(), "Sala de Estar");
    }

    #[test]
    fn test_corridor_names_match_the_blueprint() {
        let mut mansion = fresh_mansion();
        let session = Exploration::begin(&mut mansion, ClueIndex::new());
        assert_eq!(session.left_room_name(), Some("Sala de Estar"));
        assert_eq!(session.right_room_name(), Some("Biblioteca"));
        assert!(session.has_left());
        assert!(session.has_right());
    }

    #[test]
    fn test_into_clues_keeps_the_collection() {
        let mut mansion = fresh_mansion();
        let mut session = Exploration::begin(&mut mansion, ClueIndex::new());
        session.apply_char('e');
        session.apply_char('s');
        let clues = session.into_clues();
        assert!(clues.contains("Um copo quebrado."));
    }
}
