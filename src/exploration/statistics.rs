// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Session statistics counters.
//!
//! The exploration session increments these as the player acts; the driver
//! reads them back for the end-of-session summary. Counters only ever go up.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Counter indices for session statistics.
#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Rooms the player has arrived in, entrance included.
    RoomsVisited,
    /// Clues picked up on arrival.
    CluesCollected,
    /// Moves toward a corridor that does not exist.
    BlockedMoves,
    /// Characters that parse to no command.
    InvalidCommands,
    /// Requests to list the collected clues.
    ClueViews,
}

/// Statistics tracking for an exploration session.
#[derive(Debug)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    /// Create a new statistics tracker with all counters at zero.
    pub fn new() -> Self {
        Statistics {
            stats: [0; Counters::COUNT],
        }
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_statistics_all_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::RoomsVisited), 0);
        assert_eq!(stats.get(Counters::CluesCollected), 0);
        assert_eq!(stats.get(Counters::BlockedMoves), 0);
        assert_eq!(stats.get(Counters::InvalidCommands), 0);
        assert_eq!(stats.get(Counters::ClueViews), 0);
    }

    #[test]
    fn test_increment_is_per_counter() {
        let mut stats = Statistics::new();
        stats.increment(Counters::RoomsVisited);
        stats.increment(Counters::RoomsVisited);
        stats.increment(Counters::BlockedMoves);
        assert_eq!(stats.get(Counters::RoomsVisited), 2);
        assert_eq!(stats.get(Counters::BlockedMoves), 1);
        assert_eq!(stats.get(Counters::CluesCollected), 0);
    }
}
