// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Player commands and the character alphabet that produces them.

use strum_macros::Display;

/// A direction the player can try to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// A recognized player command.
///
/// Commands are single characters: `e`/`E` moves left, `d`/`D` moves right,
/// `v`/`V` views the collected clues and `s`/`S` quits. Any other character
/// is not a command and parses to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk through the left corridor.
    MoveLeft,
    /// Walk through the right corridor.
    MoveRight,
    /// Ask for the alphabetical list of collected clues.
    ViewClues,
    /// Leave the mansion, ending the session.
    Quit,
}

impl Command {
    /// Parse a command character, case-insensitively.
    pub fn parse(input: char) -> Option<Self> {
        match input.to_ascii_lowercase() {
            'e' => Some(Self::MoveLeft),
            'd' => Some(Self::MoveRight),
            'v' => Some(Self::ViewClues),
            's' => Some(Self::Quit),
            _ => None,
        }
    }
}
