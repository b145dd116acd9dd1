// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed blueprint of the mansion and the pre-game suspicion data.
//!
//! The game always plays out in the same house: an entrance hall branching
//! into two wings, each wing branching twice more and terminating in leaf
//! rooms. The tables here are the single source of that layout (room names,
//! which rooms hold a clue, and which clue text) plus the fixed set of
//! suspect associations established before the player ever moves.
//!
//! Room rows reference their children by index into [`ROOMS`], the same
//! id space [`Mansion`](crate::mansion::Mansion) uses at runtime.

/// One row of the fixed layout.
#[derive(Debug, Clone, Copy)]
pub struct RoomSpec {
    /// Display name of the room.
    pub name: &'static str,
    /// Clue text waiting in this room, if any.
    pub clue: Option<&'static str>,
    /// Index of the left child room.
    pub left: Option<usize>,
    /// Index of the right child room.
    pub right: Option<usize>,
}

/// Index of the room the player starts in.
pub const ENTRANCE: usize = 0;

/// The mansion layout.
///
/// ```text
/// Hall de Entrada
/// ├── Sala de Estar               [clue]
/// │   ├── Cozinha
/// │   │   └── (left) Sotao
/// │   └── Jardim de Inverno       [clue]
/// │       └── (right) Quarto de Hospedes [clue]
/// └── Biblioteca
///     ├── Escritorio do Sr. Black [clue]
///     └── Sala de Jantar
///         ├── Adega
///         └── Garagem
/// ```
pub const ROOMS: [RoomSpec; 11] = [
    RoomSpec {
        name: "Hall de Entrada",
        clue: None,
        left: Some(1),
        right: Some(2),
    },
    RoomSpec {
        name: "Sala de Estar",
        clue: Some("Um copo quebrado."),
        left: Some(3),
        right: Some(4),
    },
    RoomSpec {
        name: "Biblioteca",
        clue: None,
        left: Some(5),
        right: Some(6),
    },
    RoomSpec {
        name: "Cozinha",
        clue: None,
        left: Some(7),
        right: None,
    },
    RoomSpec {
        name: "Jardim de Inverno",
        clue: Some("Flores pisoteadas."),
        left: None,
        right: Some(8),
    },
    RoomSpec {
        name: "Escritorio do Sr. Black",
        clue: Some("Documento rasgado."),
        left: None,
        right: None,
    },
    RoomSpec {
        name: "Sala de Jantar",
        clue: None,
        left: Some(9),
        right: Some(10),
    },
    RoomSpec {
        name: "Sotao",
        clue: None,
        left: None,
        right: None,
    },
    RoomSpec {
        name: "Quarto de Hospedes",
        clue: Some("Pequena mancha de oleo."),
        left: None,
        right: None,
    },
    RoomSpec {
        name: "Adega",
        clue: None,
        left: None,
        right: None,
    },
    RoomSpec {
        name: "Garagem",
        clue: None,
        left: None,
        right: None,
    },
];

/// Suspicion data seeded into the registry during map construction,
/// in association order (the order matters for citation history).
pub const SEED_ASSOCIATIONS: [(&str, &str); 6] = [
    ("Mordomo", "Chave do Escritorio"),
    ("Cozinheira", "Faca de cozinha faltando"),
    ("Jardineiro", "Pegadas de lama"),
    ("Mordomo", "Carta de divida"),
    ("Cozinheira", "Digitais na taca"),
    ("Jardineiro", "Rastros de areia"),
];
