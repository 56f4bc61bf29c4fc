// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bundled games and their translation tables.
//!
//! Each submodule owns one game's `TABLE`. The tables are independent: no
//! key or string is shared between games, even where the text happens to
//! match.

mod bomberman;
mod memory_match;
mod minesweeper;
mod rotate_blocks;
mod snake;

use crate::i18n::TranslationTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameId {
    Bomberman,
    RotateBlocks,
    Snake,
    Minesweeper,
    MemoryMatch,
}

impl GameId {
    pub fn slug(&self) -> &'static str {
        match self {
            GameId::Bomberman => "bomberman",
            GameId::RotateBlocks => "rotate-blocks",
            GameId::Snake => "snake",
            GameId::Minesweeper => "minesweeper",
            GameId::MemoryMatch => "memory-match",
        }
    }

    /// Resolve a slug. Case-insensitive; `_` is accepted in place of `-`
    /// so that module-style names (`rotate_blocks`) work too.
    pub fn from_slug(value: &str) -> Option<GameId> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        GameId::all()
            .iter()
            .copied()
            .find(|game| game.slug() == normalized)
    }

    pub fn all() -> &'static [GameId] {
        &[
            GameId::Bomberman,
            GameId::RotateBlocks,
            GameId::Snake,
            GameId::Minesweeper,
            GameId::MemoryMatch,
        ]
    }

    pub fn table(&self) -> &'static TranslationTable {
        match self {
            GameId::Bomberman => &bomberman::TABLE,
            GameId::RotateBlocks => &rotate_blocks::TABLE,
            GameId::Snake => &snake::TABLE,
            GameId::Minesweeper => &minesweeper::TABLE,
            GameId::MemoryMatch => &memory_match::TABLE,
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

pub fn table_for(slug: &str) -> Option<&'static TranslationTable> {
    GameId::from_slug(slug).map(|game| game.table())
}

pub fn all_tables() -> impl Iterator<Item = &'static TranslationTable> {
    GameId::all().iter().map(|game| game.table())
}
