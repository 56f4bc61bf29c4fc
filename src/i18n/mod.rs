// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation tables for the arcade games.
//!
//! Every game carries the same three locales:
//!
//! | Code  | Language            | Native name |
//! |-------|---------------------|-------------|
//! | zh-TW | Traditional Chinese | 繁體中文     |
//! | en    | English             | English     |
//! | ja    | Japanese            | 日本語       |
//!
//! ## Design
//!
//! Message keys use dotted namespaces: `"game.title"`, `"game.score"`,
//! `"powerup.fire"`. A table answers `lookup(locale, key)` with the text or
//! `None`; there is no fallback to another locale and no interpolation.
//! Completeness (same key set in every locale, no empty strings) is enforced
//! by [`crate::audit`] and the test-suite rather than at runtime.
//!
//! The tables are embedded at compile time as static data: no file I/O and
//! no allocation on lookup. [`TranslationMap`] is the owned form used for
//! export and for auditing table files authored outside the crate.

mod iso639;
mod locale;
mod map;
mod table;

pub use iso639::{is_valid_iso639_1, is_valid_locale_tag};
pub use locale::Locale;
pub use map::{TableFile, TranslationMap};
pub use table::{Catalog, TranslationTable};
