// SPDX-License-Identifier: PMPL-1.0-or-later

//! arcade-i18n — UI string tables for the arcade and puzzle games.
//!
//! Every game owns one static translation table mapping a locale
//! (`zh-TW`, `en`, `ja`) to a flat set of dotted message keys and their
//! display text. The rendering layer asks for `(locale, key)` and gets the
//! text back, or nothing if the key is not declared.
//!
//! ```
//! use arcade_i18n::games::table_for;
//! use arcade_i18n::i18n::Locale;
//!
//! let table = table_for("rotate-blocks").unwrap();
//! assert_eq!(table.lookup(Locale::ZhTw, "game.complete"), Some("恭喜完成所有關卡！"));
//! ```
//!
//! Besides the tables the crate provides:
//! 1. **Audit**: completeness checks (key parity, blank text, locale set).
//! 2. **Export**: JSON/YAML serialisation of tables for other toolchains.

pub mod audit;
pub mod config;
pub mod export;
pub mod games;
pub mod i18n;
