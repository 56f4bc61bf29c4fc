// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compile-time translation tables.
//!
//! Each game declares one `const` catalog per locale as an ordered slice of
//! `(key, text)` pairs and bundles the three into a [`TranslationTable`].
//! Lookup is a linear scan over the catalog, which is fine for the dozen or
//! so keys a game has; the rendering layer caches what it draws anyway.

use super::locale::Locale;
use super::map::TranslationMap;
use std::collections::BTreeSet;

/// Ordered `(message key, display text)` pairs for one locale.
pub type Catalog = &'static [(&'static str, &'static str)];

/// The full locale → key → text mapping for one game.
///
/// Immutable and `Sync`: declared as a `static`, it is shared by every
/// reader without synchronisation.
///
/// # Examples
///
/// ```
/// use arcade_i18n::games::GameId;
/// use arcade_i18n::i18n::Locale;
///
/// let table = GameId::Bomberman.table();
/// assert_eq!(table.lookup(Locale::En, "game.title"), Some("Bomberman"));
/// assert_eq!(table.lookup(Locale::Ja, "game.score"), Some("スコア"));
/// assert_eq!(table.lookup(Locale::En, "no.such.key"), None);
/// ```
#[derive(Debug)]
pub struct TranslationTable {
    game: &'static str,
    catalogs: [(Locale, Catalog); 3],
}

impl TranslationTable {
    pub const fn new(game: &'static str, zh_tw: Catalog, en: Catalog, ja: Catalog) -> Self {
        Self {
            game,
            catalogs: [(Locale::ZhTw, zh_tw), (Locale::En, en), (Locale::Ja, ja)],
        }
    }

    /// Slug of the game owning this table, e.g. `"rotate-blocks"`.
    pub fn game(&self) -> &'static str {
        self.game
    }

    /// Locales carried by the table, in display order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.catalogs.iter().map(|(locale, _)| *locale)
    }

    pub fn catalog(&self, locale: Locale) -> Catalog {
        self.catalogs
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, catalog)| *catalog)
            .unwrap_or(&[])
    }

    /// Display text for `key` in `locale`.
    ///
    /// Returns `None` when the key is not declared. No fallback to another
    /// locale is attempted; that policy belongs to the caller.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&'static str> {
        self.catalog(locale)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }

    /// Like [`lookup`](Self::lookup), addressed by locale tag. An unknown
    /// tag yields `None` just like an unknown key.
    pub fn lookup_code(&self, code: &str, key: &str) -> Option<&'static str> {
        Locale::from_code(code).and_then(|locale| self.lookup(locale, key))
    }

    /// Keys declared for `locale`, in declaration order.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &'static str> {
        self.catalog(locale).iter().map(|(key, _)| *key)
    }

    /// Number of distinct message keys across all locales, the same count
    /// the audit reports. Equal to any one catalog's length when the table
    /// is complete.
    pub fn len(&self) -> usize {
        self.catalogs
            .iter()
            .flat_map(|(_, catalog)| catalog.iter().map(|(key, _)| *key))
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned copy of the table for serialisation.
    pub fn to_map(&self) -> TranslationMap {
        let mut map = TranslationMap::new();
        for (locale, catalog) in &self.catalogs {
            for (key, text) in catalog.iter() {
                map.insert(locale.code(), *key, *text);
            }
        }
        map
    }
}
