// SPDX-License-Identifier: PMPL-1.0-or-later

//! Owned, serialisable translation maps.

use crate::export::ExportFormat;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// `{ "<locale>": { "<message.key>": "<text>" } }`, the exchange shape for
/// table files. Sorted maps keep exports stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap(BTreeMap<String, BTreeMap<String, String>>);

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.0
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.0
            .get(locale)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keys under `locale`, sorted. Empty if the locale is absent.
    pub fn keys<'a>(&'a self, locale: &str) -> impl Iterator<Item = &'a str> {
        self.0
            .get(locale)
            .into_iter()
            .flat_map(|strings| strings.keys().map(String::as_str))
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, String>)> {
        self.0.iter().map(|(locale, strings)| (locale.as_str(), strings))
    }

    pub fn locale_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a table file, choosing JSON or YAML from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let (format, raw) = read_source(path)?;
        format
            .deserialize(&raw)
            .with_context(|| format!("parsing table file {}", path.display()))
    }
}

/// Contents of a table file: one game's map, or a `{ slug: map }` bundle as
/// written by a multi-game export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFile {
    Single(TranslationMap),
    Bundle(BTreeMap<String, TranslationMap>),
}

impl TableFile {
    /// Read a table file of either shape. A bundle's leaves are maps where a
    /// single table has strings, so the two never parse as each other.
    pub fn load(path: &Path) -> Result<Self> {
        let (format, raw) = read_source(path)?;
        match format.deserialize(&raw) {
            Ok(map) => Ok(TableFile::Single(map)),
            Err(single_err) => format
                .deserialize_all(&raw)
                .map(TableFile::Bundle)
                .map_err(|_| single_err)
                .with_context(|| format!("parsing table file {}", path.display())),
        }
    }
}

fn read_source(path: &Path) -> Result<(ExportFormat, String)> {
    let format = ExportFormat::from_path(path).ok_or_else(|| {
        anyhow!(
            "cannot tell table format of {} (expected .json, .yaml or .yml)",
            path.display()
        )
    })?;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading table file {}", path.display()))?;
    Ok((format, raw))
}
