// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structural checks for translation tables.
//!
//! A table is complete when every expected locale is present, every locale
//! declares the same key set, and no text is blank. These are data defects
//! to be fixed in the table, so they are reported in bulk rather than
//! surfaced one lookup at a time.

use crate::export::ExportFormat;
use crate::i18n::{is_valid_locale_tag, Locale, TableFile, TranslationMap, TranslationTable};
use anyhow::{bail, Result};
use colored::*;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::OnceLock;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    MissingLocale,
    UnexpectedLocale,
    InvalidLocaleTag,
    MissingKey,
    EmptyValue,
    MalformedKey,
    DuplicateKey,
    Unreadable,
}

impl FindingKind {
    pub fn level(&self) -> Level {
        match self {
            FindingKind::MalformedKey => Level::Warn,
            _ => Level::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: Level,
    pub kind: FindingKind,
    pub locale: Option<String>,
    pub key: Option<String>,
    pub detail: String,
}

impl Finding {
    fn new(kind: FindingKind, locale: Option<&str>, key: Option<&str>, detail: String) -> Self {
        Self {
            level: kind.level(),
            kind,
            locale: locale.map(str::to_string),
            key: key.map(str::to_string),
            detail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub subject: String,
    pub locales: usize,
    pub keys: usize,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    /// No error-level findings. Warnings do not make a table unusable.
    pub fn is_clean(&self) -> bool {
        !self.findings.iter().any(|f| f.level == Level::Error)
    }

    pub fn count(&self, level: Level) -> usize {
        self.findings.iter().filter(|f| f.level == level).count()
    }

    pub fn has(&self, kind: FindingKind) -> bool {
        self.findings.iter().any(|f| f.kind == kind)
    }

    pub fn print(&self) {
        let status = if self.is_clean() { Level::Ok } else { Level::Error };
        println!(
            "  [{}] {:22} {} locales, {} keys",
            status.tag(),
            self.subject.bold(),
            self.locales,
            self.keys
        );
        for finding in &self.findings {
            println!("      [{}] {}", finding.level.tag(), finding.detail);
        }
    }
}

fn key_pattern() -> &'static Regex {
    static KEY: OnceLock<Regex> = OnceLock::new();
    KEY.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z0-9_]+)+$").expect("message key pattern is valid")
    })
}

/// Whether `key` is a dotted, lowercase message key such as `game.high_score`.
pub fn is_well_formed_key(key: &str) -> bool {
    key_pattern().is_match(key)
}

/// Audit a bundled table against the fixed `zh-TW`/`en`/`ja` locale set.
pub fn audit_table(table: &TranslationTable) -> AuditReport {
    let mut duplicates = Vec::new();
    for locale in table.locales() {
        let mut seen = HashSet::new();
        for key in table.keys(locale) {
            if !seen.insert(key) {
                duplicates.push(Finding::new(
                    FindingKind::DuplicateKey,
                    Some(locale.code()),
                    Some(key),
                    format!("{}: '{}' declared more than once", locale, key),
                ));
            }
        }
    }

    let expected: Vec<&str> = Locale::all().iter().map(Locale::code).collect();
    let mut report = audit_map(table.game(), &table.to_map(), &expected);
    duplicates.append(&mut report.findings);
    report.findings = duplicates;
    report
}

/// Audit an owned map. With an empty `expected` list any well-formed locale
/// tag is accepted and only key parity and values are checked.
pub fn audit_map(subject: &str, map: &TranslationMap, expected: &[&str]) -> AuditReport {
    let mut findings = Vec::new();

    for code in expected {
        if !map.locales().any(|locale| locale == *code) {
            findings.push(Finding::new(
                FindingKind::MissingLocale,
                Some(*code),
                None,
                format!("locale {} missing", code),
            ));
        }
    }

    for locale in map.locales() {
        if !is_valid_locale_tag(locale) {
            findings.push(Finding::new(
                FindingKind::InvalidLocaleTag,
                Some(locale),
                None,
                format!("'{}' is not a valid locale tag", locale),
            ));
        } else if !expected.is_empty() && !expected.contains(&locale) {
            findings.push(Finding::new(
                FindingKind::UnexpectedLocale,
                Some(locale),
                None,
                format!("locale {} is not expected here", locale),
            ));
        }
    }

    let all_keys: BTreeSet<&str> = map.locales().flat_map(|locale| map.keys(locale)).collect();

    for (locale, strings) in map.entries() {
        for key in &all_keys {
            match strings.get(*key) {
                None => findings.push(Finding::new(
                    FindingKind::MissingKey,
                    Some(locale),
                    Some(*key),
                    format!("{}: '{}' missing", locale, key),
                )),
                Some(text) if text.trim().is_empty() => findings.push(Finding::new(
                    FindingKind::EmptyValue,
                    Some(locale),
                    Some(*key),
                    format!("{}: '{}' is empty", locale, key),
                )),
                Some(_) => {}
            }
        }
    }

    for key in &all_keys {
        if !is_well_formed_key(key) {
            findings.push(Finding::new(
                FindingKind::MalformedKey,
                None,
                Some(*key),
                format!("'{}' is not a dotted lowercase key", key),
            ));
        }
    }

    AuditReport {
        subject: subject.to_string(),
        locales: map.locale_count(),
        keys: all_keys.len(),
        findings,
    }
}

fn unreadable(subject: String, detail: String) -> AuditReport {
    AuditReport {
        subject,
        locales: 0,
        keys: 0,
        findings: vec![Finding::new(FindingKind::Unreadable, None, None, detail)],
    }
}

/// Load and audit a table file. A multi-game export yields one report per
/// game, with subject `<path> [<slug>]`. A file that cannot be read or
/// parsed yields a single `Unreadable` report instead of an error, so one bad
/// file does not hide the results for the rest.
pub fn audit_file(path: &Path, expected: &[&str]) -> Vec<AuditReport> {
    let subject = path.display().to_string();
    match TableFile::load(path) {
        Ok(TableFile::Single(map)) => vec![audit_map(&subject, &map, expected)],
        Ok(TableFile::Bundle(games)) => games
            .iter()
            .map(|(slug, map)| audit_map(&format!("{} [{}]", subject, slug), map, expected))
            .collect(),
        Err(err) => vec![unreadable(subject, format!("{:#}", err))],
    }
}

/// Audit every `.json`/`.yaml`/`.yml` file under `dir`, recursively and in
/// file-name order.
///
/// Entries the walk cannot read become `Unreadable` reports. A directory
/// holding no table files at all is an error: checking nothing is not a pass.
pub fn audit_dir(dir: &Path, expected: &[&str]) -> Result<Vec<AuditReport>> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }

    let mut reports = Vec::new();
    let mut tables = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && ExportFormat::from_path(entry.path()).is_some() {
                    tables += 1;
                    reports.extend(audit_file(entry.path(), expected));
                }
            }
            Err(err) => {
                let subject = err
                    .path()
                    .unwrap_or(dir)
                    .display()
                    .to_string();
                reports.push(unreadable(subject, err.to_string()));
            }
        }
    }

    if tables == 0 && reports.is_empty() {
        bail!(
            "no table files (.json, .yaml, .yml) found under {}",
            dir.display()
        );
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    const EXPECTED: &[&str] = &["zh-TW", "en", "ja"];

    fn complete() -> TranslationMap {
        let mut map = TranslationMap::new();
        for (locale, title) in [("zh-TW", "貪食蛇"), ("en", "Snake"), ("ja", "スネーク")] {
            map.insert(locale, "game.title", title);
            map.insert(locale, "game.score", "0");
        }
        map
    }

    #[test]
    fn complete_map_is_clean() {
        let report = audit_map("snake", &complete(), EXPECTED);
        assert!(report.is_clean());
        assert!(report.findings.is_empty());
        assert_eq!(report.locales, 3);
        assert_eq!(report.keys, 2);
    }

    #[test]
    fn missing_key_in_one_locale() {
        let mut map = complete();
        map.insert("en", "game.pause", "Pause");
        let report = audit_map("snake", &map, EXPECTED);
        assert!(!report.is_clean());
        let missing: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.kind == FindingKind::MissingKey)
            .map(|f| f.locale.as_deref())
            .collect();
        assert_eq!(missing, vec![Some("ja"), Some("zh-TW")]);
    }

    #[test]
    fn blank_value_is_an_error() {
        let mut map = complete();
        map.insert("ja", "game.title", "   ");
        let report = audit_map("snake", &map, EXPECTED);
        assert!(report.has(FindingKind::EmptyValue));
        assert_eq!(report.count(Level::Error), 1);
    }

    #[test]
    fn locale_set_must_match() {
        let mut map = TranslationMap::new();
        map.insert("en", "game.title", "Snake");
        map.insert("fr", "game.title", "Serpent");
        map.insert("zh_TW", "game.title", "貪食蛇");
        let report = audit_map("snake", &map, EXPECTED);
        assert!(report.has(FindingKind::MissingLocale));
        assert!(report.has(FindingKind::UnexpectedLocale));
        assert!(report.has(FindingKind::InvalidLocaleTag));
    }

    #[test]
    fn any_locale_allowed_without_expectations() {
        let mut map = TranslationMap::new();
        map.insert("fr", "game.title", "Serpent");
        map.insert("de", "game.title", "Schlange");
        assert!(audit_map("snake", &map, &[]).is_clean());
    }

    #[test]
    fn malformed_key_is_only_a_warning() {
        let mut map = complete();
        for locale in EXPECTED {
            map.insert(*locale, "Title", "x");
        }
        let report = audit_map("snake", &map, EXPECTED);
        assert!(report.is_clean());
        assert_eq!(report.count(Level::Warn), 1);
    }

    #[test]
    fn key_shapes() {
        assert!(is_well_formed_key("game.title"));
        assert!(is_well_formed_key("difficulty.easy"));
        assert!(is_well_formed_key("game.high_score"));
        assert!(!is_well_formed_key("title"));
        assert!(!is_well_formed_key("Game.Title"));
        assert!(!is_well_formed_key("game..title"));
        assert!(!is_well_formed_key("game.title."));
    }

    #[test]
    fn duplicate_keys_in_static_catalog() {
        const ZH_TW: Catalog = &[("game.title", "甲"), ("game.title", "乙")];
        const EN: Catalog = &[("game.title", "A")];
        const JA: Catalog = &[("game.title", "エー")];
        static DUP: TranslationTable = TranslationTable::new("dup", ZH_TW, EN, JA);

        let report = audit_table(&DUP);
        assert!(!report.is_clean());
        assert_eq!(report.findings[0].kind, FindingKind::DuplicateKey);
        assert_eq!(report.findings[0].locale.as_deref(), Some("zh-TW"));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md"), "no tables here").unwrap();
        let err = audit_dir(dir.path(), EXPECTED).unwrap_err();
        assert!(err.to_string().contains("no table files"));
    }

    #[test]
    fn directory_walk_is_recursive_and_sorted() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("games");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("b.yaml"), "en:\n  game.title: B\n").unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"en": {"game.title": "A"}}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let reports = audit_dir(dir.path(), &[]).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].subject.ends_with("a.json"));
        assert!(reports[1].subject.ends_with("b.yaml"));
        assert!(reports.iter().all(AuditReport::is_clean));
    }

    #[test]
    fn directory_that_is_a_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("a.json");
        std::fs::write(&file, "{}").unwrap();
        assert!(audit_dir(&file, EXPECTED).is_err());
    }
}
