// SPDX-License-Identifier: PMPL-1.0-or-later

//! Command-line settings.
//!
//! Layered lowest to highest: built-in defaults, the YAML settings file,
//! environment variables, then command-line flags (applied by `main`).

use crate::export::ExportFormat;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_SETTINGS_FILE: &str = "arcade-i18n.yaml";

const LOCALE_ENV: &str = "ARCADE_I18N_LOCALE";
const FORMAT_ENV: &str = "ARCADE_I18N_FORMAT";
const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Locale used by `lookup` and `keys` when `--locale` is not given.
    pub locale: Locale,
    /// Format used by `export` when neither `--format` nor an output
    /// extension decides it.
    pub format: ExportFormat,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            format: ExportFormat::Json,
            color: true,
        }
    }
}

impl Settings {
    /// Load settings, then overlay the process environment.
    ///
    /// An explicit `path` must exist. Without one, `arcade-i18n.yaml` in the
    /// working directory is read if present. Unusable environment values are
    /// reported on stderr and ignored.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_SETTINGS_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        for warning in settings.apply_vars(|name| env::var(name).ok()) {
            eprintln!("warning: {}", warning);
        }
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing settings {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Overlay environment variables, read through `var` so tests need not
    /// touch the real environment.
    ///
    /// A value that does not parse leaves the setting as it was and is
    /// returned as a warning, so a stale variable never blocks a command
    /// that overrides it with a flag or does not use it.
    pub fn apply_vars<F>(&mut self, var: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        if let Some(value) = var(LOCALE_ENV).filter(|v| !v.trim().is_empty()) {
            match value.trim().parse::<Locale>() {
                Ok(locale) => self.locale = locale,
                Err(err) => warnings.push(format!(
                    "ignoring {}: {} (keeping {})",
                    LOCALE_ENV, err, self.locale
                )),
            }
        }
        if let Some(value) = var(FORMAT_ENV).filter(|v| !v.trim().is_empty()) {
            match ExportFormat::parse(&value) {
                Some(format) => self.format = format,
                None => warnings.push(format!(
                    "ignoring {}: '{}' is not json or yaml (keeping {})",
                    FORMAT_ENV,
                    value,
                    self.format.extension()
                )),
            }
        }
        if var(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        warnings
    }

    /// Overlay command-line flags, the highest layer.
    pub fn apply_flags(
        &mut self,
        locale: Option<Locale>,
        format: Option<ExportFormat>,
        no_color: bool,
    ) {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if no_color {
            self.color = false;
        }
    }
}
