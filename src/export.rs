// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialisation helpers for exported and imported table files

use crate::games::GameId;
use crate::i18n::TranslationMap;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(ExportFormat::parse)
    }

    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }

    pub fn deserialize(&self, raw: &str) -> Result<TranslationMap> {
        match self {
            ExportFormat::Json => Ok(serde_json::from_str(raw)?),
            ExportFormat::Yaml => Ok(serde_yaml::from_str(raw)?),
        }
    }

    /// Parse a multi-game export (`{ slug: { locale: { key: text } } }`).
    pub fn deserialize_all(&self, raw: &str) -> Result<BTreeMap<String, TranslationMap>> {
        match self {
            ExportFormat::Json => Ok(serde_json::from_str(raw)?),
            ExportFormat::Yaml => Ok(serde_yaml::from_str(raw)?),
        }
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Json
    }
}

/// Every bundled game keyed by slug.
pub fn export_all() -> BTreeMap<&'static str, TranslationMap> {
    GameId::all()
        .iter()
        .map(|game| (game.slug(), game.table().to_map()))
        .collect()
}
