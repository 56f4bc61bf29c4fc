// SPDX-License-Identifier: PMPL-1.0-or-later

//! arcade-i18n: inspect, export and check the arcade games' UI string tables

use anyhow::{anyhow, Context, Result};
use arcade_i18n::audit::{self, AuditReport, FindingKind};
use arcade_i18n::config::Settings;
use arcade_i18n::export::{self, ExportFormat};
use arcade_i18n::games::GameId;
use arcade_i18n::i18n::{Locale, TranslationTable};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "arcade-i18n")]
#[command(version)]
#[command(about = "Inspect, export and check the arcade games' UI string tables")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (defaults to ./arcade-i18n.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bundled games
    Games,

    /// List supported locales
    Locales,

    /// Print the text for a message key
    Lookup {
        /// Game slug, e.g. bomberman or rotate-blocks
        #[arg(value_name = "GAME")]
        game: String,

        /// Message key, e.g. game.title
        #[arg(value_name = "KEY")]
        key: String,

        /// Locale (defaults to the configured locale)
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// List the message keys of a game
    Keys {
        /// Game slug, e.g. snake or memory-match
        #[arg(value_name = "GAME")]
        game: String,

        /// Locale (defaults to the configured locale)
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Export one game's table, or every game when GAME is omitted
    Export {
        /// Game slug; omit to export every game keyed by slug
        #[arg(value_name = "GAME")]
        game: Option<String>,

        /// Output format (defaults to the output file's extension, then settings)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check tables for missing keys, blank text and locale mismatches
    Check {
        /// External table file to check (JSON or YAML); repeatable
        #[arg(long = "file", value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Directory searched recursively for table files
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Accept any well-formed locale set in external files
        #[arg(long)]
        any_locale: bool,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn locale_flag(&self) -> Option<Locale> {
        match self {
            Commands::Lookup { locale, .. } | Commands::Keys { locale, .. } => {
                locale.map(Locale::from)
            }
            _ => None,
        }
    }

    fn format_flag(&self) -> Option<ExportFormat> {
        match self {
            Commands::Export { format, .. } => *format,
            _ => None,
        }
    }
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LocaleArg {
    #[value(name = "zh-TW")]
    ZhTw,
    En,
    Ja,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::ZhTw => Locale::ZhTw,
            LocaleArg::En => Locale::En,
            LocaleArg::Ja => Locale::Ja,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply_flags(cli.command.locale_flag(), cli.command.format_flag(), cli.no_color);
    if !settings.color {
        colored::control::set_override(false);
    }
    if cli.verbose {
        eprintln!(
            "{} locale={} format={:?}",
            "settings:".dimmed(),
            settings.locale,
            settings.format
        );
    }

    match cli.command {
        Commands::Games => {
            println!("{}", "GAMES".bold().yellow());
            for game in GameId::all() {
                let table = game.table();
                println!("  {:16} {:3} keys  {}", game.slug(), table.len(), title_line(table));
            }
        }

        Commands::Locales => {
            println!("{}", "LOCALES".bold().yellow());
            for locale in Locale::all() {
                println!(
                    "  {:6} {:30} {}",
                    locale.code(),
                    locale.english_name(),
                    locale.native_name()
                );
            }
        }

        Commands::Lookup { game, key, .. } => {
            let table = resolve_game(&game)?;
            let locale = settings.locale;
            let text = table
                .lookup(locale, &key)
                .ok_or_else(|| anyhow!("{}: no '{}' in locale {}", table.game(), key, locale))?;
            println!("{}", text);
        }

        Commands::Keys { game, .. } => {
            let table = resolve_game(&game)?;
            let locale = settings.locale;
            for key in table.keys(locale) {
                if cli.verbose {
                    let text = table.lookup(locale, key).unwrap_or_default();
                    println!("{:24} {}", key, text);
                } else {
                    println!("{}", key);
                }
            }
        }

        Commands::Export {
            game,
            format,
            output,
        } => {
            let format = format
                .or_else(|| output.as_deref().and_then(ExportFormat::from_path))
                .unwrap_or(settings.format);
            let content = match game {
                Some(game) => format.serialize(&resolve_game(&game)?.to_map())?,
                None => format.serialize(&export::export_all())?,
            };

            if let Some(output_path) = output {
                fs::write(&output_path, content)
                    .with_context(|| format!("writing {}", output_path.display()))?;
                eprintln!("Export saved to: {}", output_path.display());
            } else {
                print!("{}", content);
                if !content.ends_with('\n') {
                    println!();
                }
            }
        }

        Commands::Check {
            files,
            dir,
            any_locale,
            json,
        } => {
            let reports = if files.is_empty() && dir.is_none() {
                GameId::all()
                    .iter()
                    .map(|game| audit::audit_table(game.table()))
                    .collect()
            } else {
                check_external(&files, dir.as_deref(), any_locale, cli.verbose)?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                println!("{}", "TABLE CHECK".bold().yellow());
                for report in &reports {
                    report.print();
                }
            }

            let failed = reports.iter().filter(|r| !r.is_clean()).count();
            if failed > 0 {
                return Err(anyhow!("{} of {} table(s) failed the check", failed, reports.len()));
            }
        }
    }

    Ok(())
}

fn resolve_game(slug: &str) -> Result<&'static TranslationTable> {
    GameId::from_slug(slug)
        .map(|game| game.table())
        .ok_or_else(|| {
            let known: Vec<&str> = GameId::all().iter().map(GameId::slug).collect();
            anyhow!("unknown game '{}' (known: {})", slug, known.join(", "))
        })
}

fn title_line(table: &TranslationTable) -> String {
    Locale::all()
        .iter()
        .filter_map(|locale| table.lookup(*locale, "game.title"))
        .collect::<Vec<_>>()
        .join(" / ")
}

fn check_external(
    files: &[PathBuf],
    dir: Option<&Path>,
    any_locale: bool,
    verbose: bool,
) -> Result<Vec<AuditReport>> {
    let expected: Vec<&str> = if any_locale {
        Vec::new()
    } else {
        Locale::all().iter().map(Locale::code).collect()
    };

    let mut reports: Vec<AuditReport> = files
        .iter()
        .flat_map(|path| audit::audit_file(path, &expected))
        .collect();
    if let Some(dir) = dir {
        let found = audit::audit_dir(dir, &expected)?;
        if verbose {
            eprintln!("Checked {} table(s) under {}", found.len(), dir.display());
        }
        reports.extend(found);
    }

    for report in reports.iter().filter(|r| r.has(FindingKind::Unreadable)) {
        eprintln!("{} could not read table {}", "warning:".yellow().bold(), report.subject);
    }
    Ok(reports)
}
