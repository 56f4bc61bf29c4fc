// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end runs of the `arcade-i18n` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(cwd: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_arcade-i18n"));
    cmd.current_dir(cwd)
        .env_remove("ARCADE_I18N_LOCALE")
        .env_remove("ARCADE_I18N_FORMAT")
        .env("NO_COLOR", "1")
        .args(args);
    for (name, value) in env {
        cmd.env(name, value);
    }
    cmd.output().expect("binary should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_lookup_prints_text() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &[], &["lookup", "bomberman", "game.title"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "Bomberman");
}

#[test]
fn test_lookup_uses_locale_flag() {
    let dir = TempDir::new().unwrap();
    let out = run(
        dir.path(),
        &[],
        &["lookup", "rotate-blocks", "game.complete", "-l", "zh-TW"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "恭喜完成所有關卡！");
}

#[test]
fn test_lookup_missing_key_fails() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &[], &["lookup", "snake", "no.such.key"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("no.such.key"));
}

#[test]
fn test_lookup_unknown_game_fails() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &[], &["lookup", "tetris", "game.title"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("unknown game"));
}

#[test]
fn test_bad_env_locale_is_a_warning() {
    let dir = TempDir::new().unwrap();
    let env = [("ARCADE_I18N_LOCALE", "fr")];

    let out = run(dir.path(), &env, &["lookup", "bomberman", "game.title", "-l", "ja"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "ボンバーマン");
    assert!(stderr(&out).contains("ARCADE_I18N_LOCALE"));

    let out = run(dir.path(), &env, &["games"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("bomberman"));
}

#[test]
fn test_env_locale_applies_without_flag() {
    let dir = TempDir::new().unwrap();
    let out = run(
        dir.path(),
        &[("ARCADE_I18N_LOCALE", "ja")],
        &["lookup", "bomberman", "game.title"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "ボンバーマン");
}

#[test]
fn test_settings_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("arcade-i18n.yaml"), "locale: zh-TW\n").unwrap();
    let out = run(dir.path(), &[], &["lookup", "snake", "game.title"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "貪食蛇");

    let out = run(dir.path(), &[], &["lookup", "snake", "game.title", "-l", "en"]);
    assert_eq!(stdout(&out).trim(), "Snake");
}

#[test]
fn test_check_bundled_tables_passes() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &[], &["check"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("TABLE CHECK"));
}

#[test]
fn test_export_all_then_check_file() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &[], &["export", "-o", "all.json"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(dir.path().join("all.json").is_file());

    let out = run(dir.path(), &[], &["check", "--file", "all.json", "--json"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let reports: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(reports.as_array().unwrap().len(), 5);
}

#[test]
fn test_check_empty_dir_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tables")).unwrap();
    let out = run(dir.path(), &[], &["check", "--dir", "tables"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("no table files"));
}

#[test]
fn test_check_broken_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    let out = run(dir.path(), &[], &["check", "--file", "broken.json"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("could not read table"));
}
