/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary against a temporary cache directory
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{EntryBuilder, ItemBuilder, items, page, write_page_file};
use content_cache::models::ContentCategory;
use content_cache::persistence::{DEFAULT_STORAGE_KEY, FileStorage};
use content_cache::store::StoreState;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(cache_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_content-cache"));
    cmd.arg("--cache-dir").arg(cache_dir.path());
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_content-cache"));
    cmd.assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_content-cache"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("set-preview"));
}

#[test]
fn test_cli_stats_empty() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Content Cache Statistics"))
        .stdout(predicate::str::contains("vipUnknown"))
        .stdout(predicate::str::contains("absent"))
        .stdout(predicate::str::contains("Previews: 0"));
}

#[test]
fn test_cli_import_show_and_check() {
    let dir = TempDir::new().unwrap();
    let pages = TempDir::new().unwrap();
    let file = write_page_file(
        pages.path(),
        "page1.json",
        &page(
            vec![
                ItemBuilder::new("1").name("Spring set").preview("https://img/1.jpg").build(),
                ItemBuilder::new("2").name("Summer set").build(),
            ],
            1,
            3,
        ),
    );

    cmd(&dir)
        .args(["import", "asian"])
        .arg(&file)
        .args(["--filter", "month:2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cached 2 items for asian"));

    cmd(&dir)
        .args(["show", "asian"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 items, page 1/3, more available"))
        .stdout(predicate::str::contains("Spring set"))
        .stdout(predicate::str::contains("month=\"2024-05\""));

    cmd(&dir)
        .args(["check", "asian", "--filter", "month:2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::diff("valid\n"));

    cmd(&dir)
        .args(["check", "asian", "--filter", "month:2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::diff("invalid\n"));

    cmd(&dir)
        .args(["preview", "item-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring set\thttps://img/1.jpg"));
}

#[test]
fn test_cli_append_extends_entry() {
    let dir = TempDir::new().unwrap();
    let pages = TempDir::new().unwrap();
    let first = write_page_file(pages.path(), "p1.json", &page(items(&["a", "b"]), 1, 2));
    let second = write_page_file(pages.path(), "p2.json", &page(items(&["c"]), 2, 2));

    cmd(&dir).args(["import", "vip-western"]).arg(&first).assert().success();
    cmd(&dir)
        .args(["append", "vipWestern"])
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("Appended 1 items to vipWestern (page 2)"));

    cmd(&dir)
        .args(["show", "vipWestern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items, page 2/2"))
        .stdout(predicate::str::contains("more available").not());
}

#[test]
fn test_cli_append_without_entry_is_noop() {
    let dir = TempDir::new().unwrap();
    let pages = TempDir::new().unwrap();
    let file = write_page_file(pages.path(), "p2.json", &page(items(&["c"]), 2, 2));

    cmd(&dir)
        .args(["append", "banned"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing appended"));

    cmd(&dir).args(["show", "banned"]).assert().success().stdout(predicate::str::contains(
        "No cached entry for banned",
    ));
}

#[test]
fn test_cli_clear_all_keeps_previews() {
    let dir = TempDir::new().unwrap();
    let pages = TempDir::new().unwrap();
    let file = write_page_file(pages.path(), "p1.json", &page(items(&["a"]), 1, 1));

    cmd(&dir).args(["import", "unknown"]).arg(&file).assert().success();
    cmd(&dir).args(["set-preview", "slug-x", "https://img/x.jpg", "X"]).assert().success();
    cmd(&dir).args(["clear", "--all"]).assert().success();

    cmd(&dir)
        .args(["preview", "slug-x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X\thttps://img/x.jpg"));
    cmd(&dir)
        .args(["check", "unknown"])
        .assert()
        .success()
        .stdout(predicate::str::diff("invalid\n"));
}

#[test]
fn test_cli_clear_requires_target() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Specify a category or --all"));
}

#[test]
fn test_cli_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["show", "eastern"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_cli_rejects_bad_filter() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "asian", "--filter", "author:x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field"));
}

#[test]
fn test_cli_show_clears_expired_entry() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path(), DEFAULT_STORAGE_KEY);
    let mut state = StoreState::default();
    // Timestamp far in the past
    *state.caches.slot_mut(ContentCategory::Asian) =
        Some(EntryBuilder::new().items(items(&["a"])).timestamp(1_000).build());
    storage.save(&state).unwrap();

    cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("expired"));

    cmd(&dir)
        .args(["show", "asian"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cached entry for asian"));

    let on_disk = storage.load_checked().unwrap().unwrap();
    assert!(on_disk.caches.asian.is_none());
}

#[test]
fn test_cli_uses_env_cache_dir() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_content-cache"));
    cmd.env("CONTENT_CACHE_DIR", dir.path())
        .args(["set-preview", "s", "i.jpg", "N"])
        .assert()
        .success();

    let storage = FileStorage::new(dir.path(), DEFAULT_STORAGE_KEY);
    assert!(storage.path().exists());
}

#[test]
fn test_cli_custom_key_isolated() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).args(["--key", "other", "set-preview", "s", "i.jpg", "N"]).assert().success();

    cmd(&dir)
        .args(["preview", "s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No preview for s"));
    cmd(&dir)
        .args(["--key", "other", "preview", "s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N\ti.jpg"));
}
