use crate::Config;
use crate::tests::EnvGuard;

use googletest::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn given_no_config_file_when_loading_then_defaults_apply() {
    let dir = TempDir::new().unwrap();
    let _guard = EnvGuard::set("KANBAN_CONFIG_DIR", dir.path().to_str().unwrap());
    let _db = EnvGuard::remove("KANBAN_DATABASE_PATH");
    let _level = EnvGuard::remove("KANBAN_LOG_LEVEL");

    let config = Config::load().unwrap();

    assert_that!(config.database.path, eq("boards.db"));
    assert_that!(config.logging.level.0, eq(log::LevelFilter::Info));
    assert_that!(config.logging.dir, eq("log"));
}

#[test]
#[serial]
fn given_config_toml_when_loading_then_values_are_read() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
          [database]
          path = "/tmp/kanban/boards.db"

          [logging]
          level = "debug"
          dir = "logs"
          "#,
    )
    .unwrap();
    let _guard = EnvGuard::set("KANBAN_CONFIG_DIR", dir.path().to_str().unwrap());
    let _db = EnvGuard::remove("KANBAN_DATABASE_PATH");
    let _level = EnvGuard::remove("KANBAN_LOG_LEVEL");

    let config = Config::load().unwrap();

    assert_that!(config.database.path, eq("/tmp/kanban/boards.db"));
    assert_that!(config.logging.level.0, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.dir, eq("logs"));
}

#[test]
#[serial]
fn given_env_overrides_when_loading_then_they_win_over_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
          [database]
          path = "file.db"
          "#,
    )
    .unwrap();
    let _guard = EnvGuard::set("KANBAN_CONFIG_DIR", dir.path().to_str().unwrap());
    let _db = EnvGuard::set("KANBAN_DATABASE_PATH", "override.db");
    let _level = EnvGuard::set("KANBAN_LOG_LEVEL", "trace");

    let config = Config::load().unwrap();

    assert_that!(config.database.path, eq("override.db"));
    assert_that!(config.logging.level.0, eq(log::LevelFilter::Trace));
}

#[test]
#[serial]
fn given_relative_database_path_when_resolving_then_it_lands_in_config_dir() {
    let dir = TempDir::new().unwrap();
    let _guard = EnvGuard::set("KANBAN_CONFIG_DIR", dir.path().to_str().unwrap());
    let _db = EnvGuard::remove("KANBAN_DATABASE_PATH");

    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    assert_that!(path, eq(&dir.path().join("boards.db")));
}

#[test]
#[serial]
fn given_unknown_log_level_when_loading_then_it_falls_back_to_info() {
    let dir = TempDir::new().unwrap();
    let _guard = EnvGuard::set("KANBAN_CONFIG_DIR", dir.path().to_str().unwrap());
    let _level = EnvGuard::set("KANBAN_LOG_LEVEL", "shouting");
    let _db = EnvGuard::remove("KANBAN_DATABASE_PATH");

    let config = Config::load().unwrap();

    assert_that!(config.logging.level.0, eq(log::LevelFilter::Info));
}
