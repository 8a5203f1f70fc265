#![allow(dead_code)]

use kb_core::{BoardGateway, ColumnSpec, CreateTaskInput};
use kb_db::{SqliteGateway, connect_in_memory};

/// In-memory SQLite gateway with migrations run.
pub async fn create_test_gateway() -> SqliteGateway {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");
    SqliteGateway::new(pool)
}

pub fn column_specs(names: &[&str]) -> Vec<ColumnSpec> {
    names.iter().map(|name| ColumnSpec::new(*name)).collect()
}

pub fn task_input(title: &str, status: &str) -> CreateTaskInput {
    CreateTaskInput {
        title: title.to_string(),
        description: String::new(),
        status: status.to_string(),
    }
}

/// Board named "Sprint 1" with Todo/Doing/Done columns.
pub async fn seed_board(gateway: &SqliteGateway) -> kb_core::Board {
    gateway
        .create_board("Sprint 1", &column_specs(&["Todo", "Doing", "Done"]))
        .await
        .expect("Failed to seed board")
}
