// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Shared helpers for tests across the workspace.

use gridbase_core::{Column, ColumnType, TableId, Value};
use gridbase_storage::{SqliteConfig, UserdataStore};
use once_cell::sync::Lazy;
use rusqlite::Connection;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.init();
});

/// Install a global tracing subscriber driven by `RUST_LOG`. Safe to
/// call from every test.
pub fn init_tracing() {
	Lazy::force(&TRACING);
}

/// A fresh in-memory database.
pub fn test_conn() -> Connection {
	init_tracing();
	SqliteConfig::in_memory().open().expect("open in-memory database")
}

pub fn int_column(name: &str) -> Column {
	Column::new(name, ColumnType::Integer)
}

pub fn text_column(name: &str) -> Column {
	Column::new(name, ColumnType::Text)
}

/// A fresh owner id for catalog tests.
pub fn owner() -> Uuid {
	Uuid::new_v4()
}

/// A table with a single integer column `n` holding rows 1 through 10,
/// row ids matching the values.
pub fn seed_ten_rows(conn: &Connection) -> TableId {
	let columns = vec![int_column("n")];
	let table_id = UserdataStore::create_table(conn, &columns).expect("create table");
	for i in 1..=10 {
		UserdataStore::insert_row(conn, table_id, None, &columns, &[Value::Integer(i)])
			.expect("insert row");
	}
	table_id
}
