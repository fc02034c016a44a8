// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Column, Result, TableId, Value};
use rusqlite::{Connection, params_from_iter};
use tracing::instrument;

use super::{UserdataStore, quote_ident, require_physical};

/// SQLite's default bind-parameter ceiling.
pub(crate) const MAX_BIND_PARAMS: usize = 999;

/// Multi-row VALUES insert, batched so no statement exceeds the bind
/// parameter limit. Returns the number of rows written.
pub(crate) fn bulk_insert(
	conn: &Connection,
	physical: &str,
	column_names: &[String],
	rows: &[Vec<Value>],
) -> Result<usize> {
	if rows.is_empty() || column_names.is_empty() {
		return Ok(0);
	}
	let ncols = column_names.len();
	let rows_per_batch = std::cmp::max(1, MAX_BIND_PARAMS / ncols);

	let quoted: Vec<String> = column_names.iter().map(|n| quote_ident(n)).collect();
	let row_placeholder = format!("({})", vec!["?"; ncols].join(", "));

	let mut written = 0;
	for chunk in rows.chunks(rows_per_batch) {
		let sql = format!(
			"INSERT INTO {} ({}) VALUES {}",
			quote_ident(physical),
			quoted.join(", "),
			vec![row_placeholder.as_str(); chunk.len()].join(", ")
		);
		let mut stmt = conn.prepare_cached(&sql)?;
		written += stmt.execute(params_from_iter(chunk.iter().flat_map(|row| row.iter())))?;
	}
	Ok(written)
}

impl UserdataStore {
	/// Append the given rows to the table. Existing rows are left alone,
	/// so chunked loads can call this repeatedly; row identifiers are
	/// assigned fresh by the identity mechanism.
	///
	/// Runs inside whatever transaction the caller holds; nothing is
	/// committed here.
	#[instrument(name = "userdata::insert_table_data", level = "debug", skip(conn, columns, rows), fields(table = %table, rows = rows.len()))]
	pub fn insert_table_data(
		conn: &Connection,
		table: TableId,
		columns: &[Column],
		rows: &[Vec<Value>],
	) -> Result<()> {
		let physical = require_physical(conn, table)?;
		let names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
		bulk_insert(conn, &physical, &names, rows)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use gridbase_core::{RowId, Value};
	use gridbase_testing::{int_column, test_conn, text_column};

	use crate::UserdataStore;

	#[test]
	fn test_insert_table_data() {
		let conn = test_conn();
		let columns = vec![text_column("name"), int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		let rows: Vec<Vec<Value>> = (1..=5)
			.map(|i| vec![Value::Text(format!("row {i}")), Value::Integer(i)])
			.collect();
		UserdataStore::insert_table_data(&conn, table_id, &columns, &rows).unwrap();

		assert_eq!(UserdataStore::count(&conn, table_id).unwrap(), 5);
		let first = UserdataStore::get_row(&conn, table_id, RowId(1)).unwrap().unwrap();
		assert_eq!(first.values, vec![Value::Text("row 1".to_string()), Value::Integer(1)]);
	}

	#[test]
	fn test_insert_table_data_appends_to_existing_rows() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();
		UserdataStore::insert_row(&conn, table_id, None, &columns, &[Value::Integer(99)]).unwrap();

		UserdataStore::insert_table_data(&conn, table_id, &columns, &[vec![Value::Integer(1)]]).unwrap();

		assert_eq!(UserdataStore::count(&conn, table_id).unwrap(), 2);
		let first = UserdataStore::get_row(&conn, table_id, RowId(1)).unwrap().unwrap();
		assert_eq!(first.values, vec![Value::Integer(99)]);
		let second = UserdataStore::get_row(&conn, table_id, RowId(2)).unwrap().unwrap();
		assert_eq!(second.values, vec![Value::Integer(1)]);
	}

	#[test]
	fn test_chunked_load_accumulates() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		for chunk in (0..30).collect::<Vec<i64>>().chunks(10) {
			let rows: Vec<Vec<Value>> = chunk.iter().map(|i| vec![Value::Integer(*i)]).collect();
			UserdataStore::insert_table_data(&conn, table_id, &columns, &rows).unwrap();
		}
		assert_eq!(UserdataStore::count(&conn, table_id).unwrap(), 30);
	}

	#[test]
	fn test_bulk_load_spanning_many_batches() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		// 2500 single-column rows forces several statement batches.
		let rows: Vec<Vec<Value>> = (0..2500).map(|i| vec![Value::Integer(i)]).collect();
		UserdataStore::insert_table_data(&conn, table_id, &columns, &rows).unwrap();
		assert_eq!(UserdataStore::count(&conn, table_id).unwrap(), 2500);
	}

	#[test]
	fn test_rolled_back_bulk_load_is_invisible() {
		let mut conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		let tx = conn.transaction().unwrap();
		let rows: Vec<Vec<Value>> = (0..10).map(|i| vec![Value::Integer(i)]).collect();
		UserdataStore::insert_table_data(&tx, table_id, &columns, &rows).unwrap();
		tx.rollback().unwrap();

		assert_eq!(UserdataStore::count(&conn, table_id).unwrap(), 0);
	}
}
