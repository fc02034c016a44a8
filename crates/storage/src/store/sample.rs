// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{ROW_ID_COLUMN_NAME, Result, TableId, Value};
use rusqlite::{Connection, OptionalExtension};
use tracing::instrument;

use super::{UserdataStore, quote_ident, read_row, select_list};

impl UserdataStore {
	/// Return the user-column values of the lowest-row-id row, or
	/// synthetic example values when the table is empty. Never mutates
	/// the table.
	#[instrument(name = "userdata::get_a_sample_row", level = "trace", skip(conn), fields(table = %table))]
	pub fn get_a_sample_row(conn: &Connection, table: TableId) -> Result<Vec<Value>> {
		let columns = Self::get_columns(conn, table)?;
		let sql = format!(
			"SELECT {} FROM {} ORDER BY {} LIMIT 1",
			select_list(&columns),
			quote_ident(&table.physical_name()),
			quote_ident(ROW_ID_COLUMN_NAME)
		);
		let row = conn.query_row(&sql, [], |result| read_row(result, &columns)).optional()?;
		Ok(match row {
			Some(row) => row.values,
			None => columns.iter().map(|c| c.ty.example()).collect(),
		})
	}
}

#[cfg(test)]
mod tests {
	use gridbase_core::{Column, ColumnType, Date, RowId, Value};
	use gridbase_testing::{int_column, test_conn, text_column};

	use crate::UserdataStore;

	#[test]
	fn test_sample_row_from_data() {
		let conn = test_conn();
		let columns = vec![text_column("name"), int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();
		UserdataStore::insert_row(
			&conn,
			table_id,
			Some(RowId(1)),
			&columns,
			&[Value::Text("hello".to_string()), Value::Integer(9)],
		)
		.unwrap();

		let sample = UserdataStore::get_a_sample_row(&conn, table_id).unwrap();
		assert_eq!(sample, vec![Value::Text("hello".to_string()), Value::Integer(9)]);
	}

	#[test]
	fn test_sample_row_empty_table_gives_examples() {
		let conn = test_conn();
		let columns = vec![
			text_column("t"),
			int_column("i"),
			Column::new("f", ColumnType::Float),
			Column::new("b", ColumnType::Boolean),
			Column::new("d", ColumnType::Date),
		];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		let sample = UserdataStore::get_a_sample_row(&conn, table_id).unwrap();
		assert_eq!(
			sample,
			vec![
				Value::Text("foo".to_string()),
				Value::Integer(1),
				Value::Float(3.14),
				Value::Boolean(false),
				Value::Date(Date::new(2018, 1, 3).unwrap()),
			]
		);

		// Sampling an empty table must not write anything.
		assert_eq!(UserdataStore::count(&conn, table_id).unwrap(), 0);
	}
}
