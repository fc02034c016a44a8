// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Column, Result, ROW_ID_COLUMN_NAME, Row, RowId, TableId, Value};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use tracing::instrument;

use super::{UserdataStore, quote_ident, read_row, require_physical, select_list};

impl UserdataStore {
	/// Fetch a single row by its identifier.
	#[instrument(name = "userdata::get_row", level = "trace", skip(conn), fields(table = %table, row_id = %row_id))]
	pub fn get_row(conn: &Connection, table: TableId, row_id: RowId) -> Result<Option<Row>> {
		let columns = Self::get_columns(conn, table)?;
		let sql = format!(
			"SELECT {} FROM {} WHERE {} = ?1",
			select_list(&columns),
			quote_ident(&table.physical_name()),
			quote_ident(ROW_ID_COLUMN_NAME)
		);
		let row = conn.query_row(&sql, params![row_id.0], |result| read_row(result, &columns)).optional()?;
		Ok(row)
	}

	/// Insert one row, returning the resulting row identifier.
	///
	/// An explicit `row_id` is used verbatim (negative values included);
	/// `None` lets the identity mechanism assign the next identifier.
	#[instrument(name = "userdata::insert_row", level = "debug", skip(conn, columns, values), fields(table = %table))]
	pub fn insert_row(
		conn: &Connection,
		table: TableId,
		row_id: Option<RowId>,
		columns: &[Column],
		values: &[Value],
	) -> Result<RowId> {
		let physical = require_physical(conn, table)?;

		let mut names = Vec::with_capacity(columns.len() + 1);
		names.push(quote_ident(ROW_ID_COLUMN_NAME));
		names.extend(columns.iter().map(|c| quote_ident(&c.name)));
		let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{}", i)).collect();

		let sql = format!(
			"INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
			quote_ident(&physical),
			names.join(", "),
			placeholders.join(", "),
			quote_ident(ROW_ID_COLUMN_NAME)
		);

		// NULL in the row-id slot triggers auto-assignment.
		let mut bound = Vec::with_capacity(values.len() + 1);
		bound.push(match row_id {
			Some(id) => Value::Integer(id.0),
			None => Value::Null,
		});
		bound.extend(values.iter().cloned());

		let assigned = conn.query_row(&sql, params_from_iter(bound.iter()), |row| row.get::<_, i64>(0))?;
		Ok(RowId(assigned))
	}

	/// Replace all column values of the given row. Returns whether a row
	/// with that identifier existed.
	#[instrument(name = "userdata::update_row", level = "debug", skip(conn, columns, values), fields(table = %table, row_id = %row_id))]
	pub fn update_row(
		conn: &Connection,
		table: TableId,
		row_id: RowId,
		columns: &[Column],
		values: &[Value],
	) -> Result<bool> {
		let physical = require_physical(conn, table)?;
		if columns.is_empty() {
			return Ok(Self::get_row(conn, table, row_id)?.is_some());
		}

		let assignments: Vec<String> =
			columns.iter().enumerate().map(|(i, c)| format!("{} = ?{}", quote_ident(&c.name), i + 1)).collect();
		let sql = format!(
			"UPDATE {} SET {} WHERE {} = ?{}",
			quote_ident(&physical),
			assignments.join(", "),
			quote_ident(ROW_ID_COLUMN_NAME),
			columns.len() + 1
		);

		let mut bound: Vec<Value> = values.to_vec();
		bound.push(Value::Integer(row_id.0));

		let changed = conn.execute(&sql, params_from_iter(bound.iter()))?;
		Ok(changed > 0)
	}

	/// Delete the given row. Returns whether a row with that identifier
	/// existed.
	#[instrument(name = "userdata::delete_row", level = "debug", skip(conn), fields(table = %table, row_id = %row_id))]
	pub fn delete_row(conn: &Connection, table: TableId, row_id: RowId) -> Result<bool> {
		let physical = require_physical(conn, table)?;
		let sql =
			format!("DELETE FROM {} WHERE {} = ?1", quote_ident(&physical), quote_ident(ROW_ID_COLUMN_NAME));
		let changed = conn.execute(&sql, params![row_id.0])?;
		Ok(changed > 0)
	}
}

#[cfg(test)]
mod tests {
	use gridbase_core::{Column, ColumnType, Date, Row, RowId, Value};
	use gridbase_testing::{int_column, test_conn, text_column};

	use crate::UserdataStore;

	#[test]
	fn test_insert_and_get_row() {
		let conn = test_conn();
		let columns = vec![text_column("name"), int_column("age")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		let values = vec![Value::Text("alice".to_string()), Value::Integer(42)];
		let row_id = UserdataStore::insert_row(&conn, table_id, None, &columns, &values).unwrap();
		assert_eq!(row_id, RowId(1));

		let row = UserdataStore::get_row(&conn, table_id, row_id).unwrap().unwrap();
		assert_eq!(row, Row::new(row_id, values));
	}

	#[test]
	fn test_get_missing_row() {
		let conn = test_conn();
		let table_id = UserdataStore::create_table(&conn, &[int_column("n")]).unwrap();
		assert_eq!(UserdataStore::get_row(&conn, table_id, RowId(7)).unwrap(), None);
	}

	#[test]
	fn test_explicit_row_id_used_verbatim() {
		let conn = test_conn();
		let columns = vec![text_column("a")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		let assigned = UserdataStore::insert_row(
			&conn,
			table_id,
			Some(RowId(100)),
			&columns,
			&[Value::Text("x".to_string())],
		)
		.unwrap();
		assert_eq!(assigned, RowId(100));
	}

	#[test]
	fn test_negative_row_id_and_no_auto_collision() {
		let conn = test_conn();
		let columns = vec![text_column("a")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		let low = UserdataStore::insert_row(
			&conn,
			table_id,
			Some(RowId(-1)),
			&columns,
			&[Value::Text("low end".to_string())],
		)
		.unwrap();
		assert_eq!(low, RowId(-1));
		assert!(UserdataStore::get_row(&conn, table_id, RowId(-1)).unwrap().is_some());

		// Auto-assignment starts above zero and never lands on -1.
		let auto = UserdataStore::insert_row(&conn, table_id, None, &columns, &[Value::Text("auto".to_string())])
			.unwrap();
		assert_eq!(auto, RowId(1));
	}

	#[test]
	fn test_auto_ids_continue_after_explicit_high_id() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		UserdataStore::insert_row(&conn, table_id, Some(RowId(50)), &columns, &[Value::Integer(0)]).unwrap();
		let auto = UserdataStore::insert_row(&conn, table_id, None, &columns, &[Value::Integer(1)]).unwrap();
		assert_eq!(auto, RowId(51));
	}

	#[test]
	fn test_update_row() {
		let conn = test_conn();
		let columns = vec![text_column("name"), int_column("age")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();
		let row_id = UserdataStore::insert_row(
			&conn,
			table_id,
			None,
			&columns,
			&[Value::Text("old".to_string()), Value::Integer(1)],
		)
		.unwrap();

		let updated = UserdataStore::update_row(
			&conn,
			table_id,
			row_id,
			&columns,
			&[Value::Text("new".to_string()), Value::Null],
		)
		.unwrap();
		assert!(updated);

		let row = UserdataStore::get_row(&conn, table_id, row_id).unwrap().unwrap();
		assert_eq!(row.values, vec![Value::Text("new".to_string()), Value::Null]);
	}

	#[test]
	fn test_update_missing_row_returns_false() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		let updated =
			UserdataStore::update_row(&conn, table_id, RowId(99), &columns, &[Value::Integer(5)]).unwrap();
		assert!(!updated);
	}

	#[test]
	fn test_delete_row() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();
		let row_id = UserdataStore::insert_row(&conn, table_id, None, &columns, &[Value::Integer(1)]).unwrap();

		assert!(UserdataStore::delete_row(&conn, table_id, row_id).unwrap());
		assert!(!UserdataStore::delete_row(&conn, table_id, row_id).unwrap());
		assert_eq!(UserdataStore::get_row(&conn, table_id, row_id).unwrap(), None);
	}

	#[test]
	fn test_date_and_boolean_round_trip() {
		let conn = test_conn();
		let columns =
			vec![Column::new("when", ColumnType::Date), Column::new("flag", ColumnType::Boolean)];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		let values = vec![Value::Date(Date::new(2024, 2, 29).unwrap()), Value::Boolean(true)];
		let row_id = UserdataStore::insert_row(&conn, table_id, None, &columns, &values).unwrap();

		let row = UserdataStore::get_row(&conn, table_id, row_id).unwrap().unwrap();
		assert_eq!(row.values, values);
	}
}
