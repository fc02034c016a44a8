// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod bounds;
mod bulk;
mod columns;
mod create;
mod drop;
mod page;
mod row;
mod sample;
mod sequence;
mod stream;
mod upsert;

use gridbase_core::{Column, Error, Result, ROW_ID_COLUMN_NAME, Row, RowId, TableId, Value};
use rusqlite::Connection;
pub use stream::RowStream;

/// The userdata storage adapter.
///
/// All operations take a `&Connection`; a `rusqlite::Transaction` derefs
/// to one, so callers decide where transaction boundaries sit. The adapter
/// itself never begins or commits a transaction.
pub struct UserdataStore;

/// Quote an identifier for embedding in dynamically assembled SQL.
/// Embedded double quotes are doubled per the SQL standard.
pub(crate) fn quote_ident(name: &str) -> String {
	format!("\"{}\"", name.replace('"', "\"\""))
}

/// The select list for reading rows: the reserved row-id column first,
/// then the user columns in order.
pub(crate) fn select_list(columns: &[Column]) -> String {
	let mut parts = Vec::with_capacity(columns.len() + 1);
	parts.push(quote_ident(ROW_ID_COLUMN_NAME));
	parts.extend(columns.iter().map(|c| quote_ident(&c.name)));
	parts.join(", ")
}

/// Whether a physical table of the given name exists.
pub(crate) fn physical_exists(conn: &Connection, physical: &str) -> Result<bool> {
	let exists = conn.query_row(
		"SELECT EXISTS (SELECT 1 FROM sqlite_schema WHERE type = 'table' AND name = ?1)",
		rusqlite::params![physical],
		|row| row.get(0),
	)?;
	Ok(exists)
}

/// Resolve a table id to its physical name, failing with `TableNotFound`
/// when the physical table is missing.
pub(crate) fn require_physical(conn: &Connection, table: TableId) -> Result<String> {
	let physical = table.physical_name();
	if !physical_exists(conn, &physical)? {
		return Err(Error::TableNotFound {
			table_id: table,
		});
	}
	Ok(physical)
}

/// Read one result row (row id first, then the user columns) into a [`Row`].
pub(crate) fn read_row(result: &rusqlite::Row<'_>, columns: &[Column]) -> rusqlite::Result<Row> {
	let row_id = RowId(result.get(0)?);
	let mut values = Vec::with_capacity(columns.len());
	for (i, column) in columns.iter().enumerate() {
		let raw = result.get_ref(i + 1)?;
		let value = Value::from_sql(column.ty, raw)
			.map_err(|e| rusqlite::Error::FromSqlConversionFailure(i + 1, raw.data_type(), Box::new(e)))?;
		values.push(value);
	}
	Ok(Row::new(row_id, values))
}
