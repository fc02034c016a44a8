// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{ROW_ID_COLUMN_NAME, Result, RowId, TableId};
use rusqlite::Connection;
use tracing::instrument;

use super::{UserdataStore, quote_ident, require_physical};

impl UserdataStore {
	/// Smallest and largest row identifiers present, or `(None, None)`
	/// for an empty table.
	#[instrument(name = "userdata::row_id_bounds", level = "trace", skip(conn), fields(table = %table))]
	pub fn row_id_bounds(conn: &Connection, table: TableId) -> Result<(Option<RowId>, Option<RowId>)> {
		let physical = require_physical(conn, table)?;
		let id = quote_ident(ROW_ID_COLUMN_NAME);
		let sql = format!("SELECT min({id}), max({id}) FROM {}", quote_ident(&physical));
		let (min, max) = conn.query_row(&sql, [], |row| {
			Ok((row.get::<_, Option<i64>>(0)?, row.get::<_, Option<i64>>(1)?))
		})?;
		Ok((min.map(RowId), max.map(RowId)))
	}

	/// Exact number of rows in the table.
	#[instrument(name = "userdata::count", level = "trace", skip(conn), fields(table = %table))]
	pub fn count(conn: &Connection, table: TableId) -> Result<u64> {
		let physical = require_physical(conn, table)?;
		let sql = format!("SELECT count(*) FROM {}", quote_ident(&physical));
		let n = conn.query_row(&sql, [], |row| row.get::<_, i64>(0))?;
		Ok(n as u64)
	}
}
