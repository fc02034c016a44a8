// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Error, Result, Table, TableId};
use rusqlite::{Connection, params};
use tracing::instrument;

use crate::{Catalog, schema::TABLES, unix_now};

impl Catalog {
	/// Write the table's mutable metadata (name, visibility,
	/// description, licence) back to the catalog. Bumps
	/// `last_changed_at`.
	#[instrument(name = "catalog::update_table", level = "debug", skip(conn, table), fields(table = %table.table_id))]
	pub fn update_table(conn: &Connection, table: &Table) -> Result<()> {
		let sql = format!(
			"UPDATE {TABLES} SET name = ?1, is_public = ?2, description = ?3, licence = ?4, \
			 last_changed_at = ?5 WHERE table_id = ?6"
		);
		let changed = conn.execute(
			&sql,
			params![
				table.name,
				table.is_public,
				table.description,
				table.licence.code(),
				unix_now(),
				table.table_id.to_string()
			],
		)?;
		if changed == 0 {
			return Err(Error::TableNotFound {
				table_id: table.table_id,
			});
		}
		Ok(())
	}

	/// Bump `last_changed_at`, for callers that just wrote row data.
	#[instrument(name = "catalog::mark_table_changed", level = "trace", skip(conn), fields(table = %table_id))]
	pub fn mark_table_changed(conn: &Connection, table_id: TableId) -> Result<()> {
		let sql = format!("UPDATE {TABLES} SET last_changed_at = ?1 WHERE table_id = ?2");
		let changed = conn.execute(&sql, params![unix_now(), table_id.to_string()])?;
		if changed == 0 {
			return Err(Error::TableNotFound {
				table_id,
			});
		}
		Ok(())
	}
}
