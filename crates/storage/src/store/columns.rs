// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Column, ColumnType, Error, Result, ROW_ID_COLUMN_NAME, TableId};
use rusqlite::{Connection, params};
use tracing::instrument;

use super::UserdataStore;

impl UserdataStore {
	/// Reconstruct the abstract column list from the physical table.
	///
	/// Re-reads physical metadata on every call rather than caching,
	/// since upsert staging and outside tools may touch the schema.
	/// Physical column order is preserved; the reserved row-id column
	/// is excluded. A physical type with no semantic mapping means the
	/// table was altered externally and is `UnsupportedType`.
	#[instrument(name = "userdata::get_columns", level = "trace", skip(conn), fields(table = %table))]
	pub fn get_columns(conn: &Connection, table: TableId) -> Result<Vec<Column>> {
		let physical = table.physical_name();

		let mut stmt = conn.prepare("SELECT name, type FROM pragma_table_info(?1) ORDER BY cid")?;
		let physical_columns = stmt
			.query_map(params![physical], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		// Every table the adapter creates has at least the row-id
		// column, so an empty result means the table is gone.
		if physical_columns.is_empty() {
			return Err(Error::TableNotFound {
				table_id: table,
			});
		}

		let mut columns = Vec::with_capacity(physical_columns.len() - 1);
		for (name, sql_type) in physical_columns {
			if name == ROW_ID_COLUMN_NAME {
				continue;
			}
			match ColumnType::from_sql_type(&sql_type) {
				Some(ty) => columns.push(Column::new(name, ty)),
				None => {
					return Err(Error::UnsupportedType {
						column: name,
						sql_type,
					});
				}
			}
		}
		Ok(columns)
	}
}
