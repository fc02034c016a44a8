// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashSet;

use gridbase_core::{Column, Error, Result, ROW_ID_COLUMN_NAME, TableId};
use rusqlite::Connection;
use tracing::instrument;

use super::{UserdataStore, quote_ident};

impl UserdataStore {
	/// Create the physical storage for a new table and return its fresh
	/// identity.
	///
	/// The physical name derives from the generated identifier, never
	/// from a user-chosen name, so later renames are pure metadata. The
	/// reserved row-id column is an `INTEGER PRIMARY KEY AUTOINCREMENT`,
	/// which gives monotonically increasing auto-assigned identifiers
	/// that never collide with explicitly supplied ones. Creation is a
	/// single DDL statement; on failure no partial table is left behind.
	#[instrument(name = "userdata::create_table", level = "debug", skip(conn, columns), fields(columns = columns.len()))]
	pub fn create_table(conn: &Connection, columns: &[Column]) -> Result<TableId> {
		let mut seen: HashSet<String> = HashSet::with_capacity(columns.len() + 1);
		seen.insert(ROW_ID_COLUMN_NAME.to_string());
		for column in columns {
			if !seen.insert(column.name.to_ascii_lowercase()) {
				return Err(Error::DuplicateColumnName {
					name: column.name.clone(),
				});
			}
		}

		let table_id = TableId::generate();

		let mut ddl = format!(
			"CREATE TABLE {} ({} INTEGER PRIMARY KEY AUTOINCREMENT",
			quote_ident(&table_id.physical_name()),
			quote_ident(ROW_ID_COLUMN_NAME)
		);
		for column in columns {
			ddl.push_str(", ");
			ddl.push_str(&quote_ident(&column.name));
			ddl.push(' ');
			ddl.push_str(column.ty.sql_type());
		}
		ddl.push(')');

		conn.execute(&ddl, [])?;
		Ok(table_id)
	}
}
