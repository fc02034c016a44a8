// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Result, TableId};
use rusqlite::Connection;
use tracing::instrument;

use super::{UserdataStore, physical_exists, quote_ident, require_physical};

impl UserdataStore {
	/// Drop a table's physical storage.
	///
	/// Fails with `TableNotFound` when the physical table does not
	/// exist; the caller decides whether that is fatal.
	#[instrument(name = "userdata::drop_table", level = "debug", skip(conn), fields(table = %table))]
	pub fn drop_table(conn: &Connection, table: TableId) -> Result<()> {
		let physical = require_physical(conn, table)?;
		conn.execute(&format!("DROP TABLE {}", quote_ident(&physical)), [])?;
		Ok(())
	}

	/// Whether physical storage exists for the given table identity.
	pub fn table_exists(conn: &Connection, table: TableId) -> Result<bool> {
		physical_exists(conn, &table.physical_name())
	}
}

#[cfg(test)]
mod tests {
	use gridbase_core::{Error, TableId};
	use gridbase_testing::{int_column, test_conn};

	use crate::UserdataStore;

	#[test]
	fn test_drop_table() {
		let conn = test_conn();
		let table_id = UserdataStore::create_table(&conn, &[int_column("n")]).unwrap();

		UserdataStore::drop_table(&conn, table_id).unwrap();

		assert!(!UserdataStore::table_exists(&conn, table_id).unwrap());
	}

	#[test]
	fn test_drop_missing_table() {
		let conn = test_conn();
		let table_id = TableId::generate();

		let err = UserdataStore::drop_table(&conn, table_id).unwrap_err();
		assert!(matches!(err, Error::TableNotFound { table_id: t } if t == table_id));
	}

	#[test]
	fn test_drop_twice_fails_the_second_time() {
		let conn = test_conn();
		let table_id = UserdataStore::create_table(&conn, &[int_column("n")]).unwrap();

		UserdataStore::drop_table(&conn, table_id).unwrap();
		assert!(matches!(
			UserdataStore::drop_table(&conn, table_id),
			Err(Error::TableNotFound { .. })
		));
	}
}
