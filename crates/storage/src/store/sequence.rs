// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{ROW_ID_COLUMN_NAME, Result, TableId};
use rusqlite::{Connection, params};
use tracing::instrument;

use super::{UserdataStore, quote_ident, require_physical};

impl UserdataStore {
	/// Ratchet the identity counter up to at least the current maximum
	/// row identifier. The counter is never lowered, so identifiers of
	/// deleted rows are not reissued.
	#[instrument(name = "userdata::repair_sequence", level = "debug", skip(conn), fields(table = %table))]
	pub fn repair_sequence(conn: &Connection, table: TableId) -> Result<()> {
		let physical = require_physical(conn, table)?;
		Self::ratchet_sequence(conn, &physical)
	}

	pub(crate) fn ratchet_sequence(conn: &Connection, physical: &str) -> Result<()> {
		// The sequence row only materialises after the first
		// auto-assigned insert, so seed it before ratcheting.
		conn.execute(
			"INSERT INTO sqlite_sequence (name, seq) SELECT ?1, 0 \
			 WHERE NOT EXISTS (SELECT 1 FROM sqlite_sequence WHERE name = ?1)",
			params![physical],
		)?;
		let sql = format!(
			"UPDATE sqlite_sequence SET seq = max(seq, (SELECT coalesce(max({}), 0) FROM {})) WHERE name = ?1",
			quote_ident(ROW_ID_COLUMN_NAME),
			quote_ident(physical)
		);
		conn.execute(&sql, params![physical])?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use gridbase_core::{RowId, Value};
	use gridbase_testing::{int_column, test_conn};

	use crate::UserdataStore;

	#[test]
	fn test_repair_after_explicit_inserts() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		// Explicit ids bypass the counter; repair catches it up.
		UserdataStore::insert_row(&conn, table_id, Some(RowId(7)), &columns, &[Value::Integer(0)]).unwrap();
		UserdataStore::repair_sequence(&conn, table_id).unwrap();

		let auto = UserdataStore::insert_row(&conn, table_id, None, &columns, &[Value::Integer(0)]).unwrap();
		assert_eq!(auto, RowId(8));
	}

	#[test]
	fn test_repair_never_lowers_the_counter() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		for i in 1..=10 {
			UserdataStore::insert_row(&conn, table_id, None, &columns, &[Value::Integer(i)]).unwrap();
		}
		for id in 4..=10 {
			UserdataStore::delete_row(&conn, table_id, RowId(id)).unwrap();
		}
		UserdataStore::repair_sequence(&conn, table_id).unwrap();

		// Max surviving id is 3, but 10 was already issued.
		let auto = UserdataStore::insert_row(&conn, table_id, None, &columns, &[Value::Integer(11)]).unwrap();
		assert_eq!(auto, RowId(11));
	}

	#[test]
	fn test_repair_on_empty_table() {
		let conn = test_conn();
		let columns = vec![int_column("n")];
		let table_id = UserdataStore::create_table(&conn, &columns).unwrap();

		UserdataStore::repair_sequence(&conn, table_id).unwrap();
		let auto = UserdataStore::insert_row(&conn, table_id, None, &columns, &[Value::Integer(1)]).unwrap();
		assert_eq!(auto, RowId(1));
	}
}
