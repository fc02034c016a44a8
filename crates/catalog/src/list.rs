// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Result, Table};
use gridbase_storage::UserdataStore;
use rusqlite::{Connection, params};
use tracing::instrument;
use uuid::Uuid;

use crate::{
	Catalog,
	schema::{META_COLUMNS, TABLES, read_table_meta},
};

impl Catalog {
	/// All tables belonging to an owner, ordered by name, with live
	/// columns and row counts attached. `include_private` admits the
	/// owner's non-public tables.
	#[instrument(name = "catalog::tables_for_owner", level = "trace", skip(conn), fields(owner = %owner_id, include_private))]
	pub fn tables_for_owner(conn: &Connection, owner_id: Uuid, include_private: bool) -> Result<Vec<Table>> {
		let sql = format!(
			"SELECT {META_COLUMNS} FROM {TABLES} \
			 WHERE owner_id = ?1 AND (is_public OR ?2) ORDER BY name"
		);
		let mut stmt = conn.prepare(&sql)?;
		let metas: Vec<Table> = stmt
			.query_map(params![owner_id.to_string(), include_private], read_table_meta)?
			.collect::<rusqlite::Result<_>>()?;

		let mut tables = Vec::with_capacity(metas.len());
		for mut table in metas {
			table.columns = UserdataStore::get_columns(conn, table.table_id)?;
			table.row_count = UserdataStore::count(conn, table.table_id)?;
			tables.push(table);
		}
		Ok(tables)
	}
}

#[cfg(test)]
mod tests {
	use gridbase_core::DataLicence;
	use gridbase_testing::{int_column, owner, test_conn};

	use crate::Catalog;

	#[test]
	fn test_tables_for_owner_ordered_by_name() {
		let conn = test_conn();
		Catalog::ensure_catalog(&conn).unwrap();
		let alice = owner();
		let columns = vec![int_column("n")];
		for name in ["zebra", "aardvark", "moose"] {
			Catalog::create_table(&conn, alice, name, true, "", DataLicence::Unknown, &columns).unwrap();
		}
		Catalog::create_table(&conn, owner(), "other", true, "", DataLicence::Unknown, &columns).unwrap();

		let names: Vec<String> = Catalog::tables_for_owner(&conn, alice, true)
			.unwrap()
			.into_iter()
			.map(|t| t.name)
			.collect();
		assert_eq!(names, vec!["aardvark", "moose", "zebra"]);
	}

	#[test]
	fn test_private_tables_are_filtered() {
		let conn = test_conn();
		Catalog::ensure_catalog(&conn).unwrap();
		let alice = owner();
		let columns = vec![int_column("n")];
		Catalog::create_table(&conn, alice, "open", true, "", DataLicence::Unknown, &columns).unwrap();
		Catalog::create_table(&conn, alice, "secret", false, "", DataLicence::Unknown, &columns).unwrap();

		let public: Vec<String> = Catalog::tables_for_owner(&conn, alice, false)
			.unwrap()
			.into_iter()
			.map(|t| t.name)
			.collect();
		assert_eq!(public, vec!["open"]);

		assert_eq!(Catalog::tables_for_owner(&conn, alice, true).unwrap().len(), 2);
	}

	#[test]
	fn test_owner_with_no_tables() {
		let conn = test_conn();
		Catalog::ensure_catalog(&conn).unwrap();
		assert!(Catalog::tables_for_owner(&conn, owner(), true).unwrap().is_empty());
	}
}
