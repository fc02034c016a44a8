// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Column, DataLicence, Error, Result, Table};
use gridbase_storage::UserdataStore;
use rusqlite::{Connection, params};
use tracing::instrument;
use uuid::Uuid;

use crate::{Catalog, schema::TABLES, unix_now};

const MAX_TABLE_NAME_LENGTH: usize = 200;

/// An ASCII letter followed by letters, digits, hyphens or underscores.
fn valid_table_name(name: &str) -> bool {
	let mut chars = name.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	name.len() <= MAX_TABLE_NAME_LENGTH
		&& first.is_ascii_alphabetic()
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Catalog {
	/// Create a table: physical storage plus its catalog entry. The
	/// name must be unique per owner.
	#[instrument(name = "catalog::create_table", level = "debug", skip(conn, columns, description), fields(owner = %owner_id, name))]
	pub fn create_table(
		conn: &Connection,
		owner_id: Uuid,
		name: &str,
		is_public: bool,
		description: &str,
		licence: DataLicence,
		columns: &[Column],
	) -> Result<Table> {
		if !valid_table_name(name) {
			return Err(Error::InvalidTableName {
				name: name.to_string(),
			});
		}
		if Self::table_exists(conn, owner_id, name)? {
			return Err(Error::TableNameAlreadyExists {
				name: name.to_string(),
			});
		}

		let table_id = UserdataStore::create_table(conn, columns)?;
		let now = unix_now();
		conn.execute(
			&format!(
				"INSERT INTO {TABLES} (table_id, owner_id, name, is_public, description, licence, \
				 created_at, last_changed_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
			),
			params![
				table_id.to_string(),
				owner_id.to_string(),
				name,
				is_public,
				description,
				licence.code(),
				now,
				now
			],
		)?;

		Ok(Table {
			table_id,
			owner_id,
			name: name.to_string(),
			is_public,
			description: description.to_string(),
			licence,
			created_at: now,
			last_changed_at: now,
			columns: columns.to_vec(),
			row_count: 0,
		})
	}
}

#[cfg(test)]
mod tests {
	use gridbase_core::{DataLicence, Error};
	use gridbase_storage::UserdataStore;
	use gridbase_testing::{int_column, owner, test_conn, text_column};

	use crate::Catalog;

	#[test]
	fn test_create_table() {
		let conn = test_conn();
		Catalog::ensure_catalog(&conn).unwrap();

		let columns = vec![text_column("name"), int_column("age")];
		let table = Catalog::create_table(
			&conn,
			owner(),
			"people",
			true,
			"some people",
			DataLicence::Pddl,
			&columns,
		)
		.unwrap();

		assert_eq!(table.name, "people");
		assert_eq!(table.columns, columns);
		assert_eq!(table.row_count, 0);
		assert!(UserdataStore::table_exists(&conn, table.table_id).unwrap());
	}

	#[test]
	fn test_duplicate_name_rejected_per_owner() {
		let conn = test_conn();
		Catalog::ensure_catalog(&conn).unwrap();
		let alice = owner();
		let bob = owner();
		let columns = vec![int_column("n")];

		Catalog::create_table(&conn, alice, "nums", true, "", DataLicence::Unknown, &columns).unwrap();
		let err = Catalog::create_table(&conn, alice, "nums", true, "", DataLicence::Unknown, &columns)
			.unwrap_err();
		assert!(matches!(err, Error::TableNameAlreadyExists { .. }));

		// Another owner can reuse the name.
		Catalog::create_table(&conn, bob, "nums", true, "", DataLicence::Unknown, &columns).unwrap();
	}

	#[test]
	fn test_invalid_names_rejected() {
		let conn = test_conn();
		Catalog::ensure_catalog(&conn).unwrap();
		let columns = vec![int_column("n")];

		for name in ["", "1numbers", "has space", "semi;colon", &"x".repeat(201)] {
			let err = Catalog::create_table(&conn, owner(), name, true, "", DataLicence::Unknown, &columns)
				.unwrap_err();
			assert!(matches!(err, Error::InvalidTableName { .. }), "{name:?}");
		}
	}

	#[test]
	fn test_hyphens_and_underscores_allowed() {
		let conn = test_conn();
		Catalog::ensure_catalog(&conn).unwrap();
		Catalog::create_table(
			&conn,
			owner(),
			"my-table_2",
			false,
			"",
			DataLicence::Unknown,
			&[int_column("n")],
		)
		.unwrap();
	}
}
