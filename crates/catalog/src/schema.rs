// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{DataLicence, Result, Table, TableId};
use rusqlite::{Connection, types::Type};
use tracing::instrument;
use uuid::Uuid;

use crate::Catalog;

pub(crate) const TABLES: &str = "gridbase_tables";

pub(crate) const META_COLUMNS: &str =
	"table_id, owner_id, name, is_public, description, licence, created_at, last_changed_at";

impl Catalog {
	/// Create the catalog's own tables if they do not exist yet. Call
	/// once per database before any other catalog operation.
	#[instrument(name = "catalog::ensure_catalog", level = "debug", skip(conn))]
	pub fn ensure_catalog(conn: &Connection) -> Result<()> {
		conn.execute_batch(
			"CREATE TABLE IF NOT EXISTS gridbase_tables (
				table_id TEXT PRIMARY KEY,
				owner_id TEXT NOT NULL,
				name TEXT NOT NULL,
				is_public INTEGER NOT NULL,
				description TEXT NOT NULL,
				licence INTEGER NOT NULL,
				created_at INTEGER NOT NULL,
				last_changed_at INTEGER NOT NULL,
				UNIQUE (owner_id, name)
			);
			CREATE INDEX IF NOT EXISTS gridbase_tables_owner_idx ON gridbase_tables (owner_id);",
		)?;
		Ok(())
	}
}

fn uuid_at(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Uuid> {
	let text: String = row.get(index)?;
	Uuid::parse_str(&text).map_err(|err| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(err)))
}

/// A metadata row, without live columns or row count attached.
pub(crate) fn read_table_meta(row: &rusqlite::Row) -> rusqlite::Result<Table> {
	let licence_code: i64 = row.get(5)?;
	Ok(Table {
		table_id: TableId(uuid_at(row, 0)?),
		owner_id: uuid_at(row, 1)?,
		name: row.get(2)?,
		is_public: row.get(3)?,
		description: row.get(4)?,
		licence: DataLicence::from_code(licence_code).unwrap_or(DataLicence::Unknown),
		created_at: row.get(6)?,
		last_changed_at: row.get(7)?,
		columns: Vec::new(),
		row_count: 0,
	})
}
