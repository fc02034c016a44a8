// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::Result;
use gridbase_storage::UserdataStore;
use rusqlite::{Connection, params};
use tracing::instrument;
use uuid::Uuid;

use crate::{Catalog, schema::TABLES};

impl Catalog {
	/// Remove a table: catalog entry and physical storage together.
	#[instrument(name = "catalog::delete_table", level = "debug", skip(conn), fields(owner = %owner_id, name))]
	pub fn delete_table(conn: &Connection, owner_id: Uuid, name: &str) -> Result<()> {
		let table = Self::get_table(conn, owner_id, name)?;

		let sql = format!("DELETE FROM {TABLES} WHERE table_id = ?1");
		conn.execute(&sql, params![table.table_id.to_string()])?;
		UserdataStore::drop_table(conn, table.table_id)?;
		Ok(())
	}
}
