// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Error, Result, Table, TableId};
use gridbase_storage::UserdataStore;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::instrument;
use uuid::Uuid;

use crate::{
	Catalog,
	schema::{META_COLUMNS, TABLES, read_table_meta},
};

fn attach_live_state(conn: &Connection, mut table: Table) -> Result<Table> {
	table.columns = UserdataStore::get_columns(conn, table.table_id)?;
	table.row_count = UserdataStore::count(conn, table.table_id)?;
	Ok(table)
}

impl Catalog {
	/// Look a table up by owner and name, with live columns and row
	/// count attached.
	#[instrument(name = "catalog::get_table", level = "trace", skip(conn), fields(owner = %owner_id, name))]
	pub fn get_table(conn: &Connection, owner_id: Uuid, name: &str) -> Result<Table> {
		let sql = format!("SELECT {META_COLUMNS} FROM {TABLES} WHERE owner_id = ?1 AND name = ?2");
		let meta = conn
			.query_row(&sql, params![owner_id.to_string(), name], read_table_meta)
			.optional()?
			.ok_or_else(|| Error::TableNameNotFound {
				owner: owner_id,
				name: name.to_string(),
			})?;
		attach_live_state(conn, meta)
	}

	/// Look a table up by its identifier.
	#[instrument(name = "catalog::get_table_by_id", level = "trace", skip(conn), fields(table = %table_id))]
	pub fn get_table_by_id(conn: &Connection, table_id: TableId) -> Result<Table> {
		let sql = format!("SELECT {META_COLUMNS} FROM {TABLES} WHERE table_id = ?1");
		let meta = conn
			.query_row(&sql, params![table_id.to_string()], read_table_meta)
			.optional()?
			.ok_or(Error::TableNotFound {
				table_id,
			})?;
		attach_live_state(conn, meta)
	}

	/// Whether the owner already has a table of that name.
	#[instrument(name = "catalog::table_exists", level = "trace", skip(conn), fields(owner = %owner_id, name))]
	pub fn table_exists(conn: &Connection, owner_id: Uuid, name: &str) -> Result<bool> {
		let sql = format!("SELECT EXISTS (SELECT 1 FROM {TABLES} WHERE owner_id = ?1 AND name = ?2)");
		Ok(conn.query_row(&sql, params![owner_id.to_string(), name], |row| row.get(0))?)
	}
}
