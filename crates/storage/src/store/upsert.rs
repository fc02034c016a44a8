// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Column, ROW_ID_COLUMN_NAME, Result, RowId, TableId, Value};
use rusqlite::Connection;
use tracing::instrument;
use uuid::Uuid;

use super::{UserdataStore, bulk::bulk_insert, quote_ident, require_physical};

fn key_join(main: &str, staging: &str, key: &[String]) -> String {
	key.iter()
		.map(|k| format!("{}.{} = {}.{}", quote_ident(staging), quote_ident(k), quote_ident(main), quote_ident(k)))
		.collect::<Vec<_>>()
		.join(" AND ")
}

impl UserdataStore {
	/// Reconcile the table with `rows` so that afterwards the table
	/// contains exactly the incoming data, matched by the `key` columns
	/// (the row-id column when `key` is empty).
	///
	/// Rows whose key matches an existing row are updated in place and
	/// keep their row identifier. Existing rows with no incoming match
	/// are deleted. Remaining incoming rows are inserted, with their
	/// explicit identifier when they carry one and a freshly assigned
	/// identifier otherwise. Fresh identifiers are assigned in input
	/// order and never reuse an identifier the table has already issued.
	///
	/// Runs inside whatever transaction the caller holds; nothing is
	/// committed here.
	#[instrument(name = "userdata::upsert_table_data", level = "debug", skip(conn, columns, rows, key), fields(table = %table, rows = rows.len()))]
	pub fn upsert_table_data(
		conn: &Connection,
		table: TableId,
		columns: &[Column],
		rows: &[(Option<RowId>, Vec<Value>)],
		key: &[String],
	) -> Result<()> {
		let physical = require_physical(conn, table)?;
		let row_id_key = [ROW_ID_COLUMN_NAME.to_string()];
		let key: &[String] = if key.is_empty() {
			&row_id_key
		} else {
			key
		};

		let staging = format!("staging_{}", Uuid::new_v4().simple());
		conn.execute(
			&format!(
				"CREATE TEMP TABLE {} AS SELECT * FROM {} LIMIT 0",
				quote_ident(&staging),
				quote_ident(&physical)
			),
			[],
		)?;
		let outcome = Self::reconcile(conn, &physical, &staging, columns, rows, key);
		// The staging table must not outlive this call even on error.
		let dropped = conn.execute(&format!("DROP TABLE {}", quote_ident(&staging)), []);
		outcome?;
		dropped?;
		Ok(())
	}

	fn reconcile(
		conn: &Connection,
		physical: &str,
		staging: &str,
		columns: &[Column],
		rows: &[(Option<RowId>, Vec<Value>)],
		key: &[String],
	) -> Result<()> {
		let id = quote_ident(ROW_ID_COLUMN_NAME);
		let mut names: Vec<String> = vec![ROW_ID_COLUMN_NAME.to_string()];
		names.extend(columns.iter().map(|c| c.name.clone()));

		let staged: Vec<Vec<Value>> = rows
			.iter()
			.map(|(row_id, values)| {
				let mut row = Vec::with_capacity(values.len() + 1);
				row.push(match row_id {
					Some(id) => Value::Integer(id.0),
					None => Value::Null,
				});
				row.extend(values.iter().cloned());
				row
			})
			.collect();
		bulk_insert(conn, staging, &names, &staged)?;

		let join = key_join(physical, staging, key);

		// Existing rows with no incoming match go away.
		conn.execute(
			&format!(
				"DELETE FROM {p} WHERE NOT EXISTS (SELECT 1 FROM {s} WHERE {join})",
				p = quote_ident(physical),
				s = quote_ident(staging)
			),
			[],
		)?;

		// Matched rows take the incoming values for every non-key column.
		let assignments: Vec<String> = columns
			.iter()
			.filter(|c| !key.contains(&c.name))
			.map(|c| format!("{col} = {s}.{col}", col = quote_ident(&c.name), s = quote_ident(staging)))
			.collect();
		if !assignments.is_empty() {
			conn.execute(
				&format!(
					"UPDATE {p} SET {} FROM {s} WHERE {join}",
					assignments.join(", "),
					p = quote_ident(physical),
					s = quote_ident(staging)
				),
				[],
			)?;
		}

		let user_cols: Vec<String> = columns.iter().map(|c| quote_ident(&c.name)).collect();
		let staged_cols = |prefix: &str| {
			user_cols.iter().map(|c| format!("{prefix}.{c}")).collect::<Vec<_>>().join(", ")
		};
		let s = quote_ident(staging);
		let p = quote_ident(physical);

		// New rows arriving with an explicit identifier keep it.
		conn.execute(
			&format!(
				"INSERT INTO {p} ({id}, {}) SELECT {s}.{id}, {} FROM {s} \
				 LEFT JOIN {p} ON {join} WHERE {p}.{id} IS NULL AND {s}.{id} IS NOT NULL",
				user_cols.join(", "),
				staged_cols(&s)
			),
			[],
		)?;

		// Fresh identifiers must land above both the surviving maximum
		// and anything the identity counter already handed out.
		Self::ratchet_sequence(conn, physical)?;

		// New rows without an identifier get the next ones, in the
		// order they arrived.
		conn.execute(
			&format!(
				"INSERT INTO {p} ({}) SELECT {} FROM {s} \
				 LEFT JOIN {p} ON {join} WHERE {p}.{id} IS NULL AND {s}.{id} IS NULL \
				 ORDER BY {s}.rowid",
				user_cols.join(", "),
				staged_cols(&s)
			),
			[],
		)?;

		Ok(())
	}
}
