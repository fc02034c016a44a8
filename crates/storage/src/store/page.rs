// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{KeySet, KeySetOp, Page, ROW_ID_COLUMN_NAME, Result, Row, TableId};
use rusqlite::{Connection, params};
use tracing::instrument;

use super::{UserdataStore, quote_ident, read_row, select_list};

fn exists_beyond(conn: &Connection, physical: &str, cmp: &str, n: i64) -> Result<bool> {
	let sql = format!(
		"SELECT EXISTS (SELECT 1 FROM {} WHERE {} {} ?1)",
		quote_ident(physical),
		quote_ident(ROW_ID_COLUMN_NAME),
		cmp
	);
	Ok(conn.query_row(&sql, params![n], |row| row.get::<_, bool>(0))?)
}

impl UserdataStore {
	/// One page of rows around the keyset, always returned in ascending
	/// row-id order regardless of paging direction.
	#[instrument(name = "userdata::table_page", level = "debug", skip(conn), fields(table = %table, n = %keyset.n, size = keyset.size))]
	pub fn table_page(conn: &Connection, table: TableId, keyset: &KeySet) -> Result<Page> {
		let columns = Self::get_columns(conn, table)?;
		let physical = table.physical_name();

		let (cmp, order) = match keyset.op {
			KeySetOp::GreaterThan => (">", "ASC"),
			KeySetOp::LessThan => ("<", "DESC"),
		};
		let sql = format!(
			"SELECT {} FROM {} WHERE {} {} ?1 ORDER BY {} {} LIMIT {}",
			select_list(&columns),
			quote_ident(&physical),
			quote_ident(ROW_ID_COLUMN_NAME),
			cmp,
			quote_ident(ROW_ID_COLUMN_NAME),
			order,
			keyset.size
		);

		let mut stmt = conn.prepare(&sql)?;
		let mut rows: Vec<Row> = stmt
			.query_map(params![keyset.n.0], |result| read_row(result, &columns))?
			.collect::<rusqlite::Result<_>>()?;
		if keyset.op == KeySetOp::LessThan {
			rows.reverse();
		}

		let (has_less, has_more) = if rows.len() > 1 {
			let first = rows[0].row_id.0;
			let last = rows[rows.len() - 1].row_id.0;
			(exists_beyond(conn, &physical, "<", first)?, exists_beyond(conn, &physical, ">", last)?)
		} else {
			// At most one row came back, so nothing lies past it in
			// the paging direction; the other side is checked
			// against the keyset position itself.
			match keyset.op {
				KeySetOp::GreaterThan => (exists_beyond(conn, &physical, "<", keyset.n.0)?, false),
				KeySetOp::LessThan => (false, exists_beyond(conn, &physical, ">", keyset.n.0)?),
			}
		};

		Ok(Page {
			rows,
			has_less,
			has_more,
		})
	}
}
