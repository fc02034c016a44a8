// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Column, ROW_ID_COLUMN_NAME, Result, Row, TableId};
use rusqlite::{Connection, params};
use tracing::instrument;

use super::{UserdataStore, quote_ident, read_row, require_physical, select_list};

/// Streams every row of a table in ascending row-id order, fetching
/// `batch_size` rows at a time so arbitrarily large tables never load
/// into memory at once.
pub struct RowStream<'a> {
	conn: &'a Connection,
	sql: String,
	columns: Vec<Column>,
	buffer: Vec<Row>,
	pos: usize,
	last: i64,
	batch_size: usize,
	exhausted: bool,
}

impl<'a> RowStream<'a> {
	fn refill(&mut self) -> Result<()> {
		self.buffer.clear();
		self.pos = 0;

		let mut stmt = self.conn.prepare_cached(&self.sql)?;
		let rows = stmt.query_map(params![self.last], |result| read_row(result, &self.columns))?;
		for row in rows {
			self.buffer.push(row?);
		}

		if self.buffer.len() < self.batch_size {
			self.exhausted = true;
		}
		if let Some(row) = self.buffer.last() {
			self.last = row.row_id.0;
		}
		Ok(())
	}
}

impl Iterator for RowStream<'_> {
	type Item = Result<Row>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.buffer.len() {
			if self.exhausted {
				return None;
			}
			if let Err(err) = self.refill() {
				self.exhausted = true;
				return Some(Err(err));
			}
			if self.buffer.is_empty() {
				return None;
			}
		}
		let row = self.buffer[self.pos].clone();
		self.pos += 1;
		Some(Ok(row))
	}
}

impl UserdataStore {
	/// Iterate over all rows of a table in ascending row-id order.
	///
	/// The cursor starts at the `RowId(i64::MIN)` sentinel with a strict
	/// comparison, so a row given exactly that identifier is outside the
	/// scannable range (as it is for [`gridbase_core::KeySet::first_page`]).
	#[instrument(name = "userdata::table_as_rows", level = "debug", skip(conn), fields(table = %table, batch_size))]
	pub fn table_as_rows(conn: &Connection, table: TableId, batch_size: usize) -> Result<RowStream<'_>> {
		debug_assert!(batch_size > 0);
		let physical = require_physical(conn, table)?;
		let columns = Self::get_columns(conn, table)?;
		let sql = format!(
			"SELECT {} FROM {} WHERE {} > ?1 ORDER BY {} ASC LIMIT {}",
			select_list(&columns),
			quote_ident(&physical),
			quote_ident(ROW_ID_COLUMN_NAME),
			quote_ident(ROW_ID_COLUMN_NAME),
			batch_size
		);
		Ok(RowStream {
			conn,
			sql,
			columns,
			buffer: Vec::new(),
			pos: 0,
			last: i64::MIN,
			batch_size,
			exhausted: false,
		})
	}
}
