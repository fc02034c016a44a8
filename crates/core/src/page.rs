// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use serde::{Deserialize, Serialize};

use crate::{table::RowId, value::Value};

/// Pagination direction relative to the cursor's boundary row id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeySetOp {
	GreaterThan,
	LessThan,
}

/// A keyset pagination cursor: a row-id boundary, a direction and a page
/// size. Fully determines a page given the table's current row set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySet {
	pub n: RowId,
	pub op: KeySetOp,
	pub size: usize,
}

impl KeySet {
	pub fn new(n: RowId, op: KeySetOp, size: usize) -> Self {
		Self {
			n,
			op,
			size,
		}
	}

	/// Cursor positioned before every possible row, including negative
	/// row ids.
	///
	/// `RowId(i64::MIN)` itself is the sentinel boundary and, with the
	/// strict comparison, the one identifier a scan can never reach.
	pub fn first_page(size: usize) -> Self {
		Self::new(RowId(i64::MIN), KeySetOp::GreaterThan, size)
	}
}

/// One stored row: its identifier plus one value per column, in column
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
	pub row_id: RowId,
	pub values: Vec<Value>,
}

impl Row {
	pub fn new(row_id: RowId, values: Vec<Value>) -> Self {
		Self {
			row_id,
			values,
		}
	}
}

/// A bounded window of rows in ascending row-id order, with flags saying
/// whether rows exist beyond either end of the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
	pub rows: Vec<Row>,
	pub has_less: bool,
	pub has_more: bool,
}

impl Page {
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}
