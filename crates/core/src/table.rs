// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value::ColumnType;

/// The reserved name of the row identifier column present in every
/// physical userdata table. User columns may never take this name.
pub const ROW_ID_COLUMN_NAME: &str = "gridbase_row_id";

/// Opaque, immutable identity of a table. The physical storage object's
/// name derives from this, never from the user-chosen table name, so
/// renames never require DDL.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub Uuid);

impl TableId {
	pub fn generate() -> Self {
		Self(Uuid::new_v4())
	}

	/// Name of the physical storage object for this table: a fixed
	/// prefix plus the identifier's compact hex form. The `userdata_`
	/// prefix is the namespace for user data; catalog objects live
	/// under `gridbase_` and can never collide.
	pub fn physical_name(&self) -> String {
		format!("userdata_{}", self.0.simple())
	}
}

impl Deref for TableId {
	type Target = Uuid;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for TableId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Signed row identifier, unique within one table. Not necessarily
/// contiguous or positive; comparable for ordering, which is all the
/// keyset pager needs.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(pub i64);

impl Deref for RowId {
	type Target = i64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<i64> for RowId {
	fn from(value: i64) -> Self {
		Self(value)
	}
}

impl Display for RowId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// A user-defined column: a name and a type. Column order is significant
/// for round-tripping delimited files, but not for identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub ty: ColumnType,
}

impl Column {
	pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}

	/// The reserved row identifier column, for callers that address it
	/// explicitly (upsert keys, bulk loads carrying identifiers).
	pub fn row_id() -> Self {
		Self::new(ROW_ID_COLUMN_NAME, ColumnType::Integer)
	}
}

/// Data licences a table can be published under. Codes are stable and
/// stored in the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataLicence {
	Unknown,
	AllRightsReserved,
	Pddl,
	OdcBy,
	Odbl,
	Ogl,
}

impl DataLicence {
	pub fn code(&self) -> i64 {
		match self {
			DataLicence::Unknown => 0,
			DataLicence::AllRightsReserved => 1,
			DataLicence::Pddl => 2,
			DataLicence::OdcBy => 3,
			DataLicence::Odbl => 4,
			DataLicence::Ogl => 5,
		}
	}

	pub fn from_code(code: i64) -> Option<Self> {
		match code {
			0 => Some(DataLicence::Unknown),
			1 => Some(DataLicence::AllRightsReserved),
			2 => Some(DataLicence::Pddl),
			3 => Some(DataLicence::OdcBy),
			4 => Some(DataLicence::Odbl),
			5 => Some(DataLicence::Ogl),
			_ => None,
		}
	}
}

/// A table as the catalog sees it: metadata plus the live column list.
/// Rows are owned by the storage adapter and never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
	pub table_id: TableId,
	pub owner_id: Uuid,
	pub name: String,
	pub is_public: bool,
	pub description: String,
	pub licence: DataLicence,
	/// Unix seconds
	pub created_at: i64,
	/// Unix seconds, bumped on every data or metadata change
	pub last_changed_at: i64,
	pub columns: Vec<Column>,
	pub row_count: u64,
}
