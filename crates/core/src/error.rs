// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use uuid::Uuid;

use crate::table::TableId;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the catalog and the userdata storage adapter.
///
/// Row absence on update/delete is reported through a boolean return, not
/// through this enum. Constraint violations raised by SQLite propagate
/// unchanged through the `Sqlite` variant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no physical table exists for {table_id}")]
	TableNotFound {
		table_id: TableId,
	},

	#[error("table '{name}' does not exist for owner {owner}")]
	TableNameNotFound {
		owner: Uuid,
		name: String,
	},

	#[error("table '{name}' already exists")]
	TableNameAlreadyExists {
		name: String,
	},

	#[error("'{name}' is not a valid table name")]
	InvalidTableName {
		name: String,
	},

	#[error("duplicate or reserved column name: '{name}'")]
	DuplicateColumnName {
		name: String,
	},

	#[error("could not convert '{value}' for column '{column}' on line {line}")]
	ValueConversion {
		column: String,
		value: String,
		line: usize,
	},

	#[error("column '{column}' has unsupported sql type '{sql_type}'")]
	UnsupportedType {
		column: String,
		sql_type: String,
	},

	#[error(transparent)]
	Sqlite(#[from] rusqlite::Error),
}
