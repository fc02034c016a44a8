// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The user-facing column type system and its value representation.
//!
//! Every [`ColumnType`] carries four things: the physical SQL type used
//! when creating a column, a canonical-string parse, a canonical-string
//! rendering (via [`Value`]'s `Display`) and an example value for
//! documentation. The physical mapping is total and bidirectional on the
//! closed set of SQL types the adapter ever emits.

mod date;

use std::fmt::{Display, Formatter};

pub use date::Date;
use rusqlite::{
	ToSql,
	types::{FromSqlError, FromSqlResult, ToSqlOutput, Value as SqlValue, ValueRef},
};
use serde::{Deserialize, Serialize};

/// The closed set of column types a user may choose.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColumnType {
	/// UTF-8 encoded text
	Text,
	/// An 8-byte signed integer
	Integer,
	/// An 8-byte floating point
	Float,
	/// A boolean: true or false
	Boolean,
	/// A calendar date (year, month, day)
	Date,
}

impl ColumnType {
	pub const ALL: [ColumnType; 5] =
		[ColumnType::Text, ColumnType::Integer, ColumnType::Float, ColumnType::Boolean, ColumnType::Date];

	/// The declared SQL type used when creating a physical column of this
	/// type.
	pub fn sql_type(&self) -> &'static str {
		match self {
			ColumnType::Text => "TEXT",
			ColumnType::Integer => "BIGINT",
			ColumnType::Float => "DOUBLE",
			ColumnType::Boolean => "BOOLEAN",
			ColumnType::Date => "DATE",
		}
	}

	/// Map a declared SQL type observed on a physical column back to its
	/// column type. Total on the types emitted by [`Self::sql_type`];
	/// anything else means the physical schema was changed by an outside
	/// tool and yields `None`.
	pub fn from_sql_type(sql_type: &str) -> Option<Self> {
		match sql_type.to_ascii_uppercase().as_str() {
			"TEXT" => Some(ColumnType::Text),
			"BIGINT" => Some(ColumnType::Integer),
			"DOUBLE" => Some(ColumnType::Float),
			"BOOLEAN" => Some(ColumnType::Boolean),
			"DATE" => Some(ColumnType::Date),
			_ => None,
		}
	}

	/// Parse a canonical string into a [`Value`] of this type.
	///
	/// The empty string is null for every type except `Text`, where it is
	/// the empty string.
	pub fn parse(&self, raw: &str) -> Option<Value> {
		if raw.is_empty() && *self != ColumnType::Text {
			return Some(Value::Null);
		}
		match self {
			ColumnType::Text => Some(Value::Text(raw.to_string())),
			ColumnType::Integer => raw.trim().parse::<i64>().ok().map(Value::Integer),
			ColumnType::Float => raw.trim().parse::<f64>().ok().map(Value::Float),
			ColumnType::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
				"true" | "t" | "yes" | "on" | "1" => Some(Value::Boolean(true)),
				"false" | "f" | "no" | "off" | "0" => Some(Value::Boolean(false)),
				_ => None,
			},
			ColumnType::Date => raw.trim().parse::<Date>().ok().map(Value::Date),
		}
	}

	/// A fixed example value, used to synthesize sample rows for empty
	/// tables.
	pub fn example(&self) -> Value {
		match self {
			ColumnType::Text => Value::Text("foo".to_string()),
			ColumnType::Integer => Value::Integer(1),
			ColumnType::Float => Value::Float(3.14),
			ColumnType::Boolean => Value::Boolean(false),
			ColumnType::Date => Value::Date(Date::new(2018, 1, 3).unwrap()),
		}
	}

	pub fn pretty_name(&self) -> &'static str {
		match self {
			ColumnType::Text => "text",
			ColumnType::Integer => "integer",
			ColumnType::Float => "float",
			ColumnType::Boolean => "boolean",
			ColumnType::Date => "date",
		}
	}
}

impl Display for ColumnType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.pretty_name())
	}
}

/// A single cell value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// No value (SQL NULL)
	Null,
	/// UTF-8 encoded text
	Text(String),
	/// An 8-byte signed integer
	Integer(i64),
	/// An 8-byte floating point
	Float(f64),
	/// A boolean: true or false
	Boolean(bool),
	/// A calendar date
	Date(Date),
}

impl Value {
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Read a value of the given column type out of a SQLite cell.
	///
	/// Booleans are stored as integers and dates as ISO 8601 text;
	/// integers read from a float column are widened, since SQLite keeps
	/// whatever representation was cheapest at insert time.
	pub fn from_sql(ty: ColumnType, raw: ValueRef<'_>) -> FromSqlResult<Self> {
		Ok(match (ty, raw) {
			(_, ValueRef::Null) => Value::Null,
			(ColumnType::Text, ValueRef::Text(t)) => {
				Value::Text(std::str::from_utf8(t).map_err(|e| FromSqlError::Other(Box::new(e)))?.to_string())
			}
			(ColumnType::Integer, ValueRef::Integer(i)) => Value::Integer(i),
			(ColumnType::Float, ValueRef::Real(f)) => Value::Float(f),
			(ColumnType::Float, ValueRef::Integer(i)) => Value::Float(i as f64),
			(ColumnType::Boolean, ValueRef::Integer(i)) => Value::Boolean(i != 0),
			(ColumnType::Date, ValueRef::Text(t)) => {
				let text = std::str::from_utf8(t).map_err(|e| FromSqlError::Other(Box::new(e)))?;
				let date = text
					.parse::<Date>()
					.map_err(|_| FromSqlError::Other(format!("invalid stored date: {}", text).into()))?;
				Value::Date(date)
			}
			(_, _) => return Err(FromSqlError::InvalidType),
		})
	}
}

impl ToSql for Value {
	fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
		Ok(match self {
			Value::Null => ToSqlOutput::Owned(SqlValue::Null),
			Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
			Value::Integer(i) => ToSqlOutput::Owned(SqlValue::Integer(*i)),
			Value::Float(f) => ToSqlOutput::Owned(SqlValue::Real(*f)),
			Value::Boolean(b) => ToSqlOutput::Owned(SqlValue::Integer(*b as i64)),
			Value::Date(d) => ToSqlOutput::Owned(SqlValue::Text(d.to_string())),
		})
	}
}

impl Display for Value {
	/// The canonical string encoding: what a CSV export would contain.
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => Ok(()),
			Value::Text(s) => f.write_str(s),
			Value::Integer(i) => write!(f, "{}", i),
			Value::Float(v) => write!(f, "{}", v),
			Value::Boolean(b) => write!(f, "{}", b),
			Value::Date(d) => write!(f, "{}", d),
		}
	}
}
