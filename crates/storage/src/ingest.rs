// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use gridbase_core::{Column, Error, Result, Value};
use tracing::instrument;

/// Convert string records into typed rows for the given columns.
///
/// The first record is the header and is skipped; line numbers in
/// conversion errors are 1-based, so the first data record is line 2.
/// Records shorter than the column list are padded with empty fields,
/// surplus fields are ignored.
#[instrument(name = "ingest::parse_rows", level = "debug", skip(columns, records), fields(columns = columns.len()))]
pub fn parse_rows<I>(columns: &[Column], records: I) -> Result<Vec<Vec<Value>>>
where
	I: IntoIterator<Item = Vec<String>>,
{
	let mut rows = Vec::new();
	for (index, record) in records.into_iter().skip(1).enumerate() {
		let line = index + 2;
		let mut values = Vec::with_capacity(columns.len());
		for (i, column) in columns.iter().enumerate() {
			let field = record.get(i).map(String::as_str).unwrap_or("");
			match column.ty.parse(field) {
				Some(value) => values.push(value),
				None => {
					return Err(Error::ValueConversion {
						column: column.name.clone(),
						value: field.to_string(),
						line,
					});
				}
			}
		}
		rows.push(values);
	}
	Ok(rows)
}
