// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Core value objects for gridbase: the user-facing column/type model, the
//! catalog entities and the pagination cursor types shared by the storage
//! adapter and the table catalog.

pub use error::{Error, Result};
pub use page::{KeySet, KeySetOp, Page, Row};
pub use table::{Column, DataLicence, ROW_ID_COLUMN_NAME, RowId, Table, TableId};
pub use value::{ColumnType, Date, Value};

mod error;
mod page;
mod table;
mod value;
