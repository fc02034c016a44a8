// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The userdata storage adapter: sole owner of per-table physical storage.
//!
//! Every logical table is backed by its own SQLite table, named from the
//! table's opaque identity and carrying an auto-incrementing signed row-id
//! column. The adapter translates abstract row/column operations into SQL
//! against that table. It never commits: all mutating operations run
//! inside the caller's transaction, so multi-step workflows (create, then
//! bulk load) stay atomic.

pub use config::{JournalMode, SqliteConfig, SynchronousMode};
pub use ingest::parse_rows;
pub use store::{RowStream, UserdataStore};

mod config;
mod ingest;
mod store;
