// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{path::PathBuf, time::Duration};

use gridbase_core::Result;
use rusqlite::Connection;
use tracing::instrument;

/// SQLite journal mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JournalMode {
	Wal,
	Delete,
	Memory,
}

impl JournalMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			JournalMode::Wal => "WAL",
			JournalMode::Delete => "DELETE",
			JournalMode::Memory => "MEMORY",
		}
	}
}

/// SQLite synchronous mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynchronousMode {
	Off,
	Normal,
	Full,
}

impl SynchronousMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			SynchronousMode::Off => "OFF",
			SynchronousMode::Normal => "NORMAL",
			SynchronousMode::Full => "FULL",
		}
	}
}

/// Connection configuration for the shared database holding both the
/// catalog and all userdata tables.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
	/// `None` means an in-memory database.
	pub path: Option<PathBuf>,
	pub journal_mode: JournalMode,
	pub synchronous_mode: SynchronousMode,
	pub busy_timeout: Duration,
}

impl SqliteConfig {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: Some(path.into()),
			journal_mode: JournalMode::Wal,
			synchronous_mode: SynchronousMode::Normal,
			busy_timeout: Duration::from_secs(5),
		}
	}

	/// In-memory database, used by tests.
	pub fn in_memory() -> Self {
		Self {
			path: None,
			journal_mode: JournalMode::Memory,
			synchronous_mode: SynchronousMode::Off,
			busy_timeout: Duration::from_secs(5),
		}
	}

	/// Open a connection and apply the configured pragmas.
	#[instrument(name = "storage::open", level = "info", skip(self), fields(
		path = ?self.path,
		journal_mode = %self.journal_mode.as_str()
	))]
	pub fn open(&self) -> Result<Connection> {
		let conn = match &self.path {
			Some(path) => Connection::open(path)?,
			None => Connection::open_in_memory()?,
		};

		conn.pragma_update(None, "journal_mode", self.journal_mode.as_str())?;
		conn.pragma_update(None, "synchronous", self.synchronous_mode.as_str())?;
		conn.busy_timeout(self.busy_timeout)?;

		Ok(conn)
	}
}
