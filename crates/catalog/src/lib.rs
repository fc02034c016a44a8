// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Table metadata: names, ownership, visibility and licensing. The
//! physical row data lives with [`gridbase_storage::UserdataStore`];
//! this crate keeps the ledger that maps owners and names onto it.

mod create;
mod delete;
mod get;
mod list;
mod schema;
mod update;

/// Catalog operations. All take a [`rusqlite::Connection`] (or a
/// transaction derefing to one); transaction boundaries belong to the
/// caller.
pub struct Catalog;

pub(crate) fn unix_now() -> i64 {
	use std::time::{SystemTime, UNIX_EPOCH};
	match SystemTime::now().duration_since(UNIX_EPOCH) {
		Ok(elapsed) => elapsed.as_secs() as i64,
		Err(before_epoch) => -(before_epoch.duration().as_secs() as i64),
	}
}
