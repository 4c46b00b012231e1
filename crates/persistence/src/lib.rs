// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Urbia solicitation tracker.
//!
//! This crate provides `SQLite` persistence for solicitations, their
//! status transition audit trail, pending notifications, and the
//! category and user reference tables. It is built on Diesel with
//! embedded migrations.
//!
//! The [`SqlitePersistence`] adapter implements every collaborator
//! interface the lifecycle engine needs, so one adapter instance backs
//! the whole engine:
//!
//! - `Storage` — solicitations, protocols, audit history, listings
//! - `CategoryLookup` — category existence checks
//! - `AdminAuthCheck` — administrator authorization
//! - `NotificationDispatcher` — pending notification rows
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases. Each call to
//! [`SqlitePersistence::new_in_memory`] receives a sequential database
//! name from an atomic counter, so tests are isolated without
//! time-based collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use urbia::{
    AdminAuthCheck, CategoryLookup, DispatchError, NotificationDispatcher, NotificationEvent,
    OpenReport, Page, StatusWrite, Storage, StorageError,
};
use urbia_audit::TransitionRecord;
use urbia_domain::{NewSolicitation, Solicitation, SolicitationStatus, now_utc_rfc3339};

pub mod data_models;
pub mod diesel_schema;
pub mod error;
pub mod mutations;
pub mod queries;
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::NotificationRow;
pub use error::PersistenceError;

/// User type stored for citizens.
pub const USER_TYPE_CITIZEN: &str = "CIDADAO";

/// User type stored for administrators.
pub const USER_TYPE_ADMIN: &str = "ADMINISTRADOR";

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` persistence adapter for the solicitation lifecycle engine.
pub struct SqlitePersistence {
    pub(crate) conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Uses a shared in-memory database via `Diesel`.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        // Use atomic counter instead of timestamp to eliminate race conditions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file-backed databases
        sqlite::enable_wal_mode(&mut conn)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Inserts a category and returns its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_category(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::insert_category(&mut self.conn, name)
    }

    /// Inserts a citizen user and returns its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_citizen(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::insert_user(&mut self.conn, name, USER_TYPE_CITIZEN)
    }

    /// Inserts an administrator user and returns its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_admin(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::insert_user(&mut self.conn, name, USER_TYPE_ADMIN)
    }

    /// Returns the notifications queued for one user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn notifications_for_user(
        &mut self,
        recipient_user_id: i64,
    ) -> Result<Vec<NotificationRow>, PersistenceError> {
        queries::get_notifications_for_user(&mut self.conn, recipient_user_id)
    }

    /// Counts the unread notifications of one user.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn unread_notification_count(
        &mut self,
        recipient_user_id: i64,
    ) -> Result<i64, PersistenceError> {
        queries::count_unread_notifications(&mut self.conn, recipient_user_id)
    }

    /// Marks one notification as read.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails or the row does not exist.
    pub fn mark_notification_read(
        &mut self,
        notification_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::mark_notification_read(&mut self.conn, notification_id)
    }
}

impl Storage for SqlitePersistence {
    fn insert_solicitation(
        &mut self,
        new: &NewSolicitation,
    ) -> Result<Solicitation, StorageError> {
        Ok(mutations::insert_solicitation(&mut self.conn, new)?)
    }

    fn get_solicitation(&mut self, id: i64) -> Result<Option<Solicitation>, StorageError> {
        Ok(queries::get_solicitation(&mut self.conn, id)?)
    }

    fn get_by_protocol(&mut self, protocol: &str) -> Result<Option<Solicitation>, StorageError> {
        Ok(queries::get_by_protocol(&mut self.conn, protocol)?)
    }

    fn query_open_by_category(
        &mut self,
        category_id: i64,
    ) -> Result<Vec<OpenReport>, StorageError> {
        Ok(queries::get_open_reports_by_category(
            &mut self.conn,
            category_id,
        )?)
    }

    fn max_protocol_sequence(&mut self, year: i32) -> Result<Option<u32>, StorageError> {
        Ok(queries::get_max_protocol_sequence(&mut self.conn, year)?)
    }

    fn apply_transition(&mut self, write: &StatusWrite) -> Result<Solicitation, StorageError> {
        Ok(mutations::apply_transition(&mut self.conn, write)?)
    }

    fn get_audit_history(
        &mut self,
        solicitation_id: i64,
    ) -> Result<Vec<TransitionRecord>, StorageError> {
        Ok(queries::get_audit_history(&mut self.conn, solicitation_id)?)
    }

    fn list_by_status(
        &mut self,
        status: SolicitationStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Page<Solicitation>, StorageError> {
        let (total, items) = queries::list_by_status(&mut self.conn, status, limit, offset)?;
        Ok(Page { total, items })
    }

    fn list_by_reporter(
        &mut self,
        reporter_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Page<Solicitation>, StorageError> {
        let (total, items) = queries::list_by_reporter(&mut self.conn, reporter_id, limit, offset)?;
        Ok(Page { total, items })
    }
}

impl CategoryLookup for SqlitePersistence {
    fn category_exists(&mut self, category_id: i64) -> Result<bool, StorageError> {
        Ok(queries::category_exists(&mut self.conn, category_id)?)
    }
}

impl AdminAuthCheck for SqlitePersistence {
    fn is_admin(&mut self, actor_id: i64) -> Result<bool, StorageError> {
        Ok(queries::is_admin_user(&mut self.conn, actor_id)?)
    }
}

impl NotificationDispatcher for SqlitePersistence {
    fn enqueue(&mut self, event: &NotificationEvent) -> Result<(), DispatchError> {
        let created_at: String =
            now_utc_rfc3339().map_err(|e| DispatchError::Unavailable(e.to_string()))?;
        let row = data_models::NewNotificationRow {
            recipient_user_id: event.recipient_user_id,
            solicitation_id: event.solicitation_id,
            title: event.title.clone(),
            body: event.body.clone(),
            is_read: 0,
            created_at,
        };
        mutations::insert_notification(&mut self.conn, &row)
            .map(|_| ())
            .map_err(|e| DispatchError::Unavailable(e.to_string()))
    }
}
