// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator interfaces consumed by the lifecycle engine.
//!
//! The engine talks to the outside world exclusively through these
//! traits. The persistence crate implements all of them on one adapter;
//! tests substitute in-memory fakes.

use crate::notification::NotificationEvent;
use urbia_audit::{PendingTransition, TransitionRecord};
use urbia_domain::{NewSolicitation, Solicitation, SolicitationStatus};

/// Errors surfaced by storage collaborators.
///
/// Storage errors are propagated unchanged by the engine; retries
/// belong to the storage collaborator, except for the two
/// single-retry policies the lifecycle rules mandate (protocol
/// collision and stale status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The storage backend is unavailable or failed.
    Unavailable(String),
    /// An insert violated a unique constraint (protocol collision).
    UniqueViolation(String),
    /// A conditional status write found the row already changed.
    StaleStatus {
        /// The solicitation whose status moved underneath the caller.
        solicitation_id: i64,
    },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            Self::UniqueViolation(msg) => write!(f, "Unique constraint violated: {msg}"),
            Self::StaleStatus { solicitation_id } => {
                write!(
                    f,
                    "Status of solicitation {solicitation_id} changed concurrently"
                )
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Errors surfaced by the notification dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The dispatcher could not accept the event.
    Unavailable(String),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Notification dispatch failed: {msg}"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// A projection of an open report used for duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenReport {
    /// The solicitation identifier.
    pub id: i64,
    /// Latitude in WGS84 degrees.
    pub latitude: f64,
    /// Longitude in WGS84 degrees.
    pub longitude: f64,
}

/// One page of a counted listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Total matching rows, ignoring pagination.
    pub total: i64,
    /// The rows of this page.
    pub items: Vec<T>,
}

/// A validated status change ready to be applied atomically.
///
/// The write is conditional on `expected_status`: if the row's status
/// no longer matches, the storage layer must apply nothing and return
/// [`StorageError::StaleStatus`]. The status update and the audit
/// append happen in one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusWrite {
    /// The solicitation to update.
    pub solicitation_id: i64,
    /// The status the row must still have for the write to apply.
    pub expected_status: SolicitationStatus,
    /// The new status.
    pub new_status: SolicitationStatus,
    /// RFC 3339 timestamp for `updated_at`.
    pub updated_at: String,
    /// The audit record to append in the same transaction.
    pub record: PendingTransition,
}

/// Storage collaborator for solicitations and their audit trail.
pub trait Storage {
    /// Inserts a new solicitation and returns it with its assigned ID.
    ///
    /// Insertion must be atomic with respect to the protocol's unique
    /// constraint; a concurrent allocation of the same protocol
    /// surfaces as [`StorageError::UniqueViolation`].
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_solicitation(&mut self, new: &NewSolicitation)
    -> Result<Solicitation, StorageError>;

    /// Loads a solicitation by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_solicitation(&mut self, id: i64) -> Result<Option<Solicitation>, StorageError>;

    /// Loads a solicitation by its protocol.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_by_protocol(&mut self, protocol: &str) -> Result<Option<Solicitation>, StorageError>;

    /// Returns the open reports (status not terminal) of one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn query_open_by_category(&mut self, category_id: i64)
    -> Result<Vec<OpenReport>, StorageError>;

    /// Returns the highest protocol sequence already allocated for a
    /// year, or `None` if no protocol exists for that year.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn max_protocol_sequence(&mut self, year: i32) -> Result<Option<u32>, StorageError>;

    /// Applies a validated status change and appends its audit record
    /// in one transaction, conditional on the expected status.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::StaleStatus`] if the row's status no
    /// longer matches `write.expected_status`, or another error if the
    /// transaction fails.
    fn apply_transition(&mut self, write: &StatusWrite) -> Result<Solicitation, StorageError>;

    /// Returns the full audit history of a solicitation, most-recent
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_audit_history(
        &mut self,
        solicitation_id: i64,
    ) -> Result<Vec<TransitionRecord>, StorageError>;

    /// Lists solicitations in a given status, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_by_status(
        &mut self,
        status: SolicitationStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Page<Solicitation>, StorageError>;

    /// Lists solicitations filed by one citizen, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_by_reporter(
        &mut self,
        reporter_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Page<Solicitation>, StorageError>;
}

/// Category existence lookup.
pub trait CategoryLookup {
    /// Returns true if the category exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn category_exists(&mut self, category_id: i64) -> Result<bool, StorageError>;
}

/// Administrator authorization check.
pub trait AdminAuthCheck {
    /// Returns true if the actor is an administrator.
    ///
    /// # Errors
    ///
    /// Returns an error if the check fails.
    fn is_admin(&mut self, actor_id: i64) -> Result<bool, StorageError>;
}

/// Notification dispatcher collaborator.
///
/// The engine constructs and emits events; persistence of pending
/// notifications and their eventual delivery are external concerns.
/// Dispatch is best-effort relative to the authoritative state change.
pub trait NotificationDispatcher {
    /// Enqueues a notification event for later delivery.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be accepted.
    fn enqueue(&mut self, event: &NotificationEvent) -> Result<(), DispatchError>;
}

/// The full set of collaborators the lifecycle service needs.
///
/// Blanket-implemented for any type providing all four interfaces, so
/// a single backend object (the persistence adapter, or an in-memory
/// fake in tests) can serve the whole engine.
pub trait LifecycleBackend:
    Storage + CategoryLookup + AdminAuthCheck + NotificationDispatcher
{
}

impl<T> LifecycleBackend for T where
    T: Storage + CategoryLookup + AdminAuthCheck + NotificationDispatcher
{
}
