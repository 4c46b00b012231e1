// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Solicitation mutation operations.
//!
//! This module provides functions for inserting solicitations,
//! applying status transitions with their audit records, and seeding
//! reference rows. All functions use the Diesel DSL exclusively.

use crate::data_models::{
    NewNotificationRow, NewSolicitationRow, NewTransitionRecordRow, NewUserRow, SolicitationRow,
};
use crate::diesel_schema::{categories, notifications, solicitations, transition_records, users};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use diesel::SqliteConnection;
use diesel::prelude::*;
use urbia::StatusWrite;
use urbia_domain::{NewSolicitation, Solicitation};

/// Insert a new solicitation and return it with its assigned row ID.
///
/// The protocol column carries a unique constraint; a concurrent
/// allocation of the same protocol surfaces as
/// [`PersistenceError::UniqueViolation`].
///
/// # Errors
///
/// Returns an error if the insert or the readback fails.
pub fn insert_solicitation(
    conn: &mut SqliteConnection,
    new: &NewSolicitation,
) -> Result<Solicitation, PersistenceError> {
    let row: NewSolicitationRow = NewSolicitationRow::from(new);

    diesel::insert_into(solicitations::table)
        .values(&row)
        .execute(conn)?;

    let id: i64 = get_last_insert_rowid(conn)?;
    let inserted: SolicitationRow = solicitations::table
        .filter(solicitations::id.eq(id))
        .first::<SolicitationRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_solicitation readback: {e}")))?;

    Solicitation::try_from(inserted)
}

/// Apply a validated status change and append its audit record in one
/// transaction.
///
/// The status update is conditional on `write.expected_status`: when
/// the row's status no longer matches, zero rows are updated, nothing
/// is committed, and [`PersistenceError::StaleStatus`] is returned.
///
/// # Errors
///
/// Returns an error if the row is stale, missing, or the transaction
/// fails.
pub fn apply_transition(
    conn: &mut SqliteConnection,
    write: &StatusWrite,
) -> Result<Solicitation, PersistenceError> {
    conn.transaction::<Solicitation, PersistenceError, _>(|conn| {
        let updated_rows: usize = diesel::update(
            solicitations::table
                .filter(solicitations::id.eq(write.solicitation_id))
                .filter(solicitations::status.eq(write.expected_status.as_str())),
        )
        .set((
            solicitations::status.eq(write.new_status.as_str()),
            solicitations::updated_at.eq(&write.updated_at),
        ))
        .execute(conn)?;

        if updated_rows == 0 {
            // Distinguish a vanished row from a concurrent status move.
            let exists: i64 = solicitations::table
                .filter(solicitations::id.eq(write.solicitation_id))
                .count()
                .get_result::<i64>(conn)?;
            if exists == 0 {
                return Err(PersistenceError::NotFound(format!(
                    "solicitation {} not found",
                    write.solicitation_id
                )));
            }
            return Err(PersistenceError::StaleStatus {
                solicitation_id: write.solicitation_id,
            });
        }

        let record = NewTransitionRecordRow {
            solicitation_id: write.record.solicitation_id,
            actor_id: write.record.actor_id,
            from_status: write.record.from_status.as_str().to_string(),
            to_status: write.record.to_status.as_str().to_string(),
            reason: write.record.reason.clone(),
            occurred_at: write.record.occurred_at.clone(),
        };
        diesel::insert_into(transition_records::table)
            .values(&record)
            .execute(conn)?;

        let updated: SolicitationRow = solicitations::table
            .filter(solicitations::id.eq(write.solicitation_id))
            .first::<SolicitationRow>(conn)?;

        Solicitation::try_from(updated)
    })
}

/// Insert a pending notification row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_notification(
    conn: &mut SqliteConnection,
    row: &NewNotificationRow,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(notifications::table)
        .values(row)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Mark one notification as read.
///
/// # Errors
///
/// Returns an error if the update fails or the row does not exist.
pub fn mark_notification_read(
    conn: &mut SqliteConnection,
    notification_id: i64,
) -> Result<(), PersistenceError> {
    let updated_rows: usize =
        diesel::update(notifications::table.filter(notifications::id.eq(notification_id)))
            .set(notifications::is_read.eq(1))
            .execute(conn)?;

    if updated_rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "notification {notification_id} not found"
        )));
    }
    Ok(())
}

/// Insert a category and return its row ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_category(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(categories::table)
        .values(categories::name.eq(name))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Insert a user and return its row ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_user(
    conn: &mut SqliteConnection,
    name: &str,
    user_type: &str,
) -> Result<i64, PersistenceError> {
    let row = NewUserRow {
        name: name.to_string(),
        user_type: user_type.to_string(),
    };
    diesel::insert_into(users::table)
        .values(&row)
        .execute(conn)?;
    get_last_insert_rowid(conn)
}
