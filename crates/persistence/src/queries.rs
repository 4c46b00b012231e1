// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Solicitation query operations.
//!
//! This module provides read-only functions over solicitations, their
//! audit trail, and pending notifications. All functions use the
//! Diesel DSL exclusively.

use crate::data_models::{NotificationRow, SolicitationRow, TransitionRecordRow};
use crate::diesel_schema::{categories, notifications, solicitations, transition_records, users};
use crate::error::PersistenceError;
use diesel::SqliteConnection;
use diesel::prelude::*;
use urbia::OpenReport;
use urbia_audit::TransitionRecord;
use urbia_domain::{Solicitation, SolicitationStatus};

/// Query a solicitation by its row ID.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn get_solicitation(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Solicitation>, PersistenceError> {
    let row: Option<SolicitationRow> = solicitations::table
        .filter(solicitations::id.eq(id))
        .first::<SolicitationRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_solicitation: {e}")))?;

    row.map(Solicitation::try_from).transpose()
}

/// Query a solicitation by its protocol string.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn get_by_protocol(
    conn: &mut SqliteConnection,
    protocol: &str,
) -> Result<Option<Solicitation>, PersistenceError> {
    let row: Option<SolicitationRow> = solicitations::table
        .filter(solicitations::protocol.eq(protocol))
        .first::<SolicitationRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_by_protocol: {e}")))?;

    row.map(Solicitation::try_from).transpose()
}

/// Query the open reports of one category as coordinate projections.
///
/// A report is open while its status is neither `RESOLVIDO` nor
/// `CANCELADO`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_open_reports_by_category(
    conn: &mut SqliteConnection,
    category_id: i64,
) -> Result<Vec<OpenReport>, PersistenceError> {
    let terminal: Vec<&str> = vec![
        SolicitationStatus::Resolvido.as_str(),
        SolicitationStatus::Cancelado.as_str(),
    ];

    let rows: Vec<(i64, f64, f64)> = solicitations::table
        .filter(solicitations::category_id.eq(category_id))
        .filter(solicitations::status.ne_all(terminal))
        .select((
            solicitations::id,
            solicitations::latitude,
            solicitations::longitude,
        ))
        .load::<(i64, f64, f64)>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_open_reports_by_category: {e}")))?;

    Ok(rows
        .into_iter()
        .map(|(id, latitude, longitude)| OpenReport {
            id,
            latitude,
            longitude,
        })
        .collect())
}

/// Query the highest protocol sequence already allocated for a year.
///
/// Protocols are stored as `YYYY-NNNNN`, so the sequence is recovered
/// by parsing the suffix of each protocol in the year's prefix range.
///
/// # Errors
///
/// Returns an error if the query fails or a stored protocol does not
/// parse.
pub fn get_max_protocol_sequence(
    conn: &mut SqliteConnection,
    year: i32,
) -> Result<Option<u32>, PersistenceError> {
    let prefix: String = format!("{year}-%");
    let protocols: Vec<String> = solicitations::table
        .filter(solicitations::protocol.like(prefix))
        .select(solicitations::protocol)
        .load::<String>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_max_protocol_sequence: {e}")))?;

    let mut max_sequence: Option<u32> = None;
    for protocol in &protocols {
        let sequence: u32 = protocol
            .split_once('-')
            .and_then(|(_, suffix)| suffix.parse::<u32>().ok())
            .ok_or_else(|| {
                PersistenceError::SerializationError(format!("malformed protocol: {protocol}"))
            })?;
        if max_sequence.is_none_or(|current| sequence > current) {
            max_sequence = Some(sequence);
        }
    }

    Ok(max_sequence)
}

/// Query the audit history of a solicitation, most-recent first.
///
/// Ordering is by `occurred_at` descending, then row ID descending so
/// records sharing a timestamp stay in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn get_audit_history(
    conn: &mut SqliteConnection,
    solicitation_id: i64,
) -> Result<Vec<TransitionRecord>, PersistenceError> {
    let rows: Vec<TransitionRecordRow> = transition_records::table
        .filter(transition_records::solicitation_id.eq(solicitation_id))
        .order((
            transition_records::occurred_at.desc(),
            transition_records::id.desc(),
        ))
        .load::<TransitionRecordRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_audit_history: {e}")))?;

    rows.into_iter().map(TransitionRecord::try_from).collect()
}

/// Query one page of solicitations in a given status, newest first.
///
/// Returns the page rows and the total count ignoring pagination.
///
/// # Errors
///
/// Returns an error if either query fails or a row cannot be
/// converted.
pub fn list_by_status(
    conn: &mut SqliteConnection,
    status: SolicitationStatus,
    limit: i64,
    offset: i64,
) -> Result<(i64, Vec<Solicitation>), PersistenceError> {
    let total: i64 = solicitations::table
        .filter(solicitations::status.eq(status.as_str()))
        .count()
        .get_result::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_by_status count: {e}")))?;

    let rows: Vec<SolicitationRow> = solicitations::table
        .filter(solicitations::status.eq(status.as_str()))
        .order((solicitations::created_at.desc(), solicitations::id.desc()))
        .limit(limit)
        .offset(offset)
        .load::<SolicitationRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_by_status: {e}")))?;

    let items: Vec<Solicitation> = rows
        .into_iter()
        .map(Solicitation::try_from)
        .collect::<Result<Vec<Solicitation>, PersistenceError>>()?;

    Ok((total, items))
}

/// Query one page of solicitations filed by one citizen, newest first.
///
/// # Errors
///
/// Returns an error if either query fails or a row cannot be
/// converted.
pub fn list_by_reporter(
    conn: &mut SqliteConnection,
    reporter_id: i64,
    limit: i64,
    offset: i64,
) -> Result<(i64, Vec<Solicitation>), PersistenceError> {
    let total: i64 = solicitations::table
        .filter(solicitations::reporter_id.eq(reporter_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_by_reporter count: {e}")))?;

    let rows: Vec<SolicitationRow> = solicitations::table
        .filter(solicitations::reporter_id.eq(reporter_id))
        .order((solicitations::created_at.desc(), solicitations::id.desc()))
        .limit(limit)
        .offset(offset)
        .load::<SolicitationRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_by_reporter: {e}")))?;

    let items: Vec<Solicitation> = rows
        .into_iter()
        .map(Solicitation::try_from)
        .collect::<Result<Vec<Solicitation>, PersistenceError>>()?;

    Ok((total, items))
}

/// Check whether a category exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn category_exists(
    conn: &mut SqliteConnection,
    category_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = categories::table
        .filter(categories::id.eq(category_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("category_exists: {e}")))?;
    Ok(count > 0)
}

/// Check whether a user is an administrator.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn is_admin_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = users::table
        .filter(users::id.eq(user_id))
        .filter(users::user_type.eq("ADMINISTRADOR"))
        .count()
        .get_result::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("is_admin_user: {e}")))?;
    Ok(count > 0)
}

/// Query the notifications queued for one user, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_notifications_for_user(
    conn: &mut SqliteConnection,
    recipient_user_id: i64,
) -> Result<Vec<NotificationRow>, PersistenceError> {
    notifications::table
        .filter(notifications::recipient_user_id.eq(recipient_user_id))
        .order((notifications::created_at.desc(), notifications::id.desc()))
        .load::<NotificationRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_notifications_for_user: {e}")))
}

/// Count the unread notifications of one user.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_unread_notifications(
    conn: &mut SqliteConnection,
    recipient_user_id: i64,
) -> Result<i64, PersistenceError> {
    notifications::table
        .filter(notifications::recipient_user_id.eq(recipient_user_id))
        .filter(notifications::is_read.eq(0))
        .count()
        .get_result::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("count_unread_notifications: {e}")))
}
