// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::{notifications, solicitations, transition_records, users};
use crate::error::PersistenceError;
use diesel::prelude::*;
use std::str::FromStr;
use urbia_audit::TransitionRecord;
use urbia_domain::{NewSolicitation, Protocol, Solicitation, SolicitationStatus};

/// A solicitation row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct SolicitationRow {
    pub id: i64,
    pub protocol: String,
    pub status: String,
    pub category_id: i64,
    pub reporter_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<SolicitationRow> for Solicitation {
    type Error = PersistenceError;

    fn try_from(row: SolicitationRow) -> Result<Self, Self::Error> {
        let status = SolicitationStatus::from_str(&row.status)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let protocol = Protocol::parse(&row.protocol)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        Ok(Self {
            id: row.id,
            protocol,
            status,
            category_id: row.category_id,
            reporter_id: row.reporter_id,
            latitude: row.latitude,
            longitude: row.longitude,
            address: row.address,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// A solicitation ready for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = solicitations)]
pub struct NewSolicitationRow {
    pub protocol: String,
    pub status: String,
    pub category_id: i64,
    pub reporter_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&NewSolicitation> for NewSolicitationRow {
    fn from(new: &NewSolicitation) -> Self {
        Self {
            protocol: new.protocol.as_str().to_string(),
            status: new.status.as_str().to_string(),
            category_id: new.category_id,
            reporter_id: new.reporter_id,
            latitude: new.latitude,
            longitude: new.longitude,
            address: new.address.clone(),
            description: new.description.clone(),
            created_at: new.created_at.clone(),
            updated_at: new.updated_at.clone(),
        }
    }
}

/// A transition audit record row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct TransitionRecordRow {
    pub id: i64,
    pub solicitation_id: i64,
    pub actor_id: Option<i64>,
    pub from_status: String,
    pub to_status: String,
    pub reason: Option<String>,
    pub occurred_at: String,
}

impl TryFrom<TransitionRecordRow> for TransitionRecord {
    type Error = PersistenceError;

    fn try_from(row: TransitionRecordRow) -> Result<Self, Self::Error> {
        let from_status = SolicitationStatus::from_str(&row.from_status)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let to_status = SolicitationStatus::from_str(&row.to_status)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        Ok(Self {
            id: row.id,
            solicitation_id: row.solicitation_id,
            actor_id: row.actor_id,
            from_status,
            to_status,
            reason: row.reason,
            occurred_at: row.occurred_at,
        })
    }
}

/// A transition audit record ready for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = transition_records)]
pub struct NewTransitionRecordRow {
    pub solicitation_id: i64,
    pub actor_id: Option<i64>,
    pub from_status: String,
    pub to_status: String,
    pub reason: Option<String>,
    pub occurred_at: String,
}

/// A pending notification row as stored.
#[derive(Debug, Clone, Queryable)]
pub struct NotificationRow {
    pub id: i64,
    pub recipient_user_id: i64,
    pub solicitation_id: i64,
    pub title: String,
    pub body: String,
    pub is_read: i32,
    pub created_at: String,
}

/// A pending notification ready for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notifications)]
pub struct NewNotificationRow {
    pub recipient_user_id: i64,
    pub solicitation_id: i64,
    pub title: String,
    pub body: String,
    pub is_read: i32,
    pub created_at: String,
}

/// A user ready for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub name: String,
    pub user_type: String,
}
