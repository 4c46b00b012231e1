// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Statuses cross the boundary as their stable string names
//! (`PENDENTE`, `EM_ANALISE`, ...), never as enum discriminants.

use urbia_audit::TransitionRecord;
use urbia_domain::Solicitation;

/// API request to file a new solicitation.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct CreateSolicitationRequest {
    /// The citizen filing the report.
    pub reporter_id: i64,
    /// The issue category.
    pub category_id: i64,
    /// Latitude in WGS84 degrees.
    pub latitude: f64,
    /// Longitude in WGS84 degrees.
    pub longitude: f64,
    /// Optional human-readable address.
    pub address: Option<String>,
    /// Free-text description of the issue.
    pub description: String,
}

/// A solicitation as presented at the API boundary.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolicitationInfo {
    /// The solicitation identifier.
    pub id: i64,
    /// The citizen-facing protocol (`YYYY-NNNNN`).
    pub protocol: String,
    /// The stable status name.
    pub status: String,
    /// The human-readable status label.
    pub status_label: String,
    /// The issue category.
    pub category_id: i64,
    /// The citizen who filed the report.
    pub reporter_id: i64,
    /// Latitude in WGS84 degrees.
    pub latitude: f64,
    /// Longitude in WGS84 degrees.
    pub longitude: f64,
    /// Optional human-readable address.
    pub address: Option<String>,
    /// Free-text description of the issue.
    pub description: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last status change.
    pub updated_at: String,
}

impl From<Solicitation> for SolicitationInfo {
    fn from(solicitation: Solicitation) -> Self {
        Self {
            id: solicitation.id,
            protocol: solicitation.protocol.as_str().to_string(),
            status: solicitation.status.as_str().to_string(),
            status_label: solicitation.status.label().to_string(),
            category_id: solicitation.category_id,
            reporter_id: solicitation.reporter_id,
            latitude: solicitation.latitude,
            longitude: solicitation.longitude,
            address: solicitation.address,
            description: solicitation.description,
            created_at: solicitation.created_at,
            updated_at: solicitation.updated_at,
        }
    }
}

/// API response for a successful solicitation creation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CreateSolicitationResponse {
    /// The created solicitation.
    pub solicitation: SolicitationInfo,
    /// A success message carrying the protocol.
    pub message: String,
}

/// API request to transition a solicitation's status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct TransitionStatusRequest {
    /// The solicitation to transition.
    pub solicitation_id: i64,
    /// The administrator performing the transition.
    pub actor_id: i64,
    /// The requested status, by stable name.
    pub new_status: String,
    /// The administrator's reason, forwarded to the citizen.
    pub reason: String,
}

/// API response for a successful status transition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionStatusResponse {
    /// The solicitation after the transition.
    pub solicitation: SolicitationInfo,
    /// A success message.
    pub message: String,
}

/// One audit record as presented at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionRecordInfo {
    /// The record identifier.
    pub id: i64,
    /// The administrator who performed the transition, if any.
    pub actor_id: Option<i64>,
    /// The status before the transition, by stable name.
    pub from_status: String,
    /// The status after the transition, by stable name.
    pub to_status: String,
    /// The administrator's reason.
    pub reason: Option<String>,
    /// RFC 3339 timestamp of the transition.
    pub occurred_at: String,
}

impl From<TransitionRecord> for TransitionRecordInfo {
    fn from(record: TransitionRecord) -> Self {
        Self {
            id: record.id,
            actor_id: record.actor_id,
            from_status: record.from_status.as_str().to_string(),
            to_status: record.to_status.as_str().to_string(),
            reason: record.reason,
            occurred_at: record.occurred_at,
        }
    }
}

/// API response carrying a solicitation's audit history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetHistoryResponse {
    /// The solicitation the history belongs to.
    pub solicitation_id: i64,
    /// The transitions, most-recent first.
    pub history: Vec<TransitionRecordInfo>,
}

/// API request for one page of a status listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ListByStatusRequest {
    /// The status to filter by, by stable name.
    pub status: String,
    /// Page size.
    pub limit: i64,
    /// Page offset.
    pub offset: i64,
}

/// API request for one page of a citizen's own reports.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ListByReporterRequest {
    /// The citizen whose reports to list.
    pub reporter_id: i64,
    /// Page size.
    pub limit: i64,
    /// Page offset.
    pub offset: i64,
}

/// API response for a paginated listing.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListSolicitationsResponse {
    /// Total matching rows, ignoring pagination.
    pub total: i64,
    /// The rows of this page, newest first.
    pub items: Vec<SolicitationInfo>,
}
