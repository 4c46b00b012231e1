// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::protocol::Protocol;
use crate::status::SolicitationStatus;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A citizen-filed urban-issue report, the central tracked entity.
///
/// The protocol is globally unique and immutable after creation, and
/// the status only changes through a validated lifecycle transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Solicitation {
    /// The database-assigned identifier.
    pub id: i64,
    /// The human-facing tracking code.
    pub protocol: Protocol,
    /// The current lifecycle status.
    pub status: SolicitationStatus,
    /// The category of the reported issue.
    pub category_id: i64,
    /// The citizen who filed the report.
    pub reporter_id: i64,
    /// Latitude in WGS84 degrees.
    pub latitude: f64,
    /// Longitude in WGS84 degrees.
    pub longitude: f64,
    /// Human-readable address, if the citizen provided one.
    pub address: Option<String>,
    /// Free-text description of the issue.
    pub description: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last status change.
    pub updated_at: String,
}

/// A solicitation ready for insertion, before an ID is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSolicitation {
    pub protocol: Protocol,
    pub status: SolicitationStatus,
    pub category_id: i64,
    pub reporter_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Returns the current UTC time as an RFC 3339 string.
///
/// # Errors
///
/// Returns `DomainError::TimestampFormat` if formatting fails.
pub fn now_utc_rfc3339() -> Result<String, DomainError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| DomainError::TimestampFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_now_utc_rfc3339_parses_back() {
        let stamp = now_utc_rfc3339().unwrap();
        assert!(OffsetDateTime::parse(&stamp, &Rfc3339).is_ok());
    }
}
