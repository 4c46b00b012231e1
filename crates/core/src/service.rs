// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle orchestration.
//!
//! `create` and `transition` are the only write paths for a
//! solicitation. The service never caches solicitation state across
//! calls: every transition reloads the row before mutating, and the
//! status write is conditional on the loaded status so concurrent
//! administrators cannot interleave load-validate-write on one report.

use crate::allocator::allocate_protocol;
use crate::dedup::{DuplicateCandidate, DuplicateDetector};
use crate::error::CoreError;
use crate::notification::{NotificationEvent, transition_notification};
use crate::ports::{LifecycleBackend, Page, StatusWrite, StorageError};
use tracing::{debug, info, warn};
use urbia_audit::{PendingTransition, TransitionRecord};
use urbia_domain::{
    NewSolicitation, Protocol, Solicitation, SolicitationStatus, now_utc_rfc3339,
    validate_coordinates, validate_description, validate_reason,
};

/// The fields a citizen supplies when filing a report.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSolicitation {
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

/// Orchestrates protocol allocation, duplicate detection, status
/// transitions, audit recording, and notification emission.
pub struct SolicitationLifecycleService<B> {
    backend: B,
    detector: DuplicateDetector,
}

impl<B: LifecycleBackend> SolicitationLifecycleService<B> {
    /// Creates a service with the default dedup radius.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            detector: DuplicateDetector::default(),
        }
    }

    /// Creates a service with a custom dedup radius in meters.
    #[must_use]
    pub const fn with_radius(backend: B, radius_meters: f64) -> Self {
        Self {
            backend,
            detector: DuplicateDetector::new(radius_meters),
        }
    }

    /// Returns the configured dedup radius in meters.
    #[must_use]
    pub const fn dedup_radius_meters(&self) -> f64 {
        self.detector.radius_meters
    }

    /// Gives direct access to the backend, for read-side collaborators.
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Files a new solicitation.
    ///
    /// Validates the input, rejects duplicates of open reports within
    /// the dedup radius, allocates a protocol for the current year, and
    /// persists the report in `Pendente`. No notification is emitted on
    /// creation.
    ///
    /// # Errors
    ///
    /// Returns `DomainViolation` for invalid input, `CategoryNotFound`
    /// for an unknown category, `DuplicateSolicitation` carrying the
    /// existing ID when an open report blocks creation, or a storage
    /// error.
    pub fn create(&mut self, request: &CreateSolicitation) -> Result<Solicitation, CoreError> {
        validate_coordinates(request.latitude, request.longitude)?;
        validate_description(&request.description)?;

        if !self.backend.category_exists(request.category_id)? {
            return Err(CoreError::CategoryNotFound(request.category_id));
        }

        let duplicate: Option<DuplicateCandidate> = self.detector.find_nearby_open(
            &mut self.backend,
            request.latitude,
            request.longitude,
            request.category_id,
        )?;

        if let Some(candidate) = duplicate {
            debug!(
                existing_id = candidate.solicitation_id,
                distance_meters = candidate.distance_meters,
                "Rejected duplicate solicitation"
            );
            return Err(CoreError::DuplicateSolicitation {
                existing_id: candidate.solicitation_id,
                distance_meters: candidate.distance_meters,
            });
        }

        let created_at: String = now_utc_rfc3339()?;
        let year: i32 = creation_year(&created_at)?;

        // First attempt, plus one retry with a recomputed sequence if a
        // concurrent creation won the race for the same protocol.
        let mut attempts_left: u8 = 2;
        loop {
            attempts_left -= 1;

            let protocol: Protocol = allocate_protocol(&mut self.backend, year)?;
            let new_solicitation = NewSolicitation {
                protocol: protocol.clone(),
                status: SolicitationStatus::Pendente,
                category_id: request.category_id,
                reporter_id: request.reporter_id,
                latitude: request.latitude,
                longitude: request.longitude,
                address: request.address.clone(),
                description: request.description.clone(),
                created_at: created_at.clone(),
                updated_at: created_at.clone(),
            };

            match self.backend.insert_solicitation(&new_solicitation) {
                Ok(solicitation) => {
                    info!(
                        solicitation_id = solicitation.id,
                        protocol = %solicitation.protocol,
                        reporter_id = solicitation.reporter_id,
                        "Created solicitation"
                    );
                    return Ok(solicitation);
                }
                Err(StorageError::UniqueViolation(msg)) if attempts_left > 0 => {
                    debug!(
                        protocol = %protocol,
                        "Protocol collision, retrying allocation: {msg}"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Transitions a solicitation to a new status.
    ///
    /// The actor must be an administrator and supply a non-empty
    /// reason. The status write, `updated_at`, and the audit record are
    /// applied in one transaction, conditional on the status loaded
    /// here; if a concurrent transition got there first, the row is
    /// reloaded and the request revalidated once against the fresh
    /// status. Notification dispatch failures are logged, never
    /// surfaced: the authoritative state change already committed.
    ///
    /// # Errors
    ///
    /// Returns `SolicitationNotFound`, `Unauthorized`,
    /// `DomainViolation` (`EmptyReason`, `InvalidStatusTransition`,
    /// `NoOpTransition`), or a storage error.
    pub fn transition(
        &mut self,
        solicitation_id: i64,
        actor_id: i64,
        requested: SolicitationStatus,
        reason: &str,
    ) -> Result<Solicitation, CoreError> {
        let mut current: Solicitation = self
            .backend
            .get_solicitation(solicitation_id)?
            .ok_or(CoreError::SolicitationNotFound(solicitation_id))?;

        if !self.backend.is_admin(actor_id)? {
            return Err(CoreError::Unauthorized { actor_id });
        }
        validate_reason(reason)?;

        // One retry if the status moved between our load and the
        // conditional write.
        let mut attempts_left: u8 = 2;
        let updated = loop {
            attempts_left -= 1;

            current.status.validate_transition(requested)?;

            let occurred_at: String = now_utc_rfc3339()?;
            let write = StatusWrite {
                solicitation_id,
                expected_status: current.status,
                new_status: requested,
                updated_at: occurred_at.clone(),
                record: PendingTransition {
                    solicitation_id,
                    actor_id: Some(actor_id),
                    from_status: current.status,
                    to_status: requested,
                    reason: Some(reason.to_string()),
                    occurred_at,
                },
            };

            match self.backend.apply_transition(&write) {
                Ok(updated) => break updated,
                Err(StorageError::StaleStatus { .. }) if attempts_left > 0 => {
                    debug!(
                        solicitation_id,
                        "Concurrent transition detected, reloading and revalidating"
                    );
                    current = self
                        .backend
                        .get_solicitation(solicitation_id)?
                        .ok_or(CoreError::SolicitationNotFound(solicitation_id))?;
                }
                Err(e) => return Err(e.into()),
            }
        };

        info!(
            solicitation_id,
            actor_id,
            from = %current.status,
            to = %requested,
            "Applied status transition"
        );

        let event: NotificationEvent =
            transition_notification(&updated, current.status, requested, reason);
        if let Err(e) = self.backend.enqueue(&event) {
            // Best-effort: the state change is already committed and
            // must not be undone for a notification failure.
            warn!(
                solicitation_id,
                recipient = event.recipient_user_id,
                "Notification dispatch failed: {e}"
            );
        }

        Ok(updated)
    }

    /// Returns the audit history of a solicitation, most-recent first.
    ///
    /// # Errors
    ///
    /// Returns `SolicitationNotFound` if the solicitation does not
    /// exist, or a storage error.
    pub fn get_history(
        &mut self,
        solicitation_id: i64,
    ) -> Result<Vec<TransitionRecord>, CoreError> {
        if self.backend.get_solicitation(solicitation_id)?.is_none() {
            return Err(CoreError::SolicitationNotFound(solicitation_id));
        }
        Ok(self.backend.get_audit_history(solicitation_id)?)
    }

    /// Lists solicitations in a given status, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub fn list_by_status(
        &mut self,
        status: SolicitationStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Page<Solicitation>, CoreError> {
        Ok(self.backend.list_by_status(status, limit, offset)?)
    }

    /// Lists solicitations filed by one citizen, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub fn list_by_reporter(
        &mut self,
        reporter_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Page<Solicitation>, CoreError> {
        Ok(self.backend.list_by_reporter(reporter_id, limit, offset)?)
    }

    /// Looks a solicitation up by its protocol.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub fn get_by_protocol(
        &mut self,
        protocol: &str,
    ) -> Result<Option<Solicitation>, CoreError> {
        Ok(self.backend.get_by_protocol(protocol)?)
    }
}

/// Extracts the calendar year from an RFC 3339 timestamp.
fn creation_year(rfc3339: &str) -> Result<i32, CoreError> {
    let year_part = rfc3339.get(..4).ok_or_else(|| {
        CoreError::DomainViolation(urbia_domain::DomainError::TimestampFormat(
            rfc3339.to_string(),
        ))
    })?;
    year_part.parse().map_err(|_| {
        CoreError::DomainViolation(urbia_domain::DomainError::TimestampFormat(
            rfc3339.to_string(),
        ))
    })
}
