// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::cast_possible_wrap)]


use crate::notification::NotificationEvent;
use crate::ports::{
    AdminAuthCheck, CategoryLookup, DispatchError, NotificationDispatcher, OpenReport, Page,
    StatusWrite, Storage, StorageError,
};
use urbia_audit::TransitionRecord;
use urbia_domain::{NewSolicitation, Protocol, Solicitation, SolicitationStatus};

/// In-memory backend implementing all four collaborator interfaces.
pub struct MemoryBackend {
    pub solicitations: Vec<Solicitation>,
    pub records: Vec<TransitionRecord>,
    pub notifications: Vec<NotificationEvent>,
    pub categories: Vec<i64>,
    pub admins: Vec<i64>,
    /// Fail the next insert with a unique violation, simulating a
    /// concurrent creation winning the race for the same protocol.
    pub fail_next_insert_unique: bool,
    /// Fail the next conditional status write with a stale status,
    /// simulating a concurrent transition.
    pub fail_next_apply_stale: bool,
    /// Reject all notification enqueues.
    pub fail_enqueue: bool,
    pub next_id: i64,
    pub next_record_id: i64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            solicitations: Vec::new(),
            records: Vec::new(),
            notifications: Vec::new(),
            categories: vec![1],
            admins: vec![1],
            fail_next_insert_unique: false,
            fail_next_apply_stale: false,
            fail_enqueue: false,
            next_id: 1,
            next_record_id: 1,
        }
    }
}

impl Storage for MemoryBackend {
    fn insert_solicitation(
        &mut self,
        new: &NewSolicitation,
    ) -> Result<Solicitation, StorageError> {
        if self.fail_next_insert_unique {
            self.fail_next_insert_unique = false;
            return Err(StorageError::UniqueViolation(String::from(
                "solicitations.protocol",
            )));
        }
        if self
            .solicitations
            .iter()
            .any(|s| s.protocol == new.protocol)
        {
            return Err(StorageError::UniqueViolation(String::from(
                "solicitations.protocol",
            )));
        }

        let solicitation = Solicitation {
            id: self.next_id,
            protocol: new.protocol.clone(),
            status: new.status,
            category_id: new.category_id,
            reporter_id: new.reporter_id,
            latitude: new.latitude,
            longitude: new.longitude,
            address: new.address.clone(),
            description: new.description.clone(),
            created_at: new.created_at.clone(),
            updated_at: new.updated_at.clone(),
        };
        self.next_id += 1;
        self.solicitations.push(solicitation.clone());
        Ok(solicitation)
    }

    fn get_solicitation(&mut self, id: i64) -> Result<Option<Solicitation>, StorageError> {
        Ok(self.solicitations.iter().find(|s| s.id == id).cloned())
    }

    fn get_by_protocol(&mut self, protocol: &str) -> Result<Option<Solicitation>, StorageError> {
        Ok(self
            .solicitations
            .iter()
            .find(|s| s.protocol.as_str() == protocol)
            .cloned())
    }

    fn query_open_by_category(
        &mut self,
        category_id: i64,
    ) -> Result<Vec<OpenReport>, StorageError> {
        Ok(self
            .solicitations
            .iter()
            .filter(|s| s.category_id == category_id && s.status.is_open())
            .map(|s| OpenReport {
                id: s.id,
                latitude: s.latitude,
                longitude: s.longitude,
            })
            .collect())
    }

    fn max_protocol_sequence(&mut self, year: i32) -> Result<Option<u32>, StorageError> {
        let mut max: Option<u32> = None;
        for solicitation in &self.solicitations {
            if solicitation.protocol.year() == Ok(year) {
                let sequence = solicitation
                    .protocol
                    .sequence()
                    .map_err(|e| StorageError::Unavailable(e.to_string()))?;
                if max.is_none_or(|m| sequence > m) {
                    max = Some(sequence);
                }
            }
        }
        Ok(max)
    }

    fn apply_transition(&mut self, write: &StatusWrite) -> Result<Solicitation, StorageError> {
        if self.fail_next_apply_stale {
            self.fail_next_apply_stale = false;
            return Err(StorageError::StaleStatus {
                solicitation_id: write.solicitation_id,
            });
        }

        let solicitation = self
            .solicitations
            .iter_mut()
            .find(|s| s.id == write.solicitation_id)
            .ok_or_else(|| StorageError::Unavailable(String::from("row vanished")))?;

        if solicitation.status != write.expected_status {
            return Err(StorageError::StaleStatus {
                solicitation_id: write.solicitation_id,
            });
        }

        solicitation.status = write.new_status;
        solicitation.updated_at = write.updated_at.clone();
        let updated = solicitation.clone();

        self.records.push(TransitionRecord {
            id: self.next_record_id,
            solicitation_id: write.record.solicitation_id,
            actor_id: write.record.actor_id,
            from_status: write.record.from_status,
            to_status: write.record.to_status,
            reason: write.record.reason.clone(),
            occurred_at: write.record.occurred_at.clone(),
        });
        self.next_record_id += 1;

        Ok(updated)
    }

    fn get_audit_history(
        &mut self,
        solicitation_id: i64,
    ) -> Result<Vec<TransitionRecord>, StorageError> {
        let mut history: Vec<TransitionRecord> = self
            .records
            .iter()
            .filter(|r| r.solicitation_id == solicitation_id)
            .cloned()
            .collect();
        // Most-recent first
        history.reverse();
        Ok(history)
    }

    fn list_by_status(
        &mut self,
        status: SolicitationStatus,
        limit: i64,
        offset: i64,
    ) -> Result<Page<Solicitation>, StorageError> {
        let matching: Vec<Solicitation> = self
            .solicitations
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect();
        Ok(page_of(matching, limit, offset))
    }

    fn list_by_reporter(
        &mut self,
        reporter_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Page<Solicitation>, StorageError> {
        let matching: Vec<Solicitation> = self
            .solicitations
            .iter()
            .filter(|s| s.reporter_id == reporter_id)
            .cloned()
            .collect();
        Ok(page_of(matching, limit, offset))
    }
}

fn page_of(matching: Vec<Solicitation>, limit: i64, offset: i64) -> Page<Solicitation> {
    let total = matching.len() as i64;
    let items = matching
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(0))
        .take(usize::try_from(limit).unwrap_or(0))
        .collect();
    Page { total, items }
}

impl CategoryLookup for MemoryBackend {
    fn category_exists(&mut self, category_id: i64) -> Result<bool, StorageError> {
        Ok(self.categories.contains(&category_id))
    }
}

impl AdminAuthCheck for MemoryBackend {
    fn is_admin(&mut self, actor_id: i64) -> Result<bool, StorageError> {
        Ok(self.admins.contains(&actor_id))
    }
}

impl NotificationDispatcher for MemoryBackend {
    fn enqueue(&mut self, event: &NotificationEvent) -> Result<(), DispatchError> {
        if self.fail_enqueue {
            return Err(DispatchError::Unavailable(String::from(
                "dispatcher offline",
            )));
        }
        self.notifications.push(event.clone());
        Ok(())
    }
}

pub fn create_test_request() -> crate::service::CreateSolicitation {
    crate::service::CreateSolicitation {
        reporter_id: 5,
        category_id: 1,
        latitude: -23.5505,
        longitude: -46.6333,
        address: Some(String::from("Av. Paulista, 1000")),
        description: String::from("Lixo acumulado na calçada"),
    }
}

pub fn seeded_solicitation(id: i64, sequence: u32) -> Solicitation {
    Solicitation {
        id,
        protocol: Protocol::new(2025, sequence).unwrap(),
        status: SolicitationStatus::Pendente,
        category_id: 1,
        reporter_id: 5,
        latitude: -23.5505,
        longitude: -46.6333,
        address: None,
        description: String::from("Poste apagado"),
        created_at: String::from("2025-03-01T00:00:00Z"),
        updated_at: String::from("2025-03-01T00:00:00Z"),
    }
}
