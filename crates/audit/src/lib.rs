// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

#[cfg(test)]
mod tests;

use urbia_domain::SolicitationStatus;

/// An immutable audit record of one status transition.
///
/// Records are created exactly once per successful transition and are
/// never updated or deleted. A solicitation owns its full ordered
/// history; concatenating the `from_status`/`to_status` values of the
/// history must form an unbroken chain from the initial status to the
/// solicitation's current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// The database-assigned identifier.
    pub id: i64,
    /// The solicitation this record belongs to.
    pub solicitation_id: i64,
    /// The administrator who performed the transition, or `None` if
    /// system-initiated.
    pub actor_id: Option<i64>,
    /// The status before the transition.
    pub from_status: SolicitationStatus,
    /// The status after the transition.
    pub to_status: SolicitationStatus,
    /// The administrator's reason; required for admin-initiated
    /// transitions.
    pub reason: Option<String>,
    /// RFC 3339 timestamp of the transition.
    pub occurred_at: String,
}

/// A transition record not yet persisted.
///
/// The persistence layer assigns the identifier when the record is
/// appended, inside the same transaction as the status write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    /// The solicitation being transitioned.
    pub solicitation_id: i64,
    /// The administrator performing the transition, or `None` if
    /// system-initiated.
    pub actor_id: Option<i64>,
    /// The status before the transition.
    pub from_status: SolicitationStatus,
    /// The status after the transition.
    pub to_status: SolicitationStatus,
    /// The administrator's reason.
    pub reason: Option<String>,
    /// RFC 3339 timestamp of the transition.
    pub occurred_at: String,
}

/// Errors reported by audit chain verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The history is empty but the current status is not the initial one.
    EmptyHistoryMismatch {
        /// The expected initial status.
        initial: SolicitationStatus,
        /// The solicitation's actual current status.
        current: SolicitationStatus,
    },
    /// The oldest record does not start from the initial status.
    HeadMismatch {
        /// The expected initial status.
        initial: SolicitationStatus,
        /// The `from_status` of the oldest record.
        found: SolicitationStatus,
    },
    /// Two adjacent records do not connect.
    BrokenLink {
        /// Zero-based index of the record (in chronological order)
        /// whose `from_status` does not match.
        index: usize,
        /// The `to_status` of the previous record.
        expected: SolicitationStatus,
        /// The `from_status` actually found.
        found: SolicitationStatus,
    },
    /// The newest record does not end at the current status.
    TailMismatch {
        /// The solicitation's current status.
        current: SolicitationStatus,
        /// The `to_status` of the newest record.
        found: SolicitationStatus,
    },
    /// A record claims a transition to its own status.
    VacuousRecord {
        /// Zero-based index of the record in chronological order.
        index: usize,
        /// The repeated status.
        status: SolicitationStatus,
    },
}

impl std::fmt::Display for ChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyHistoryMismatch { initial, current } => {
                write!(
                    f,
                    "History is empty but current status is {current}, expected {initial}"
                )
            }
            Self::HeadMismatch { initial, found } => {
                write!(
                    f,
                    "Oldest record starts from {found}, expected initial status {initial}"
                )
            }
            Self::BrokenLink {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Record {index} starts from {found}, expected {expected} from the previous record"
                )
            }
            Self::TailMismatch { current, found } => {
                write!(
                    f,
                    "Newest record ends at {found}, but current status is {current}"
                )
            }
            Self::VacuousRecord { index, status } => {
                write!(f, "Record {index} transitions {status} to itself")
            }
        }
    }
}

impl std::error::Error for ChainError {}

/// Verifies the audit chain invariant for one solicitation.
///
/// `history` must be ordered most-recent first, the order in which the
/// storage layer returns it. The chain is valid when the oldest record
/// starts at `initial`, every record's `from_status` equals the
/// previous record's `to_status`, and the newest record's `to_status`
/// equals `current`.
///
/// # Errors
///
/// Returns the first [`ChainError`] encountered, checked in
/// chronological order.
pub fn verify_chain(
    initial: SolicitationStatus,
    current: SolicitationStatus,
    history: &[TransitionRecord],
) -> Result<(), ChainError> {
    if history.is_empty() {
        if current == initial {
            return Ok(());
        }
        return Err(ChainError::EmptyHistoryMismatch { initial, current });
    }

    // Walk oldest-first
    let mut expected = initial;
    for (index, record) in history.iter().rev().enumerate() {
        if record.from_status == record.to_status {
            return Err(ChainError::VacuousRecord {
                index,
                status: record.from_status,
            });
        }
        if record.from_status != expected {
            if index == 0 {
                return Err(ChainError::HeadMismatch {
                    initial,
                    found: record.from_status,
                });
            }
            return Err(ChainError::BrokenLink {
                index,
                expected,
                found: record.from_status,
            });
        }
        expected = record.to_status;
    }

    if expected != current {
        return Err(ChainError::TailMismatch {
            current,
            found: expected,
        });
    }

    Ok(())
}
