// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ports::StorageError;
use urbia_domain::DomainError;

/// Errors that can occur during lifecycle operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The requested category does not exist.
    CategoryNotFound(i64),
    /// The requested solicitation does not exist.
    SolicitationNotFound(i64),
    /// An open report of the same category already exists within the
    /// dedup radius.
    DuplicateSolicitation {
        /// The existing open solicitation.
        existing_id: i64,
        /// Distance from the candidate location in meters.
        distance_meters: f64,
    },
    /// The actor is not an administrator.
    Unauthorized {
        /// The actor that attempted the transition.
        actor_id: i64,
    },
    /// A storage collaborator failed.
    Storage(StorageError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CategoryNotFound(id) => write!(f, "Category {id} not found"),
            Self::SolicitationNotFound(id) => write!(f, "Solicitation {id} not found"),
            Self::DuplicateSolicitation {
                existing_id,
                distance_meters,
            } => {
                write!(
                    f,
                    "An open solicitation already exists {distance_meters:.0}m away (id {existing_id})"
                )
            }
            Self::Unauthorized { actor_id } => {
                write!(f, "Actor {actor_id} is not an administrator")
            }
            Self::Storage(err) => write!(f, "Storage error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}
