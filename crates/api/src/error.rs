// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::validation::RequestValidationError;
use urbia::CoreError;
use urbia_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// A human-readable description of the failure.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An open report of the same category already exists nearby.
    DuplicateSolicitation {
        /// The existing open solicitation.
        existing_id: i64,
        /// Distance from the submitted location in meters.
        distance_meters: f64,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { action, message } => {
                write!(f, "Unauthorized to perform '{action}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DuplicateSolicitation {
                existing_id,
                distance_meters,
            } => {
                write!(
                    f,
                    "An open solicitation already exists {distance_meters:.0}m away (id {existing_id})"
                )
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RequestValidationError> for ApiError {
    fn from(err: RequestValidationError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a valid solicitation status"),
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message: format!("Transition from '{from}' to '{to}' is not permitted"),
        },
        DomainError::NoOpTransition { status } => ApiError::DomainRuleViolation {
            rule: String::from("no_op_transition"),
            message: format!("Solicitation is already in status '{status}'"),
        },
        DomainError::InvalidCoordinates {
            latitude,
            longitude,
        } => ApiError::InvalidInput {
            field: String::from("coordinates"),
            message: format!("Coordinates ({latitude}, {longitude}) are outside the WGS84 range"),
        },
        DomainError::InvalidDescription(msg) => ApiError::InvalidInput {
            field: String::from("description"),
            message: msg,
        },
        DomainError::EmptyReason => ApiError::InvalidInput {
            field: String::from("reason"),
            message: String::from("A non-empty reason is required for this transition"),
        },
        DomainError::InvalidProtocol(msg) => ApiError::InvalidInput {
            field: String::from("protocol"),
            message: msg,
        },
        DomainError::AllocatorExhausted { year } => ApiError::Internal {
            message: format!("Protocol sequence space for year {year} is exhausted"),
        },
        DomainError::TimestampFormat(msg) => ApiError::Internal {
            message: format!("Failed to format timestamp: {msg}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::CategoryNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Category"),
            message: format!("Category {id} does not exist"),
        },
        CoreError::SolicitationNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Solicitation"),
            message: format!("Solicitation {id} does not exist"),
        },
        CoreError::DuplicateSolicitation {
            existing_id,
            distance_meters,
        } => ApiError::DuplicateSolicitation {
            existing_id,
            distance_meters,
        },
        CoreError::Unauthorized { actor_id } => ApiError::Unauthorized {
            action: String::from("transition_status"),
            message: format!("Actor {actor_id} is not an administrator"),
        },
        CoreError::Storage(storage_err) => ApiError::Internal {
            message: format!("Storage error: {storage_err}"),
        },
    }
}
