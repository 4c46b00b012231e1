// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Status string is not a valid solicitation status.
    InvalidStatus {
        /// The invalid status string.
        status: String,
    },
    /// The requested status transition is not permitted by the lifecycle table.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// The requested status equals the current status.
    ///
    /// Self-transitions are rejected explicitly rather than silently
    /// accepted: accepting them would append a vacuous audit record.
    NoOpTransition {
        /// The status that was requested unchanged.
        status: String,
    },
    /// Coordinates are outside the WGS84 range.
    InvalidCoordinates {
        /// The latitude in degrees.
        latitude: f64,
        /// The longitude in degrees.
        longitude: f64,
    },
    /// Description is empty or invalid.
    InvalidDescription(String),
    /// A transition reason is required but was empty.
    EmptyReason,
    /// Protocol string or components are invalid.
    InvalidProtocol(String),
    /// The protocol sequence space for a year is exhausted.
    ///
    /// This is a fatal configuration issue requiring operator intervention;
    /// wrapping or truncating the sequence would break protocol uniqueness.
    AllocatorExhausted {
        /// The calendar year whose sequence space is exhausted.
        year: i32,
    },
    /// Failed to format a timestamp.
    TimestampFormat(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus { status } => {
                write!(f, "Invalid solicitation status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Transition from '{from}' to '{to}' is not permitted")
            }
            Self::NoOpTransition { status } => {
                write!(f, "Solicitation is already in status '{status}'")
            }
            Self::InvalidCoordinates {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "Coordinates ({latitude}, {longitude}) are outside the WGS84 range"
                )
            }
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::EmptyReason => {
                write!(f, "A non-empty reason is required for this transition")
            }
            Self::InvalidProtocol(msg) => write!(f, "Invalid protocol: {msg}"),
            Self::AllocatorExhausted { year } => {
                write!(f, "Protocol sequence space for year {year} is exhausted")
            }
            Self::TimestampFormat(msg) => write!(f, "Failed to format timestamp: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
