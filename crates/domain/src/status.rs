// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Solicitation status tracking and transition logic.
//!
//! This module defines the closed set of solicitation statuses and the
//! valid transitions between them. Status transitions are
//! administrator-initiated only; the system never advances status on
//! its own. This module is also the single owner of the human-readable
//! status labels used in citizen notifications.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Solicitation status states tracking a report through its lifecycle.
///
/// A report is created in `Pendente` and moves forward one step at a
/// time; `Resolvido` and `Cancelado` are terminal, and `Cancelado` is
/// reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolicitationStatus {
    /// Filed by a citizen, not yet triaged.
    Pendente,
    /// Under review by an administrator.
    EmAnalise,
    /// Accepted and being worked on.
    EmAndamento,
    /// Work completed.
    Resolvido,
    /// Closed without resolution.
    Cancelado,
}

impl SolicitationStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "PENDENTE",
            Self::EmAnalise => "EM_ANALISE",
            Self::EmAndamento => "EM_ANDAMENTO",
            Self::Resolvido => "RESOLVIDO",
            Self::Cancelado => "CANCELADO",
        }
    }

    /// Returns the human-readable Portuguese label for this status.
    ///
    /// Labels are what citizens see in notifications.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::EmAnalise => "Em análise",
            Self::EmAndamento => "Em andamento",
            Self::Resolvido => "Resolvido",
            Self::Cancelado => "Cancelado",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDENTE" => Ok(Self::Pendente),
            "EM_ANALISE" => Ok(Self::EmAnalise),
            "EM_ANDAMENTO" => Ok(Self::EmAndamento),
            "RESOLVIDO" => Ok(Self::Resolvido),
            "CANCELADO" => Ok(Self::Cancelado),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (no outgoing transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolvido | Self::Cancelado)
    }

    /// Returns true if a report in this status counts as open for
    /// duplicate detection.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.is_terminal()
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Self-transitions are rejected with `NoOpTransition`; anything
    /// outside the lifecycle table is rejected with
    /// `InvalidStatusTransition`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if *self == new_status {
            return Err(DomainError::NoOpTransition {
                status: self.as_str().to_string(),
            });
        }

        // Valid forward moves; Cancelado is reachable from any non-terminal state
        let valid = match self {
            Self::Pendente => matches!(new_status, Self::EmAnalise | Self::Cancelado),
            Self::EmAnalise => matches!(new_status, Self::EmAndamento | Self::Cancelado),
            Self::EmAndamento => matches!(new_status, Self::Resolvido | Self::Cancelado),
            Self::Resolvido | Self::Cancelado => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
            })
        }
    }

    /// Returns all statuses in lifecycle order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Pendente,
            Self::EmAnalise,
            Self::EmAndamento,
            Self::Resolvido,
            Self::Cancelado,
        ]
    }
}

impl FromStr for SolicitationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for SolicitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
