// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The human-facing protocol tracking code.
//!
//! Protocols are unique within a calendar year and immutable after
//! creation, in the format `YYYY-NNNNN` (e.g. `2025-00042`).

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Largest sequence number representable in the five-digit suffix.
pub const MAX_PROTOCOL_SEQUENCE: u32 = 99_999;

/// A validated protocol tracking code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Protocol(String);

impl Protocol {
    /// Creates a protocol from a year and a sequence number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProtocol` if the year is not four
    /// digits or the sequence is zero or exceeds
    /// [`MAX_PROTOCOL_SEQUENCE`].
    pub fn new(year: i32, sequence: u32) -> Result<Self, DomainError> {
        if !(1000..=9999).contains(&year) {
            return Err(DomainError::InvalidProtocol(format!(
                "year {year} is not a four-digit year"
            )));
        }
        if sequence == 0 || sequence > MAX_PROTOCOL_SEQUENCE {
            return Err(DomainError::InvalidProtocol(format!(
                "sequence {sequence} is outside 1..={MAX_PROTOCOL_SEQUENCE}"
            )));
        }
        Ok(Self(format!("{year}-{sequence:05}")))
    }

    /// Parses a protocol from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProtocol` if the string is not in
    /// `YYYY-NNNNN` form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (year_part, seq_part) = s
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidProtocol(format!("'{s}' has no separator")))?;

        if year_part.len() != 4 || seq_part.len() != 5 {
            return Err(DomainError::InvalidProtocol(format!(
                "'{s}' is not in YYYY-NNNNN form"
            )));
        }

        let year: i32 = year_part
            .parse()
            .map_err(|_| DomainError::InvalidProtocol(format!("'{year_part}' is not a year")))?;
        let sequence: u32 = seq_part.parse().map_err(|_| {
            DomainError::InvalidProtocol(format!("'{seq_part}' is not a sequence number"))
        })?;

        Self::new(year, sequence)
    }

    /// Returns the protocol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the calendar year component.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProtocol` if the stored string is
    /// malformed; this cannot happen for protocols built through
    /// [`Protocol::new`] or [`Protocol::parse`].
    pub fn year(&self) -> Result<i32, DomainError> {
        let (year_part, _) = self
            .0
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidProtocol(self.0.clone()))?;
        year_part
            .parse()
            .map_err(|_| DomainError::InvalidProtocol(self.0.clone()))
    }

    /// Returns the sequence number component.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProtocol` if the stored string is
    /// malformed; this cannot happen for protocols built through
    /// [`Protocol::new`] or [`Protocol::parse`].
    pub fn sequence(&self) -> Result<u32, DomainError> {
        let (_, seq_part) = self
            .0
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidProtocol(self.0.clone()))?;
        seq_part
            .parse()
            .map_err(|_| DomainError::InvalidProtocol(self.0.clone()))
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
