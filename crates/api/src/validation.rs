// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request validation for listing and lookup parameters.
//!
//! Body-level rules (coordinates, description, reason, the transition
//! table) belong to the domain and engine; this module only polices
//! the shape of API parameters before a request reaches the engine.

use thiserror::Error;

/// Request parameter validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestValidationError {
    /// The page size is outside the accepted range.
    #[error("Page size must be between 1 and {max} (got {got})")]
    PageSizeOutOfRange { max: i64, got: i64 },

    /// The page offset is negative.
    #[error("Page offset must not be negative (got {got})")]
    NegativeOffset { got: i64 },

    /// The protocol string does not have the YYYY-NNNNN shape.
    #[error("Protocol must have the form YYYY-NNNNN (got '{got}')")]
    MalformedProtocol { got: String },

    /// The status string is not a known status.
    #[error("Unknown status '{got}'")]
    UnknownStatus { got: String },
}

impl RequestValidationError {
    /// The request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::PageSizeOutOfRange { .. } => "limit",
            Self::NegativeOffset { .. } => "offset",
            Self::MalformedProtocol { .. } => "protocol",
            Self::UnknownStatus { .. } => "status",
        }
    }
}

/// Pagination policy for listing endpoints.
pub struct PaginationPolicy {
    /// Largest accepted page size.
    pub max_page_size: i64,
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self { max_page_size: 100 }
    }
}

impl PaginationPolicy {
    /// Validates a limit/offset pair against the policy.
    ///
    /// # Errors
    ///
    /// Returns a `RequestValidationError` if the limit is outside
    /// `1..=max_page_size` or the offset is negative.
    pub const fn validate(&self, limit: i64, offset: i64) -> Result<(), RequestValidationError> {
        if limit < 1 || limit > self.max_page_size {
            return Err(RequestValidationError::PageSizeOutOfRange {
                max: self.max_page_size,
                got: limit,
            });
        }
        if offset < 0 {
            return Err(RequestValidationError::NegativeOffset { got: offset });
        }
        Ok(())
    }
}

/// Validates the shape of a protocol lookup string.
///
/// Only the shape is checked here; whether the protocol exists is a
/// storage question.
///
/// # Errors
///
/// Returns a `RequestValidationError` if the string is not `YYYY-NNNNN`.
pub fn validate_protocol_shape(protocol: &str) -> Result<(), RequestValidationError> {
    let malformed = || RequestValidationError::MalformedProtocol {
        got: protocol.to_string(),
    };

    let (year, sequence) = protocol.split_once('-').ok_or_else(malformed)?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if sequence.len() != 5 || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_accepts_common_pages() {
        let policy = PaginationPolicy::default();
        assert!(policy.validate(1, 0).is_ok());
        assert!(policy.validate(20, 40).is_ok());
        assert!(policy.validate(100, 0).is_ok());
    }

    #[test]
    fn test_zero_and_oversized_limits_are_rejected() {
        let policy = PaginationPolicy::default();
        assert_eq!(
            policy.validate(0, 0),
            Err(RequestValidationError::PageSizeOutOfRange { max: 100, got: 0 })
        );
        assert_eq!(
            policy.validate(101, 0),
            Err(RequestValidationError::PageSizeOutOfRange { max: 100, got: 101 })
        );
    }

    #[test]
    fn test_negative_offset_is_rejected() {
        let policy = PaginationPolicy::default();
        assert_eq!(
            policy.validate(10, -1),
            Err(RequestValidationError::NegativeOffset { got: -1 })
        );
    }

    #[test]
    fn test_protocol_shape() {
        assert!(validate_protocol_shape("2026-00042").is_ok());
        assert!(validate_protocol_shape("2026-42").is_err());
        assert!(validate_protocol_shape("26-00042").is_err());
        assert!(validate_protocol_shape("2026_00042").is_err());
        assert!(validate_protocol_shape("abcd-00042").is_err());
        assert!(validate_protocol_shape("").is_err());
    }

    #[test]
    fn test_error_field_names() {
        assert_eq!(
            RequestValidationError::NegativeOffset { got: -1 }.field(),
            "offset"
        );
        assert_eq!(
            RequestValidationError::MalformedProtocol {
                got: String::from("x")
            }
            .field(),
            "protocol"
        );
    }
}
