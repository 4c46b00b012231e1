// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a solicitation description.
///
/// # Errors
///
/// Returns `DomainError::InvalidDescription` if the description is
/// empty or whitespace-only.
pub fn validate_description(description: &str) -> Result<(), DomainError> {
    if description.trim().is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "description cannot be empty",
        )));
    }
    Ok(())
}

/// Validates an administrator's transition reason.
///
/// Every admin-initiated transition must carry a non-empty reason so
/// the audit trail stays meaningful.
///
/// # Errors
///
/// Returns `DomainError::EmptyReason` if the reason is empty or
/// whitespace-only.
pub fn validate_reason(reason: &str) -> Result<(), DomainError> {
    if reason.trim().is_empty() {
        return Err(DomainError::EmptyReason);
    }
    Ok(())
}
