// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Protocol allocation.
//!
//! The sequence number for a year is the maximum existing sequence
//! among that year's protocols, plus one. Counting rows instead would
//! under-allocate after any deletion and risk a collision; taking the
//! max keeps allocation monotonic even after deletions.

use crate::error::CoreError;
use crate::ports::Storage;
use urbia_domain::{DomainError, MAX_PROTOCOL_SEQUENCE, Protocol};

/// Allocates the next protocol for a calendar year.
///
/// Uniqueness is ultimately enforced by the protocol's unique
/// constraint at insert time; the caller retries allocation once with
/// a freshly recomputed sequence if the insert reports a collision.
///
/// # Errors
///
/// Returns `DomainError::AllocatorExhausted` (wrapped) if the year's
/// sequence space is exhausted, or a storage error if the query fails.
pub fn allocate_protocol<S: Storage>(storage: &mut S, year: i32) -> Result<Protocol, CoreError> {
    let max_existing: Option<u32> = storage.max_protocol_sequence(year)?;
    let sequence: u32 = max_existing.unwrap_or(0) + 1;

    if sequence > MAX_PROTOCOL_SEQUENCE {
        return Err(CoreError::DomainViolation(DomainError::AllocatorExhausted {
            year,
        }));
    }

    Ok(Protocol::new(year, sequence)?)
}
