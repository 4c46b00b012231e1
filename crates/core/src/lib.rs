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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocator;
mod dedup;
mod error;
mod notification;
mod ports;
mod service;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use allocator::allocate_protocol;
pub use dedup::{DEFAULT_DEDUP_RADIUS_METERS, DuplicateCandidate, DuplicateDetector};
pub use error::CoreError;
pub use notification::{NotificationEvent, transition_notification};
pub use ports::{
    AdminAuthCheck, CategoryLookup, DispatchError, LifecycleBackend, NotificationDispatcher,
    OpenReport, Page, StatusWrite, Storage, StorageError,
};
pub use service::{CreateSolicitation, SolicitationLifecycleService};
