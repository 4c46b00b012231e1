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

mod error;
mod geo;
mod protocol;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use geo::{EARTH_RADIUS_METERS, haversine_distance_meters, validate_coordinates};
pub use protocol::{MAX_PROTOCOL_SEQUENCE, Protocol};
pub use status::SolicitationStatus;
pub use types::{NewSolicitation, Solicitation, now_utc_rfc3339};
pub use validation::{validate_description, validate_reason};
