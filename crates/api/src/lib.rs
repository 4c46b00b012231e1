// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Urbia solicitation tracker.
//!
//! Handlers translate request DTOs into lifecycle engine calls against
//! a [`urbia::SolicitationLifecycleService`] and translate engine
//! errors into [`ApiError`] values. Domain and core errors never cross
//! the boundary directly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod handlers;
pub mod request_response;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    create_solicitation, get_by_protocol, get_history, list_by_reporter, list_by_status,
    transition_status,
};
pub use request_response::{
    CreateSolicitationRequest, CreateSolicitationResponse, GetHistoryResponse,
    ListByReporterRequest, ListByStatusRequest, ListSolicitationsResponse, SolicitationInfo,
    TransitionRecordInfo, TransitionStatusRequest, TransitionStatusResponse,
};
pub use validation::{PaginationPolicy, RequestValidationError, validate_protocol_shape};
