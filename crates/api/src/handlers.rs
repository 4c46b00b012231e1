// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers translate DTOs to engine calls and engine errors back to
//! [`ApiError`]. They hold no state of their own; everything flows
//! through the [`SolicitationLifecycleService`].

use std::str::FromStr;
use tracing::info;
use urbia::{CreateSolicitation, Page, SolicitationLifecycleService};
use urbia_domain::{Solicitation, SolicitationStatus};

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    CreateSolicitationRequest, CreateSolicitationResponse, GetHistoryResponse,
    ListByReporterRequest, ListByStatusRequest, ListSolicitationsResponse, SolicitationInfo,
    TransitionRecordInfo, TransitionStatusRequest, TransitionStatusResponse,
};
use crate::validation::{PaginationPolicy, RequestValidationError, validate_protocol_shape};

/// Files a new solicitation.
///
/// # Errors
///
/// Returns an error if the input is invalid, the category does not
/// exist, an open duplicate blocks creation, or the engine fails.
pub fn create_solicitation<B: urbia::LifecycleBackend>(
    service: &mut SolicitationLifecycleService<B>,
    request: &CreateSolicitationRequest,
) -> Result<CreateSolicitationResponse, ApiError> {
    let create = CreateSolicitation {
        reporter_id: request.reporter_id,
        category_id: request.category_id,
        latitude: request.latitude,
        longitude: request.longitude,
        address: request.address.clone(),
        description: request.description.clone(),
    };

    let solicitation: Solicitation = service.create(&create).map_err(translate_core_error)?;
    let protocol: String = solicitation.protocol.as_str().to_string();

    info!(
        solicitation_id = solicitation.id,
        protocol = %protocol,
        "Solicitation filed via API"
    );

    Ok(CreateSolicitationResponse {
        solicitation: SolicitationInfo::from(solicitation),
        message: format!("Solicitação registrada com protocolo {protocol}"),
    })
}

/// Transitions a solicitation's status.
///
/// # Errors
///
/// Returns an error if the status name is unknown, the actor is not an
/// administrator, the reason is empty, the transition is not permitted,
/// or the solicitation does not exist.
pub fn transition_status<B: urbia::LifecycleBackend>(
    service: &mut SolicitationLifecycleService<B>,
    request: &TransitionStatusRequest,
) -> Result<TransitionStatusResponse, ApiError> {
    let requested: SolicitationStatus =
        SolicitationStatus::from_str(&request.new_status).map_err(|_| {
            ApiError::from(RequestValidationError::UnknownStatus {
                got: request.new_status.clone(),
            })
        })?;

    let solicitation: Solicitation = service
        .transition(
            request.solicitation_id,
            request.actor_id,
            requested,
            &request.reason,
        )
        .map_err(translate_core_error)?;

    let label: String = solicitation.status.label().to_string();
    Ok(TransitionStatusResponse {
        solicitation: SolicitationInfo::from(solicitation),
        message: format!("Status atualizado para \"{label}\""),
    })
}

/// Returns the audit history of a solicitation, most-recent first.
///
/// # Errors
///
/// Returns an error if the solicitation does not exist or the query
/// fails.
pub fn get_history<B: urbia::LifecycleBackend>(
    service: &mut SolicitationLifecycleService<B>,
    solicitation_id: i64,
) -> Result<GetHistoryResponse, ApiError> {
    let history = service
        .get_history(solicitation_id)
        .map_err(translate_core_error)?;

    Ok(GetHistoryResponse {
        solicitation_id,
        history: history.into_iter().map(TransitionRecordInfo::from).collect(),
    })
}

/// Looks a solicitation up by its citizen-facing protocol.
///
/// # Errors
///
/// Returns an error if the protocol is malformed, no solicitation
/// carries it, or the query fails.
pub fn get_by_protocol<B: urbia::LifecycleBackend>(
    service: &mut SolicitationLifecycleService<B>,
    protocol: &str,
) -> Result<SolicitationInfo, ApiError> {
    validate_protocol_shape(protocol)?;

    let solicitation = service
        .get_by_protocol(protocol)
        .map_err(translate_core_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Solicitation"),
            message: format!("No solicitation carries protocol '{protocol}'"),
        })?;

    Ok(SolicitationInfo::from(solicitation))
}

/// Lists solicitations in a given status, newest first.
///
/// # Errors
///
/// Returns an error if the status name is unknown, the pagination
/// parameters are out of range, or the query fails.
pub fn list_by_status<B: urbia::LifecycleBackend>(
    service: &mut SolicitationLifecycleService<B>,
    request: &ListByStatusRequest,
) -> Result<ListSolicitationsResponse, ApiError> {
    let status: SolicitationStatus = SolicitationStatus::from_str(&request.status)
        .map_err(|_| {
            ApiError::from(RequestValidationError::UnknownStatus {
                got: request.status.clone(),
            })
        })?;
    PaginationPolicy::default().validate(request.limit, request.offset)?;

    let page: Page<Solicitation> = service
        .list_by_status(status, request.limit, request.offset)
        .map_err(translate_core_error)?;

    Ok(ListSolicitationsResponse {
        total: page.total,
        items: page.items.into_iter().map(SolicitationInfo::from).collect(),
    })
}

/// Lists solicitations filed by one citizen, newest first.
///
/// # Errors
///
/// Returns an error if the pagination parameters are out of range or
/// the query fails.
pub fn list_by_reporter<B: urbia::LifecycleBackend>(
    service: &mut SolicitationLifecycleService<B>,
    request: &ListByReporterRequest,
) -> Result<ListSolicitationsResponse, ApiError> {
    PaginationPolicy::default().validate(request.limit, request.offset)?;

    let page: Page<Solicitation> = service
        .list_by_reporter(request.reporter_id, request.limit, request.offset)
        .map_err(translate_core_error)?;

    Ok(ListSolicitationsResponse {
        total: page.total,
        items: page.items.into_iter().map(SolicitationInfo::from).collect(),
    })
}
