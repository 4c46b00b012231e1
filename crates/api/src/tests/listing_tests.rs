// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pagination and listing handler tests.

use crate::error::ApiError;
use crate::handlers::{create_solicitation, list_by_reporter, list_by_status};
use crate::request_response::{
    CreateSolicitationRequest, ListByReporterRequest, ListByStatusRequest,
};
use crate::tests::helpers::{TestHarness, create_request, test_harness};

/// Files `count` reports far enough apart that dedup never triggers.
fn file_spread_out(harness: &mut TestHarness, count: i32) {
    for index in 0..count {
        let mut request: CreateSolicitationRequest = create_request(harness);
        // ~1.1 km apart per step
        request.latitude += 0.01 * f64::from(index);
        create_solicitation(&mut harness.service, &request).expect("create");
    }
}

#[test]
fn test_list_by_status_counts_and_pages() {
    let mut harness = test_harness();
    file_spread_out(&mut harness, 3);

    let response = list_by_status(
        &mut harness.service,
        &ListByStatusRequest {
            status: String::from("PENDENTE"),
            limit: 2,
            offset: 0,
        },
    )
    .expect("list");

    assert_eq!(response.total, 3);
    assert_eq!(response.items.len(), 2);

    let rest = list_by_status(
        &mut harness.service,
        &ListByStatusRequest {
            status: String::from("PENDENTE"),
            limit: 2,
            offset: 2,
        },
    )
    .expect("list");
    assert_eq!(rest.items.len(), 1);
}

#[test]
fn test_list_by_status_rejects_unknown_status() {
    let mut harness = test_harness();

    let result = list_by_status(
        &mut harness.service,
        &ListByStatusRequest {
            status: String::from("pendente"),
            limit: 10,
            offset: 0,
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "status"
    ));
}

#[test]
fn test_list_by_status_rejects_bad_pagination() {
    let mut harness = test_harness();

    let oversized = list_by_status(
        &mut harness.service,
        &ListByStatusRequest {
            status: String::from("PENDENTE"),
            limit: 101,
            offset: 0,
        },
    );
    assert!(matches!(
        oversized,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "limit"
    ));

    let negative = list_by_status(
        &mut harness.service,
        &ListByStatusRequest {
            status: String::from("PENDENTE"),
            limit: 10,
            offset: -1,
        },
    );
    assert!(matches!(
        negative,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "offset"
    ));
}

#[test]
fn test_list_by_reporter_only_sees_own_reports() {
    let mut harness = test_harness();
    file_spread_out(&mut harness, 2);

    let own = list_by_reporter(
        &mut harness.service,
        &ListByReporterRequest {
            reporter_id: harness.citizen_id,
            limit: 10,
            offset: 0,
        },
    )
    .expect("list");
    assert_eq!(own.total, 2);

    let other = list_by_reporter(
        &mut harness.service,
        &ListByReporterRequest {
            reporter_id: harness.citizen_id + 99,
            limit: 10,
            offset: 0,
        },
    )
    .expect("list");
    assert_eq!(other.total, 0);
    assert!(other.items.is_empty());
}
