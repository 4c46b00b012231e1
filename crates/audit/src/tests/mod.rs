// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ChainError, TransitionRecord, verify_chain};
use urbia_domain::SolicitationStatus;

fn record(
    id: i64,
    from: SolicitationStatus,
    to: SolicitationStatus,
    occurred_at: &str,
) -> TransitionRecord {
    TransitionRecord {
        id,
        solicitation_id: 1,
        actor_id: Some(1),
        from_status: from,
        to_status: to,
        reason: Some(String::from("test")),
        occurred_at: String::from(occurred_at),
    }
}

#[test]
fn test_empty_history_requires_initial_status() {
    assert!(
        verify_chain(
            SolicitationStatus::Pendente,
            SolicitationStatus::Pendente,
            &[]
        )
        .is_ok()
    );

    let result = verify_chain(
        SolicitationStatus::Pendente,
        SolicitationStatus::EmAnalise,
        &[],
    );
    assert!(matches!(
        result,
        Err(ChainError::EmptyHistoryMismatch { .. })
    ));
}

#[test]
fn test_valid_chain_most_recent_first() {
    // Pendente -> EmAnalise -> EmAndamento -> Resolvido
    let history = vec![
        record(
            3,
            SolicitationStatus::EmAndamento,
            SolicitationStatus::Resolvido,
            "2025-03-03T00:00:00Z",
        ),
        record(
            2,
            SolicitationStatus::EmAnalise,
            SolicitationStatus::EmAndamento,
            "2025-03-02T00:00:00Z",
        ),
        record(
            1,
            SolicitationStatus::Pendente,
            SolicitationStatus::EmAnalise,
            "2025-03-01T00:00:00Z",
        ),
    ];

    assert!(
        verify_chain(
            SolicitationStatus::Pendente,
            SolicitationStatus::Resolvido,
            &history
        )
        .is_ok()
    );
}

#[test]
fn test_head_mismatch_detected() {
    let history = vec![record(
        1,
        SolicitationStatus::EmAnalise,
        SolicitationStatus::EmAndamento,
        "2025-03-01T00:00:00Z",
    )];

    let result = verify_chain(
        SolicitationStatus::Pendente,
        SolicitationStatus::EmAndamento,
        &history,
    );
    assert!(matches!(result, Err(ChainError::HeadMismatch { .. })));
}

#[test]
fn test_gap_in_chain_detected() {
    // Missing the EmAnalise -> EmAndamento link
    let history = vec![
        record(
            2,
            SolicitationStatus::EmAndamento,
            SolicitationStatus::Resolvido,
            "2025-03-02T00:00:00Z",
        ),
        record(
            1,
            SolicitationStatus::Pendente,
            SolicitationStatus::EmAnalise,
            "2025-03-01T00:00:00Z",
        ),
    ];

    let result = verify_chain(
        SolicitationStatus::Pendente,
        SolicitationStatus::Resolvido,
        &history,
    );
    assert!(matches!(
        result,
        Err(ChainError::BrokenLink {
            index: 1,
            expected: SolicitationStatus::EmAnalise,
            found: SolicitationStatus::EmAndamento,
        })
    ));
}

#[test]
fn test_tail_mismatch_detected() {
    let history = vec![record(
        1,
        SolicitationStatus::Pendente,
        SolicitationStatus::EmAnalise,
        "2025-03-01T00:00:00Z",
    )];

    let result = verify_chain(
        SolicitationStatus::Pendente,
        SolicitationStatus::Cancelado,
        &history,
    );
    assert!(matches!(
        result,
        Err(ChainError::TailMismatch {
            current: SolicitationStatus::Cancelado,
            found: SolicitationStatus::EmAnalise,
        })
    ));
}

#[test]
fn test_vacuous_record_detected() {
    let history = vec![record(
        1,
        SolicitationStatus::Pendente,
        SolicitationStatus::Pendente,
        "2025-03-01T00:00:00Z",
    )];

    let result = verify_chain(
        SolicitationStatus::Pendente,
        SolicitationStatus::Pendente,
        &history,
    );
    assert!(matches!(
        result,
        Err(ChainError::VacuousRecord { index: 0, .. })
    ));
}
