// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Exhaustive checks over the status transition table.

use crate::error::DomainError;
use crate::status::SolicitationStatus;

/// The complete set of legal (from, to) pairs.
const LEGAL_PAIRS: [(SolicitationStatus, SolicitationStatus); 6] = [
    (SolicitationStatus::Pendente, SolicitationStatus::EmAnalise),
    (SolicitationStatus::Pendente, SolicitationStatus::Cancelado),
    (
        SolicitationStatus::EmAnalise,
        SolicitationStatus::EmAndamento,
    ),
    (SolicitationStatus::EmAnalise, SolicitationStatus::Cancelado),
    (
        SolicitationStatus::EmAndamento,
        SolicitationStatus::Resolvido,
    ),
    (
        SolicitationStatus::EmAndamento,
        SolicitationStatus::Cancelado,
    ),
];

#[test]
fn test_transition_table_is_total() {
    for from in SolicitationStatus::all() {
        for to in SolicitationStatus::all() {
            let result = from.validate_transition(to);
            let legal = LEGAL_PAIRS.contains(&(from, to));

            if legal {
                assert!(result.is_ok(), "expected {from} -> {to} to be legal");
            } else if from == to {
                assert!(
                    matches!(result, Err(DomainError::NoOpTransition { .. })),
                    "expected NoOpTransition for {from} -> {to}"
                );
            } else {
                assert!(
                    matches!(result, Err(DomainError::InvalidStatusTransition { .. })),
                    "expected InvalidStatusTransition for {from} -> {to}"
                );
            }
        }
    }
}

#[test]
fn test_cancelado_reachable_from_every_non_terminal_state() {
    for from in SolicitationStatus::all() {
        let result = from.validate_transition(SolicitationStatus::Cancelado);
        if from.is_terminal() {
            assert!(result.is_err());
        } else {
            assert!(result.is_ok());
        }
    }
}

#[test]
fn test_exactly_six_legal_pairs() {
    let mut legal_count = 0;
    for from in SolicitationStatus::all() {
        for to in SolicitationStatus::all() {
            if from.validate_transition(to).is_ok() {
                legal_count += 1;
            }
        }
    }
    assert_eq!(legal_count, LEGAL_PAIRS.len());
}
