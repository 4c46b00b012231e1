// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification event construction.
//!
//! The engine only builds and emits events; persistence of pending
//! notifications and delivery (email) are external.

use urbia_domain::{Solicitation, SolicitationStatus};

/// Title used for every status-change notification.
const STATUS_CHANGE_TITLE: &str = "Sua solicitação foi atualizada";

/// A notification handed to the external dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// The citizen to notify (the original reporter).
    pub recipient_user_id: i64,
    /// The solicitation the notification refers to.
    pub solicitation_id: i64,
    /// Short human-readable title.
    pub title: String,
    /// Body text with the old/new status labels and the admin's reason.
    pub body: String,
}

/// Builds the notification for a completed status transition.
///
/// The body uses the human-readable status labels, never the raw enum
/// names, and appends the administrator's comment when present.
#[must_use]
pub fn transition_notification(
    solicitation: &Solicitation,
    from: SolicitationStatus,
    to: SolicitationStatus,
    reason: &str,
) -> NotificationEvent {
    let mut body = format!(
        "Status mudou de \"{}\" para \"{}\".",
        from.label(),
        to.label()
    );

    if !reason.trim().is_empty() {
        body.push_str("\n\nComentário do administrador:\n");
        body.push_str(reason);
    }

    NotificationEvent {
        recipient_user_id: solicitation.reporter_id,
        solicitation_id: solicitation.id,
        title: String::from(STATUS_CHANGE_TITLE),
        body,
    }
}
