//! Due-date notification digest.
//!
//! Scans every board in the store, resolves each board's property schema to
//! the four logical roles, filters cards to the requesting user, and buckets
//! each qualifying card by due-date horizon. Read-only and synchronous: one
//! call, one `NotificationResponse`.
//!
//! Storage failures never surface as errors. A failed board listing yields
//! an empty response; a failed per-board block listing skips that board; a
//! card that won't parse is dropped. Every absorbed failure is recorded as a
//! `ScanDiagnostic` so callers can observe degraded-but-successful scans
//! without reading logs.

use std::time::Instant;

use serde::Serialize;

use crate::due_date::{resolve_due_date_ms, NO_DUE_DATE};
use crate::property_schema::{option_display_name, resolve_board_roles};
use crate::store::BoardStore;
use crate::time_bucket::{classify_due_date, format_time_to_go, DueBucket};
use crate::types::{Block, Board, NotificationResponse, PropertyValue, TaskNotification};

/// Status display names containing any of these substrings mark a card as
/// closed; closed cards are excluded from all output.
const CLOSED_STATUS_MARKERS: [&str; 3] = ["complete", "done", "archive"];

/// One digest request.
pub struct DigestRequest<'a> {
    /// User whose assigned cards are scanned.
    pub user_id: &'a str,
    /// "Now", epoch milliseconds. Injected so results are reproducible.
    pub now_ms: i64,
    /// Optional scan deadline, checked before each board. Once exceeded the
    /// scan stops and returns whatever it has.
    pub deadline: Option<Instant>,
}

/// A non-fatal problem absorbed during the scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDiagnostic {
    /// Board the problem occurred on; `None` for scan-wide problems.
    pub board_id: Option<String>,
    pub message: String,
}

/// Scan counters, for logging and for tests asserting degraded behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub boards_scanned: u32,
    /// Boards missing an assignee or due-date role property.
    pub boards_skipped: u32,
    pub cards_checked: u32,
    pub cards_assigned: u32,
}

/// Digest result: the response plus everything absorbed along the way.
#[derive(Debug, Default)]
pub struct DigestOutcome {
    pub response: NotificationResponse,
    pub diagnostics: Vec<ScanDiagnostic>,
    pub stats: ScanStats,
}

/// Build the due-date notification digest for one user.
///
/// Boards are visited in storage-return order and cards in storage-return
/// order within each board, so output sequences are deterministic for an
/// unchanged store and `now_ms`.
pub fn build_notification_digest(store: &dyn BoardStore, req: &DigestRequest) -> DigestOutcome {
    let mut outcome = DigestOutcome::default();

    let boards = match store.list_boards() {
        Ok(boards) => boards,
        Err(e) => {
            log::warn!("Failed to list boards: {e}");
            outcome.diagnostics.push(ScanDiagnostic {
                board_id: None,
                message: format!("failed to list boards: {e}"),
            });
            return outcome;
        }
    };

    for board in &boards {
        if let Some(deadline) = req.deadline {
            if Instant::now() >= deadline {
                log::warn!(
                    "Digest deadline exceeded after {} boards; returning partial results",
                    outcome.stats.boards_scanned
                );
                outcome.diagnostics.push(ScanDiagnostic {
                    board_id: None,
                    message: "deadline exceeded; partial results".to_string(),
                });
                break;
            }
        }

        let roles = resolve_board_roles(&board.card_properties);
        let (assignee_prop, due_prop) = match (roles.assignee.as_deref(), roles.due_date.as_deref())
        {
            (Some(assignee), Some(due)) => (assignee, due),
            _ => {
                outcome.stats.boards_skipped += 1;
                continue;
            }
        };

        let blocks = match store.list_blocks_for_board(&board.id) {
            Ok(blocks) => blocks,
            Err(e) => {
                log::warn!("Failed to list blocks for board {}: {e}", board.id);
                outcome.diagnostics.push(ScanDiagnostic {
                    board_id: Some(board.id.clone()),
                    message: format!("failed to list blocks: {e}"),
                });
                continue;
            }
        };
        outcome.stats.boards_scanned += 1;

        for block in &blocks {
            if block.block_type != "card" || block.delete_at != 0 {
                continue;
            }
            outcome.stats.cards_checked += 1;

            let assignee = block.properties.get(assignee_prop).and_then(PropertyValue::as_text);
            if assignee != Some(req.user_id) {
                continue;
            }
            outcome.stats.cards_assigned += 1;

            let due_raw = match block.properties.get(due_prop) {
                Some(value) => value,
                None => continue,
            };
            let due_ms = resolve_due_date_ms(due_raw);
            if due_ms == NO_DUE_DATE {
                log::debug!("Could not parse due date for card {}: {:?}", block.id, due_raw);
                continue;
            }

            let status_name = resolve_option_field(board, block, roles.status.as_deref());
            if is_closed_status(&status_name) {
                continue;
            }
            let priority_name = resolve_option_field(board, block, roles.priority.as_deref());

            let notification = TaskNotification {
                id: block.id.clone(),
                title: block.title.clone(),
                board_id: block.board_id.clone(),
                board_title: board.title.clone(),
                due_date: due_ms,
                priority: priority_name,
                status: status_name,
                time_to_go: format_time_to_go(due_ms, req.now_ms),
            };

            match classify_due_date(due_ms, req.now_ms) {
                DueBucket::Overdue => {
                    outcome.response.overdue.push(notification);
                    outcome.response.summary.overdue_count += 1;
                }
                DueBucket::DueUrgent => {
                    outcome.response.due_urgent.push(notification);
                    outcome.response.summary.due_today += 1;
                }
                DueBucket::DueSoon => {
                    outcome.response.due_soon.push(notification);
                    outcome.response.summary.due_today += 1;
                }
                DueBucket::DueThisWeek => {
                    outcome.response.summary.due_this_week += 1;
                }
                DueBucket::Later => {}
            }
            outcome.response.summary.total_pending += 1;
        }
    }

    log::info!(
        "Notification digest for {}: {} boards scanned, {} cards checked, {} assigned, {} overdue, {} urgent, {} soon, {} pending",
        req.user_id,
        outcome.stats.boards_scanned,
        outcome.stats.cards_checked,
        outcome.stats.cards_assigned,
        outcome.response.overdue.len(),
        outcome.response.due_urgent.len(),
        outcome.response.due_soon.len(),
        outcome.response.summary.total_pending,
    );

    outcome
}

/// Map a select-property value to its display name via the board schema.
/// Missing role or missing card value resolves to an empty string.
fn resolve_option_field(board: &Board, block: &Block, property_id: Option<&str>) -> String {
    let property_id = match property_id {
        Some(id) => id,
        None => return String::new(),
    };
    let option_id = block
        .properties
        .get(property_id)
        .and_then(PropertyValue::as_text)
        .unwrap_or("");
    option_display_name(&board.card_properties, property_id, option_id)
}

fn is_closed_status(status_name: &str) -> bool {
    let lower = status_name.to_lowercase();
    CLOSED_STATUS_MARKERS.iter().any(|marker| lower.contains(marker))
}
