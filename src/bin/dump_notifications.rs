//! Print the due-date notification digest for one user as JSON.
//!
//! Usage: `dump_notifications <user-id> [db-path]`
//!
//! Opens the board store (default `~/.boardpulse/boardpulse.db`), builds the
//! digest against the current wall clock, and writes the response to stdout.
//! Absorbed scan problems go to stderr as warnings.

use std::process::ExitCode;

use boardpulse::db::BoardDb;
use boardpulse::digest::{build_notification_digest, DigestRequest};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let user_id = match args.next() {
        Some(user_id) => user_id,
        None => {
            eprintln!("usage: dump_notifications <user-id> [db-path]");
            return ExitCode::from(2);
        }
    };

    let db = match args.next() {
        Some(path) => BoardDb::open_at(path.into()),
        None => BoardDb::open(),
    };
    let db = match db {
        Ok(db) => db,
        Err(e) => {
            eprintln!("failed to open board store: {e}");
            return ExitCode::FAILURE;
        }
    };

    let request = DigestRequest {
        user_id: &user_id,
        now_ms: chrono::Utc::now().timestamp_millis(),
        deadline: None,
    };
    let outcome = build_notification_digest(&db, &request);

    for diagnostic in &outcome.diagnostics {
        match &diagnostic.board_id {
            Some(board_id) => eprintln!("warning: board {board_id}: {}", diagnostic.message),
            None => eprintln!("warning: {}", diagnostic.message),
        }
    }

    // The only error that reaches the caller is a serialization failure.
    match serde_json::to_string_pretty(&outcome.response) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize digest: {e}");
            ExitCode::FAILURE
        }
    }
}
