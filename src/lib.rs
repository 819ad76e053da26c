//! BoardPulse: due-date notification digest over shared task boards.
//!
//! Scans every board in the store, resolves each board's property schema to
//! logical roles (assignee, due date, status, priority), filters cards to the
//! requesting user, and buckets each card by due-date horizon: overdue, due
//! within the hour, due within the day, due this week. Read-only and
//! pull-based: callers ask for the digest, nothing is scheduled or pushed.

pub mod db;
pub mod digest;
pub mod due_date;
pub mod error;
pub mod property_schema;
pub mod store;
pub mod time_bucket;
pub mod types;
