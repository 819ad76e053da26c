//! Domain and wire types for the notification digest.
//!
//! Boards carry a user-defined property schema; cards carry a dynamic
//! property-value map keyed by property ID. Output types serialize with the
//! camelCase field names the notification endpoint has always used.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Board schema
// ---------------------------------------------------------------------------

/// Type tag of a board property definition.
///
/// Unrecognized tags deserialize as `Unknown` so one odd property never
/// fails a whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    Text,
    Number,
    Select,
    MultiSelect,
    Date,
    Person,
    Checkbox,
    Url,
    #[serde(other)]
    Unknown,
}

/// One selectable option of a select/person-like property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOption {
    pub id: String,
    pub value: String,
    #[serde(default)]
    pub color: String,
}

/// A board-schema property definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    #[serde(default)]
    pub options: Vec<PropertyOption>,
}

/// A container of cards with a user-defined property schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub card_properties: Vec<PropertyDef>,
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// A dynamically-typed card property value.
///
/// Due dates additionally arrive as a `Text` value holding a JSON envelope
/// (`{"from": <epoch-or-string>}`); decoding that is the due-date parser's
/// job, not the deserializer's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Unknown(serde_json::Value),
}

impl PropertyValue {
    /// The string form of this value, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A block record on a board. Only `type == "card"` blocks with a zero
/// soft-delete marker participate in the digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    pub board_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub delete_at: i64,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

// ---------------------------------------------------------------------------
// Digest output
// ---------------------------------------------------------------------------

/// A single due-date notification for a qualifying card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNotification {
    pub id: String,
    pub title: String,
    pub board_id: String,
    pub board_title: String,
    /// Due date, epoch milliseconds.
    pub due_date: i64,
    pub priority: String,
    pub status: String,
    /// Human-readable time remaining, e.g. "in 3 days" or "overdue".
    pub time_to_go: String,
}

/// Summary counters accumulated while scanning. Monotonic; never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    pub total_pending: u32,
    pub due_today: u32,
    pub due_this_week: u32,
    pub overdue_count: u32,
}

/// The complete digest returned to the caller. Sequence order follows
/// board/card enumeration order; there is no sort step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub overdue: Vec<TaskNotification>,
    pub due_urgent: Vec<TaskNotification>,
    pub due_soon: Vec<TaskNotification>,
    pub summary: NotificationSummary,
}
