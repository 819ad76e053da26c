//! Per-board property-role resolution and option display lookup.
//!
//! Boards name and identify their properties however they like, so the four
//! logical roles the digest cares about (assignee, due date, status,
//! priority) are rediscovered per board by matching property type plus a
//! keyword in the lowercased display name. First match in definition order
//! wins.

use crate::types::{PropertyDef, PropertyKind};

/// Property IDs resolved for one board, by logical role.
///
/// `assignee` and `due_date` are hard preconditions for scanning a board;
/// `status` and `priority` are optional and merely leave output fields blank
/// when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardRoles {
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Scan a board's property definitions and pick at most one property ID per
/// role: type must match the role's required type and the lowercased name
/// must contain the role keyword.
pub fn resolve_board_roles(defs: &[PropertyDef]) -> BoardRoles {
    let mut roles = BoardRoles::default();

    for def in defs {
        let name = def.name.to_lowercase();
        match def.kind {
            PropertyKind::Person => {
                if roles.assignee.is_none() && name.contains("assign") {
                    roles.assignee = Some(def.id.clone());
                }
            }
            PropertyKind::Date => {
                if roles.due_date.is_none() && name.contains("due") {
                    roles.due_date = Some(def.id.clone());
                }
            }
            PropertyKind::Select => {
                if roles.status.is_none() && name.contains("status") {
                    roles.status = Some(def.id.clone());
                }
                if roles.priority.is_none() && name.contains("priority") {
                    roles.priority = Some(def.id.clone());
                }
            }
            _ => {}
        }
    }

    roles
}

/// Map a stored option ID to its display value by scanning the property's
/// options list. Unknown property or option falls back to the raw option ID
/// unchanged, never empty and never an error. An empty option ID resolves to
/// an empty string.
pub fn option_display_name(defs: &[PropertyDef], property_id: &str, option_id: &str) -> String {
    if property_id.is_empty() || option_id.is_empty() {
        return String::new();
    }

    if let Some(def) = defs.iter().find(|d| d.id == property_id) {
        if let Some(opt) = def.options.iter().find(|o| o.id == option_id) {
            if !opt.value.is_empty() {
                return opt.value.clone();
            }
        }
    }

    option_id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyOption;

    fn def(id: &str, name: &str, kind: PropertyKind) -> PropertyDef {
        PropertyDef {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            options: Vec::new(),
        }
    }

    fn def_with_options(
        id: &str,
        name: &str,
        kind: PropertyKind,
        options: &[(&str, &str)],
    ) -> PropertyDef {
        PropertyDef {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            options: options
                .iter()
                .map(|(oid, value)| PropertyOption {
                    id: oid.to_string(),
                    value: value.to_string(),
                    color: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn resolves_all_four_roles() {
        let defs = vec![
            def("p-a", "Assigned To", PropertyKind::Person),
            def("p-d", "Due Date", PropertyKind::Date),
            def("p-s", "Status", PropertyKind::Select),
            def("p-p", "Priority", PropertyKind::Select),
        ];

        let roles = resolve_board_roles(&defs);
        assert_eq!(roles.assignee.as_deref(), Some("p-a"));
        assert_eq!(roles.due_date.as_deref(), Some("p-d"));
        assert_eq!(roles.status.as_deref(), Some("p-s"));
        assert_eq!(roles.priority.as_deref(), Some("p-p"));
    }

    #[test]
    fn first_matching_definition_wins() {
        let defs = vec![
            def("p-d1", "Due date", PropertyKind::Date),
            def("p-d2", "Review due", PropertyKind::Date),
        ];

        let roles = resolve_board_roles(&defs);
        assert_eq!(roles.due_date.as_deref(), Some("p-d1"));
    }

    #[test]
    fn role_requires_both_type_and_keyword() {
        // Right keyword, wrong type, and vice versa.
        let defs = vec![
            def("p-1", "Due date", PropertyKind::Text),
            def("p-2", "Created", PropertyKind::Date),
            def("p-3", "Status", PropertyKind::MultiSelect),
        ];

        let roles = resolve_board_roles(&defs);
        assert_eq!(roles, BoardRoles::default());
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let defs = vec![
            def("p-a", "ASSIGNEE", PropertyKind::Person),
            def("p-s", "Task status (weekly)", PropertyKind::Select),
        ];

        let roles = resolve_board_roles(&defs);
        assert_eq!(roles.assignee.as_deref(), Some("p-a"));
        assert_eq!(roles.status.as_deref(), Some("p-s"));
    }

    #[test]
    fn option_lookup_returns_display_value() {
        let defs = vec![def_with_options(
            "p-s",
            "Status",
            PropertyKind::Select,
            &[("s-1", "Not Started"), ("s-2", "In Progress")],
        )];

        assert_eq!(option_display_name(&defs, "p-s", "s-2"), "In Progress");
    }

    #[test]
    fn unknown_option_falls_back_to_raw_id() {
        let defs = vec![def_with_options(
            "p-s",
            "Status",
            PropertyKind::Select,
            &[("s-1", "Not Started")],
        )];

        assert_eq!(option_display_name(&defs, "p-s", "s-gone"), "s-gone");
        assert_eq!(option_display_name(&defs, "p-missing", "s-1"), "s-1");
    }

    #[test]
    fn empty_option_id_resolves_to_empty_string() {
        let defs = vec![def_with_options(
            "p-s",
            "Status",
            PropertyKind::Select,
            &[("s-1", "Not Started")],
        )];

        assert_eq!(option_display_name(&defs, "p-s", ""), "");
        assert_eq!(option_display_name(&defs, "", "s-1"), "");
    }

    #[test]
    fn empty_display_value_falls_back_to_raw_id() {
        let defs = vec![def_with_options(
            "p-s",
            "Status",
            PropertyKind::Select,
            &[("s-1", "")],
        )];

        assert_eq!(option_display_name(&defs, "p-s", "s-1"), "s-1");
    }
}
