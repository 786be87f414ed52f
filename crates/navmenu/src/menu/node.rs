//! Resolved menu nodes as handed to the rendering layer.

use serde::{Deserialize, Serialize};

/// Rendering and capability flags carried by a menu node.
///
/// Every flag defaults to `false` and is only serialized when set, so the
/// JSON shape carries `dropDown`, `isDashboard` and `project_manage` on the
/// nodes that declare them and nowhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuFlags {
    /// Rendered as an expandable top-level dropdown.
    #[serde(rename = "dropDown", default, skip_serializing_if = "is_false")]
    pub drop_down: bool,

    /// Entry acts on dashboards rather than navigating to a page.
    #[serde(rename = "isDashboard", default, skip_serializing_if = "is_false")]
    pub is_dashboard: bool,

    /// Entry requires project management rights.
    #[serde(default, skip_serializing_if = "is_false")]
    pub project_manage: bool,
}

impl MenuFlags {
    /// No flags set.
    pub const NONE: Self = Self {
        drop_down: false,
        is_dashboard: false,
        project_manage: false,
    };

    /// Top-level dropdown.
    pub const DROP_DOWN: Self = Self {
        drop_down: true,
        ..Self::NONE
    };

    /// Dashboard action gated on project management rights.
    pub const DASHBOARD_ACTION: Self = Self {
        is_dashboard: true,
        project_manage: true,
        ..Self::NONE
    };

    /// True when no flag is set.
    pub const fn is_empty(&self) -> bool {
        !self.drop_down && !self.is_dashboard && !self.project_manage
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One entry of the navigation tree with its label already localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Localized display label.
    pub name: String,

    /// Stable identifier, unique among siblings. Routing refers to nodes by it.
    pub id: String,

    /// Nesting depth, 1 for root entries.
    pub level: u8,

    #[serde(flatten)]
    pub flags: MenuFlags,

    /// Child entries in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// True when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Height of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(MenuNode::depth)
            .max()
            .unwrap_or_default()
    }

    /// Direct child with the given id.
    pub fn child(&self, id: &str) -> Option<&MenuNode> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Visit this node and all descendants in pre-order.
    ///
    /// The callback receives each node together with its parent; the node
    /// this is called on is reported with no parent.
    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a MenuNode, Option<&'a MenuNode>),
    {
        self.walk_from(None, f);
    }

    pub(crate) fn walk_from<'a, F>(&'a self, parent: Option<&'a MenuNode>, f: &mut F)
    where
        F: FnMut(&'a MenuNode, Option<&'a MenuNode>),
    {
        f(self, parent);
        for child in &self.children {
            child.walk_from(Some(self), f);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn node(id: &str, level: u8, children: Vec<MenuNode>) -> MenuNode {
        MenuNode {
            name: id.to_uppercase(),
            id: id.to_string(),
            level,
            flags: MenuFlags::NONE,
            children,
        }
    }

    #[test]
    fn flags_serialize_only_when_set() {
        let mut n = node("dashboard", 1, vec![]);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "DASHBOARD", "id": "dashboard", "level": 1})
        );

        n.flags = MenuFlags::DROP_DOWN;
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["dropDown"], true);
        assert!(json.get("isDashboard").is_none());
        assert!(json.get("project_manage").is_none());
    }

    #[test]
    fn dashboard_action_uses_wire_names() {
        let mut n = node("create_folder", 2, vec![]);
        n.flags = MenuFlags::DASHBOARD_ACTION;
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["isDashboard"], true);
        assert_eq!(json["project_manage"], true);
        assert!(json.get("dropDown").is_none());
    }

    #[test]
    fn absent_flags_and_children_deserialize_to_defaults() {
        let n: MenuNode =
            serde_json::from_str(r#"{"name": "Search", "id": "retrieve", "level": 1}"#).unwrap();
        assert!(n.flags.is_empty());
        assert!(n.is_leaf());
    }

    #[test]
    fn children_serialize_in_order() {
        let n = node(
            "monitor",
            1,
            vec![node("alarmStrategy", 2, vec![]), node("other", 2, vec![])],
        );
        let json = serde_json::to_value(&n).unwrap();
        let ids: Vec<&str> = json["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["alarmStrategy", "other"]);
    }

    #[test]
    fn depth_counts_longest_branch() {
        let n = node(
            "a",
            1,
            vec![
                node("b", 2, vec![]),
                node("c", 2, vec![node("d", 3, vec![])]),
            ],
        );
        assert_eq!(n.depth(), 3);
        assert_eq!(n.child("b").unwrap().depth(), 1);
        assert!(n.child("d").is_none());
    }

    #[test]
    fn walk_reports_parents_in_preorder() {
        let n = node(
            "a",
            1,
            vec![node("b", 2, vec![node("c", 3, vec![])]), node("d", 2, vec![])],
        );
        let mut seen = Vec::new();
        n.walk(&mut |node, parent| seen.push((node.id.as_str(), parent.map(|p| p.id.as_str()))));
        assert_eq!(
            seen,
            [
                ("a", None),
                ("b", Some("a")),
                ("c", Some("b")),
                ("d", Some("a")),
            ]
        );
    }
}
