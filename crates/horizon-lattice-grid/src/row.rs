//! Rows as rendered by the grid.
//!
//! A [`RowNode`] is the grid's view of one rendered row. Leaf rows represent
//! an original record; group rows are synthesized by row grouping and carry
//! the criteria they group by (`grouping_field`) and the shared value
//! (`grouping_key`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Identifier of a grid row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Numeric row id.
    Int(i64),
    /// Text row id.
    Str(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{n}"),
            RowId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Int(n)
    }
}

impl From<i32> for RowId {
    fn from(n: i32) -> Self {
        RowId::Int(n as i64)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId::Str(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId::Str(s)
    }
}

/// A row as rendered by the grid.
///
/// # Example
///
/// ```
/// use horizon_lattice_grid::RowNode;
///
/// let group = RowNode::group("auto-generated-row-company/Acme", "company", "Acme")
///     .with_children([1, 2]);
/// let leaf = RowNode::leaf(1).with_depth(1);
///
/// assert!(!group.is_leaf());
/// assert_eq!(group.descendant_count(), 2);
/// assert!(leaf.is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowNode {
    /// The row id.
    pub id: RowId,
    /// Depth in the grouping hierarchy (0 for top level rows).
    #[serde(default)]
    pub depth: usize,
    /// Id of the parent group row, if any.
    #[serde(default)]
    pub parent: Option<RowId>,
    /// Ids of the direct children (empty for leaves).
    #[serde(default)]
    pub children: Vec<RowId>,
    /// The grouping criteria this row represents, `None` for leaf rows.
    #[serde(default)]
    pub grouping_field: Option<String>,
    /// The group's value under its grouping criteria.
    #[serde(default)]
    pub grouping_key: Option<CellValue>,
    /// Whether the group row is expanded.
    #[serde(default)]
    pub expanded: bool,
}

impl RowNode {
    /// Creates a leaf row node.
    pub fn leaf(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            depth: 0,
            parent: None,
            children: Vec::new(),
            grouping_field: None,
            grouping_key: None,
            expanded: false,
        }
    }

    /// Creates a group row node for the given criteria and key.
    pub fn group(
        id: impl Into<RowId>,
        grouping_field: impl Into<String>,
        grouping_key: impl Into<CellValue>,
    ) -> Self {
        Self {
            grouping_field: Some(grouping_field.into()),
            grouping_key: Some(grouping_key.into()),
            ..Self::leaf(id)
        }
    }

    /// Sets the depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the parent group row.
    pub fn with_parent(mut self, parent: impl Into<RowId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the direct children.
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RowId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the expanded state.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Returns `true` if this row represents an original record.
    pub fn is_leaf(&self) -> bool {
        self.grouping_field.is_none()
    }

    /// Returns the number of rows directly under this group.
    pub fn descendant_count(&self) -> usize {
        self.children.len()
    }
}

/// Parameters passed to row level callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct RowParams {
    /// The row id.
    pub id: RowId,
    /// The rendered row.
    pub row_node: RowNode,
    /// Fields of all grid columns.
    pub columns: Vec<String>,
}

impl RowParams {
    /// Creates row parameters.
    pub fn new(row_node: RowNode, columns: Vec<String>) -> Self {
        Self {
            id: row_node.id.clone(),
            row_node,
            columns,
        }
    }
}

/// Why row editing started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowEditStartReason {
    /// Enter was pressed on a cell.
    EnterKeyDown,
    /// A cell was double clicked.
    CellDoubleClick,
    /// A printable key was pressed on a cell.
    PrintableKeyDown,
    /// Delete or backspace was pressed on a cell.
    DeleteKeyDown,
}

/// Why row editing stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowEditStopReason {
    /// Focus left the row.
    RowFocusOut,
    /// Escape was pressed.
    EscapeKeyDown,
    /// Enter was pressed.
    EnterKeyDown,
}

/// Extra spacing around a row, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RowSpacing {
    /// Space above the row.
    #[serde(default)]
    pub top: Option<f64>,
    /// Space below the row.
    #[serde(default)]
    pub bottom: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_node() {
        let node = RowNode::group("g", "company", "Acme")
            .with_children([1, 2, 3])
            .with_expanded(true);
        assert_eq!(node.grouping_field.as_deref(), Some("company"));
        assert_eq!(node.grouping_key, Some(CellValue::from("Acme")));
        assert_eq!(node.descendant_count(), 3);
        assert!(node.expanded);
    }

    #[test]
    fn test_row_id_display() {
        assert_eq!(RowId::from(3).to_string(), "3");
        assert_eq!(RowId::from("a").to_string(), "a");
    }

    #[test]
    fn test_row_params_takes_node_id() {
        let params = RowParams::new(RowNode::leaf(9), vec!["name".into()]);
        assert_eq!(params.id, RowId::Int(9));
        assert_eq!(params.columns, vec!["name".to_string()]);
    }

    #[test]
    fn test_edit_reasons_serialize_camel_case() {
        assert_eq!(
            serde_json::to_string(&RowEditStartReason::CellDoubleClick).unwrap(),
            "\"cellDoubleClick\""
        );
        let reason: RowEditStopReason = serde_json::from_str("\"rowFocusOut\"").unwrap();
        assert_eq!(reason, RowEditStopReason::RowFocusOut);
    }

    #[test]
    fn test_row_node_from_json() {
        let node: RowNode =
            serde_json::from_str(r#"{"id": "g1", "groupingField": "company", "groupingKey": "Acme"}"#)
                .unwrap();
        assert!(!node.is_leaf());
        assert_eq!(node.depth, 0);

        let spacing: RowSpacing = serde_json::from_str(r#"{"top": 4}"#).unwrap();
        assert_eq!(spacing.top, Some(4.0));
        assert_eq!(spacing.bottom, None);
    }
}
