//! Rendered cell descriptions.
//!
//! Column `render_cell` hooks do not paint; they describe what a cell should
//! show. The view hands leaf and grouping criteria cells to its presenters
//! (the leaf cell and group cell delegates), which receive the same data
//! the hook saw plus presentation flags.

use crate::api::CellParams;
use crate::row::RowId;
use crate::value::CellValue;

/// What a cell renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderedCell {
    /// Nothing.
    #[default]
    Empty,
    /// Plain text produced by a custom renderer.
    Text(String),
    /// A leaf value shown by the leaf cell presenter.
    Leaf(LeafCell),
    /// A group shown by the grouping criteria cell presenter.
    GroupingCriteria(GroupingCriteriaCell),
}

impl RenderedCell {
    /// Returns `true` if the cell renders nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderedCell::Empty)
    }

    /// Returns the text a plain presenter shows for this cell.
    pub fn text(&self) -> String {
        match self {
            RenderedCell::Empty => String::new(),
            RenderedCell::Text(text) => text.clone(),
            RenderedCell::Leaf(leaf) => leaf.value.to_display_string(),
            RenderedCell::GroupingCriteria(group) => group.text(),
        }
    }
}

/// Input of the leaf cell presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafCell {
    /// The row id.
    pub id: RowId,
    /// The leaf column field.
    pub field: String,
    /// The leaf value.
    pub value: CellValue,
}

impl LeafCell {
    /// Captures the leaf cell from its parameters.
    pub fn from_params(params: &CellParams<'_>) -> Self {
        Self {
            id: params.id.clone(),
            field: params.field.to_string(),
            value: params.value.clone(),
        }
    }
}

/// Input of the grouping criteria cell presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingCriteriaCell {
    /// The group row id.
    pub id: RowId,
    /// The grouping column field.
    pub field: String,
    /// The group's key.
    pub grouping_key: CellValue,
    /// Depth of the group row.
    pub depth: usize,
    /// Number of rows directly under the group.
    pub descendant_count: usize,
    /// Whether the group is expanded.
    pub expanded: bool,
    /// Whether the presenter should omit the descendant count.
    pub hide_descendant_count: bool,
}

impl GroupingCriteriaCell {
    /// Captures the group cell from its parameters.
    pub fn from_params(params: &CellParams<'_>, hide_descendant_count: bool) -> Self {
        let node = params.row_node;
        Self {
            id: params.id.clone(),
            field: params.field.to_string(),
            grouping_key: node.grouping_key.clone().unwrap_or_default(),
            depth: node.depth,
            descendant_count: node.descendant_count(),
            expanded: node.expanded,
            hide_descendant_count,
        }
    }

    /// Returns the label, e.g. `Acme (3)`.
    pub fn text(&self) -> String {
        let key = self.grouping_key.to_display_string();
        if self.hide_descendant_count || self.descendant_count == 0 {
            key
        } else {
            format!("{key} ({})", self.descendant_count)
        }
    }
}
