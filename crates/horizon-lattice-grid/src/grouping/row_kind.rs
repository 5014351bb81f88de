//! Classification of rendered rows for grouping columns.
//!
//! Every hook of a grouping column first decides whether it is looking at a
//! leaf or at a group of some criteria. [`RowKind`] is that decision;
//! [`Jurisdiction`] is the set of rows a delegated sort or filter rule
//! applies to.

use std::cmp::Ordering;

use crate::api::CellParams;
use crate::row::RowNode;

/// What a rendered row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind<'a> {
    /// An original record.
    Leaf,
    /// A group of the given criteria.
    Group(&'a str),
}

impl<'a> RowKind<'a> {
    /// Classifies a row by its grouping field.
    pub fn of(node: &'a RowNode) -> Self {
        match node.grouping_field.as_deref() {
            Some(field) => RowKind::Group(field),
            None => RowKind::Leaf,
        }
    }

    /// Returns the grouping criteria, `None` for leaves.
    pub fn criteria(self) -> Option<&'a str> {
        match self {
            RowKind::Leaf => None,
            RowKind::Group(field) => Some(field),
        }
    }
}

/// Rows a delegated sort or filter rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Jurisdiction {
    /// Leaf rows only.
    Leaves,
    /// Group rows of one criteria only.
    Criteria(String),
}

impl Jurisdiction {
    /// Returns `true` if the rule applies to this row.
    pub fn covers(&self, node: &RowNode) -> bool {
        match (self, RowKind::of(node)) {
            (Jurisdiction::Leaves, RowKind::Leaf) => true,
            (Jurisdiction::Criteria(criteria), RowKind::Group(field)) => criteria == field,
            _ => false,
        }
    }
}

/// Orders two rows of different kinds by their depth in the grouping model.
///
/// Rows with the same grouping field (two leaves included) are equal. A leaf
/// is less than any group. Between two criteria, the one coming first in the
/// grouping model is less; criteria absent from the model come before every
/// criteria that is present, and are ordered by name among themselves.
///
/// The comparator is direction agnostic: sorting descending reverses it like
/// any other comparator.
pub fn compare_grouping_depth(params1: &CellParams<'_>, params2: &CellParams<'_>) -> Ordering {
    let field1 = params1.row_node.grouping_field.as_deref();
    let field2 = params2.row_node.grouping_field.as_deref();

    match (field1, field2) {
        _ if field1 == field2 => Ordering::Equal,
        (None, _) => Ordering::Less,
        (_, None) => Ordering::Greater,
        (Some(field1), Some(field2)) => {
            let model = params1.api.row_grouping_model();
            let position = |field: &str| model.iter().position(|criteria| criteria == field);
            position(field1)
                .cmp(&position(field2))
                .then_with(|| field1.cmp(field2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GridSnapshot;
    use crate::value::CellValue;

    fn compare(snapshot: &GridSnapshot, a: &RowNode, b: &RowNode) -> Ordering {
        let p1 = CellParams::new(snapshot, a, "group", CellValue::None);
        let p2 = CellParams::new(snapshot, b, "group", CellValue::None);
        compare_grouping_depth(&p1, &p2)
    }

    #[test]
    fn test_row_kind() {
        let leaf = RowNode::leaf(1);
        let group = RowNode::group("g", "company", "Acme");
        assert_eq!(RowKind::of(&leaf), RowKind::Leaf);
        assert_eq!(RowKind::of(&group), RowKind::Group("company"));
        assert_eq!(RowKind::of(&group).criteria(), Some("company"));
    }

    #[test]
    fn test_jurisdiction() {
        let leaf = RowNode::leaf(1);
        let company = RowNode::group("g", "company", "Acme");
        let country = RowNode::group("h", "country", "FR");

        assert!(Jurisdiction::Leaves.covers(&leaf));
        assert!(!Jurisdiction::Leaves.covers(&company));

        let by_company = Jurisdiction::Criteria("company".into());
        assert!(by_company.covers(&company));
        assert!(!by_company.covers(&country));
        assert!(!by_company.covers(&leaf));
    }

    #[test]
    fn test_same_grouping_field_is_equal() {
        let snapshot = GridSnapshot::new().with_grouping_model(["company"]);
        assert_eq!(compare(&snapshot, &RowNode::leaf(1), &RowNode::leaf(2)), Ordering::Equal);
        assert_eq!(
            compare(
                &snapshot,
                &RowNode::group("a", "company", "A"),
                &RowNode::group("b", "company", "B")
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn test_leaf_is_less_than_group() {
        let snapshot = GridSnapshot::new().with_grouping_model(["company"]);
        let leaf = RowNode::leaf(1);
        let group = RowNode::group("g", "company", "Acme");
        assert_eq!(compare(&snapshot, &leaf, &group), Ordering::Less);
        assert_eq!(compare(&snapshot, &group, &leaf), Ordering::Greater);
    }

    #[test]
    fn test_groups_follow_model_order() {
        let snapshot = GridSnapshot::new().with_grouping_model(["company", "country"]);
        let company = RowNode::group("g", "company", "Acme");
        let country = RowNode::group("h", "country", "FR");
        assert_eq!(compare(&snapshot, &company, &country), Ordering::Less);
        assert_eq!(compare(&snapshot, &country, &company), Ordering::Greater);

        let reversed = GridSnapshot::new().with_grouping_model(["country", "company"]);
        assert_eq!(compare(&reversed, &company, &country), Ordering::Greater);
    }

    #[test]
    fn test_unknown_criteria_comes_first() {
        let snapshot = GridSnapshot::new().with_grouping_model(["company"]);
        let stale = RowNode::group("s", "region", "EU");
        let company = RowNode::group("g", "company", "Acme");
        assert_eq!(compare(&snapshot, &stale, &company), Ordering::Less);
        assert_eq!(compare(&snapshot, &company, &stale), Ordering::Greater);
    }

    #[test]
    fn test_two_unknown_criteria_are_antisymmetric() {
        let snapshot = GridSnapshot::new().with_grouping_model(["company"]);
        let region = RowNode::group("r", "region", "EU");
        let city = RowNode::group("c", "city", "Paris");
        assert_eq!(compare(&snapshot, &city, &region), Ordering::Less);
        assert_eq!(compare(&snapshot, &region, &city), Ordering::Greater);
    }
}
