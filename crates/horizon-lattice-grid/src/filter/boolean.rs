//! Filter operators for boolean columns.

use std::sync::Arc;

use crate::api::CellParams;

use super::item::FilterValue;
use super::operator::{ApplyFilterFn, FilterOperator, InputComponent};

/// Returns the filter operators of boolean columns.
///
/// The single `is` operator reads the filter value as `true` when it is the
/// text `"true"` (or the boolean `true`) and compares it with the
/// truthiness of the cell value. An empty filter value disables it.
pub fn grid_boolean_operators() -> Vec<FilterOperator> {
    vec![
        FilterOperator::new("is", |item, _column| {
            if !item.value.is_truthy() {
                return None;
            }

            let value_as_boolean = item.value.as_text() == Some("true")
                || item.value == FilterValue::Bool(true);
            let predicate: ApplyFilterFn = Arc::new(move |params: &CellParams<'_>| {
                params.value.is_truthy() == value_as_boolean
            });
            Some(predicate)
        })
        .with_input(InputComponent::Boolean, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GridSnapshot;
    use crate::column::ColDef;
    use crate::filter::FilterItem;
    use crate::row::RowNode;
    use crate::value::CellValue;

    fn matches(filter_value: FilterValue, cell_value: CellValue) -> Option<bool> {
        let operators = grid_boolean_operators();
        let column = ColDef::boolean("active");
        let item = FilterItem::new("active", "is").with_value(filter_value);
        let predicate = operators[0].apply_filter_fn(&item, &column)?;

        let snapshot = GridSnapshot::new();
        let node = RowNode::leaf(1);
        Some(predicate(&CellParams::new(&snapshot, &node, "active", cell_value)))
    }

    #[test]
    fn test_single_is_operator() {
        let operators = grid_boolean_operators();
        assert_eq!(operators.len(), 1);
        assert_eq!(operators[0].value, "is");
        assert_eq!(
            operators[0].input.as_ref().map(|input| &input.component),
            Some(&InputComponent::Boolean)
        );
    }

    #[test]
    fn test_true_matches_truthy_cells() {
        assert_eq!(matches("true".into(), CellValue::Int(1)), Some(true));
        assert_eq!(matches("true".into(), CellValue::Bool(true)), Some(true));
        assert_eq!(matches("true".into(), CellValue::None), Some(false));
    }

    #[test]
    fn test_false_matches_falsy_cells() {
        assert_eq!(matches("false".into(), CellValue::Bool(false)), Some(true));
        assert_eq!(matches("false".into(), CellValue::from("")), Some(true));
        assert_eq!(matches("false".into(), CellValue::Int(3)), Some(false));
    }

    #[test]
    fn test_empty_value_is_inapplicable() {
        assert_eq!(matches(FilterValue::None, CellValue::Bool(true)), None);
        assert_eq!(matches("".into(), CellValue::Bool(true)), None);
    }
}
