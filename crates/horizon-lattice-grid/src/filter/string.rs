//! Filter operators for string columns.
//!
//! Text comparisons ignore case. The filter value is trimmed before use.

use std::sync::Arc;

use crate::api::CellParams;
use crate::value::CellValue;

use super::operator::{ApplyFilterFn, FilterOperator, InputComponent};

/// Text of a cell for matching; `None` cells have no text.
fn cell_text(value: &CellValue) -> Option<String> {
    value.is_some().then(|| value.to_display_string().to_lowercase())
}

/// Builds an operator that matches the cell text against the filter text.
fn text_operator(tag: &str, matches: fn(&str, &str) -> bool) -> FilterOperator {
    FilterOperator::new(tag, move |item, _column| {
        let needle = item.value.as_text()?.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let predicate: ApplyFilterFn = Arc::new(move |params: &CellParams<'_>| {
            cell_text(&params.value).is_some_and(|text| matches(&text, &needle))
        });
        Some(predicate)
    })
    .with_input(InputComponent::Value, None)
}

/// Returns the filter operators of string columns.
///
/// In order: `contains`, `equals`, `startsWith`, `endsWith`, `isEmpty`,
/// `isNotEmpty` and `isAnyOf`. These are also the operators of the default
/// column definition.
pub fn grid_string_operators() -> Vec<FilterOperator> {
    vec![
        text_operator("contains", |text, needle| text.contains(needle)),
        text_operator("equals", |text, needle| text == needle),
        text_operator("startsWith", |text, needle| text.starts_with(needle)),
        text_operator("endsWith", |text, needle| text.ends_with(needle)),
        FilterOperator::new("isEmpty", |_item, _column| {
            let predicate: ApplyFilterFn = Arc::new(|params: &CellParams<'_>| {
                params.value.is_none() || params.value.as_str() == Some("")
            });
            Some(predicate)
        }),
        FilterOperator::new("isNotEmpty", |_item, _column| {
            let predicate: ApplyFilterFn = Arc::new(|params: &CellParams<'_>| {
                params.value.is_some() && params.value.as_str() != Some("")
            });
            Some(predicate)
        }),
        FilterOperator::new("isAnyOf", |item, _column| {
            let values = item.value.as_list().filter(|values| !values.is_empty())?;
            let candidates: Vec<String> = values
                .iter()
                .map(|value| value.to_cell_value().to_display_string().trim().to_lowercase())
                .collect();
            let predicate: ApplyFilterFn = Arc::new(move |params: &CellParams<'_>| {
                cell_text(&params.value)
                    .is_some_and(|text| candidates.iter().any(|candidate| *candidate == text))
            });
            Some(predicate)
        })
        .with_input(InputComponent::MultipleValue, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GridSnapshot;
    use crate::column::ColDef;
    use crate::filter::{find_operator, FilterItem, FilterValue};
    use crate::row::RowNode;

    fn check(tag: &str, filter_value: FilterValue, value: CellValue) -> Option<bool> {
        let operators = grid_string_operators();
        let item = FilterItem::new("name", tag).with_value(filter_value);
        let predicate = find_operator(&operators, tag)?.apply_filter_fn(&item, &ColDef::string("name"))?;

        let snapshot = GridSnapshot::new();
        let node = RowNode::leaf(1);
        Some(predicate(&CellParams::new(&snapshot, &node, "name", value)))
    }

    #[test]
    fn test_text_operators_ignore_case() {
        assert_eq!(check("contains", "LOV".into(), "Ada Lovelace".into()), Some(true));
        assert_eq!(check("equals", " ada ".into(), "Ada".into()), Some(true));
        assert_eq!(check("startsWith", "ad".into(), "Ada".into()), Some(true));
        assert_eq!(check("endsWith", "ce".into(), "Lovelace".into()), Some(true));
        assert_eq!(check("endsWith", "ada".into(), "Lovelace".into()), Some(false));
    }

    #[test]
    fn test_text_operators_need_text() {
        assert_eq!(check("contains", FilterValue::None, "Ada".into()), None);
        assert_eq!(check("contains", "  ".into(), "Ada".into()), None);
        assert_eq!(check("contains", "a".into(), CellValue::None), Some(false));
    }

    #[test]
    fn test_numbers_are_matched_as_text() {
        assert_eq!(check("contains", "12".into(), CellValue::Int(3120)), Some(true));
    }

    #[test]
    fn test_empty_checks() {
        assert_eq!(check("isEmpty", FilterValue::None, "".into()), Some(true));
        assert_eq!(check("isEmpty", FilterValue::None, CellValue::None), Some(true));
        assert_eq!(check("isNotEmpty", FilterValue::None, "".into()), Some(false));
        assert_eq!(check("isNotEmpty", FilterValue::None, "x".into()), Some(true));
    }

    #[test]
    fn test_is_any_of() {
        assert_eq!(check("isAnyOf", FilterValue::List(Vec::new()), "a".into()), None);
        assert_eq!(check("isAnyOf", vec!["Ada", "Grace"].into(), "grace".into()), Some(true));
        assert_eq!(check("isAnyOf", vec!["Ada"].into(), "Alan".into()), Some(false));
    }
}
