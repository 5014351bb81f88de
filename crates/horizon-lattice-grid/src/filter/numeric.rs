//! Filter operators for numeric columns.

use std::sync::{Arc, Once};

use crate::api::CellParams;
use crate::logging::targets;
use crate::value::CellValue;

use super::operator::{ApplyFilterFn, FilterOperator, InputComponent};

/// Parses a cell value for numeric comparison.
///
/// `None` stays `None` and is never coerced to zero. Other values are
/// coerced numerically; unparseable text yields `NaN`, which fails every
/// comparison.
pub fn parse_numeric_value(value: &CellValue) -> Option<f64> {
    value.to_number()
}

/// Builds a comparison operator that needs a numeric filter value.
///
/// `compare` receives the parsed cell value and the filter value.
fn comparison_operator<C>(tag: &str, compare: C) -> FilterOperator
where
    C: Fn(Option<f64>, f64) -> bool + Send + Sync + Copy + 'static,
{
    FilterOperator::new(tag, move |item, _column| {
        let filter_value = item.value.as_number()?;
        let predicate: ApplyFilterFn = Arc::new(move |params: &CellParams<'_>| {
            compare(parse_numeric_value(&params.value), filter_value)
        });
        Some(predicate)
    })
    .with_label(tag)
    .with_input(InputComponent::Value, Some("number"))
}

/// Builds an ordering operator. `None` cells never match.
fn ordering_operator(tag: &str, compare: fn(f64, f64) -> bool) -> FilterOperator {
    comparison_operator(tag, move |cell, filter| {
        cell.is_some_and(|cell| compare(cell, filter))
    })
}

/// Returns the filter operators of numeric columns.
///
/// In order: `=`, `!=`, `>`, `>=`, `<`, `<=`, `isEmpty`, `isNotEmpty` and
/// `isAnyOf`.
///
/// # Example
///
/// ```
/// use horizon_lattice_grid::filter::grid_numeric_operators;
///
/// let tags: Vec<_> = grid_numeric_operators().into_iter().map(|op| op.value).collect();
/// assert_eq!(tags, ["=", "!=", ">", ">=", "<", "<=", "isEmpty", "isNotEmpty", "isAnyOf"]);
/// ```
pub fn grid_numeric_operators() -> Vec<FilterOperator> {
    vec![
        comparison_operator("=", |cell, filter| cell == Some(filter)),
        comparison_operator("!=", |cell, filter| cell != Some(filter)),
        ordering_operator(">", |cell, filter| cell > filter),
        ordering_operator(">=", |cell, filter| cell >= filter),
        ordering_operator("<", |cell, filter| cell < filter),
        ordering_operator("<=", |cell, filter| cell <= filter),
        FilterOperator::new("isEmpty", |_item, _column| {
            let predicate: ApplyFilterFn =
                Arc::new(|params: &CellParams<'_>| params.value.is_none());
            Some(predicate)
        }),
        FilterOperator::new("isNotEmpty", |_item, _column| {
            let predicate: ApplyFilterFn =
                Arc::new(|params: &CellParams<'_>| params.value.is_some());
            Some(predicate)
        }),
        FilterOperator::new("isAnyOf", |item, _column| {
            let values = item.value.as_list().filter(|values| !values.is_empty())?;
            // Entries may arrive as text from the input widget. Those that do
            // not coerce to a number can never match.
            let numbers: Vec<f64> = values
                .iter()
                .filter_map(|value| value.to_cell_value().to_number())
                .filter(|number| !number.is_nan())
                .collect();
            let predicate: ApplyFilterFn = Arc::new(move |params: &CellParams<'_>| {
                parse_numeric_value(&params.value)
                    .is_some_and(|cell| numbers.iter().any(|&n| n == cell))
            });
            Some(predicate)
        })
        .with_input(InputComponent::MultipleValue, Some("number")),
    ]
}

/// Returns the filter operators of numeric columns.
#[deprecated(note = "use `grid_numeric_operators` instead")]
pub fn grid_numeric_column_operators() -> Vec<FilterOperator> {
    static WARNED: Once = Once::new();
    WARNED.call_once(|| {
        tracing::warn!(
            target: targets::FILTER,
            "grid_numeric_column_operators is deprecated and will be removed in the next major version, use grid_numeric_operators instead"
        );
    });
    grid_numeric_operators()
}
