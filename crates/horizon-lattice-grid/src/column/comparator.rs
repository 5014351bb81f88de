//! Value comparators used by the built-in column types.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::api::CellParams;
use crate::value::CellValue;

use super::col_def::SortComparatorFn;

/// Orders missing values first.
///
/// Returns `None` when both values are present and need a real comparison.
pub fn compare_nil(a: &CellValue, b: &CellValue) -> Option<Ordering> {
    match (a.is_none(), b.is_none()) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => None,
    }
}

/// Compares numbers numerically and text as text.
///
/// Values are ranked by kind first: missing values, then numbers (booleans
/// included), then text. Text is compared case-insensitively first, then
/// case-sensitively so the order stays total.
pub fn string_number_comparator(a: &CellValue, b: &CellValue) -> Ordering {
    if let Some(ordering) = compare_nil(a, b) {
        return ordering;
    }

    match (a, b) {
        (CellValue::String(a), CellValue::String(b)) => {
            a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
        }
        (CellValue::String(_), _) => Ordering::Greater,
        (_, CellValue::String(_)) => Ordering::Less,
        _ => number_comparator(a, b),
    }
}

/// Compares values numerically.
///
/// Text is parsed first. `NaN`, unparseable text included, sorts after every
/// number and equal to other `NaN`s.
pub fn number_comparator(a: &CellValue, b: &CellValue) -> Ordering {
    if let Some(ordering) = compare_nil(a, b) {
        return ordering;
    }

    match (a.to_number(), b.to_number()) {
        (Some(a), Some(b)) => compare_numbers(a, b),
        // compare_nil already handled the only values without a number
        _ => Ordering::Equal,
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Lifts a value comparator into a column sort hook.
pub fn value_comparator(compare: fn(&CellValue, &CellValue) -> Ordering) -> SortComparatorFn {
    Arc::new(
        move |a: &CellValue, b: &CellValue, _: &CellParams<'_>, _: &CellParams<'_>| compare(a, b),
    )
}
