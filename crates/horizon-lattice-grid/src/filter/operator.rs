//! Filter operator descriptors.

use std::fmt;
use std::sync::Arc;

use crate::api::CellParams;
use crate::column::ColDef;
use crate::locale::LocaleTextLookup;

use super::item::FilterItem;

/// Predicate over a cell. Returns `true` to keep the row.
pub type ApplyFilterFn = Arc<dyn Fn(&CellParams<'_>) -> bool + Send + Sync>;

/// Builds a predicate from a filter item.
///
/// Returns `None` when the item is incomplete or does not apply, in which
/// case the caller skips the filter.
pub type GetApplyFilterFn =
    Arc<dyn Fn(&FilterItem, &ColDef) -> Option<ApplyFilterFn> + Send + Sync>;

/// Input widget used by the filter panel to edit an operator's value.
///
/// This is metadata for the panel; the grid core never instantiates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputComponent {
    /// Single value text input.
    Value,
    /// Multiple values input.
    MultipleValue,
    /// True/false selector.
    Boolean,
    /// Application defined widget, identified by name.
    Custom(String),
}

/// Input binding of an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInput {
    /// The widget.
    pub component: InputComponent,
    /// The HTML-style input type hint, e.g. `number`.
    pub input_type: Option<String>,
}

/// A filter operator: a tag, an optional label and a predicate factory.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_lattice_grid::CellParams;
/// use horizon_lattice_grid::filter::{ApplyFilterFn, FilterOperator};
///
/// let not_null = FilterOperator::new("isNotNull", |_item, _column| {
///     let predicate: ApplyFilterFn = Arc::new(|params: &CellParams<'_>| params.value.is_some());
///     Some(predicate)
/// });
/// assert_eq!(not_null.value, "isNotNull");
/// ```
#[derive(Clone)]
pub struct FilterOperator {
    /// The operator tag, e.g. `=` or `isEmpty`.
    pub value: String,
    /// Label shown in the filter panel.
    pub label: Option<String>,
    /// The predicate factory.
    pub get_apply_filter_fn: GetApplyFilterFn,
    /// Input widget binding.
    pub input: Option<FilterInput>,
}

impl FilterOperator {
    /// Creates an operator without label or input binding.
    pub fn new<F>(value: impl Into<String>, get_apply_filter_fn: F) -> Self
    where
        F: Fn(&FilterItem, &ColDef) -> Option<ApplyFilterFn> + Send + Sync + 'static,
    {
        Self {
            value: value.into(),
            label: None,
            get_apply_filter_fn: Arc::new(get_apply_filter_fn),
            input: None,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Binds an input widget.
    pub fn with_input(mut self, component: InputComponent, input_type: Option<&str>) -> Self {
        self.input = Some(FilterInput {
            component,
            input_type: input_type.map(str::to_string),
        });
        self
    }

    /// Builds the predicate for a filter item.
    pub fn apply_filter_fn(&self, item: &FilterItem, column: &ColDef) -> Option<ApplyFilterFn> {
        (self.get_apply_filter_fn)(item, column)
    }

    /// Returns a copy whose predicates are transformed by `wrap`.
    ///
    /// Factories that return `None` keep returning `None`.
    pub fn wrap_apply_filter_fn<W>(&self, wrap: W) -> Self
    where
        W: Fn(ApplyFilterFn) -> ApplyFilterFn + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.get_apply_filter_fn);
        Self {
            get_apply_filter_fn: Arc::new(move |item: &FilterItem, column: &ColDef| {
                inner(item, column).map(&wrap)
            }),
            ..self.clone()
        }
    }

    /// Returns the label to display.
    ///
    /// Uses the explicit label, then the `filterOperator<Value>` locale text,
    /// then the tag itself.
    pub fn display_label(&self, locale: &dyn LocaleTextLookup) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }

        let mut chars = self.value.chars();
        let key = match chars.next() {
            Some(first) => format!("filterOperator{}{}", first.to_uppercase(), chars.as_str()),
            None => return String::new(),
        };
        locale.locale_text(&key).unwrap_or_else(|| self.value.clone())
    }
}

impl fmt::Debug for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterOperator")
            .field("value", &self.value)
            .field("label", &self.label)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

/// Finds an operator by tag.
pub fn find_operator<'a>(operators: &'a [FilterOperator], value: &str) -> Option<&'a FilterOperator> {
    operators.iter().find(|operator| operator.value == value)
}
