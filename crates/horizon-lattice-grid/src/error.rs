//! Error types for the data grid.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while building grid columns or applying filters.
///
/// Inapplicable filter input is never an error: operator factories signal it
/// by returning `None` instead of a predicate.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A grouping column was requested for an empty grouping model.
    #[error("Cannot create a grouping column without grouping criteria")]
    EmptyGroupingModel,

    /// A field was referenced that is not present in the column lookup.
    #[error("Unknown column '{field}'")]
    UnknownColumn { field: String },

    /// A filter item names an operator the column does not provide.
    #[error("Column '{field}' has no filter operator '{operator}'")]
    UnknownOperator { field: String, operator: String },

    /// Locale text could not be parsed.
    #[error("Failed to parse locale text: {0}")]
    LocaleParse(String),
}

impl GridError {
    /// Create an unknown column error.
    pub fn unknown_column(field: impl Into<String>) -> Self {
        Self::UnknownColumn {
            field: field.into(),
        }
    }

    /// Create an unknown operator error.
    pub fn unknown_operator(field: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::UnknownOperator {
            field: field.into(),
            operator: operator.into(),
        }
    }
}
