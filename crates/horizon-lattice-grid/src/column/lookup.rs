//! Lookup of column definitions by field.

use std::collections::HashMap;

use super::col_def::ColDef;

/// Column definitions keyed by field, in insertion order.
///
/// # Example
///
/// ```
/// use horizon_lattice_grid::{ColDef, ColumnLookup};
///
/// let lookup = ColumnLookup::from_columns([ColDef::string("name"), ColDef::number("age")]);
/// assert_eq!(lookup.len(), 2);
/// assert_eq!(lookup.get("age").map(|column| column.col_type.as_str()), Some("number"));
/// assert_eq!(lookup.fields().collect::<Vec<_>>(), ["name", "age"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnLookup {
    columns: HashMap<String, ColDef>,
    order: Vec<String>,
}

impl ColumnLookup {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lookup from column definitions.
    ///
    /// A later definition with the same field replaces the earlier one.
    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = ColDef>,
    {
        let mut lookup = Self::new();
        for column in columns {
            lookup.insert(column);
        }
        lookup
    }

    /// Inserts a column definition, returning the one it replaced.
    pub fn insert(&mut self, column: ColDef) -> Option<ColDef> {
        let field = column.field.clone();
        let previous = self.columns.insert(field.clone(), column);
        if previous.is_none() {
            self.order.push(field);
        }
        previous
    }

    /// Returns the column definition of a field.
    pub fn get(&self, field: &str) -> Option<&ColDef> {
        self.columns.get(field)
    }

    /// Returns `true` if the field has a column definition.
    pub fn contains(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    /// Returns the fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the column definitions in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &ColDef> {
        self.order.iter().filter_map(|field| self.columns.get(field))
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut lookup = ColumnLookup::from_columns([ColDef::string("a"), ColDef::string("b")]);
        let previous = lookup.insert(ColDef::number("a"));
        assert!(previous.is_some());
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.fields().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(lookup.get("a").unwrap().col_type, "number");
        assert!(!lookup.contains("c"));
    }
}
