//! Host item records and field-resolution queries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A handle to one host record, passed to field hooks and the original
/// field resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    id: i64,
    fields: HashMap<String, String>,
}

impl ItemRecord {
    /// Creates a record with the given host identifier.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            fields: HashMap::new(),
        }
    }

    /// Builder-style raw field assignment.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The host's numeric identifier for this record.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The raw stored value for `field`, if present.
    pub fn raw_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// One field-resolution request as issued by the host rendering pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldQuery {
    /// The field name (a column key for registered columns).
    pub field: String,
    /// Whether the caller wants the unformatted value.
    pub unformatted: bool,
    /// Whether base-mapped fields should be included in the lookup.
    pub include_base_mapped: bool,
}

impl FieldQuery {
    /// Creates a formatted query for `field` with default flags.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            unformatted: false,
            include_base_mapped: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_field_lookup() {
        let record = ItemRecord::new(42).with_field("title", "A Study of Things");
        assert_eq!(record.raw_field("title"), Some("A Study of Things"));
        assert_eq!(record.raw_field("doi"), None);
    }

    #[test]
    fn test_query_defaults() {
        let query = FieldQuery::new("doi");
        assert!(!query.unformatted);
        assert!(!query.include_base_mapped);
    }
}
