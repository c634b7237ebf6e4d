//! Structure value types.

use serde::{Deserialize, Serialize};

/// One field of a relation: a column name and its database type.
///
/// The type is carried as the raw database type name (`int4`, `varchar`,
/// `timestamptz`, ...). No type-validity checking is performed at this
/// level; converting between database and host types belongs to the
/// persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Database type name
    pub data_type: String,
}

impl FieldDefinition {
    /// Creates a new field definition.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}
