//! Structure declaration and validating construction.

use serde::{Deserialize, Serialize};

use crate::{Result, RowStructure};
use super::types::FieldDefinition;

/// Declares the schema of one relation before it becomes a [`RowStructure`].
///
/// A definition is plain data: it can be assembled with the fluent methods,
/// deserialized from JSON, or constructed directly. Validation happens once,
/// in [`build`](Self::build); until then a definition may be incomplete.
///
/// # Examples
///
/// ```ignore
/// let structure = StructureDefinition::new("account")
///     .field("account_id", "uuid")
///     .field("email", "varchar")
///     .primary_key(["account_id"])
///     .build()?;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureDefinition {
    /// Relation name
    pub relation_name: String,
    /// Fields, in declaration order
    pub fields: Vec<FieldDefinition>,
    /// Primary-key field names, in key order
    #[serde(default)]
    pub primary_key: Vec<String>,
}

impl StructureDefinition {
    /// Creates a new definition for a relation.
    pub fn new(relation_name: impl Into<String>) -> Self {
        Self {
            relation_name: relation_name.into(),
            fields: Vec::new(),
            primary_key: Vec::new(),
        }
    }

    /// Appends a field declaration.
    pub fn field(mut self, name: impl Into<String>, data_type: impl Into<String>) -> Self {
        self.fields.push(FieldDefinition::new(name, data_type));
        self
    }

    /// Sets the primary-key field names.
    pub fn primary_key<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = names.into_iter().map(Into::into).collect();
        self
    }

    /// Loads a definition from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::Serialization` if the JSON is malformed. The
    /// loaded definition is not validated until [`build`](Self::build).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the definition to its JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates the declaration and builds the structure.
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::Structure` if the relation name is empty or no
    /// field is declared. These are the only construction-time checks.
    pub fn build(self) -> Result<RowStructure> {
        RowStructure::from_definition(self)
    }
}
