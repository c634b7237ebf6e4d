//! RowStructure registry and core implementation.

use serde::Serialize;
use tracing::debug;

use crate::{AmphoraError, Result};
use super::definition::StructureDefinition;
use super::types::FieldDefinition;

/// Ordered field registry describing one relation.
///
/// A structure always carries a non-empty relation name and at least one
/// field definition; both are guaranteed by construction through
/// [`StructureDefinition::build`]. After construction the field set only
/// grows, through [`add_field`](Self::add_field) or
/// [`inherits`](Self::inherits); fields are never removed.
///
/// Fields are stored in insertion order. Overwriting an existing field keeps
/// its position; new fields are appended.
#[derive(Debug, Clone, Serialize)]
pub struct RowStructure {
    relation_name: String,
    fields: Vec<FieldDefinition>,
    primary_key: Vec<String>,
}

impl RowStructure {
    /// Validates a declaration and builds the structure.
    ///
    /// Duplicate field names in the declaration collapse with overwrite
    /// semantics: the first occurrence keeps its position, the last type
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::Structure` if the declaration has no relation
    /// name or no field definition.
    pub fn from_definition(definition: StructureDefinition) -> Result<Self> {
        if definition.relation_name.is_empty() {
            return Err(AmphoraError::Structure(
                "Structure definition has no relation name.".to_string(),
            ));
        }

        if definition.fields.is_empty() {
            return Err(AmphoraError::Structure(format!(
                "Structure definition for relation '{}' has no field definition.",
                definition.relation_name
            )));
        }

        let mut structure = Self {
            relation_name: definition.relation_name,
            fields: Vec::with_capacity(definition.fields.len()),
            primary_key: definition.primary_key,
        };

        for field in definition.fields {
            structure.upsert(&field.name, &field.data_type);
        }

        debug!(
            relation = %structure.relation_name,
            fields = structure.fields.len(),
            "built row structure"
        );

        Ok(structure)
    }

    /// Adds a field, or overwrites its type if the name is already defined.
    ///
    /// Returns the structure itself so declarations can be chained:
    ///
    /// ```ignore
    /// structure
    ///     .add_field("email", "varchar")?
    ///     .add_field("active", "bool")?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::InvalidArgument` if `name` or `data_type` is
    /// empty. Nothing is written in that case.
    pub fn add_field(&mut self, name: &str, data_type: &str) -> Result<&mut Self> {
        if name.is_empty() {
            return Err(AmphoraError::InvalidArgument(
                "'name' cannot be empty".to_string(),
            ));
        }

        if data_type.is_empty() {
            return Err(AmphoraError::InvalidArgument(
                "'type' cannot be empty".to_string(),
            ));
        }

        debug!(relation = %self.relation_name, field = name, data_type, "adding field");
        self.upsert(name, data_type);
        Ok(self)
    }

    /// Merges every field of `other` into this structure.
    ///
    /// Fields are applied in `other`'s order with the same overwrite
    /// semantics as [`add_field`](Self::add_field): names already present
    /// keep their position and take `other`'s type, new names are appended.
    /// The relation name and primary key of `self` are unaffected.
    pub fn inherits(&mut self, other: &RowStructure) -> &mut Self {
        for field in &other.fields {
            self.upsert(&field.name, &field.data_type);
        }

        debug!(
            relation = %self.relation_name,
            parent = %other.relation_name,
            fields = self.fields.len(),
            "inherited structure"
        );
        self
    }

    /// Returns the field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Returns whether `name` is a defined field.
    ///
    /// This is a pure predicate: undefined names, however odd, and the empty
    /// string simply return `false`.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Returns the database type of a field.
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::InvalidArgument` if `name` is empty, and
    /// `AmphoraError::Structure` if the field is not defined.
    pub fn type_for(&self, name: &str) -> Result<&str> {
        if name.is_empty() {
            return Err(AmphoraError::InvalidArgument(
                "'name' cannot be empty".to_string(),
            ));
        }

        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.data_type.as_str())
            .ok_or_else(|| {
                AmphoraError::Structure(format!(
                    "Field '{}' is not defined in structure '{}'.",
                    name, self.relation_name
                ))
            })
    }

    /// Returns the full field definition list, in insertion order.
    ///
    /// The returned slice borrows the structure; callers cannot mutate the
    /// field set through it.
    pub fn definition(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Returns the relation name.
    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    /// Returns the primary-key field names, in key order.
    ///
    /// Empty when the relation has no declared primary key.
    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    /// Insert-or-overwrite keeping insertion order stable.
    fn upsert(&mut self, name: &str, data_type: &str) {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.data_type = data_type.to_string(),
            None => self.fields.push(FieldDefinition::new(name, data_type)),
        }
    }
}
