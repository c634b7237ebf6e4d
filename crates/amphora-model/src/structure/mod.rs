//! Row structure declaration and composition.
//!
//! A [`RowStructure`] describes one relation: its name, its ordered field
//! definitions, and the primary-key fields that identify a row. Structures
//! are built from a [`StructureDefinition`], which validates the declaration
//! before the structure exists, so every live structure carries a relation
//! name and at least one field.
//!
//! # Examples
//!
//! ## Building a structure
//!
//! ```ignore
//! use amphora_model::StructureDefinition;
//!
//! let structure = StructureDefinition::new("worker")
//!     .field("worker_id", "int4")
//!     .field("login", "varchar")
//!     .primary_key(["worker_id"])
//!     .build()?;
//!
//! assert_eq!(structure.field_names(), vec!["worker_id", "login"]);
//! assert_eq!(structure.primary_key(), ["worker_id"]);
//! ```
//!
//! ## Adding and reading fields
//!
//! ```ignore
//! structure.add_field("email", "varchar")?;
//! assert_eq!(structure.type_for("email")?, "varchar");
//! ```
//!
//! ## Composing structures
//!
//! ```ignore
//! // `worker` gains every field of `timestamped`, in timestamped's order;
//! // its relation name and primary key are untouched.
//! worker.inherits(&timestamped);
//! ```

mod access;
mod definition;
mod row;
mod source;
mod types;


// Re-export all public types
pub use access::FieldAccess;
pub use definition::StructureDefinition;
pub use row::RowStructure;
pub use source::Structured;
pub use types::FieldDefinition;
