//! Field descriptors and the per-type field table.
//!
//! - [`FieldDescriptor`]: name, declared type, [`FieldKind`](crate::FieldKind)
//!   and the accessor/mutator pair of one field.
//! - [`FieldTable`]: the ordered descriptors of a type, plus
//!   [`FieldTable::enumerate`] which yields only the data-carrying ones.
//!
//! Tables are usually generated by [`derive::Convertible`](crate::derive::Convertible).

// -----------------------------------------------------------------------------
// Modules

mod field_descriptor;
mod field_table;

// -----------------------------------------------------------------------------
// Exports

pub use field_descriptor::{FieldDescriptor, FieldGetter, FieldSetter};
pub use field_table::{FieldTable, RESERVED_FIELD_NAMES, is_reserved};
