//! The traits that let a field type take part in conversion.
//!
//! [`FieldValue`] is the classifier's input: it fixes the
//! [`FieldKind`] of a type and hands out the typed views. The view traits
//! are split by direction and by kind:
//!
//! | kind | read | write |
//! |------|------|-------|
//! | Convertible | [`DynConvertible`](crate::DynConvertible) | [`ConvertibleSlot`] |
//! | Array | [`ArrayRef`] | [`ArraySlot`] |
//! | Passthrough | [`Scalar`] | [`ScalarSlot`] |
//!
//! [`Leaf`] is the typed decoding side of [`Scalar`], used for array
//! elements as well as passthrough fields.

// -----------------------------------------------------------------------------
// Modules

mod array;
mod leaf;
mod nested;

// -----------------------------------------------------------------------------
// Exports

pub use array::{ArrayRef, ArraySlot};
pub use leaf::{Leaf, Scalar, ScalarSlot};
pub use nested::ConvertibleSlot;

use crate::kind::{FieldKind, FieldMut, FieldRef};

// -----------------------------------------------------------------------------
// FieldValue

/// A type that can be the type of a field in a [`FieldTable`](crate::FieldTable).
///
/// Implemented by this crate for leaves, arrays of leaves and
/// `Option<T: Convertible>`, and by [`derive::Convertible`](crate::derive::Convertible)
/// for every derived type.
pub trait FieldValue {
    /// The conversion strategy of this type.
    const KIND: FieldKind;

    /// Returns an immutable view. Its variant matches [`Self::KIND`].
    fn field_ref(&self) -> FieldRef<'_>;

    /// Returns a mutable view. Its variant matches [`Self::KIND`].
    fn field_mut(&mut self) -> FieldMut<'_>;
}
