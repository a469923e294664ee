//! Field classification and the typed views the dispatcher matches on.
//!
//! Every field is exactly one of three [`FieldKind`]s. The kind is fixed by
//! the field's type through [`FieldValue::KIND`](crate::FieldValue::KIND),
//! so a type can never fall into two categories.
//!
//! | kind | field types |
//! |------|-------------|
//! | [`Convertible`](FieldKind::Convertible) | derived types, `Option<T: Convertible>` |
//! | [`Array`](FieldKind::Array) | `Vec<T>`, `Option<Vec<T>>`, `[T; N]` of leaves |
//! | [`Passthrough`](FieldKind::Passthrough) | numbers, `bool`, `char`, `String`, `Value`, `Map`, and `Option` of them |

use core::fmt;

use crate::DynConvertible;
use crate::info::FieldDescriptor;
use crate::value::{ArrayRef, ArraySlot, ConvertibleSlot, Scalar, ScalarSlot};

// -----------------------------------------------------------------------------
// FieldKind

/// The conversion strategy of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// The value converts itself into a nested object node.
    Convertible,
    /// The value is a sequence converted element by element.
    Array,
    /// The value is copied as a single leaf.
    Passthrough,
}

impl FieldKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Convertible => "convertible",
            Self::Array => "array",
            Self::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for FieldKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the conversion strategy of `field`.
///
/// # Examples
///
/// ```
/// use tm_mapper::{Convertible, FieldKind, classify, derive::Convertible};
///
/// #[derive(Convertible, Default)]
/// struct Inner {
///     flag: bool,
/// }
///
/// #[derive(Convertible, Default)]
/// struct Outer {
///     inner: Option<Inner>,
///     values: Vec<i32>,
///     label: String,
/// }
///
/// let kinds = Outer::field_table()
///     .enumerate()
///     .map(classify)
///     .collect::<Vec<_>>();
///
/// assert_eq!(kinds, [FieldKind::Convertible, FieldKind::Array, FieldKind::Passthrough]);
/// ```
#[inline]
pub fn classify<T>(field: &FieldDescriptor<T>) -> FieldKind {
    field.kind()
}

// -----------------------------------------------------------------------------
// FieldRef

/// An immutable view of a field's value, by kind.
///
/// `None` is the absent value (an `Option` field holding `None`).
pub enum FieldRef<'a> {
    Convertible(Option<&'a dyn DynConvertible>),
    Array(Option<&'a dyn ArrayRef>),
    Passthrough(Option<&'a dyn Scalar>),
}

impl FieldRef<'_> {
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Convertible(_) => FieldKind::Convertible,
            Self::Array(_) => FieldKind::Array,
            Self::Passthrough(_) => FieldKind::Passthrough,
        }
    }

    /// Returns `true` if the field currently holds no value.
    pub const fn is_absent(&self) -> bool {
        match self {
            Self::Convertible(v) => v.is_none(),
            Self::Array(v) => v.is_none(),
            Self::Passthrough(v) => v.is_none(),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldMut

/// A mutable view of a field, by kind.
pub enum FieldMut<'a> {
    Convertible(&'a mut dyn ConvertibleSlot),
    Array(&'a mut dyn ArraySlot),
    Passthrough(&'a mut dyn ScalarSlot),
}

impl FieldMut<'_> {
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Convertible(_) => FieldKind::Convertible,
            Self::Array(_) => FieldKind::Array,
            Self::Passthrough(_) => FieldKind::Passthrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::FieldKind;
    use crate::derive::Convertible;
    use crate::value::FieldValue;

    #[derive(Convertible, Default)]
    struct Leafy {
        flag: bool,
    }

    #[test]
    fn views_report_their_kind() {
        let mut nested = Some(Leafy::default());
        let mut values: Vec<u8> = Vec::new();
        let mut label: Option<String> = None;

        assert_eq!(nested.field_ref().kind(), FieldKind::Convertible);
        assert_eq!(values.field_ref().kind(), FieldKind::Array);
        assert_eq!(label.field_ref().kind(), FieldKind::Passthrough);

        assert_eq!(nested.field_mut().kind(), FieldKind::Convertible);
        assert_eq!(values.field_mut().kind(), FieldKind::Array);
        assert_eq!(label.field_mut().kind(), FieldKind::Passthrough);
    }

    #[test]
    fn absent_values() {
        let empty: Option<Leafy> = None;
        let label: Option<String> = None;
        let tags: Option<Vec<String>> = Some(Vec::new());

        assert!(empty.field_ref().is_absent());
        assert!(label.field_ref().is_absent());
        assert!(!tags.field_ref().is_absent());
        assert!(!Leafy::default().field_ref().is_absent());
        assert_eq!(FieldKind::Array.to_string(), "array");
    }
}
