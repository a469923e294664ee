use core::fmt;

use crate::error::AccessError;
use crate::kind::{FieldKind, FieldMut, FieldRef};
use crate::value::FieldValue;

/// Reads a field of `T` as a [`FieldRef`].
pub type FieldGetter<T> = fn(&T) -> Result<FieldRef<'_>, AccessError>;

/// Borrows a field of `T` mutably as a [`FieldMut`].
pub type FieldSetter<T> = fn(&mut T) -> Result<FieldMut<'_>, AccessError>;

/// Describes one field of a [`Convertible`](crate::Convertible) type `T`.
///
/// # Examples
///
/// A hand-written table, equivalent to what the derive generates:
///
/// ```
/// use tm_mapper::{FieldDescriptor, FieldKind, FieldValue};
///
/// struct Counter {
///     hits: u32,
/// }
///
/// const HITS: FieldDescriptor<Counter> = FieldDescriptor::<Counter>::new::<u32>(
///     "hits",
///     "u32",
///     |this| Ok(FieldValue::field_ref(&this.hits)),
///     |this| Ok(FieldValue::field_mut(&mut this.hits)),
/// );
///
/// assert_eq!(HITS.name(), "hits");
/// assert_eq!(HITS.kind(), FieldKind::Passthrough);
/// ```
pub struct FieldDescriptor<T> {
    name: &'static str,
    type_name: &'static str,
    kind: FieldKind,
    getter: FieldGetter<T>,
    setter: FieldSetter<T>,
}

impl<T> FieldDescriptor<T> {
    /// Creates a descriptor for a field of type `F`.
    ///
    /// The [`FieldKind`] is taken from `F`.
    #[inline]
    pub const fn new<F: FieldValue>(
        name: &'static str,
        type_name: &'static str,
        getter: FieldGetter<T>,
        setter: FieldSetter<T>,
    ) -> Self {
        Self {
            name,
            type_name,
            kind: F::KIND,
            getter,
            setter,
        }
    }

    /// Returns the key this field is stored under.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type, as written in the source.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Reads the field's current value on `instance`.
    #[inline]
    pub fn read<'a>(&self, instance: &'a T) -> Result<FieldRef<'a>, AccessError> {
        (self.getter)(instance)
    }

    /// Borrows the field on `instance` for assignment.
    #[inline]
    pub fn write<'a>(&self, instance: &'a mut T) -> Result<FieldMut<'a>, AccessError> {
        (self.setter)(instance)
    }
}

impl<T> Clone for FieldDescriptor<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
