use core::fmt;
use core::slice::Iter;

use super::FieldDescriptor;

/// Field names that never carry user data.
///
/// `$change` is an instrumentation hook and `serialVersionUID` a
/// serialization stamp; both may show up in tables that mirror foreign
/// object models. [`FieldTable::enumerate`] skips them and the derive never
/// emits them.
pub const RESERVED_FIELD_NAMES: [&str; 2] = ["$change", "serialVersionUID"];

/// Returns `true` if `name` is one of [`RESERVED_FIELD_NAMES`].
#[inline]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_FIELD_NAMES.contains(&name)
}

/// The ordered field descriptors of a type.
///
/// Order is the declaration order of the table and is the order in which
/// fields are visited and emitted.
pub struct FieldTable<T: 'static> {
    fields: &'static [FieldDescriptor<T>],
}

impl<T: 'static> FieldTable<T> {
    #[inline]
    pub const fn new(fields: &'static [FieldDescriptor<T>]) -> Self {
        Self { fields }
    }

    /// Returns the number of descriptors, reserved ones included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the descriptor stored under `name`, if it is a data field.
    pub fn get(&self, name: &str) -> Option<&'static FieldDescriptor<T>> {
        self.enumerate().find(|field| field.name() == name)
    }

    /// Returns every descriptor in declaration order, reserved ones included.
    #[inline]
    pub fn iter(&self) -> Iter<'static, FieldDescriptor<T>> {
        self.fields.iter()
    }

    /// Returns the data-carrying fields in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tm_mapper::{FieldDescriptor, FieldTable, FieldValue};
    ///
    /// #[allow(non_snake_case)]
    /// struct Legacy {
    ///     id: u64,
    ///     serialVersionUID: i64,
    /// }
    ///
    /// static FIELDS: [FieldDescriptor<Legacy>; 2] = [
    ///     FieldDescriptor::<Legacy>::new::<u64>(
    ///         "id",
    ///         "u64",
    ///         |this| Ok(FieldValue::field_ref(&this.id)),
    ///         |this| Ok(FieldValue::field_mut(&mut this.id)),
    ///     ),
    ///     FieldDescriptor::<Legacy>::new::<i64>(
    ///         "serialVersionUID",
    ///         "i64",
    ///         |this| Ok(FieldValue::field_ref(&this.serialVersionUID)),
    ///         |this| Ok(FieldValue::field_mut(&mut this.serialVersionUID)),
    ///     ),
    /// ];
    ///
    /// let table = FieldTable::new(&FIELDS);
    /// let names = table.enumerate().map(|f| f.name()).collect::<Vec<_>>();
    ///
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(names, ["id"]);
    /// ```
    #[inline]
    pub fn enumerate(&self) -> impl Iterator<Item = &'static FieldDescriptor<T>> + use<T> {
        self.fields.iter().filter(|field| !is_reserved(field.name()))
    }
}

impl<T: 'static> Clone for FieldTable<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FieldTable<T> {}

impl<T: 'static> fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.fields.iter()).finish()
    }
}
