use crate::convertible::{Convertible, DynConvertible};
use crate::error::InstantiationError;
use crate::kind::{FieldKind, FieldMut, FieldRef};
use crate::value::FieldValue;

/// The write side of a convertible field.
pub trait ConvertibleSlot {
    /// Returns `true` if the field holds an instance.
    fn is_present(&self) -> bool;

    /// Returns the held instance, constructing and storing one first if the
    /// field is empty.
    fn instance(&mut self) -> Result<&mut dyn DynConvertible, InstantiationError>;
}

impl<T: Convertible> ConvertibleSlot for T {
    #[inline]
    fn is_present(&self) -> bool {
        true
    }

    #[inline]
    fn instance(&mut self) -> Result<&mut dyn DynConvertible, InstantiationError> {
        Ok(self)
    }
}

impl<T: Convertible> ConvertibleSlot for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    fn instance(&mut self) -> Result<&mut dyn DynConvertible, InstantiationError> {
        let value = match self.take() {
            Some(value) => value,
            None => T::instantiate()?,
        };
        Ok(self.insert(value))
    }
}

impl<T: Convertible> FieldValue for Option<T> {
    const KIND: FieldKind = FieldKind::Convertible;

    #[inline]
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Convertible(self.as_ref().map(|v| v as &dyn DynConvertible))
    }

    #[inline]
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Convertible(self)
    }
}
