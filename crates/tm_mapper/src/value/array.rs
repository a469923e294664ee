use alloc::vec::Vec;

use crate::error::ShapeError;
use crate::kind::{FieldKind, FieldMut, FieldRef};
use crate::tree::Node;
use crate::value::{FieldValue, Leaf, Scalar};

// -----------------------------------------------------------------------------
// Traits

/// The read side of an array field: positional access to leaf elements.
pub trait ArrayRef {
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if out of bounds.
    fn element(&self, index: usize) -> Option<&dyn Scalar>;
}

/// The write side of an array field.
pub trait ArraySlot {
    /// Replaces the field with a new array holding `elements`, copied
    /// positionally.
    ///
    /// On error the field is left unchanged.
    fn assign(&mut self, elements: &[Node]) -> Result<(), ShapeError>;
}

fn decode_elements<T: Leaf>(elements: &[Node]) -> Result<Vec<T>, ShapeError> {
    elements
        .iter()
        .enumerate()
        .map(|(index, node)| T::from_node(node).map_err(|err| err.at(index)))
        .collect()
}

// -----------------------------------------------------------------------------
// Vec<T>

impl<T: Leaf> ArrayRef for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&dyn Scalar> {
        self.get(index).map(|v| v as &dyn Scalar)
    }
}

impl<T: Leaf> ArraySlot for Vec<T> {
    #[inline]
    fn assign(&mut self, elements: &[Node]) -> Result<(), ShapeError> {
        *self = decode_elements(elements)?;
        Ok(())
    }
}

impl<T: Leaf> ArraySlot for Option<Vec<T>> {
    #[inline]
    fn assign(&mut self, elements: &[Node]) -> Result<(), ShapeError> {
        *self = Some(decode_elements(elements)?);
        Ok(())
    }
}

impl<T: Leaf + 'static> FieldValue for Vec<T> {
    const KIND: FieldKind = FieldKind::Array;

    #[inline]
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Array(Some(self))
    }

    #[inline]
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Array(self)
    }
}

impl<T: Leaf + 'static> FieldValue for Option<Vec<T>> {
    const KIND: FieldKind = FieldKind::Array;

    #[inline]
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Array(self.as_ref().map(|v| v as &dyn ArrayRef))
    }

    #[inline]
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Array(self)
    }
}

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Leaf, const N: usize> ArrayRef for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&dyn Scalar> {
        self.get(index).map(|v| v as &dyn Scalar)
    }
}

impl<T: Leaf, const N: usize> ArraySlot for [T; N] {
    fn assign(&mut self, elements: &[Node]) -> Result<(), ShapeError> {
        if elements.len() != N {
            return Err(ShapeError::length(N, elements.len()));
        }
        let decoded = decode_elements::<T>(elements)?;
        *self = <[T; N]>::try_from(decoded).map_err(|rest| ShapeError::length(N, rest.len()))?;
        Ok(())
    }
}

impl<T: Leaf + 'static, const N: usize> FieldValue for [T; N] {
    const KIND: FieldKind = FieldKind::Array;

    #[inline]
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Array(Some(self))
    }

    #[inline]
    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Array(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::{ArrayRef, ArraySlot};
    use crate::error::ShapeError;
    use crate::tree::NodeKind;

    #[test]
    fn positional_access() {
        let values = vec![1_u8, 2, 3];
        assert_eq!(ArrayRef::len(&values), 3);
        assert_eq!(values.element(1).map(|e| e.to_node()), Some(Ok(json!(2))));
        assert!(values.element(3).is_none());
    }

    #[test]
    fn bad_element_keeps_old_array() {
        let mut values = vec![9_i32];
        let err = ArraySlot::assign(&mut values, &[json!(1), json!("two")]).unwrap_err();

        assert_eq!(
            err,
            ShapeError::Element {
                index: 1,
                expected: "i32",
                found: NodeKind::String,
            }
        );
        assert_eq!(values, [9]);
    }

    #[test]
    fn fixed_size_length() {
        let mut fixed = [0_u16; 3];
        assert_eq!(
            fixed.assign(&[json!(1), json!(2)]),
            Err(ShapeError::length(3, 2))
        );
        fixed.assign(&[json!(4), json!(5), json!(6)]).unwrap();
        assert_eq!(fixed, [4, 5, 6]);
    }

    #[test]
    fn optional_array_is_created() {
        let mut values: Option<Vec<bool>> = None;
        values.assign(&[json!(true)]).unwrap();
        assert_eq!(values, Some(vec![true]));
    }
}
