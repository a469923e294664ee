use alloc::string::{String, ToString};

use serde_json::Number;

use crate::error::ShapeError;
use crate::kind::{FieldKind, FieldMut, FieldRef};
use crate::tree::{Node, ObjectNode};
use crate::value::FieldValue;

// -----------------------------------------------------------------------------
// Traits

/// A value that is written to the tree as a single leaf node.
pub trait Scalar {
    /// Fails only for values with no node representation, such as NaN.
    fn to_node(&self) -> Result<Node, ShapeError>;
}

/// A [`Scalar`] that can be decoded back from a leaf node.
///
/// Decoding performs no coercion: a string never becomes a number.
/// Integers must fit the target width; any number is accepted by
/// `f32` and `f64`.
pub trait Leaf: Scalar + Sized {
    /// The name used in [`ShapeError`]s.
    const EXPECTED: &'static str;

    fn from_node(node: &Node) -> Result<Self, ShapeError>;
}

/// The write side of a passthrough field.
pub trait ScalarSlot {
    /// Replaces the field's value with the one decoded from `node`.
    ///
    /// On error the field is left unchanged.
    fn assign(&mut self, node: &Node) -> Result<(), ShapeError>;
}

impl<T: Leaf> ScalarSlot for T {
    #[inline]
    fn assign(&mut self, node: &Node) -> Result<(), ShapeError> {
        *self = T::from_node(node)?;
        Ok(())
    }
}

impl<T: Leaf> ScalarSlot for Option<T> {
    #[inline]
    fn assign(&mut self, node: &Node) -> Result<(), ShapeError> {
        *self = Some(T::from_node(node)?);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Leaf implementations

fn integer<T>(node: &Node) -> Option<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    let Node::Number(number) = node else {
        return None;
    };
    number_as(number)
}

fn number_as<T>(number: &Number) -> Option<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    if let Some(v) = number.as_i64() {
        return T::try_from(v).ok();
    }
    number.as_u64().and_then(|v| T::try_from(v).ok())
}

macro_rules! impl_integer_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            #[inline]
            fn to_node(&self) -> Result<Node, ShapeError> {
                Ok(Node::from(*self))
            }
        }

        impl Leaf for $ty {
            const EXPECTED: &'static str = stringify!($ty);

            #[inline]
            fn from_node(node: &Node) -> Result<Self, ShapeError> {
                integer::<$ty>(node).ok_or_else(|| ShapeError::mismatch(Self::EXPECTED, node))
            }
        }
    )*};
}

impl_integer_leaf!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn float(value: f64, type_name: &'static str) -> Result<Node, ShapeError> {
    Number::from_f64(value)
        .map(Node::Number)
        .ok_or(ShapeError::NonFinite { type_name })
}

impl Scalar for f64 {
    #[inline]
    fn to_node(&self) -> Result<Node, ShapeError> {
        float(*self, Self::EXPECTED)
    }
}

impl Leaf for f64 {
    const EXPECTED: &'static str = "f64";

    #[inline]
    fn from_node(node: &Node) -> Result<Self, ShapeError> {
        node.as_f64()
            .ok_or_else(|| ShapeError::mismatch(Self::EXPECTED, node))
    }
}

impl Scalar for f32 {
    #[inline]
    fn to_node(&self) -> Result<Node, ShapeError> {
        float(f64::from(*self), Self::EXPECTED)
    }
}

impl Leaf for f32 {
    const EXPECTED: &'static str = "f32";

    #[inline]
    fn from_node(node: &Node) -> Result<Self, ShapeError> {
        node.as_f64()
            .map(|v| v as f32)
            .ok_or_else(|| ShapeError::mismatch(Self::EXPECTED, node))
    }
}

impl Scalar for bool {
    #[inline]
    fn to_node(&self) -> Result<Node, ShapeError> {
        Ok(Node::Bool(*self))
    }
}

impl Leaf for bool {
    const EXPECTED: &'static str = "bool";

    #[inline]
    fn from_node(node: &Node) -> Result<Self, ShapeError> {
        node.as_bool()
            .ok_or_else(|| ShapeError::mismatch(Self::EXPECTED, node))
    }
}

impl Scalar for char {
    #[inline]
    fn to_node(&self) -> Result<Node, ShapeError> {
        Ok(Node::String(self.to_string()))
    }
}

impl Leaf for char {
    const EXPECTED: &'static str = "char";

    fn from_node(node: &Node) -> Result<Self, ShapeError> {
        let decoded = node.as_str().and_then(|s| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        });
        decoded.ok_or_else(|| ShapeError::mismatch(Self::EXPECTED, node))
    }
}

impl Scalar for String {
    #[inline]
    fn to_node(&self) -> Result<Node, ShapeError> {
        Ok(Node::String(self.clone()))
    }
}

impl Leaf for String {
    const EXPECTED: &'static str = "string";

    #[inline]
    fn from_node(node: &Node) -> Result<Self, ShapeError> {
        match node {
            Node::String(s) => Ok(s.clone()),
            other => Err(ShapeError::mismatch(Self::EXPECTED, other)),
        }
    }
}

// An opaque subtree, copied as-is in both directions.
impl Scalar for Node {
    #[inline]
    fn to_node(&self) -> Result<Node, ShapeError> {
        Ok(self.clone())
    }
}

impl Leaf for Node {
    const EXPECTED: &'static str = "node";

    #[inline]
    fn from_node(node: &Node) -> Result<Self, ShapeError> {
        Ok(node.clone())
    }
}

impl Scalar for ObjectNode {
    #[inline]
    fn to_node(&self) -> Result<Node, ShapeError> {
        Ok(Node::Object(self.clone()))
    }
}

impl Leaf for ObjectNode {
    const EXPECTED: &'static str = "object";

    #[inline]
    fn from_node(node: &Node) -> Result<Self, ShapeError> {
        match node {
            Node::Object(object) => Ok(object.clone()),
            other => Err(ShapeError::mismatch(Self::EXPECTED, other)),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldValue implementations

macro_rules! impl_passthrough_field {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            const KIND: FieldKind = FieldKind::Passthrough;

            #[inline]
            fn field_ref(&self) -> FieldRef<'_> {
                FieldRef::Passthrough(Some(self))
            }

            #[inline]
            fn field_mut(&mut self) -> FieldMut<'_> {
                FieldMut::Passthrough(self)
            }
        }

        impl FieldValue for Option<$ty> {
            const KIND: FieldKind = FieldKind::Passthrough;

            #[inline]
            fn field_ref(&self) -> FieldRef<'_> {
                FieldRef::Passthrough(self.as_ref().map(|v| v as &dyn Scalar))
            }

            #[inline]
            fn field_mut(&mut self) -> FieldMut<'_> {
                FieldMut::Passthrough(self)
            }
        }
    )*};
}

impl_passthrough_field!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char, String, Node,
    ObjectNode,
);
