use alloc::borrow::Cow;
use alloc::string::String;

use thiserror::Error;

use crate::tree::{Node, NodeKind};

// -----------------------------------------------------------------------------
// AccessError

/// A field's accessor or mutator refused access.
///
/// Derived field tables never produce this; hand-written tables can, for
/// example when a field lives behind a `RefCell` that is already borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field is not accessible: {reason}")]
pub struct AccessError {
    reason: Cow<'static, str>,
}

impl AccessError {
    #[inline]
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

// -----------------------------------------------------------------------------
// ShapeError

/// The node under a field's key does not have the shape the field needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The node itself has the wrong shape.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: NodeKind,
    },
    /// An element of an array node has the wrong shape.
    #[error("element {index}: expected {expected}, found {found}")]
    Element {
        index: usize,
        expected: &'static str,
        found: NodeKind,
    },
    /// A fixed-size array received a different number of elements.
    #[error("expected {expected} elements, found {found}")]
    Length { expected: usize, found: usize },
    /// A NaN or infinite float has no number node.
    #[error("non-finite {type_name} has no node representation")]
    NonFinite { type_name: &'static str },
}

impl ShapeError {
    /// Creates a [`ShapeError::Mismatch`] for `node`.
    #[inline]
    pub const fn mismatch(expected: &'static str, node: &Node) -> Self {
        Self::Mismatch {
            expected,
            found: NodeKind::of(node),
        }
    }

    /// Creates a [`ShapeError::Length`].
    #[inline]
    pub const fn length(expected: usize, found: usize) -> Self {
        Self::Length { expected, found }
    }

    /// Attributes a mismatch to the array element at `index`.
    ///
    /// Other variants are returned unchanged.
    pub fn at(self, index: usize) -> Self {
        match self {
            Self::Mismatch { expected, found } => Self::Element {
                index,
                expected,
                found,
            },
            other => other,
        }
    }
}

// -----------------------------------------------------------------------------
// InstantiationError

/// A nested convertible value could not be constructed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot instantiate `{type_name}`")]
pub struct InstantiationError {
    type_name: &'static str,
}

impl InstantiationError {
    #[inline]
    pub const fn new(type_name: &'static str) -> Self {
        Self { type_name }
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

// -----------------------------------------------------------------------------
// FieldError

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The object node has no entry for the field's key.
    /// The field is left as it was.
    #[error("key is missing from the object node")]
    MissingKey,
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),
}

/// A [`FieldErrorKind`] attached to the dotted path of the field,
/// e.g. `address.street`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}`: {kind}")]
pub struct FieldError {
    path: String,
    kind: FieldErrorKind,
}

impl FieldError {
    #[inline]
    pub fn new(path: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Returns the dotted key path, starting at the top-level object.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn kind(&self) -> &FieldErrorKind {
        &self.kind
    }
}
