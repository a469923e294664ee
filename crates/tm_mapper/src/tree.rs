//! The tree-value vocabulary used by the mapper.
//!
//! The tree itself is provided by [`serde_json`]: an object node is an
//! insertion-ordered [`Map`](serde_json::Map), an array node is a `Vec`, and
//! [`Value::Null`](serde_json::Value::Null) is the null sentinel, distinct
//! from a key that is absent.

use core::fmt;

/// A tree node.
pub type Node = serde_json::Value;

/// An ordered mapping from key to [`Node`].
pub type ObjectNode = serde_json::Map<alloc::string::String, Node>;

/// An ordered sequence of [`Node`].
pub type ArrayNode = alloc::vec::Vec<Node>;

/// The shape of a [`Node`], used in diagnostics.
///
/// # Examples
///
/// ```
/// use tm_mapper::{NodeKind, serde_json::json};
///
/// assert_eq!(NodeKind::of(&json!([1, 2])), NodeKind::Array);
/// assert_eq!(NodeKind::of(&json!(null)).to_string(), "null");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    /// Returns the shape of `node`.
    pub const fn of(node: &Node) -> Self {
        match node {
            Node::Null => Self::Null,
            Node::Bool(_) => Self::Bool,
            Node::Number(_) => Self::Number,
            Node::String(_) => Self::String,
            Node::Array(_) => Self::Array,
            Node::Object(_) => Self::Object,
        }
    }

    /// Returns a lowercase name of the shape.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
