#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
///
/// `debug! { .. }` keeps its input only in debug builds with the `debug`
/// feature; `debug! { if { .. } else { .. } }` picks a branch.
pub(crate) mod cfg {
    #[cfg(all(debug_assertions, feature = "debug"))]
    macro_rules! debug {
        (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
        ($($tt:tt)*) => { $($tt)* };
    }

    #[cfg(not(all(debug_assertions, feature = "debug")))]
    macro_rules! debug {
        (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
        ($($tt:tt)*) => {};
    }

    pub(crate) use debug;
}

// -----------------------------------------------------------------------------
// Extern Self

// The derive emits `::tm_mapper::...` paths; this alias lets the crate's own
// tests and doctests expand it.
extern crate self as tm_mapper;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod convertible;
mod mapper;

pub mod error;
pub mod info;
pub mod kind;
pub mod tree;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use serde_json;
pub use tm_mapper_derive as derive;

pub use convertible::{Convertible, DynConvertible};
pub use error::{AccessError, FieldError, FieldErrorKind, InstantiationError, Report, ShapeError};
pub use info::{FieldDescriptor, FieldTable, RESERVED_FIELD_NAMES};
pub use kind::{FieldKind, FieldMut, FieldRef, classify};
pub use mapper::{Traversal, marshal, marshal_with_report, unmarshal, unmarshal_with_report};
pub use tree::{ArrayNode, Node, NodeKind, ObjectNode};
pub use value::FieldValue;
