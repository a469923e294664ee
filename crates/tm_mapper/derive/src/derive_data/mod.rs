//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod convertible_meta;
mod convertible_struct;

// -----------------------------------------------------------------------------
// Internal API

use attributes::{FieldAttributes, TypeAttributes};

pub(crate) use convertible_meta::ConvertibleMeta;
pub(crate) use convertible_struct::{ConvertibleStruct, StructField};
