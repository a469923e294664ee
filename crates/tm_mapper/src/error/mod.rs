//! Field-scoped error values and the aggregate [`Report`].
//!
//! No error in this crate aborts a traversal. Each one is attached to the
//! field that produced it and collected, in traversal order, into a
//! [`Report`] handed back to the caller.

// -----------------------------------------------------------------------------
// Modules

mod field_error;
mod report;

// -----------------------------------------------------------------------------
// Exports

pub use field_error::{AccessError, FieldError, FieldErrorKind, InstantiationError, ShapeError};
pub use report::Report;
