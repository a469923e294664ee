// -----------------------------------------------------------------------------
// Modules

mod trait_convertible;
mod trait_field_value;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use trait_convertible::impl_trait_convertible;
pub(crate) use trait_field_value::impl_trait_field_value;
