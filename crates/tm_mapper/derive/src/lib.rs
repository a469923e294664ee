//! See the [`Convertible`](derive_convertible) derive.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static MARSHAL_ATTRIBUTE_NAME: &str = "marshal";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Convertible Derivation
///
/// `#[derive(Convertible)]` implements `Convertible` and `FieldValue` for a
/// struct with named fields. The generated field table lists the fields in
/// declaration order; each field's type must implement `FieldValue`.
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ```rust, ignore
/// #[derive(Convertible, Default)]
/// struct Player {
///     name: String,
///     level: u32,
///     guild: Option<Guild>,
///     items: Vec<String>,
/// }
/// ```
///
/// ## Type Attributes
///
/// ### Key Style
///
/// Field names are used as keys unchanged. `rename_all` rewrites every key;
/// accepted rules are `"camelCase"`, `"PascalCase"` and `"snake_case"`.
///
/// ```rust, ignore
/// #[derive(Convertible, Default)]
/// #[marshal(rename_all = "camelCase")]
/// struct Player {
///     display_name: String, // key: `displayName`
/// }
/// ```
///
/// ### Construction
///
/// Reading a node into an `Option<T>` field that holds `None` constructs a
/// `T` first. By default this is `T::default()`.
///
/// - `#[marshal(instantiate = path::to::func)]` calls `func() -> T` instead.
/// - `#[marshal(no_default)]` makes construction fail; such a field is
///   reported and left as `None`.
///
/// The two attributes cannot be combined.
///
/// ### Type Name
///
/// `#[marshal(type_name = "...")]` overrides the name used in diagnostics,
/// which defaults to the struct's identifier.
///
/// ## Field Attributes
///
/// - `#[marshal(rename = "...")]` stores the field under the given key,
///   taking precedence over `rename_all`.
/// - `#[marshal(skip)]` leaves the field out of the table.
///
/// Fields whose key is `$change` or `serialVersionUID` are always left out.
///
/// ## Generics
///
/// Type and const parameters are supported. Every type parameter gets a
/// `'static` bound, and every field type mentioning one gets a `FieldValue`
/// bound. Lifetime parameters are rejected.
#[proc_macro_derive(Convertible, attributes(marshal))]
pub fn derive_convertible(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let info = match derive_data::ConvertibleStruct::from_input(&ast) {
        Ok(info) => info,
        Err(err) => return err.into_compile_error().into(),
    };

    let convertible_impl = impls::impl_trait_convertible(&info);
    let field_value_impl = impls::impl_trait_field_value(&info);

    quote! {
        const _: () = {
            #convertible_impl
            #field_value_impl
        };
    }
    .into()
}
