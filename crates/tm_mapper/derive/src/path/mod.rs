//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `tm_mapper` structure is modified.
//!
//! The only special one is the path of `tm_mapper` itself,
//! see the [`tm_mapper`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) use tm_macro_utils::full_path as fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `tm_mapper` crate.
///
/// 1. For crates that depend on `tm_mapper`, `::tm_mapper` is returned.
/// 2. For crates that depend on `treemarshal`, `::treemarshal::mapper` is returned.
/// 3. For crates that depend on `tm_core`, `::tm_core::mapper` is returned.
/// 4. For crates that depend on `tm`, `::tm::mapper` is returned.
/// 5. Otherwise `::tm_mapper` is returned, which may be incorrect.
///
/// This reads the invoking crate's manifest, so the path is resolved once
/// per derive and then passed around.
pub(crate) fn tm_mapper() -> syn::Path {
    tm_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("tm_mapper"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn convertible_(tm_mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_mapper_path::Convertible
    }
}

#[inline(always)]
pub(crate) fn field_descriptor_(tm_mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_mapper_path::FieldDescriptor
    }
}

#[inline(always)]
pub(crate) fn field_value_(tm_mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_mapper_path::FieldValue
    }
}

#[inline(always)]
pub(crate) fn field_kind_(tm_mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_mapper_path::FieldKind
    }
}

#[inline(always)]
pub(crate) fn field_ref_(tm_mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_mapper_path::FieldRef
    }
}

#[inline(always)]
pub(crate) fn field_mut_(tm_mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_mapper_path::FieldMut
    }
}

#[inline(always)]
pub(crate) fn instantiation_error_(tm_mapper_path: &syn::Path) -> TokenStream {
    quote! {
        #tm_mapper_path::InstantiationError
    }
}
