use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;
use crate::path::fp::DefaultFP;

/// Everything about the deriving type except its fields.
pub(crate) struct ConvertibleMeta<'a> {
    tm_mapper_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // The types of the fields that end up in the table.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ConvertibleMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConvertibleMeta")
            .field("tm_mapper_path", &self.tm_mapper_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ConvertibleMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            tm_mapper_path: crate::path::tm_mapper(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        }
    }

    #[inline]
    pub(super) fn set_active_types(&mut self, active_types: Vec<Type>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn tm_mapper_path(&self) -> &Path {
        &self.tm_mapper_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// This name is used in `impl ... for #ident {...}`.
    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// The value of `Convertible::TYPE_NAME`.
    pub fn type_name(&self) -> String {
        match &self.attrs.type_name {
            Some(lit) => lit.value(),
            None => crate::utils::unraw(self.ident),
        }
    }

    /// Whether `instantiate` falls back to `Default::default`.
    #[inline]
    pub fn uses_default(&self) -> bool {
        self.attrs.no_default.is_none() && self.attrs.instantiate.is_none()
    }

    /// Split the generics for an impl block, with the extra bounds the
    /// generated code needs:
    ///
    /// - `T: 'static` for every type parameter.
    /// - `FieldTy: FieldValue` for every field type mentioning one.
    /// - `Self: Default` when construction uses `Default`.
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let type_params = self
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<_>>();

        if type_params.is_empty() {
            return (impl_generics, ty_generics, where_clause.to_token_stream());
        }

        let field_value_ = crate::path::field_value_(&self.tm_mapper_path);

        let mut predicates = where_clause
            .map(|clause| {
                clause
                    .predicates
                    .iter()
                    .map(ToTokens::to_token_stream)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        predicates.extend(type_params.iter().map(|ident| quote!(#ident: 'static)));

        predicates.extend(
            self.active_types
                .iter()
                .filter(|ty| crate::utils::mentions_any(&type_params, ty.to_token_stream()))
                .map(|ty| quote!(#ty: #field_value_)),
        );

        if self.uses_default() {
            predicates.push(quote!(Self: #DefaultFP));
        }

        (
            impl_generics,
            ty_generics,
            quote! { where #(#predicates,)* },
        )
    }
}
