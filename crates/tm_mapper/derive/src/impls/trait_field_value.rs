use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ConvertibleStruct;
use crate::path::fp::OptionFP;

/// Generate implementation code for `FieldValue` trait.
///
/// A derived type is always [`Convertible`](crate::derive_convertible) as
/// a field: it is converted into a nested object.
pub(crate) fn impl_trait_field_value(info: &ConvertibleStruct) -> TokenStream {
    let meta = info.meta();
    let tm_mapper_path = meta.tm_mapper_path();

    let field_value_ = crate::path::field_value_(tm_mapper_path);
    let field_kind_ = crate::path::field_kind_(tm_mapper_path);
    let field_ref_ = crate::path::field_ref_(tm_mapper_path);
    let field_mut_ = crate::path::field_mut_(tm_mapper_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #field_value_ for #ident #ty_generics #where_clause {
            const KIND: #field_kind_ = #field_kind_::Convertible;

            #[inline]
            fn field_ref(&self) -> #field_ref_<'_> {
                #field_ref_::Convertible(#OptionFP::Some(self))
            }

            #[inline]
            fn field_mut(&mut self) -> #field_mut_<'_> {
                #field_mut_::Convertible(self)
            }
        }
    }
}
