use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

use crate::derive_data::{ConvertibleMeta, ConvertibleStruct, StructField};
use crate::path::fp::{DefaultFP, ResultFP};

/// Generate implementation code for `Convertible` trait.
pub(crate) fn impl_trait_convertible(info: &ConvertibleStruct) -> TokenStream {
    let meta = info.meta();
    let tm_mapper_path = meta.tm_mapper_path();

    let convertible_ = crate::path::convertible_(tm_mapper_path);
    let field_descriptor_ = crate::path::field_descriptor_(tm_mapper_path);
    let instantiation_error_ = crate::path::instantiation_error_(tm_mapper_path);

    let type_name = meta.type_name();
    let descriptors = info
        .active_fields()
        .map(|field| field_descriptor_tokens(meta, field));
    let instantiate = instantiate_tokens(meta);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #convertible_ for #ident #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;

            const FIELDS: &'static [#field_descriptor_<Self>] = &[
                #(#descriptors,)*
            ];

            fn instantiate() -> #ResultFP<Self, #instantiation_error_> {
                #instantiate
            }
        }
    }
}

/// Similar to following:
///
/// ```ignore
/// _path_::FieldDescriptor::<Self>::new::<FieldTy>(
///     "key",
///     "FieldTy",
///     |__this| Ok(_path_::FieldValue::field_ref(&__this.field)),
///     |__this| Ok(_path_::FieldValue::field_mut(&mut __this.field)),
/// )
/// ```
fn field_descriptor_tokens(meta: &ConvertibleMeta, field: &StructField) -> TokenStream {
    let tm_mapper_path = meta.tm_mapper_path();
    let field_descriptor_ = crate::path::field_descriptor_(tm_mapper_path);
    let field_value_ = crate::path::field_value_(tm_mapper_path);

    let member = field.ident;
    let key = &field.key;
    let type_name = field.type_name();
    let ty = &field.data.ty;

    // Errors about an unsupported field type point at the type.
    quote_spanned! { ty.span() =>
        #field_descriptor_::<Self>::new::<#ty>(
            #key,
            #type_name,
            |__this| #ResultFP::Ok(#field_value_::field_ref(&__this.#member)),
            |__this| #ResultFP::Ok(#field_value_::field_mut(&mut __this.#member)),
        )
    }
}

fn instantiate_tokens(meta: &ConvertibleMeta) -> TokenStream {
    let attrs = meta.attrs();

    if let Some(path) = &attrs.instantiate {
        return quote! { #ResultFP::Ok(#path()) };
    }

    if attrs.no_default.is_some() {
        let convertible_ = crate::path::convertible_(meta.tm_mapper_path());
        let instantiation_error_ = crate::path::instantiation_error_(meta.tm_mapper_path());
        return quote! {
            #ResultFP::Err(#instantiation_error_::new(<Self as #convertible_>::TYPE_NAME))
        };
    }

    quote! { #ResultFP::Ok(<Self as #DefaultFP>::default()) }
}
