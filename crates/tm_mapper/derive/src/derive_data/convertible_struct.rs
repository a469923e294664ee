use std::collections::BTreeSet;

use quote::ToTokens;
use syn::{Data, DataStruct, DeriveInput, Field, Fields, Ident};

use super::{ConvertibleMeta, FieldAttributes, TypeAttributes};

/// Keys that never carry user data; such fields are left out of the table.
const RESERVED_KEYS: [&str; 2] = ["$change", "serialVersionUID"];

/// A named field of the deriving struct.
pub(crate) struct StructField<'a> {
    /// The original field.
    pub data: &'a Field,
    pub ident: &'a Ident,
    pub attrs: FieldAttributes,
    /// The tree key, after renaming.
    pub key: String,
}

impl StructField<'_> {
    /// Whether the field takes part in conversion.
    pub fn is_active(&self) -> bool {
        self.attrs.skip.is_none() && !RESERVED_KEYS.contains(&self.key.as_str())
    }

    /// The declared type as written, without whitespace.
    pub fn type_name(&self) -> String {
        self.data.ty.to_token_stream().to_string().replace(' ', "")
    }
}

/// A struct with named fields, ready for code generation.
pub(crate) struct ConvertibleStruct<'a> {
    meta: ConvertibleMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ConvertibleStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`Convertible` cannot be derived for types with lifetime parameters",
            ));
        }

        let Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) = &input.data
        else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`Convertible` can only be derived for structs with named fields",
            ));
        };

        let mut fields = Vec::with_capacity(named.named.len());
        let mut seen = BTreeSet::new();

        for data in &named.named {
            let Some(ident) = &data.ident else {
                return Err(syn::Error::new_spanned(data, "expected a named field"));
            };
            let field_attrs = FieldAttributes::parse_attrs(&data.attrs)?;

            let key = match (&field_attrs.rename, attrs.rename_all) {
                (Some(lit), _) => lit.value(),
                (None, Some(rule)) => rule.apply(&crate::utils::unraw(ident)),
                (None, None) => crate::utils::unraw(ident),
            };

            let field = StructField {
                data,
                ident,
                attrs: field_attrs,
                key,
            };

            if field.is_active() && !seen.insert(field.key.clone()) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("duplicate key `{}`", field.key),
                ));
            }

            fields.push(field);
        }

        let mut meta = ConvertibleMeta::new(attrs, &input.ident, &input.generics);
        meta.set_active_types(
            fields
                .iter()
                .filter(|field| field.is_active())
                .map(|field| field.data.ty.clone())
                .collect(),
        );

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ConvertibleMeta<'a> {
        &self.meta
    }

    /// The fields that take part in conversion, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_active())
    }
}
