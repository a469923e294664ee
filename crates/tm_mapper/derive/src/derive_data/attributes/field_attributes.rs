use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::MARSHAL_ATTRIBUTE_NAME;

/// The `#[marshal(...)]` attributes placed on a field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[marshal(rename = "...")]`
    pub rename: Option<LitStr>,
    /// `#[marshal(skip)]`
    pub skip: Option<Span>,
}

impl FieldAttributes {
    /// Parse every `#[marshal(...)]` in `attrs`, ignoring other attributes.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(MARSHAL_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if this.rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    this.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    this.skip = Some(meta.path.span());
                } else {
                    return Err(meta.error("unsupported field attribute, expected `rename` or `skip`"));
                }
                Ok(())
            })?;
        }

        if let (Some(span), Some(_)) = (this.skip, &this.rename) {
            return Err(syn::Error::new(span, "a skipped field cannot be renamed"));
        }

        Ok(this)
    }
}
