use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, Path};

use super::RenameRule;
use crate::MARSHAL_ATTRIBUTE_NAME;

/// The `#[marshal(...)]` attributes placed on the type.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[marshal(rename_all = "...")]`
    pub rename_all: Option<RenameRule>,
    /// `#[marshal(no_default)]`
    pub no_default: Option<Span>,
    /// `#[marshal(instantiate = path)]`
    pub instantiate: Option<Path>,
    /// `#[marshal(type_name = "...")]`
    pub type_name: Option<LitStr>,
}

impl core::fmt::Debug for TypeAttributes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeAttributes")
            .field("rename_all", &self.rename_all)
            .field("no_default", &self.no_default.is_some())
            .field("instantiate", &self.instantiate.is_some())
            .field("type_name", &self.type_name.as_ref().map(LitStr::value))
            .finish()
    }
}

impl TypeAttributes {
    /// Parse every `#[marshal(...)]` in `attrs`, ignoring other attributes.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(MARSHAL_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        this.validity()?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("rename_all") {
            if self.rename_all.is_some() {
                return Err(meta.error("duplicate `rename_all`"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            self.rename_all = Some(RenameRule::from_lit(&lit)?);
        } else if meta.path.is_ident("no_default") {
            if self.no_default.is_some() {
                return Err(meta.error("duplicate `no_default`"));
            }
            self.no_default = Some(meta.path.span());
        } else if meta.path.is_ident("instantiate") {
            if self.instantiate.is_some() {
                return Err(meta.error("duplicate `instantiate`"));
            }
            self.instantiate = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("type_name") {
            if self.type_name.is_some() {
                return Err(meta.error("duplicate `type_name`"));
            }
            self.type_name = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error(
                "unsupported type attribute, expected `rename_all`, `no_default`, `instantiate` or `type_name`",
            ));
        }
        Ok(())
    }

    fn validity(&self) -> syn::Result<()> {
        if let (Some(span), Some(_)) = (self.no_default, &self.instantiate) {
            return Err(syn::Error::new(
                span,
                "`no_default` and `instantiate` cannot be used together",
            ));
        }
        Ok(())
    }
}
