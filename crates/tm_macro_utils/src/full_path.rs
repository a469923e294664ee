//! Fully-qualified paths of `core` items for use in generated code.
//!
//! Generated code must not depend on what the invoking module has in
//! scope, so every prelude item is spelled out in full:
//!
//! ```rust
//! # use quote::quote;
//! # use tm_macro_utils::full_path::OptionFP;
//! let tokens = quote! { #OptionFP::Some(1) };
//! assert_eq!(
//!     tokens.to_string().replace(' ', ""),
//!     "::core::option::Option::Some(1)",
//! );
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => $path:path;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                quote!($path).to_tokens(tokens);
            }
        }
    )*};
}

define_full_path! {
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
    /// `::core::result::Result`
    ResultFP => ::core::result::Result;
    /// `::core::default::Default`
    DefaultFP => ::core::default::Default;
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::{DefaultFP, ResultFP};

    fn flat(tokens: proc_macro2::TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn paths_are_absolute() {
        assert_eq!(flat(quote!(#ResultFP::Ok(()))), "::core::result::Result::Ok(())");
        assert_eq!(
            flat(quote!(<T as #DefaultFP>::default())),
            "<Tas::core::default::Default>::default()"
        );
    }
}
