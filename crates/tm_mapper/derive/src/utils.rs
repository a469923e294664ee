use proc_macro2::TokenStream;
use syn::Ident;

/// The identifier as written, without the `r#` prefix of raw identifiers.
pub(crate) fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_owned(),
        None => name,
    }
}

/// Does any of the identifiers in `idents` appear in `tokens`?
pub(crate) fn mentions_any(idents: &[Ident], tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tree| match tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
        proc_macro2::TokenTree::Group(group) => mentions_any(idents, group.stream()),
        _ => false,
    })
}
