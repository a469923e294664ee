use syn::LitStr;

/// The key style selected by `#[marshal(rename_all = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    /// `user_name` -> `userName`
    CamelCase,
    /// `user_name` -> `UserName`
    PascalCase,
    /// Unchanged; field identifiers are already snake case.
    SnakeCase,
}

impl RenameRule {
    const ACCEPTED: &'static str = "expected one of \"camelCase\", \"PascalCase\", \"snake_case\"";

    pub fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "snake_case" => Ok(Self::SnakeCase),
            _ => Err(syn::Error::new(lit.span(), Self::ACCEPTED)),
        }
    }

    /// Apply the rule to a snake case field name.
    ///
    /// Leading underscores are kept as they are.
    pub fn apply(self, name: &str) -> String {
        let upper_first = match self {
            Self::SnakeCase => return name.to_owned(),
            Self::CamelCase => false,
            Self::PascalCase => true,
        };

        let body = name.trim_start_matches('_');
        let mut result = String::with_capacity(name.len());
        result.push_str(&name[..name.len() - body.len()]);

        let mut upper_next = upper_first;
        for ch in body.chars() {
            if ch == '_' {
                upper_next = true;
            } else if upper_next {
                result.extend(ch.to_uppercase());
                upper_next = false;
            } else {
                result.push(ch);
            }
        }
        result
    }
}
