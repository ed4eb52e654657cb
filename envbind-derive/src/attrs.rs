//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates binding directives from struct fields
//! during macro expansion.

use syn::{Field, Lit, LitStr};

/// Parsed `#[env(...)]` directives from a struct field.
///
/// A directive that does not appear on the field stays unset; it is never
/// treated as set to an empty value.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Source environment variable name (`var = "NAME"`).
    pub var: Option<String>,

    /// Required marker. `required`, `required = true` and `required = "true"`
    /// set it; `required = false` or any other string leaves it unset.
    pub required: bool,

    /// Default literal (`default = "..."` or `default = 42`).
    pub default: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` directives from a struct field.
    ///
    /// Attributes other than `env` are left for other macros. Unknown or
    /// repeated keys inside `env` are reported as errors.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();
        let mut seen_required = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // var = "NAME"
                if meta.path.is_ident("var") {
                    if attrs.var.is_some() {
                        return Err(meta.error("duplicate `var` directive"));
                    }
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new_spanned(
                            name,
                            "`var` must name an environment variable",
                        ));
                    }
                    attrs.var = Some(name.value());
                    return Ok(());
                }

                // required, required = true, required = "true"
                if meta.path.is_ident("required") {
                    if seen_required {
                        return Err(meta.error("duplicate `required` directive"));
                    }
                    seen_required = true;
                    attrs.required = if meta.input.peek(syn::Token![=]) {
                        match meta.value()?.parse::<Lit>()? {
                            Lit::Bool(b) => b.value,
                            Lit::Str(s) => s.value() == "true",
                            other => {
                                return Err(syn::Error::new_spanned(
                                    other,
                                    "expected `true`, `false` or a string literal",
                                ))
                            }
                        }
                    } else {
                        true
                    };
                    return Ok(());
                }

                // default = "literal"
                if meta.path.is_ident("default") {
                    if attrs.default.is_some() {
                        return Err(meta.error("duplicate `default` directive"));
                    }
                    attrs.default = Some(match meta.value()?.parse::<Lit>()? {
                        Lit::Str(s) => s.value(),
                        Lit::Int(i) => i.base10_digits().to_string(),
                        other => {
                            return Err(syn::Error::new_spanned(
                                other,
                                "expected a string or integer literal",
                            ))
                        }
                    });
                    return Ok(());
                }

                Err(meta.error("unsupported env directive, expected `var`, `required` or `default`"))
            })?;
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_var_directive() {
        let field: Field = parse_quote! {
            #[env(var = "PORT")]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.var, Some("PORT".to_string()));
        assert!(!attrs.required);
        assert_eq!(attrs.default, None);
    }

    #[test]
    fn test_parse_all_directives() {
        let field: Field = parse_quote! {
            #[env(var = "PORT", required, default = "8080")]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.var, Some("PORT".to_string()));
        assert!(attrs.required);
        assert_eq!(attrs.default, Some("8080".to_string()));
    }

    #[test]
    fn test_parse_directives_across_attributes() {
        let field: Field = parse_quote! {
            #[env(var = "DB_HOST")]
            #[env(required = true)]
            pub host: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.var, Some("DB_HOST".to_string()));
        assert!(attrs.required);
    }

    #[test]
    fn test_parse_required_string_values() {
        let field: Field = parse_quote! {
            #[env(var = "A", required = "true")]
            pub a: String
        };
        assert!(FieldAttrs::from_field(&field).unwrap().required);

        let field: Field = parse_quote! {
            #[env(var = "A", required = "yes")]
            pub a: String
        };
        assert!(!FieldAttrs::from_field(&field).unwrap().required);

        let field: Field = parse_quote! {
            #[env(var = "A", required = false)]
            pub a: String
        };
        assert!(!FieldAttrs::from_field(&field).unwrap().required);
    }

    #[test]
    fn test_parse_integer_default() {
        let field: Field = parse_quote! {
            #[env(var = "PORT", default = 8080)]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("8080".to_string()));
    }

    #[test]
    fn test_parse_no_directives() {
        let field: Field = parse_quote! {
            #[doc = "nested"]
            pub db: Database
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.var, None);
        assert!(!attrs.required);
        assert_eq!(attrs.default, None);
    }

    #[test]
    fn test_reject_unknown_directive() {
        let field: Field = parse_quote! {
            #[env(var = "PORT", prefix = "APP_")]
            pub port: i64
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("unsupported env directive"));
    }

    #[test]
    fn test_reject_duplicate_var() {
        let field: Field = parse_quote! {
            #[env(var = "PORT")]
            #[env(var = "OTHER_PORT")]
            pub port: i64
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("duplicate `var`"));
    }

    #[test]
    fn test_reject_empty_var() {
        let field: Field = parse_quote! {
            #[env(var = "")]
            pub port: i64
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_bool_default() {
        let field: Field = parse_quote! {
            #[env(var = "DEBUG", default = true)]
            pub debug: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }
}
