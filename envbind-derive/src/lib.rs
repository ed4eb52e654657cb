//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `EnvBind` derive macro
///
/// Implements `envbind::EnvBind` (the field descriptor table) and
/// `envbind::Bindable` (so the struct can be nested in other records).
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env(var = "NAME")]`: Source environment variable
/// - `#[env(required)]`: Fail when the variable is empty or unset
/// - `#[env(default = "literal")]`: Literal bound when the variable is empty or unset
///
/// Fields without `var` must themselves be `EnvBind` records.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let record_name = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    if let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("env")) {
        return Err(syn::Error::new_spanned(
            attr,
            "env directives are only supported on fields",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvBind only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvBind only supports structs",
            ));
        }
    };

    // Collect every field's attribute errors instead of stopping at the first
    let mut errors: Option<syn::Error> = None;
    let mut descriptors = Vec::with_capacity(fields.len());

    for field in fields {
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => {
                errors = Some(match errors.take() {
                    Some(mut combined) => {
                        combined.combine(err);
                        combined
                    }
                    None => err,
                });
                continue;
            }
        };

        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = field_ident.to_string();
        let var = option_str(attrs.var.as_deref());
        let required = attrs.required;
        let default = option_str(attrs.default.as_deref());

        descriptors.push(quote! {
            ::envbind::FieldDescriptor {
                name: #field_name,
                directives: ::envbind::Directives {
                    var: #var,
                    required: #required,
                    default: #default,
                },
                slot: ::envbind::Bindable::slot(&mut self.#field_ident),
            }
        });
    }

    if let Some(errors) = errors {
        return Err(errors);
    }

    Ok(quote! {
        impl #impl_generics ::envbind::EnvBind for #struct_name #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #record_name
            }

            fn fields(&mut self) -> ::std::vec::Vec<::envbind::FieldDescriptor<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        impl #impl_generics ::envbind::Bindable for #struct_name #ty_generics #where_clause {
            fn slot(&mut self) -> ::envbind::Slot<'_> {
                ::envbind::Slot::Record(self)
            }
        }
    })
}

fn option_str(value: Option<&str>) -> TokenStream2 {
    match value {
        Some(value) => quote! { ::core::option::Option::Some(#value) },
        None => quote! { ::core::option::Option::None },
    }
}
