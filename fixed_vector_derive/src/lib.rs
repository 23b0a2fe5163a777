use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derives `fixed_vector::NamedComponents` plus componentwise `Add`, `Sub`,
/// `AddAssign`, `SubAssign` and `Mul<f64>` for a struct whose named fields are
/// all `f64`. Field declaration order is component order.
#[proc_macro_derive(NamedComponents)]
pub fn named_components_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields_named) => &fields_named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "NamedComponents can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "NamedComponents can only be derived for structs",
            ));
        }
    };

    let n_fields = fields.len();
    let n_literal = syn::Index::from(n_fields);
    let field_names: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let field_indexes: Vec<_> = (0..n_fields).map(syn::Index::from).collect();

    let expanded = quote! {
        impl #impl_generics ::fixed_vector::NamedComponents<#n_literal> for #name #ty_generics #where_clause {
            fn to_fixed_vector(&self) -> ::fixed_vector::FixedVector<#n_literal> {
                ::fixed_vector::FixedVector::new([
                    #(self.#field_names),*
                ])
            }

            fn from_fixed_vector(v: &::fixed_vector::FixedVector<#n_literal>) -> Self {
                Self {
                    #(#field_names: v[#field_indexes]),*
                }
            }
        }

        impl #impl_generics ::std::ops::Add for #name #ty_generics #where_clause {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self {
                    #(#field_names: self.#field_names + rhs.#field_names),*
                }
            }
        }

        impl #impl_generics ::std::ops::Sub for #name #ty_generics #where_clause {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self {
                    #(#field_names: self.#field_names - rhs.#field_names),*
                }
            }
        }

        impl #impl_generics ::std::ops::AddAssign for #name #ty_generics #where_clause {
            fn add_assign(&mut self, rhs: Self) {
                #(self.#field_names += rhs.#field_names;)*
            }
        }

        impl #impl_generics ::std::ops::SubAssign for #name #ty_generics #where_clause {
            fn sub_assign(&mut self, rhs: Self) {
                #(self.#field_names -= rhs.#field_names;)*
            }
        }

        impl #impl_generics ::std::ops::Mul<f64> for #name #ty_generics #where_clause {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self {
                    #(#field_names: self.#field_names * rhs),*
                }
            }
        }
    };

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn rejects_tuple_structs() {
        let input: DeriveInput = parse_quote! {
            struct Pair(f64, f64);
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "NamedComponents can only be derived for structs with named fields"
        );
    }

    #[test]
    fn rejects_enums() {
        let input: DeriveInput = parse_quote! {
            enum Axis { X, Y, Z }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "NamedComponents can only be derived for structs");
    }

    #[test]
    fn expands_named_structs() {
        let input: DeriveInput = parse_quote! {
            struct Control { v: f64, w: f64 }
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("NamedComponents < 2 > for Control"));
        assert!(tokens.contains("AddAssign for Control"));
    }
}
