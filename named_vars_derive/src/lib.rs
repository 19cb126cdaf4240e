use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam};

/// Implements `named_vars::NamedVars<T, N>` for a struct whose named fields
/// all have the generic type `T`.
#[proc_macro_derive(NamedVars)]
pub fn named_vars_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let has_t = input.generics.params.iter().any(|param| {
        matches!(param, GenericParam::Type(ty) if ty.ident == "T")
    });
    if !has_t {
        return syn::Error::new_spanned(
            &input.ident,
            "NamedVars requires a struct generic over `T`",
        )
        .to_compile_error()
        .into();
    }

    let generics = input.generics.clone();
    let (impl_generics, ty_generics, original_where_clause) = generics.split_for_impl();

    let mut where_clause = original_where_clause.cloned().unwrap_or(syn::WhereClause {
        where_token: Default::default(),
        predicates: syn::punctuated::Punctuated::new(),
    });

    where_clause.predicates.push(parse_quote! {
        T: Copy + ::named_vars::nalgebra::Scalar
    });

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields_named) => &fields_named.named,
            _ => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "NamedVars can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "NamedVars can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let n_fields = fields.len();
    let n_literal = syn::Index::from(n_fields);
    let field_names: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let field_strings: Vec<_> = fields
        .iter()
        .filter_map(|f| f.ident.as_ref().map(|ident| ident.to_string()))
        .collect();
    let field_indexes: Vec<_> = (0..n_fields).map(syn::Index::from).collect();

    let expanded = quote! {
        impl #impl_generics ::named_vars::NamedVars<T, #n_literal> for #name #ty_generics #where_clause {
            const NAMES: [&'static str; #n_literal] = [#(#field_strings),*];

            fn to_svector(&self) -> ::named_vars::nalgebra::SVector<T, #n_literal> {
                ::named_vars::nalgebra::SVector::from([
                    #(self.#field_names.clone()),*
                ])
            }

            fn from_svector(v: &::named_vars::nalgebra::SVector<T, #n_literal>) -> Self {
                Self {
                    #(#field_names: v[#field_indexes].clone()),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
