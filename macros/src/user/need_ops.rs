//! Operator derive: #[derive(NeedOps)]
//!
//! Implements `!`, `&`, `|` and `^` for a type that implements `Need`,
//! producing the library's composite needs. Same output as
//! `needs::impl_need_ops!`, but generics and where clauses are carried over.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::DeriveInput;

pub fn expand_derive_need_ops(input: DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut where_clause = where_clause
        .cloned()
        .unwrap_or_else(|| syn::parse_quote!(where));
    where_clause
        .predicates
        .push(syn::parse_quote!(#name #ty_generics: ::needs::Need));

    let rhs = format_ident!("__Rhs");
    let mut rhs_generics = input.generics.clone();
    rhs_generics
        .params
        .push(syn::parse_quote!(#rhs: ::needs::Need));
    let (rhs_impl_generics, _, _) = rhs_generics.split_for_impl();

    let binary = [
        (quote!(BitAnd), quote!(bitand), quote!(AndNeed)),
        (quote!(BitOr), quote!(bitor), quote!(OrNeed)),
        (quote!(BitXor), quote!(bitxor), quote!(XorNeed)),
    ]
    .into_iter()
    .map(|(op, method, composite)| {
        quote! {
            impl #rhs_impl_generics ::core::ops::#op<#rhs> for #name #ty_generics
            #where_clause
            {
                type Output = ::needs::#composite<Self, #rhs>;

                #[inline]
                fn #method(self, rhs: #rhs) -> Self::Output {
                    ::needs::#composite::new(self, rhs)
                }
            }
        }
    });

    quote! {
        impl #impl_generics ::core::ops::Not for #name #ty_generics
        #where_clause
        {
            type Output = ::needs::NotNeed<Self>;

            #[inline]
            fn not(self) -> Self::Output {
                ::needs::NotNeed::new(self)
            }
        }

        #(#binary)*
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_all_four_operators() {
        let input: DeriveInput = syn::parse_str("struct Owner<'a> { user: &'a str }").unwrap();
        let out = expand_derive_need_ops(input).to_string();
        for op in ["Not", "BitAnd", "BitOr", "BitXor"] {
            assert!(out.contains(op), "missing {op}");
        }
        assert!(out.contains(":: needs :: Need"));
        assert!(out.contains("__Rhs"));
    }
}
