//! Guard attribute: #[needs]
//!
//! Insert a need check in front of a function body.
//!
//! # Syntax
//!
//! ```ignore
//! #[needs(LOGIN)]
//! fn profile() -> Result<Profile, AppError> { ... }
//!
//! #[needs(ADMIN | owner(&post) & !BANNED)]
//! fn edit(post: &Post) -> Result<(), AppError> { ... }
//! ```
//!
//! The function must return `Result<_, E>` with `E: From<needs::NeedError>`;
//! the check is `::needs::Need::check(&tree)?`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    ItemFn, ReturnType, Token,
};

use crate::common::{NeedExpr, need_expr_to_string, need_expr_to_tokens};

// =============================================================================
// NeedsArgs - Attribute Arguments Parser
// =============================================================================

pub struct NeedsArgs {
    pub expr: NeedExpr,
}

impl Parse for NeedsArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a need expression, e.g. `#[needs(LOGIN & !BANNED)]`"));
        }
        let expr: NeedExpr = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after need expression"));
        }
        Ok(NeedsArgs { expr })
    }
}

// =============================================================================
// Expand Functions
// =============================================================================

pub fn expand_needs_fn(args: NeedsArgs, mut func: ItemFn) -> TokenStream2 {
    if let ReturnType::Default = func.sig.output {
        let message = format!(
            "#[needs({})] requires a function returning `Result<_, E>` where `E: From<needs::NeedError>`",
            need_expr_to_string(&args.expr)
        );
        return syn::Error::new_spanned(&func.sig, message).to_compile_error();
    }

    let tree = need_expr_to_tokens(&args.expr);
    func.block
        .stmts
        .insert(0, syn::parse_quote!(::needs::Need::check(&#tree)?;));

    quote! { #func }
}

/// `need!(expr)`: the composite need itself, as an expression.
pub fn expand_need_expr(args: NeedsArgs) -> TokenStream2 {
    need_expr_to_tokens(&args.expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_check_first() {
        let args: NeedsArgs = syn::parse_str("LOGIN & !BANNED").unwrap();
        let func: ItemFn = syn::parse_str("fn edit() -> Result<u8, E> { Ok(1) }").unwrap();
        let out: ItemFn = syn::parse2(expand_needs_fn(args, func)).unwrap();

        let first = &out.block.stmts[0];
        let first = quote!(#first).to_string();
        assert!(first.starts_with(":: needs :: Need :: check"));
        assert_eq!(out.block.stmts.len(), 2);
    }

    #[test]
    fn test_rejects_unit_return() {
        let args: NeedsArgs = syn::parse_str("LOGIN").unwrap();
        let func: ItemFn = syn::parse_str("fn edit() {}").unwrap();
        let out = expand_needs_fn(args, func).to_string();
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn test_rejects_empty_and_trailing_tokens() {
        assert!(syn::parse_str::<NeedsArgs>("").is_err());
        assert!(syn::parse_str::<NeedsArgs>("LOGIN ADMIN").is_err());
        assert!(syn::parse_str::<NeedsArgs>("LOGIN,").is_ok());
    }
}
