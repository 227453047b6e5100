// Need expression parsing and code generation

use proc_macro2::{TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{
    parse::{Parse, ParseStream},
    Token,
};

// =============================================================================
// Need Expression AST
// =============================================================================

/// A boolean expression over need-valued leaf expressions.
///
/// Leaves are kept as raw tokens and borrowed in the generated code, so
/// statics and locals can appear in several guards.
#[derive(Clone, Debug)]
pub enum NeedExpr {
    Leaf(TokenStream),
    Not(Box<NeedExpr>),
    And(Box<NeedExpr>, Box<NeedExpr>),
    Xor(Box<NeedExpr>, Box<NeedExpr>),
    Or(Box<NeedExpr>, Box<NeedExpr>),
}

impl Parse for NeedExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_lazy_or(input)
    }
}

// Recursive descent parser, Rust precedence (loosest first):
// `||` -> `&&` -> `|` -> `^` -> `&` -> Unary -> Primary
// `||` and `&&` build the same composites as `|` and `&`.

fn parse_lazy_or(input: ParseStream) -> syn::Result<NeedExpr> {
    let mut lhs = parse_lazy_and(input)?;

    while input.peek(Token![||]) {
        input.parse::<Token![||]>()?;
        let rhs = parse_lazy_and(input)?;
        lhs = NeedExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_lazy_and(input: ParseStream) -> syn::Result<NeedExpr> {
    let mut lhs = parse_or(input)?;

    while input.peek(Token![&&]) {
        input.parse::<Token![&&]>()?;
        let rhs = parse_or(input)?;
        lhs = NeedExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

// `Token![|]` also peeks true on `||`, so the doubled form is checked first.
fn parse_or(input: ParseStream) -> syn::Result<NeedExpr> {
    let mut lhs = parse_xor(input)?;

    while input.peek(Token![|]) && !input.peek(Token![||]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_xor(input)?;
        lhs = NeedExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_xor(input: ParseStream) -> syn::Result<NeedExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![^]) {
        input.parse::<Token![^]>()?;
        let rhs = parse_and(input)?;
        lhs = NeedExpr::Xor(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<NeedExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) && !input.peek(Token![&&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = NeedExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<NeedExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(NeedExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<NeedExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        return content.parse();
    }

    // `{ ... }` escapes to an arbitrary expression
    if input.peek(syn::token::Brace) {
        let block: syn::Block = input.parse()?;
        return Ok(NeedExpr::Leaf(block.into_token_stream()));
    }

    if input.peek(syn::LitBool) {
        let lit: syn::LitBool = input.parse()?;
        return Ok(NeedExpr::Leaf(lit.into_token_stream()));
    }

    // Path with optional call / method / field postfixes:
    // `LOGIN`, `auth::admin()`, `self.owner(&post)`, `ctx.session.login`
    let path: syn::ExprPath = input.parse()?;
    let mut tokens = path.into_token_stream();
    loop {
        if input.peek(syn::token::Paren) {
            let args: TokenTree = input.parse()?;
            tokens.extend(std::iter::once(args));
        } else if input.peek(Token![.]) && !input.peek(Token![..]) {
            let dot: Token![.] = input.parse()?;
            let member: syn::Member = input.parse()?;
            tokens.extend(quote!(#dot #member));
            if input.peek(Token![::]) {
                let turbofish: syn::AngleBracketedGenericArguments = {
                    input.parse::<Token![::]>()?;
                    input.parse()?
                };
                tokens.extend(quote!(:: #turbofish));
            }
        } else {
            break;
        }
    }
    Ok(NeedExpr::Leaf(tokens))
}

// =============================================================================
// NeedExpr Utilities
// =============================================================================

/// Convert NeedExpr to a human-readable string
pub fn need_expr_to_string(expr: &NeedExpr) -> String {
    match expr {
        NeedExpr::Leaf(tokens) => tokens.to_string().replace(' ', ""),
        NeedExpr::Not(operand) => format!("!{}", need_expr_to_string(operand)),
        NeedExpr::And(lhs, rhs) => {
            format!("({} & {})", need_expr_to_string(lhs), need_expr_to_string(rhs))
        }
        NeedExpr::Xor(lhs, rhs) => {
            format!("({} ^ {})", need_expr_to_string(lhs), need_expr_to_string(rhs))
        }
        NeedExpr::Or(lhs, rhs) => {
            format!("({} | {})", need_expr_to_string(lhs), need_expr_to_string(rhs))
        }
    }
}

/// Convert NeedExpr to a composite-need constructor expression.
///
/// Leaves are borrowed (`&N` is a need), composites are built by value.
pub fn need_expr_to_tokens(expr: &NeedExpr) -> TokenStream {
    match expr {
        NeedExpr::Leaf(tokens) => quote! { &(#tokens) },
        NeedExpr::Not(operand) => {
            let o = need_expr_to_tokens(operand);
            quote! { ::needs::NotNeed::new(#o) }
        }
        NeedExpr::And(lhs, rhs) => {
            let l = need_expr_to_tokens(lhs);
            let r = need_expr_to_tokens(rhs);
            quote! { ::needs::AndNeed::new(#l, #r) }
        }
        NeedExpr::Xor(lhs, rhs) => {
            let l = need_expr_to_tokens(lhs);
            let r = need_expr_to_tokens(rhs);
            quote! { ::needs::XorNeed::new(#l, #r) }
        }
        NeedExpr::Or(lhs, rhs) => {
            let l = need_expr_to_tokens(lhs);
            let r = need_expr_to_tokens(rhs);
            quote! { ::needs::OrNeed::new(#l, #r) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(src: &str) -> String {
        let expr: NeedExpr = syn::parse_str(src).unwrap();
        need_expr_to_string(&expr)
    }

    #[test]
    fn test_precedence_follows_rust() {
        assert_eq!(render("a | b & c"), "(a | (b & c))");
        assert_eq!(render("a ^ b & c"), "(a ^ (b & c))");
        assert_eq!(render("a | b ^ c"), "(a | (b ^ c))");
        assert_eq!(render("!a & b"), "(!a & b)");
    }

    #[test]
    fn test_lazy_operators_bind_loosest() {
        assert_eq!(render("a | b && c"), "((a | b) & c)");
        assert_eq!(render("a && b | c"), "(a & (b | c))");
        assert_eq!(render("a || b && c"), "(a | (b & c))");
        assert_eq!(render("a & b || c ^ d"), "((a & b) | (c ^ d))");
        assert_eq!(render("admin | owner && !banned"), "((admin | owner) & !banned)");
    }

    #[test]
    fn test_parens_and_double_operators() {
        assert_eq!(render("(a || b) && !c"), "((a | b) & !c)");
        assert_eq!(render("!(a & b)"), "!(a & b)");
    }

    #[test]
    fn test_leaf_forms() {
        assert_eq!(render("auth::LOGIN"), "auth::LOGIN");
        assert_eq!(render("owner(&post)"), "owner(&post)");
        assert_eq!(render("self.owner(post.id)"), "self.owner(post.id)");
        assert_eq!(render("true ^ { flag() }"), "(true ^ {flag()})");
    }

    #[test]
    fn test_leaves_are_borrowed() {
        let expr: NeedExpr = syn::parse_str("a & !b").unwrap();
        let out = need_expr_to_tokens(&expr).to_string();
        assert!(out.contains("AndNeed"));
        assert!(out.contains("NotNeed"));
        assert!(out.contains("& (a)"));
    }

    #[test]
    fn test_rejects_trailing_operator() {
        assert!(syn::parse_str::<NeedExpr>("a &").is_err());
    }
}
