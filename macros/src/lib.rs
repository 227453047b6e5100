//! Procedural macros for the needs guard library
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[needs(expr)]` | fn | Check a need before the body runs |
//! | `need!(expr)` | - | Build a composite need from an expression |
//! | `#[derive(NeedOps)]` | struct/enum | Enable `!`, `&`, `\|`, `^` on a need type |
//!
//! ## Need expressions
//!
//! `!a`, `a & b`, `a ^ b`, `a | b`, `a && b`, `a || b` with Rust's
//! precedence (`&` binds tightest, then `^`, `|`, `&&` and `||`; so
//! `a | b && c` is `(a | b) && c`), parentheses, and leaves
//! that are paths (`LOGIN`), calls (`owner(&post)`), method chains
//! (`self.owner(post)`), `true`/`false`, or `{ any expression }`.
//! Leaves are borrowed, never moved.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Guard a function with a need expression.
///
/// # Usage
///
/// ```ignore
/// #[needs(LOGIN)]
/// fn profile(id: u64) -> Result<Profile, AppError> { ... }
///
/// // Boolean logic over statics, calls and methods
/// #[needs(ADMIN | owner(&post) & !BANNED)]
/// fn edit(post: &Post) -> Result<(), AppError> { ... }
/// ```
///
/// Expands to `::needs::Need::check(&tree)?;` in front of the body, so the
/// function's error type needs `From<needs::NeedError>`. The body never runs
/// when the need is unmet.
#[proc_macro_attribute]
pub fn needs(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::NeedsArgs);

    match syn::parse::<syn::ItemFn>(item) {
        Ok(func) => user::expand_needs_fn(args, func).into(),
        Err(err) => syn::Error::new(
            err.span(),
            "#[needs] can only be applied to functions with a body",
        )
        .to_compile_error()
        .into(),
    }
}

/// Build a composite need from a need expression.
///
/// # Usage
///
/// ```ignore
/// let can_edit = need!(ADMIN | owner & !BANNED);
/// can_edit.run(|| edit(post))?;
/// ```
///
/// Leaves are borrowed: bind call results to locals first when the need
/// outlives the statement.
#[proc_macro]
pub fn need(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as user::NeedsArgs);
    user::expand_need_expr(args).into()
}

/// Derive `!`, `&`, `|` and `^` for a type implementing `Need`.
///
/// # Usage
///
/// ```ignore
/// #[derive(NeedOps)]
/// struct LoginNeed;
///
/// impl Need for LoginNeed {
///     fn is_met(&self) -> bool { session::user().is_some() }
/// }
///
/// let guest_only = !LoginNeed;
/// ```
#[proc_macro_derive(NeedOps)]
pub fn derive_need_ops(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_need_ops(input).into()
}
