//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[needs(expr)]` | on fn | Guard the function body |
//! | `need!(expr)` | function macro | Build a composite need from an expression |
//! | `#[derive(NeedOps)]` | on struct/enum | Implement `!`, `&`, `\|`, `^` |

mod need_ops;
mod needs_attr;

pub use need_ops::expand_derive_need_ops;
pub use needs_attr::{NeedsArgs, expand_need_expr, expand_needs_fn};
