// Common utilities shared by the user-facing macros
//
// This module contains:
// - need_expr: Need expression parsing and code generation

mod need_expr;

pub use need_expr::*;
