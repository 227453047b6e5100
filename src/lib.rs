//! # needs
//!
//! Composable runtime preconditions.
//!
//! A **need** is a boolean check ("user is logged in", "user owns this
//! post") with an error kind attached. Needs compose like booleans and
//! guard code two ways: a scoped block that only runs when the need is met,
//! or a wrapped function that only runs when the need is met.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Errors                                                  |
//! |  - ErrorKind (what to raise), NeedError (what guards return)      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Need                                                    |
//! |  - Need trait, Verdict, Literal, FnNeed, Raising, NO_NEED         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Logic                                                   |
//! |  - NotNeed, AndNeed, OrNeed, XorNeed, AllNeed, AnyNeed, operators |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Guards                                                  |
//! |  - check, enter/run (scoped), needs()/wrap (function), #[needs]   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Error selection
//!
//! A failing composite raises the error of the first child, in evaluation
//! order, that was itself unmet. Each guard check evaluates every leaf at
//! most once, and `&`/`|` short-circuit like their boolean counterparts.
//!
//! A need whose evaluation fails (see [`Need::try_is_met`]) stops the check
//! there; the guard returns [`NeedError::Evaluation`] with the original error
//! as its source.
//!
//! ## Quick Start
//!
//! ```
//! use needs::prelude::*;
//!
//! #[derive(Debug, Default, thiserror::Error)]
//! #[error("admins only")]
//! struct Forbidden;
//!
//! let is_admin = false;
//! let is_owner = true;
//!
//! let admin = literal(is_admin).raising(ErrorKind::of::<Forbidden>());
//! let owner = literal(is_owner);
//!
//! // Boolean use
//! assert!((admin | owner).is_met());
//!
//! // Scoped use
//! let admin_only = admin & owner;
//! let err = admin_only.run(|| "edited").unwrap_err();
//! assert!(err.is::<Forbidden>());
//!
//! // Function use
//! let edit = (admin | owner).wrap(|title: &str| title.len());
//! assert_eq!(edit.call(("hello",)).unwrap(), 5);
//! ```
//!
//! ## Features
//!
//! - `macros` (default): the `#[needs(...)]` attribute, `need!(...)` and
//!   `#[derive(NeedOps)]`.

// =============================================================================
// Layer 0: Errors
// =============================================================================
pub mod error;

// =============================================================================
// Layer 1: Need
// =============================================================================
pub mod need;

// =============================================================================
// Layer 2: Logic
// =============================================================================
pub mod logic;

// =============================================================================
// Layer 3: Guards
// =============================================================================
pub mod guard;

mod ext;

// Operator macros (impl_need_ops!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::{BoxError, ErrorKind, NeedError};
pub use ext::NeedExt;
pub use guard::{Decorator, Entered, Guarded, GuardedFn, check, needs};
pub use logic::{AllNeed, AndNeed, AnyNeed, NotNeed, OrNeed, XorNeed, all_of, any_of};
pub use need::{
    BoxedNeed, FnNeed, Literal, NO_NEED, Need, NoNeed, Raising, TryFnNeed, Verdict, literal,
    need_fn, need_try_fn, no_need,
};

#[cfg(feature = "macros")]
pub use macros::{NeedOps, need, needs};

/// Common items for defining, composing and guarding with needs.
pub mod prelude {
    pub use crate::error::{ErrorKind, NeedError};
    pub use crate::ext::NeedExt;
    pub use crate::guard::{GuardedFn, needs};
    pub use crate::need::{Literal, NO_NEED, Need, literal, need_fn, need_try_fn, no_need};
    #[cfg(feature = "macros")]
    pub use macros::{NeedOps, need, needs};
}
