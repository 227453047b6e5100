//! # Layer 3: Guards
//!
//! Both guard forms reduce to [`check`]: evaluate once, raise the selected
//! error on failure. Nothing is held after a successful check, so leaving a
//! guarded scope releases nothing.
//!
//! ```text
//! guard/
//! ├── mod.rs  - check, Entered (scoped form)
//! └── wrap.rs - needs(), Decorator, Guarded, GuardedFn (function form)
//! ```
//!
//! ```
//! use needs::{NeedExt, literal};
//!
//! let mut ran = 0;
//! let denied = literal(false).run(|| ran += 1);
//! assert!(denied.is_err());
//! assert_eq!(ran, 0);
//!
//! let granted = literal(true).run(|| { ran += 1; ran });
//! assert_eq!(granted.unwrap(), 1);
//! ```

pub mod wrap;

use tracing::{debug, trace, warn};

use crate::error::NeedError;
use crate::need::{Need, Verdict};

pub use wrap::{Decorator, Guarded, GuardedFn, needs};

/// Evaluate `need` once and raise its selected error if unmet.
///
/// # Errors
///
/// The need's selected error when it is unmet, or
/// [`NeedError::Evaluation`] carrying the evaluation method's own error.
pub fn check<N: Need + ?Sized>(need: &N) -> Result<(), NeedError> {
    let verdict: Verdict = need.verdict().map_err(|source| {
        warn!(need = %need.describe(), error = %source, "need evaluation failed, rejecting guarded code");
        NeedError::Evaluation { source }
    })?;

    match verdict.error() {
        None => trace!(need = %need.describe(), "need met"),
        Some(kind) => {
            debug!(need = %need.describe(), error = %kind, "need not met, rejecting guarded code")
        }
    }
    verdict.into_result()
}

// =============================================================================
// Entered
// =============================================================================

/// Proof that a need was met on entry to a scope.
///
/// Obtained from [`NeedExt::enter`](crate::NeedExt::enter). Dropping it does
/// nothing; it exists so the guarded scope reads as one.
///
/// ```
/// use needs::{NeedExt, NeedError, literal};
///
/// fn delete_post(admin: bool) -> Result<&'static str, NeedError> {
///     let admin_need = literal(admin);
///     let _entered = admin_need.enter()?;
///     Ok("deleted")
/// }
///
/// assert_eq!(delete_post(true).unwrap(), "deleted");
/// assert!(delete_post(false).is_err());
/// ```
#[must_use = "the guarded scope ends when this is dropped"]
#[derive(Debug)]
pub struct Entered<'a, N: ?Sized> {
    need: &'a N,
}

impl<'a, N: Need + ?Sized> Entered<'a, N> {
    pub(crate) fn new(need: &'a N) -> Result<Self, NeedError> {
        check(need)?;
        Ok(Entered { need })
    }

    /// The need that admitted this scope.
    pub fn need(&self) -> &'a N {
        self.need
    }
}
