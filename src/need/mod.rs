//! # Layer 1: The Need Trait
//!
//! A need is a boolean precondition with an error kind attached.
//!
//! ```text
//! need/
//! ├── mod.rs  - Need trait, Verdict, pointer forwarding
//! └── leaf.rs - Literal, FnNeed, Raising, NoNeed (no_need)
//! ```
//!
//! Implementing a need only takes `is_met`. Override `error` to pick what a
//! guard raises:
//!
//! ```
//! use needs::{ErrorKind, Need};
//!
//! #[derive(Debug, Default, thiserror::Error)]
//! #[error("login required")]
//! struct Unauthorized;
//!
//! struct LoginNeed<'a> {
//!     session_user: Option<&'a str>,
//! }
//!
//! impl Need for LoginNeed<'_> {
//!     fn is_met(&self) -> bool {
//!         self.session_user.is_some()
//!     }
//!
//!     fn error(&self) -> ErrorKind {
//!         ErrorKind::of::<Unauthorized>()
//!     }
//! }
//!
//! let anonymous = LoginNeed { session_user: None };
//! assert!(!anonymous.is_met());
//! assert!(anonymous.check().unwrap_err().is::<Unauthorized>());
//! ```

pub mod leaf;

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::{BoxError, ErrorKind, NeedError};

pub use leaf::{
    FnNeed, Literal, NO_NEED, NoNeed, Raising, TryFnNeed, literal, need_fn, need_try_fn, no_need,
};

// =============================================================================
// Verdict
// =============================================================================

/// Outcome of one evaluation pass.
///
/// `Unmet` carries the error kind selected during that same pass, so a guard
/// never has to evaluate twice to learn what to raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Verdict {
    Met,
    Unmet(ErrorKind),
}

impl Verdict {
    /// Build a verdict from a boolean and the kind to raise if it is false.
    pub fn from_bool(met: bool, error: ErrorKind) -> Self {
        if met { Verdict::Met } else { Verdict::Unmet(error) }
    }

    pub fn is_met(&self) -> bool {
        matches!(self, Verdict::Met)
    }

    /// The selected error kind, if unmet.
    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            Verdict::Met => None,
            Verdict::Unmet(kind) => Some(*kind),
        }
    }

    /// Raise the selected error if unmet.
    pub fn into_result(self) -> Result<(), NeedError> {
        match self {
            Verdict::Met => Ok(()),
            Verdict::Unmet(kind) => Err(kind.raise()),
        }
    }
}

// =============================================================================
// Need
// =============================================================================

/// A runtime precondition.
///
/// The trait is dyn-compatible: guards and combinators work the same on
/// `&dyn Need`, `Box<dyn Need>` and concrete types.
///
/// Needs whose evaluation can fail (a session store lookup, a remote policy
/// call) override [`try_is_met`](Need::try_is_met). Guards go through it and
/// hand the failure back as [`NeedError::Evaluation`]; `is_met`, which has
/// nowhere to put the error, should answer `false` for it.
pub trait Need {
    /// Evaluate the precondition.
    ///
    /// Results are never cached.
    fn is_met(&self) -> bool;

    /// Evaluate the precondition, reporting evaluation failures.
    fn try_is_met(&self) -> Result<bool, BoxError> {
        Ok(self.is_met())
    }

    /// The error kind raised when this need is not met.
    fn error(&self) -> ErrorKind {
        ErrorKind::Unmet
    }

    /// Evaluate once and select the error to raise on failure.
    ///
    /// Called at most once per leaf per guard check. Composites override this
    /// to pick the first failing child's error; an evaluation error stops the
    /// pass at the child that returned it.
    fn verdict(&self) -> Result<Verdict, BoxError> {
        Ok(Verdict::from_bool(self.try_is_met()?, self.error()))
    }

    /// Short rendering used in log events.
    fn describe(&self) -> Cow<'_, str> {
        let full = core::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        Cow::Borrowed(base.rsplit("::").next().unwrap_or(base))
    }

    /// Evaluate and raise the selected error if unmet.
    fn check(&self) -> Result<(), NeedError> {
        crate::guard::check(self)
    }
}

// =============================================================================
// Pointer Forwarding
// =============================================================================

// Every method is forwarded so composites keep their verdict logic behind
// a pointer.
macro_rules! forward_need {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<N: Need + ?Sized> Need for $ptr {
                #[inline]
                fn is_met(&self) -> bool {
                    (**self).is_met()
                }

                #[inline]
                fn try_is_met(&self) -> Result<bool, BoxError> {
                    (**self).try_is_met()
                }

                #[inline]
                fn error(&self) -> ErrorKind {
                    (**self).error()
                }

                #[inline]
                fn verdict(&self) -> Result<Verdict, BoxError> {
                    (**self).verdict()
                }

                fn describe(&self) -> Cow<'_, str> {
                    (**self).describe()
                }
            }
        )*
    };
}

forward_need!(&N, &mut N, Box<N>, Rc<N>, Arc<N>);

/// A type-erased need that can cross threads.
pub type BoxedNeed = Box<dyn Need + Send + Sync>;
