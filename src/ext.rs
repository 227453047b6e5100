//! Extension methods available on every need.
//!
//! Named combinators mirror the operators for types that do not implement
//! them; the guard methods adapt any need to the scoped and function forms.

use crate::error::{ErrorKind, NeedError};
use crate::guard::{Entered, Guarded, check};
use crate::logic::{AndNeed, NotNeed, OrNeed, XorNeed};
use crate::need::{Need, Raising};

/// Combinators and guards for any [`Need`].
pub trait NeedExt: Need {
    /// NOT self.
    fn not(self) -> NotNeed<Self>
    where
        Self: Sized,
    {
        NotNeed::new(self)
    }

    /// self AND other.
    fn and<R: Need>(self, other: R) -> AndNeed<Self, R>
    where
        Self: Sized,
    {
        AndNeed::new(self, other)
    }

    /// self OR other.
    fn or<R: Need>(self, other: R) -> OrNeed<Self, R>
    where
        Self: Sized,
    {
        OrNeed::new(self, other)
    }

    /// self XOR other.
    fn xor<R: Need>(self, other: R) -> XorNeed<Self, R>
    where
        Self: Sized,
    {
        XorNeed::new(self, other)
    }

    /// Raise `kind` whenever this need fails.
    fn raising(self, kind: ErrorKind) -> Raising<Self>
    where
        Self: Sized,
    {
        Raising::new(self, kind)
    }

    /// Enter a guarded scope.
    ///
    /// # Errors
    ///
    /// Returns the selected error when the need is unmet or fails to
    /// evaluate.
    fn enter(&self) -> Result<Entered<'_, Self>, NeedError> {
        Entered::new(self)
    }

    /// Run `block` once if the need is met.
    ///
    /// # Errors
    ///
    /// Returns the selected error when the need is unmet or fails to
    /// evaluate; `block` does not run.
    fn run<T, F: FnOnce() -> T>(&self, block: F) -> Result<T, NeedError> {
        check(self)?;
        Ok(block())
    }

    /// Use this need directly as a decorator for `func`.
    fn wrap<F>(self, func: F) -> Guarded<Self, F>
    where
        Self: Sized,
    {
        Guarded::new(self, func)
    }
}

impl<N: Need + ?Sized> NeedExt for N {}
