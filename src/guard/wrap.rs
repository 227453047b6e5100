//! Function guards.
//!
//! `needs(need).apply(f)` and `need.wrap(f)` build the same [`Guarded`]
//! function. Calling it checks the need first and only then calls `f`, once,
//! with the arguments untouched.
//!
//! ```
//! use needs::{GuardedFn, NeedExt, literal, needs};
//!
//! let add = |a: i32, b: i32| a + b;
//!
//! let open = needs(literal(true)).apply(add);
//! assert_eq!(open.call((2, 3)).unwrap(), 5);
//!
//! let closed = literal(false).wrap(add);
//! assert!(closed.call((2, 3)).is_err());
//! ```

use std::fmt;

use super::check;
use crate::error::NeedError;
use crate::need::Need;

// =============================================================================
// Decorator
// =============================================================================

/// Decorator factory: turn a need into a reusable function wrapper.
pub fn needs<N: Need>(need: N) -> Decorator<N> {
    Decorator { need }
}

/// A need ready to wrap functions. See [`needs`].
#[derive(Debug, Clone, Copy)]
pub struct Decorator<N> {
    need: N,
}

impl<N: Need> Decorator<N> {
    /// Wrap `func`. The decorator stays usable for further functions.
    pub fn apply<F>(&self, func: F) -> Guarded<N, F>
    where
        N: Clone,
    {
        Guarded::new(self.need.clone(), func)
    }

    /// Wrap `func`, consuming the decorator.
    pub fn into_guarded<F>(self, func: F) -> Guarded<N, F> {
        Guarded::new(self.need, func)
    }

    pub fn need(&self) -> &N {
        &self.need
    }
}

// =============================================================================
// Guarded
// =============================================================================

/// A function that only runs when its need is met.
#[derive(Clone, Copy)]
pub struct Guarded<N, F> {
    need: N,
    func: F,
}

impl<N: Need, F> Guarded<N, F> {
    pub fn new(need: N, func: F) -> Self {
        Guarded { need, func }
    }

    pub fn need(&self) -> &N {
        &self.need
    }

    /// The wrapped function, unguarded.
    pub fn inner(&self) -> &F {
        &self.func
    }

    pub fn into_parts(self) -> (N, F) {
        (self.need, self.func)
    }
}

impl<N: Need, F> fmt::Debug for Guarded<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded")
            .field("need", &self.need.describe())
            .finish_non_exhaustive()
    }
}

/// Call a guarded function with its arguments packed in a tuple.
///
/// Implemented for `Fn` closures and functions of up to eight arguments.
/// Arguments always go in a tuple, `call(())` for none and `call((x,))` for
/// one. `FnMut` closures cannot be wrapped since `call` takes `&self`; keep
/// mutable state in a `Cell`/`RefCell`, or use
/// [`NeedExt::run`](crate::NeedExt::run) for one-off blocks.
///
/// ```
/// use std::cell::Cell;
/// use needs::{GuardedFn, NeedExt, literal};
///
/// let total = Cell::new(0);
/// let add = literal(true).wrap(|amount: u32| total.set(total.get() + amount));
///
/// add.call((5,)).unwrap();
/// add.call((7,)).unwrap();
/// assert_eq!(total.get(), 12);
///
/// let mut seen = Vec::new();
/// literal(true).run(|| seen.push("once")).unwrap();
/// assert_eq!(seen, ["once"]);
/// ```
pub trait GuardedFn<Args> {
    type Output;

    /// Check the need, then call the function once with `args`.
    ///
    /// # Errors
    ///
    /// Returns the need's selected error when it is unmet, or
    /// `NeedError::Evaluation` when it could not be evaluated; the function
    /// is not called.
    fn call(&self, args: Args) -> Result<Self::Output, NeedError>;
}

macro_rules! impl_guarded_fn {
    ($($arg:ident),*) => {
        impl<N, F, R, $($arg),*> GuardedFn<($($arg,)*)> for Guarded<N, F>
        where
            N: Need,
            F: Fn($($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            #[inline]
            fn call(&self, ($($arg,)*): ($($arg,)*)) -> Result<R, NeedError> {
                check(&self.need)?;
                Ok((self.func)($($arg),*))
            }
        }
    };
}

impl_guarded_fn!();
impl_guarded_fn!(A1);
impl_guarded_fn!(A1, A2);
impl_guarded_fn!(A1, A2, A3);
impl_guarded_fn!(A1, A2, A3, A4);
impl_guarded_fn!(A1, A2, A3, A4, A5);
impl_guarded_fn!(A1, A2, A3, A4, A5, A6);
impl_guarded_fn!(A1, A2, A3, A4, A5, A6, A7);
impl_guarded_fn!(A1, A2, A3, A4, A5, A6, A7, A8);
