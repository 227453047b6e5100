//! Leaf needs: literals, closures, the error-kind adapter and `no_need`.

use std::borrow::Cow;
use std::fmt;

use super::{Need, Verdict};
use crate::error::{BoxError, ErrorKind};

// =============================================================================
// Literal
// =============================================================================

/// A need fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal(pub bool);

impl Literal {
    pub const fn new(value: bool) -> Self {
        Literal(value)
    }

    pub const fn value(&self) -> bool {
        self.0
    }
}

/// Shorthand for [`Literal::new`].
pub const fn literal(value: bool) -> Literal {
    Literal(value)
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal(value)
    }
}

impl Need for Literal {
    #[inline]
    fn is_met(&self) -> bool {
        self.0
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed(if self.0 { "true" } else { "false" })
    }
}

// A plain boolean is its own literal need, so `login & true` composes.
impl Need for bool {
    #[inline]
    fn is_met(&self) -> bool {
        *self
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

// =============================================================================
// FnNeed
// =============================================================================

/// A need whose evaluation method is a closure.
///
/// ```
/// use std::cell::Cell;
/// use needs::{Need, need_fn};
///
/// let logged_in = Cell::new(false);
/// let login_need = need_fn(|| logged_in.get());
/// assert!(!login_need.is_met());
/// logged_in.set(true);
/// assert!(login_need.is_met());
/// ```
#[derive(Clone, Copy)]
pub struct FnNeed<F> {
    eval: F,
}

impl<F: Fn() -> bool> FnNeed<F> {
    pub const fn new(eval: F) -> Self {
        FnNeed { eval }
    }
}

/// Build a need from a closure.
pub const fn need_fn<F: Fn() -> bool>(eval: F) -> FnNeed<F> {
    FnNeed { eval }
}

impl<F: Fn() -> bool> Need for FnNeed<F> {
    #[inline]
    fn is_met(&self) -> bool {
        (self.eval)()
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("fn")
    }
}

impl<F> fmt::Debug for FnNeed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnNeed(..)")
    }
}

// =============================================================================
// TryFnNeed
// =============================================================================

/// A need whose evaluation is a fallible closure.
///
/// Guards return the closure's error as [`NeedError::Evaluation`] without
/// running guarded code. As a plain boolean a
/// failed evaluation counts as unmet.
///
/// ```
/// use needs::{NeedError, NeedExt, need_try_fn};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("session store unavailable")]
/// struct StoreDown;
///
/// let login_need = need_try_fn(|| Err::<bool, _>(StoreDown));
/// assert!(!needs::Need::is_met(&login_need));
///
/// let err = login_need.run(|| "profile").unwrap_err();
/// assert!(matches!(err, NeedError::Evaluation { .. }));
/// assert!(err.is::<StoreDown>());
/// ```
///
/// [`NeedError::Evaluation`]: crate::NeedError::Evaluation
#[derive(Clone, Copy)]
pub struct TryFnNeed<F> {
    eval: F,
}

/// Build a need from a fallible closure.
pub const fn need_try_fn<F, E>(eval: F) -> TryFnNeed<F>
where
    F: Fn() -> Result<bool, E>,
    E: Into<BoxError>,
{
    TryFnNeed { eval }
}

impl<F, E> Need for TryFnNeed<F>
where
    F: Fn() -> Result<bool, E>,
    E: Into<BoxError>,
{
    fn is_met(&self) -> bool {
        self.try_is_met().unwrap_or(false)
    }

    fn try_is_met(&self) -> Result<bool, BoxError> {
        (self.eval)().map_err(Into::into)
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("try_fn")
    }
}

impl<F> fmt::Debug for TryFnNeed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TryFnNeed(..)")
    }
}

// =============================================================================
// Raising
// =============================================================================

/// Attach an error kind to an existing need.
///
/// Both the declared `error()` and the kind carried by any unmet verdict are
/// replaced, so a composite wrapped in `Raising` always raises `kind`.
#[derive(Debug, Clone, Copy)]
pub struct Raising<N> {
    need: N,
    kind: ErrorKind,
}

impl<N: Need> Raising<N> {
    pub const fn new(need: N, kind: ErrorKind) -> Self {
        Raising { need, kind }
    }
}

impl<N: Need> Need for Raising<N> {
    #[inline]
    fn is_met(&self) -> bool {
        self.need.is_met()
    }

    fn error(&self) -> ErrorKind {
        self.kind
    }

    fn try_is_met(&self) -> Result<bool, BoxError> {
        self.need.try_is_met()
    }

    fn verdict(&self) -> Result<Verdict, BoxError> {
        Ok(match self.need.verdict()? {
            Verdict::Met => Verdict::Met,
            Verdict::Unmet(_) => Verdict::Unmet(self.kind),
        })
    }

    fn describe(&self) -> Cow<'_, str> {
        self.need.describe()
    }
}

// =============================================================================
// no_need
// =============================================================================

/// The always-satisfied need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoNeed;

impl Need for NoNeed {
    #[inline]
    fn is_met(&self) -> bool {
        true
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("no_need")
    }
}

/// Process-wide always-met need, safe to share from any thread.
pub static NO_NEED: NoNeed = NoNeed;

/// Borrow the [`NO_NEED`] singleton.
pub const fn no_need() -> &'static NoNeed {
    &NO_NEED
}
