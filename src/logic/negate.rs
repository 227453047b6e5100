//! Negation: NOT N

use std::borrow::Cow;

use crate::error::{BoxError, ErrorKind};
use crate::need::{Need, Verdict};

/// Met exactly when the inner need is not.
///
/// A negation fails only when its child succeeds, so there is no failing
/// child to borrow an error from. It raises its own fallback kind instead:
/// the one set with [`NotNeed::with_error`], else the child's declared
/// `error()`.
///
/// A child that fails to evaluate is not negated: the failure propagates,
/// and as a plain boolean the negation counts as unmet.
#[derive(Debug, Clone, Copy)]
pub struct NotNeed<N> {
    inner: N,
    fallback: Option<ErrorKind>,
}

impl<N: Need> NotNeed<N> {
    pub const fn new(inner: N) -> Self {
        NotNeed { inner, fallback: None }
    }

    /// Raise `kind` when the negation fails.
    pub fn with_error(mut self, kind: ErrorKind) -> Self {
        self.fallback = Some(kind);
        self
    }
}

impl<N: Need> Need for NotNeed<N> {
    fn is_met(&self) -> bool {
        self.try_is_met().unwrap_or(false)
    }

    fn try_is_met(&self) -> Result<bool, BoxError> {
        Ok(!self.inner.try_is_met()?)
    }

    fn error(&self) -> ErrorKind {
        match self.fallback {
            Some(kind) => kind,
            None => self.inner.error(),
        }
    }

    fn verdict(&self) -> Result<Verdict, BoxError> {
        Ok(if self.inner.try_is_met()? {
            Verdict::Unmet(self.error())
        } else {
            Verdict::Met
        })
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("!{}", self.inner.describe()))
    }
}
