//! Binary composites: AND, OR, XOR
//!
//! Evaluation order is always left before right. On failure the raised kind
//! is the first evaluated child that was itself unmet. A child that fails to
//! evaluate ends the pass; later children are not evaluated.

use std::borrow::Cow;

use crate::error::{BoxError, ErrorKind};
use crate::need::{Need, Verdict};

// =============================================================================
// AND
// =============================================================================

/// Conjunction: L AND R. `right` is skipped when `left` is unmet.
#[derive(Debug, Clone, Copy)]
pub struct AndNeed<L, R> {
    left: L,
    right: R,
}

impl<L: Need, R: Need> AndNeed<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        AndNeed { left, right }
    }
}

impl<L: Need, R: Need> Need for AndNeed<L, R> {
    fn is_met(&self) -> bool {
        self.try_is_met().unwrap_or(false)
    }

    fn try_is_met(&self) -> Result<bool, BoxError> {
        Ok(self.left.try_is_met()? && self.right.try_is_met()?)
    }

    fn error(&self) -> ErrorKind {
        self.left.error()
    }

    fn verdict(&self) -> Result<Verdict, BoxError> {
        match self.left.verdict()? {
            Verdict::Met => self.right.verdict(),
            unmet => Ok(unmet),
        }
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("({} & {})", self.left.describe(), self.right.describe()))
    }
}

// =============================================================================
// OR
// =============================================================================

/// Disjunction: L OR R. `right` is skipped when `left` is met.
#[derive(Debug, Clone, Copy)]
pub struct OrNeed<L, R> {
    left: L,
    right: R,
}

impl<L: Need, R: Need> OrNeed<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        OrNeed { left, right }
    }
}

impl<L: Need, R: Need> Need for OrNeed<L, R> {
    fn is_met(&self) -> bool {
        self.try_is_met().unwrap_or(false)
    }

    fn try_is_met(&self) -> Result<bool, BoxError> {
        Ok(self.left.try_is_met()? || self.right.try_is_met()?)
    }

    fn error(&self) -> ErrorKind {
        self.left.error()
    }

    fn verdict(&self) -> Result<Verdict, BoxError> {
        Ok(match self.left.verdict()? {
            Verdict::Met => Verdict::Met,
            Verdict::Unmet(first) => match self.right.verdict()? {
                Verdict::Met => Verdict::Met,
                Verdict::Unmet(_) => Verdict::Unmet(first),
            },
        })
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("({} | {})", self.left.describe(), self.right.describe()))
    }
}

// =============================================================================
// XOR
// =============================================================================

/// Exclusive or: met when exactly one side is met. Both sides always run.
///
/// When both sides are met no child failed; the fallback kind is raised:
/// the one set with [`XorNeed::with_error`], else the left child's declared
/// `error()`.
#[derive(Debug, Clone, Copy)]
pub struct XorNeed<L, R> {
    left: L,
    right: R,
    fallback: Option<ErrorKind>,
}

impl<L: Need, R: Need> XorNeed<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        XorNeed { left, right, fallback: None }
    }

    /// Raise `kind` when both sides are met.
    pub fn with_error(mut self, kind: ErrorKind) -> Self {
        self.fallback = Some(kind);
        self
    }
}

impl<L: Need, R: Need> Need for XorNeed<L, R> {
    fn is_met(&self) -> bool {
        self.try_is_met().unwrap_or(false)
    }

    fn try_is_met(&self) -> Result<bool, BoxError> {
        let left = self.left.try_is_met()?;
        let right = self.right.try_is_met()?;
        Ok(left != right)
    }

    fn error(&self) -> ErrorKind {
        match self.fallback {
            Some(kind) => kind,
            None => self.left.error(),
        }
    }

    fn verdict(&self) -> Result<Verdict, BoxError> {
        let left = self.left.verdict()?;
        let right = self.right.verdict()?;
        Ok(match (left, right) {
            (Verdict::Met, Verdict::Met) => Verdict::Unmet(self.error()),
            (Verdict::Unmet(first), Verdict::Unmet(_)) => Verdict::Unmet(first),
            _ => Verdict::Met,
        })
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("({} ^ {})", self.left.describe(), self.right.describe()))
    }
}
