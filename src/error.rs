//! Error kinds and the guard failure type.
//!
//! A need does not own an error value. It names an [`ErrorKind`]: a cheap,
//! copyable handle that knows how to build a fresh application error each
//! time a guard rejects. The guard wraps whatever it builds in [`NeedError`].

use core::fmt;
use std::error::Error as StdError;

use thiserror::Error;

/// Boxed application error produced by an [`ErrorKind`] constructor.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// =============================================================================
// ErrorKind
// =============================================================================

/// The kind of error a need raises when it is not met.
///
/// `Unmet` is used by needs that declare nothing; `Factory` carries an
/// application-chosen constructor. Factory kinds are identified by `path`;
/// `name` is only for display.
#[derive(Clone, Copy)]
pub enum ErrorKind {
    /// Library default: raises [`NeedError::Unmet`].
    Unmet,
    /// Application error kind built on demand.
    Factory {
        /// Short display name, used in logs and messages.
        name: &'static str,
        /// Identity of the kind. The full type path for [`ErrorKind::of`].
        path: &'static str,
        /// Builds a fresh error instance.
        make: fn() -> BoxError,
    },
}

fn make_default<E>() -> BoxError
where
    E: StdError + Default + Send + Sync + 'static,
{
    Box::new(E::default())
}

/// `a::b::Limit<c::D>` -> `Limit`
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl ErrorKind {
    /// Kind built from an explicit name and constructor.
    ///
    /// The name is the identity: two kinds built with the same name are equal.
    pub const fn new(name: &'static str, make: fn() -> BoxError) -> Self {
        ErrorKind::Factory { name, path: name, make }
    }

    /// Kind whose instances are `E::default()`.
    pub fn of<E>() -> Self
    where
        E: StdError + Default + Send + Sync + 'static,
    {
        let path = core::any::type_name::<E>();
        ErrorKind::Factory {
            name: short_type_name(path),
            path,
            make: make_default::<E>,
        }
    }

    /// Display name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Unmet => "Unmet",
            ErrorKind::Factory { name, .. } => *name,
        }
    }

    /// Full identity of this kind.
    pub fn path(&self) -> &'static str {
        match self {
            ErrorKind::Unmet => "Unmet",
            ErrorKind::Factory { path, .. } => *path,
        }
    }

    /// Construct a fresh error of this kind.
    pub fn raise(&self) -> NeedError {
        match self {
            ErrorKind::Unmet => NeedError::Unmet,
            ErrorKind::Factory { make, .. } => NeedError::Raised {
                kind: *self,
                source: make(),
            },
        }
    }
}

impl Default for ErrorKind {
    fn default() -> Self {
        ErrorKind::Unmet
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorKind").field(&self.path()).finish()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Constructors are opaque; the path is the identity.
impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorKind::Unmet, ErrorKind::Unmet) => true,
            (ErrorKind::Factory { path: a, .. }, ErrorKind::Factory { path: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for ErrorKind {}

// =============================================================================
// NeedError
// =============================================================================

/// Raised by a guard when its need is not met, or could not be evaluated.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NeedError {
    /// The need declared no error kind.
    #[error("need not met")]
    Unmet,

    /// The need's own error kind was raised.
    #[error("need not met: {kind}")]
    Raised {
        /// The raised kind.
        kind: ErrorKind,
        /// The application error instance.
        #[source]
        source: BoxError,
    },

    /// Evaluating the need failed; the guarded code did not run.
    #[error("need evaluation failed")]
    Evaluation {
        /// The error returned by the evaluation method, untouched.
        #[source]
        source: BoxError,
    },
}

impl NeedError {
    /// The kind this error was raised under. `None` for evaluation failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            NeedError::Unmet => Some(ErrorKind::Unmet),
            NeedError::Raised { kind, .. } => Some(*kind),
            NeedError::Evaluation { .. } => None,
        }
    }

    /// Whether the need was evaluated and found unmet.
    pub fn is_unmet(&self) -> bool {
        !matches!(self, NeedError::Evaluation { .. })
    }

    /// Whether the application error is an `E`.
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }

    /// Borrow the application error (raised or from evaluation) as `E`.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            NeedError::Unmet => None,
            NeedError::Raised { source, .. } | NeedError::Evaluation { source } => {
                source.downcast_ref::<E>()
            }
        }
    }

    /// Take the application error out, if any.
    pub fn into_source(self) -> Option<BoxError> {
        match self {
            NeedError::Unmet => None,
            NeedError::Raised { source, .. } | NeedError::Evaluation { source } => Some(source),
        }
    }
}
