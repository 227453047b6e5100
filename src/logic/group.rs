//! N-ary composites over type-erased needs: ALL, ANY

use std::borrow::Cow;
use std::fmt;

use crate::error::{BoxError, ErrorKind};
use crate::need::{BoxedNeed, Need, Verdict};

/// All children must be met. Stops at the first unmet child.
///
/// An empty group is met.
#[derive(Default)]
pub struct AllNeed {
    children: Vec<BoxedNeed>,
}

/// At least one child must be met. Stops at the first met child.
///
/// An empty group is unmet and raises [`ErrorKind::Unmet`].
#[derive(Default)]
pub struct AnyNeed {
    children: Vec<BoxedNeed>,
}

/// Build an [`AllNeed`] from boxed needs.
pub fn all_of<I: IntoIterator<Item = BoxedNeed>>(children: I) -> AllNeed {
    AllNeed { children: children.into_iter().collect() }
}

/// Build an [`AnyNeed`] from boxed needs.
pub fn any_of<I: IntoIterator<Item = BoxedNeed>>(children: I) -> AnyNeed {
    AnyNeed { children: children.into_iter().collect() }
}

macro_rules! group_common {
    ($ty:ident) => {
        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }

            /// Append a child.
            pub fn push<N: Need + Send + Sync + 'static>(mut self, need: N) -> Self {
                self.children.push(Box::new(need));
                self
            }

            pub fn len(&self) -> usize {
                self.children.len()
            }

            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("children", &self.children.len())
                    .finish()
            }
        }
    };
}

group_common!(AllNeed);
group_common!(AnyNeed);

fn join(children: &[BoxedNeed], sep: &str) -> String {
    let parts: Vec<Cow<'_, str>> = children.iter().map(|c| c.describe()).collect();
    format!("({})", parts.join(sep))
}

impl Need for AllNeed {
    fn is_met(&self) -> bool {
        self.try_is_met().unwrap_or(false)
    }

    fn try_is_met(&self) -> Result<bool, BoxError> {
        for child in &self.children {
            if !child.try_is_met()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn error(&self) -> ErrorKind {
        self.children.first().map(|c| c.error()).unwrap_or_default()
    }

    fn verdict(&self) -> Result<Verdict, BoxError> {
        for child in &self.children {
            if let unmet @ Verdict::Unmet(_) = child.verdict()? {
                return Ok(unmet);
            }
        }
        Ok(Verdict::Met)
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(join(&self.children, " & "))
    }
}

impl Need for AnyNeed {
    fn is_met(&self) -> bool {
        self.try_is_met().unwrap_or(false)
    }

    fn try_is_met(&self) -> Result<bool, BoxError> {
        for child in &self.children {
            if child.try_is_met()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn error(&self) -> ErrorKind {
        self.children.first().map(|c| c.error()).unwrap_or_default()
    }

    fn verdict(&self) -> Result<Verdict, BoxError> {
        let mut first = None;
        for child in &self.children {
            match child.verdict()? {
                Verdict::Met => return Ok(Verdict::Met),
                Verdict::Unmet(kind) => {
                    first.get_or_insert(kind);
                }
            }
        }
        Ok(Verdict::Unmet(first.unwrap_or_default()))
    }

    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(join(&self.children, " | "))
    }
}
