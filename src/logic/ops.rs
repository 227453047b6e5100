//! Operator impls for the crate's own need types.
//!
//! `!a` is NOT, `a & b` is AND, `a | b` is OR, `a ^ b` is XOR. Operands are
//! moved; compose borrowed needs with `&a & &b`.

use crate::logic::{AllNeed, AndNeed, AnyNeed, NotNeed, OrNeed, XorNeed};
use crate::error::BoxError;
use crate::need::{FnNeed, Literal, NoNeed, Raising, TryFnNeed};
use crate::Need;

crate::impl_need_ops!(Literal, NoNeed, AllNeed, AnyNeed);

crate::impl_need_ops!(
    ['a,] &'a NoNeed,
    ['a,] &'a Literal,
    [F: Fn() -> bool,] FnNeed<F>,
    [F: Fn() -> Result<bool, E>, E: Into<BoxError>,] TryFnNeed<F>,
    [N: Need,] Raising<N>,
    [N: Need,] NotNeed<N>,
    [L: Need, R: Need,] AndNeed<L, R>,
    [L: Need, R: Need,] OrNeed<L, R>,
    [L: Need, R: Need,] XorNeed<L, R>,
);
