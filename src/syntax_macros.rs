//! Operator Syntax Macros
//!
//! `!`, `&`, `|` and `^` cannot be blanket-implemented for every `Need`, so
//! each need type opts in. The crate's own needs do so in `logic::ops`;
//! application types use [`impl_need_ops!`] or `#[derive(NeedOps)]`.

// =============================================================================
// impl_need_ops! - Boolean operators for need types
// =============================================================================

/// Implement `!`, `&`, `|` and `^` for need types.
///
/// Generic types list their generic parameters in brackets. The list must
/// end with a trailing comma.
///
/// # Example
///
/// ```
/// use needs::{Need, impl_need_ops};
///
/// struct Admin(bool);
/// impl Need for Admin {
///     fn is_met(&self) -> bool { self.0 }
/// }
///
/// struct Owner<'a>(&'a str, &'a str);
/// impl Need for Owner<'_> {
///     fn is_met(&self) -> bool { self.0 == self.1 }
/// }
///
/// impl_need_ops!(Admin);
/// impl_need_ops!(['a,] Owner<'a>);
///
/// let need = Admin(false) | Owner("ana", "ana");
/// assert!(need.is_met());
/// assert!(!(!Admin(true)).is_met());
/// ```
#[macro_export]
macro_rules! impl_need_ops {
    (@one [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::Not for $ty
        where
            $ty: $crate::Need,
        {
            type Output = $crate::NotNeed<$ty>;

            #[inline]
            fn not(self) -> Self::Output {
                $crate::NotNeed::new(self)
            }
        }

        impl<$($gen)* __Rhs: $crate::Need> ::core::ops::BitAnd<__Rhs> for $ty
        where
            $ty: $crate::Need,
        {
            type Output = $crate::AndNeed<$ty, __Rhs>;

            #[inline]
            fn bitand(self, rhs: __Rhs) -> Self::Output {
                $crate::AndNeed::new(self, rhs)
            }
        }

        impl<$($gen)* __Rhs: $crate::Need> ::core::ops::BitOr<__Rhs> for $ty
        where
            $ty: $crate::Need,
        {
            type Output = $crate::OrNeed<$ty, __Rhs>;

            #[inline]
            fn bitor(self, rhs: __Rhs) -> Self::Output {
                $crate::OrNeed::new(self, rhs)
            }
        }

        impl<$($gen)* __Rhs: $crate::Need> ::core::ops::BitXor<__Rhs> for $ty
        where
            $ty: $crate::Need,
        {
            type Output = $crate::XorNeed<$ty, __Rhs>;

            #[inline]
            fn bitxor(self, rhs: __Rhs) -> Self::Output {
                $crate::XorNeed::new(self, rhs)
            }
        }
    };
    ($( [$($gen:tt)*] $ty:ty ),+ $(,)?) => {
        $( $crate::impl_need_ops!(@one [$($gen)*] $ty); )+
    };
    ($($ty:ty),+ $(,)?) => {
        $( $crate::impl_need_ops!(@one [] $ty); )+
    };
}
