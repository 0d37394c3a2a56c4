use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num_traits::{One, Zero};

/// A trait representing an edge capacity which is typically a floating point number.
pub trait Capacity:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + PartialOrd
    + AddAssign
    + SubAssign
    + Zero
    + One
    + Debug
    + Display
    + Default
{
    /// Residual capacity at or below which an arc counts as saturated.
    fn tolerance() -> Self;

    /// Bottleneck carried by the search root before any arc is crossed.
    fn unbounded() -> Self;

    /// `self + other`, or `None` when the sum leaves the finite range of the type.
    fn checked_total(self, other: Self) -> Option<Self>;
}

impl Capacity for f64 {
    fn tolerance() -> Self {
        1e-12
    }

    fn unbounded() -> Self {
        f64::INFINITY
    }

    fn checked_total(self, other: Self) -> Option<Self> {
        let total = self + other;
        if total.is_finite() {
            Some(total)
        } else {
            None
        }
    }
}

impl Capacity for i64 {
    fn tolerance() -> Self {
        0
    }

    fn unbounded() -> Self {
        i64::MAX
    }

    fn checked_total(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }
}

// `core::cmp::min` needs `Ord`, which floats don't have
pub(crate) fn min_capacity<C: Capacity>(a: C, b: C) -> C {
    if b < a {
        b
    } else {
        a
    }
}

/// `true` when `a` and `b` differ by no more than the tolerance scaled to their magnitude.
pub(crate) fn approx_eq<C: Capacity>(a: C, b: C) -> bool {
    if C::tolerance().is_zero() {
        return a == b;
    }
    let slack = C::tolerance() * (C::one() + a + b);
    a <= b + slack && b <= a + slack
}
