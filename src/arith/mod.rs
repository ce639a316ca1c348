//! Addition and doubling, selected by operand type
//!
//! `add_pair(3, 4)` and `add_pair(3.5, 4.5)` resolve to different impls at
//! compile time, so one name covers both the int and the double variant.

/// Numeric types that can be summed pairwise and doubled.
pub trait PairArith: Copy {
    fn sum_with(self, rhs: Self) -> Self;

    fn doubled(self) -> Self;
}

impl PairArith for i32 {
    fn sum_with(self, rhs: Self) -> Self {
        self + rhs
    }

    fn doubled(self) -> Self {
        self * 2
    }
}

impl PairArith for f64 {
    fn sum_with(self, rhs: Self) -> Self {
        self + rhs
    }

    fn doubled(self) -> Self {
        self * 2.0
    }
}

/// Sum two operands of the same numeric type.
pub fn add_pair<T: PairArith>(a: T, b: T) -> T {
    a.sum_with(b)
}

pub fn double<T: PairArith>(value: T) -> T {
    value.doubled()
}
