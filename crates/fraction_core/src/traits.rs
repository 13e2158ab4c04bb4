use num_traits::{PrimInt, Signed, ToPrimitive};
use std::fmt::{Debug, Display};

/// A trait for the integer types fractions are built from.
/// Must support checked arithmetic, sign handling, and printing.
pub trait Integer: PrimInt + Signed + Debug + Display + 'static {
    /// Widens to `f64` for decimal approximations of exact results.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: PrimInt + Signed + Debug + Display + 'static> Integer for T {}
