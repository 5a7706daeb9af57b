/// A slot type that can hold a primality mark.
///
/// Integer slots hold `1` for a prime and `0` otherwise, `bool` slots hold `true` and `false`.
pub trait Indicator: Copy {
    const PRIME: Self;
    const NOT_PRIME: Self;

    /// Whether the slot currently holds [`Indicator::PRIME`]. Any nonzero integer counts.
    fn is_marked(self) -> bool;
}

macro_rules! impl_indicator {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Indicator for $ty {
                const PRIME: Self = 1;
                const NOT_PRIME: Self = 0;

                #[inline]
                fn is_marked(self) -> bool {
                    self != 0
                }
            }
        )*
    };
}

impl_indicator!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Indicator for bool {
    const PRIME: Self = true;
    const NOT_PRIME: Self = false;

    #[inline]
    fn is_marked(self) -> bool {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_is_marked() {
        assert!(1i32.is_marked());
        assert!((-3i32).is_marked());
        assert!(!0u8.is_marked());
        assert!(true.is_marked());
        assert!(!bool::NOT_PRIME.is_marked());
    }
}
