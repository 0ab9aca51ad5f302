pub mod codec;
pub mod core;

/// Defines a posit value type over an unsigned storage integer, with every conversion routed
/// through [`codec::PositCodec`].
macro_rules! posit_type {
    ($(#[$meta:meta])* $name:ident, $bits:ty, $n:literal, $es:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            bits: $bits,
        }

        impl $crate::number_representations::posit::core::Posit<$n, $es> for $name {}

        impl $name {
            pub const ZERO: Self = Self::new(0);
            pub const ONE: Self = Self::new(1 << ($n - 2));
            pub const MINUS_ONE: Self = Self::new(0b11 << ($n - 2));
            pub const NAR: Self = Self::new(1 << ($n - 1));
            /// Smallest positive value (minpos).
            pub const EPSILON: Self = Self::new(1);
            /// Largest finite value (maxpos).
            pub const MAX_VALUE: Self = Self::new((1 << ($n - 1)) - 1);
            /// Negation of `MAX_VALUE`.
            pub const MIN_VALUE: Self = Self::new((1 << ($n - 1)) + 1);

            /// Wraps a raw pattern. Every pattern is a valid posit.
            pub const fn new(bits: $bits) -> Self {
                $name { bits }
            }

            pub const fn to_bits(self) -> $bits {
                self.bits
            }

            pub const fn is_nar(self) -> bool {
                self.bits == Self::NAR.bits
            }

            pub fn to_f64(self) -> f64 {
                $crate::number_representations::posit::codec::PositCodec::<$n, $es>::decode(
                    self.bits as u64,
                )
            }

            pub fn to_f32(self) -> f32 {
                self.to_f64() as f32
            }

            /// Nearest posit to `value`; out-of-range magnitudes saturate, NaN and infinities give NaR.
            pub fn from_f64(value: f64) -> Self {
                Self::new(
                    $crate::number_representations::posit::codec::PositCodec::<$n, $es>::encode(
                        value,
                    ) as $bits,
                )
            }

            pub fn from_f32(value: f32) -> Self {
                Self::from_f64(value as f64)
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                $name::from_f64(value)
            }
        }

        impl From<f32> for $name {
            fn from(value: f32) -> Self {
                $name::from_f32(value)
            }
        }

        impl From<$name> for f64 {
            fn from(p: $name) -> Self {
                $name::to_f64(p)
            }
        }

        impl From<$name> for f32 {
            fn from(p: $name) -> Self {
                $name::to_f32(p)
            }
        }

        impl TryFrom<u64> for $name {
            type Error = $crate::number_representations::errors::PatternError;

            fn try_from(bits: u64) -> Result<Self, Self::Error> {
                let mask =
                    <Self as $crate::number_representations::posit::core::Posit<$n, $es>>::MASK;
                if bits & !mask != 0 {
                    return Err(
                        $crate::number_representations::errors::PatternError::TooWide {
                            bits,
                            width: $n,
                        },
                    );
                }
                Ok($name::new(bits as $bits))
            }
        }

        impl ::num_traits::ToPrimitive for $name {
            // NaR decodes to NaN, which no integer conversion accepts.
            fn to_i64(&self) -> Option<i64> {
                ::num_traits::ToPrimitive::to_i64(&$name::to_f64(*self))
            }

            fn to_u64(&self) -> Option<u64> {
                ::num_traits::ToPrimitive::to_u64(&$name::to_f64(*self))
            }

            fn to_f32(&self) -> Option<f32> {
                Some($name::to_f32(*self))
            }

            fn to_f64(&self) -> Option<f64> {
                Some($name::to_f64(*self))
            }
        }

        impl ::num_traits::FromPrimitive for $name {
            fn from_i64(n: i64) -> Option<Self> {
                Some($name::from_f64(n as f64))
            }

            fn from_u64(n: u64) -> Option<Self> {
                Some($name::from_f64(n as f64))
            }

            fn from_f32(n: f32) -> Option<Self> {
                Some($name::from_f32(n))
            }

            fn from_f64(n: f64) -> Option<Self> {
                Some($name::from_f64(n))
            }
        }

        impl ::num_traits::NumCast for $name {
            fn from<T: ::num_traits::ToPrimitive>(n: T) -> Option<Self> {
                n.to_f64().map($name::from_f64)
            }
        }

        impl ::num_traits::Bounded for $name {
            fn min_value() -> Self {
                $name::MIN_VALUE
            }

            fn max_value() -> Self {
                $name::MAX_VALUE
            }
        }

        impl $crate::number_representations::core::PositScalar for $name {
            const BITS: usize = $n;
            const EXPONENT_BITS: usize = $es;

            fn is_nar(self) -> bool {
                $name::is_nar(self)
            }

            fn to_bits_u64(self) -> u64 {
                self.bits as u64
            }
        }
    };
}

pub mod posit16_1;
pub mod posit32_2;
pub mod posit8_2;
