use std::fmt::Debug;

use num_traits::{Bounded, FromPrimitive, NumCast, ToPrimitive};

/// Common surface of the fixed-format posit types, for code generic over the format.
pub trait PositScalar:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + From<f64>
    + From<f32>
    + Into<f64>
    + Into<f32>
    + ToPrimitive
    + FromPrimitive
    + NumCast
    + Bounded
{
    const BITS: usize;
    const EXPONENT_BITS: usize;

    fn is_nar(self) -> bool;
    fn to_bits_u64(self) -> u64;
}
