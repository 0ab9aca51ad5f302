use std::sync::LazyLock;

use crate::number_representations::posit::codec::PositCodec;

posit_type!(
    /// 8-bit posit with 2 exponent bits.
    Posit8_2,
    u8,
    8,
    2
);

pub type P8 = Posit8_2;

type Codec = PositCodec<8, 2>;

static DECODE_TABLE: LazyLock<[f32; 256]> =
    LazyLock::new(|| std::array::from_fn(|bits| decode(bits as u8)));

/// Real value of an 8-bit pattern, NaN for NaR. Every value is exact in `f32`.
pub fn decode(bits: u8) -> f32 {
    Codec::decode(bits as u64) as f32
}

/// Pattern of the posit nearest to `value`.
pub fn encode(value: f64) -> u8 {
    Codec::encode(value) as u8
}

pub fn is_nar(bits: u8) -> bool {
    bits == Posit8_2::NAR.to_bits()
}

/// Decoded value of every pattern, indexed by pattern. Built on first use.
pub fn decode_table() -> &'static [f32; 256] {
    &DECODE_TABLE
}
