pub trait Posit<const N: usize, const ES: usize> {
    const N: usize = N;
    const ES: usize = ES;
    const USEED: usize = 1 << (1 << ES);

    /// Largest power of two reachable: maxpos = 2^MAX_EXPONENT, minpos = 2^-MAX_EXPONENT.
    const MAX_EXPONENT: i32 = ((1 << ES) * (N - 2)) as i32;
    /// Largest regime index a binary64 exponent can produce.
    const KMAX: i32 = (1023 >> ES) + 1;
    const FRACTION_BITS: usize = N.saturating_sub(3 + ES);

    const MASK: u64 = u64::MAX >> (64 - N);
    const NAR: u64 = 1 << (N - 1);
    const MAX_POS: u64 = (1 << (N - 1)) - 1;
    const MIN_POS: u64 = 1;
}

/// The raw fields of a posit pattern, read without negating the pattern first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedFields {
    pub sign: i32,
    pub regime: i32,
    pub exponent: u64,
    // Zero-extended to FRACTION_BITS bits
    pub fraction: u64,
}

/// A finite, normal binary64 split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed {
    pub negative: bool,
    pub exponent: i32,
    pub fraction: u64,
}

impl Decomposed {
    pub fn new(value: f64) -> Self {
        let bits = value.to_bits();
        Decomposed {
            negative: bits >> 63 == 1,
            exponent: ((bits >> 52) & 0x7FF) as i32 - 1023,
            fraction: bits & ((1 << 52) - 1),
        }
    }
}
