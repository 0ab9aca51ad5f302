use std::cmp::Ordering;

use crate::number_representations::posit::core::{DecodedFields, Decomposed, Posit};

/// Conversions between `N`-bit posit patterns with `ES` exponent bits and binary64.
///
/// Patterns are carried right-aligned in a `u64`; only the low `N` bits are meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositCodec<const N: usize, const ES: usize>;

impl<const N: usize, const ES: usize> Posit<N, ES> for PositCodec<N, ES> {}

impl<const N: usize, const ES: usize> PositCodec<N, ES> {
    // Keeps every magnitude a normal binary64 and the scratch layout inside 64 bits.
    const VALID: () = assert!(
        N >= 3 && N <= 32 && ES <= 4 && (1 << ES) * (N - 2) <= 1022,
        "unsupported posit format"
    );

    /// Reads bit `index` of `pattern`.
    ///
    /// # Panics
    ///
    /// If `index` is not a bit of an `N`-bit pattern.
    pub fn bit(pattern: u64, index: usize) -> u64 {
        assert!(
            index < N,
            "bit index {} out of range for a {}-bit posit",
            index,
            N
        );
        (pattern >> index) & 1
    }

    /// Splits a pattern into sign, regime, exponent and fraction.
    ///
    /// The pattern is walked from bit `N - 2` downwards; positions past bit 0 read as zero.
    pub fn fields(pattern: u64) -> DecodedFields {
        let read = |cursor: isize| {
            if cursor >= 0 {
                Self::bit(pattern, cursor as usize)
            } else {
                0
            }
        };

        let sign = Self::bit(pattern, N - 1) as i32;

        let mut cursor = N as isize - 2;
        let regime_bit = Self::bit(pattern, N - 2);
        let mut run = 0;
        while cursor >= 0 && Self::bit(pattern, cursor as usize) == regime_bit {
            run += 1;
            cursor -= 1;
        }
        let regime = if regime_bit == 0 { -run } else { run - 1 };
        // step over the terminating bit
        cursor -= 1;

        let mut exponent = 0;
        for _ in 0..ES {
            exponent = 2 * exponent + read(cursor);
            cursor -= 1;
        }

        let mut fraction = 0;
        for _ in 0..Self::FRACTION_BITS {
            fraction = 2 * fraction + read(cursor);
            cursor -= 1;
        }

        DecodedFields {
            sign,
            regime,
            exponent,
            fraction,
        }
    }

    /// Decodes a pattern to its real value. NaR decodes to `f64::NAN`.
    ///
    /// Negative patterns are not negated first: with the raw fields,
    /// `value = (1 - 3s + f) * 2^((1 - 2s) * (2^ES * r + e + s))`.
    pub fn decode(pattern: u64) -> f64 {
        let () = Self::VALID;
        debug_assert!(pattern <= Self::MASK, "pattern {:#x} wider than {} bits", pattern, N);

        if pattern == 0 {
            return 0.0;
        }
        if pattern == Self::NAR {
            return f64::NAN;
        }

        let DecodedFields {
            sign,
            regime,
            exponent,
            fraction,
        } = Self::fields(pattern);

        let fraction = fraction as f64 / (1u64 << Self::FRACTION_BITS) as f64;
        let significand = 1.0 - 3.0 * sign as f64 + fraction;
        let scale = (1 - 2 * sign) * ((1i32 << ES) * regime + exponent as i32 + sign);
        significand * 2.0f64.powi(scale)
    }

    /// Decodes by taking the two's complement of negative patterns before reading the fields.
    ///
    /// Always agrees with [`Self::decode`].
    pub fn decode_by_negation(pattern: u64) -> f64 {
        let () = Self::VALID;

        if pattern == 0 {
            return 0.0;
        }
        if pattern == Self::NAR {
            return f64::NAN;
        }

        let negative = Self::bit(pattern, N - 1) == 1;
        let magnitude = if negative {
            pattern.wrapping_neg() & Self::MASK
        } else {
            pattern
        };

        let fields = Self::fields(magnitude);
        let fraction = fields.fraction as f64 / (1u64 << Self::FRACTION_BITS) as f64;
        let scale = (1i32 << ES) * fields.regime + fields.exponent as i32;
        let value = (1.0 + fraction) * 2.0f64.powi(scale);

        if negative { -value } else { value }
    }

    /// Handles the inputs that never reach the bit-level encoder: zero, non-finite values and
    /// magnitudes outside `[minpos, maxpos)`, which saturate.
    pub fn saturate(value: f64) -> Option<u64> {
        if value == 0.0 {
            return Some(0);
        }
        if !value.is_finite() {
            return Some(Self::NAR);
        }

        let epsilon = 2.0f64.powi(-Self::MAX_EXPONENT);
        let max = 1.0 / epsilon;
        let magnitude = value.abs();
        let negative = value < 0.0;

        if magnitude >= max {
            Some(Self::apply_sign(Self::MAX_POS, negative))
        } else if magnitude < epsilon {
            Some(Self::apply_sign(Self::MIN_POS, negative))
        } else {
            None
        }
    }

    /// Lays out the regime seed, the low `ES` exponent bits and the 52 fraction bits in a 64-bit
    /// scratch word, then shifts it so the regime run encodes `k = exponent >> ES`.
    ///
    /// Returns the scratch body with bit 63 cleared, and `k`.
    pub fn position(parts: Decomposed) -> (u64, i32) {
        let exponent = parts.exponent;
        let k = exponent >> ES;

        let seed: u64 = if exponent < 0 { 1 << 62 } else { 1 << 63 };
        let exponent_bits = (exponent & ((1 << ES) - 1)) as u64;
        let scratch = seed | (exponent_bits << (62 - ES)) | (parts.fraction << (10 - ES));

        // Sign extension grows the run of ones for k >= 0; zeros come in for k < 0.
        let shift = ((k + 1).unsigned_abs() + u32::from(exponent < 0)).min(63);
        let shifted = ((scratch as i64) >> shift) as u64;

        (shifted & !(1 << 63), k)
    }

    /// Rounds a scratch body to its top `N` bits.
    ///
    /// Nearest wins; a discarded part of exactly half an ulp rounds up whatever the kept
    /// low bit is.
    pub fn round(body: u64) -> u64 {
        let discarded = 64 - N;
        let kept = body >> discarded;
        let rest = body & ((1 << discarded) - 1);
        let half = 1 << (discarded - 1);

        match rest.cmp(&half) {
            Ordering::Less => kept,
            Ordering::Equal | Ordering::Greater => kept + 1,
        }
    }

    /// Steps a rounded pattern back by the sign of `k` once the regime run no longer fits in `N`
    /// bits but is still within binary64 range.
    pub fn correct_boundary(pattern: u64, k: i32) -> u64 {
        if (N as i32) <= k.abs() && k.abs() < Self::KMAX {
            pattern.wrapping_add_signed(-i64::from(k.signum()))
        } else {
            pattern
        }
    }

    /// Two's complement negation within `N` bits.
    pub fn apply_sign(pattern: u64, negative: bool) -> u64 {
        if negative {
            (!pattern).wrapping_add(1) & Self::MASK
        } else {
            pattern
        }
    }

    /// Encodes `value` as the nearest posit pattern.
    pub fn encode(value: f64) -> u64 {
        let () = Self::VALID;

        if let Some(pattern) = Self::saturate(value) {
            return pattern;
        }

        let parts = Decomposed::new(value);
        let (body, k) = Self::position(parts);
        let pattern = Self::correct_boundary(Self::round(body), k);
        Self::apply_sign(pattern, parts.negative)
    }
}
