posit_type!(
    /// 16-bit posit with 1 exponent bit.
    Posit16_1,
    u16,
    16,
    1
);
