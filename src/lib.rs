//! Conversions between posit bit patterns and binary floating point.
//!
//! The codec is parametric in the total width `N` and exponent width `ES`
//! ([`PositCodec`]); [`Posit8_2`] is the 8-bit, `ES = 2` instantiation.
//!
//! ```
//! use posit_codec::{P8, number_representations::posit::posit8_2};
//!
//! assert_eq!(P8::from(1.0f64), P8::ONE);
//! assert_eq!(posit8_2::decode(0b0100_1000), 2.0);
//! assert_eq!(posit8_2::encode(1.0e9), 0b0111_1111);
//! ```

pub mod number_representations;

pub use number_representations::{
    core::PositScalar,
    errors::PatternError,
    posit::{
        codec::PositCodec,
        core::Posit,
        posit8_2::{P8, Posit8_2},
        posit16_1::Posit16_1,
        posit32_2::Posit32_2,
    },
};
