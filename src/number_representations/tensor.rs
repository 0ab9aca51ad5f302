//! Element-wise conversion of whole arrays, e.g. quantizing a weight matrix to posits.

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::number_representations::core::PositScalar;

pub fn encode_array<P, S, D>(values: &ArrayBase<S, D>) -> Array<P, D>
where
    P: PositScalar,
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.mapv(<P as From<f64>>::from)
}

pub fn decode_array<P, S, D>(posits: &ArrayBase<S, D>) -> Array<f64, D>
where
    P: PositScalar,
    S: Data<Elem = P>,
    D: Dimension,
{
    posits.mapv(Into::<f64>::into)
}

/// Rounds every value to the nearest posit of format `P` and back.
pub fn quantize_array<P, S, D>(values: &ArrayBase<S, D>) -> Array<f64, D>
where
    P: PositScalar,
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.mapv(|value| Into::<f64>::into(<P as From<f64>>::from(value)))
}
