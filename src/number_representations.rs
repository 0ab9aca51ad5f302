pub mod core;
pub mod errors;
pub mod posit;
pub mod tensor;
