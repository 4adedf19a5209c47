//! Micro deep-learning inference kernels.
//!
//! Each kernel is a small, synchronous, pure computation: a linear
//! predictor, a dense forward pass, a valid 2D convolution, a scalar
//! gradient-descent loop, recurrent and gated memory cells, and an int8
//! quantization codec. They share only the activation functions and the
//! error type; composing them is up to the caller.

pub mod activations;
pub mod layers;
pub mod optimization;
pub mod recurrent;

mod conv;
mod error;
mod linear;
mod quant;

pub use conv::{convolve, convolve_2x2};
pub use error::{KernelError, Result};
pub use linear::LinearModel;
pub use quant::{dequantize, quantize, round_trip_error, QuantParams};
