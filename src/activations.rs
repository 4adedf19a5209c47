//! Scalar activation functions shared by every kernel in the crate.

/// Rectified linear unit: negative signals are clipped to zero.
pub fn relu(x: f32) -> f32 {
    x.max(0.0)
}

/// Derivative of [`relu`], used to gate gradients during descent.
///
/// Zero at and below the origin, so a dead unit passes no gradient back.
pub fn relu_prime(x: f32) -> f32 {
    match x > 0.0 {
        true => 1.0,
        false => 0.0,
    }
}

/// Logistic sigmoid, strictly inside (0, 1) for finite input.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Hyperbolic tangent, strictly inside (-1, 1) for finite input.
pub fn tanh(x: f32) -> f32 {
    x.tanh()
}
