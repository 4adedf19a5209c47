use log::debug;

use crate::activations::{relu, relu_prime};

/// Gradient descent over a single scalar weight with a ReLU forward pass.
///
/// This is the one-parameter, one-sample case of batch gradient descent,
/// kept deliberately scalar. The gradient is gated by the ReLU derivative:
/// whenever the pre-update prediction is <= 0 the gradient is zero and the
/// weight never moves again. That dead-unit stall is part of the contract,
/// not a bug to fix here.
pub struct GradientDescent {
    learning_rate: f32,
}

/// Values produced by a single descent step.
///
/// `prediction`, `error` and `gradient` are computed from the weight the
/// step started with; `weight` is the updated value fed into the next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStats {
    pub weight: f32,
    pub prediction: f32,
    pub error: f32,
    pub gradient: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The length of the step taken against the gradient.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    /// Runs one forward/backward/update cycle.
    ///
    /// 1. `prediction = relu(input * weight)`
    /// 2. `error = prediction - target`
    /// 3. `gradient = error * input * relu_prime(prediction)`
    /// 4. `weight = weight - learning_rate * gradient`
    pub fn step(&self, weight: f32, input: f32, target: f32) -> StepStats {
        let prediction = relu(input * weight);
        let error = prediction - target;
        let gradient = error * input * relu_prime(prediction);
        let weight = weight - self.learning_rate * gradient;

        StepStats {
            weight,
            prediction,
            error,
            gradient,
        }
    }

    /// Iterates [`GradientDescent::step`] for a fixed epoch count, feeding
    /// each step's weight into the next, and returns the per-epoch trace.
    ///
    /// There is no convergence check and no early stop.
    pub fn train(&self, mut weight: f32, input: f32, target: f32, epochs: usize) -> Vec<StepStats> {
        let mut trace = Vec::with_capacity(epochs);

        for epoch in 1..=epochs {
            let stats = self.step(weight, input, target);
            debug!(
                "epoch={epoch} prediction={} error={} weight={}",
                stats.prediction, stats.error, stats.weight
            );
            weight = stats.weight;
            trace.push(stats);
        }

        trace
    }
}
