use crate::activations::tanh;

/// A vanilla recurrent cell folding scalar inputs into one hidden state.
///
/// Each step computes `tanh(input * w_input + prev_hidden * w_hidden)`.
/// The tanh keeps the carried state inside (-1, 1) so it cannot blow up over
/// long sequences. Processing the same inputs in a different order yields a
/// different final state; the recurrence is order-sensitive by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RnnCell {
    w_input: f32,
    w_hidden: f32,
}

impl Default for RnnCell {
    /// The fixed illustrative weights: 0.5 on the input, 0.8 on the carry.
    fn default() -> Self {
        Self {
            w_input: 0.5,
            w_hidden: 0.8,
        }
    }
}

impl RnnCell {
    pub fn new(w_input: f32, w_hidden: f32) -> Self {
        Self { w_input, w_hidden }
    }

    /// Produces the next hidden state from the current input and the
    /// previous hidden state. Pure; the caller owns and threads the state.
    pub fn step(&self, input: f32, prev_hidden: f32) -> f32 {
        tanh(input * self.w_input + prev_hidden * self.w_hidden)
    }

    /// Folds an ordered sequence from an initial hidden state of zero and
    /// returns the final hidden state.
    pub fn run(&self, inputs: &[f32]) -> f32 {
        inputs
            .iter()
            .fold(0.0, |hidden, &input| self.step(input, hidden))
    }
}
