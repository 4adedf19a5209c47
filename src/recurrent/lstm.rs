use crate::activations::{sigmoid, tanh};

/// The carried memory of an [`LstmCell`]: the long-term cell state and the
/// short-term hidden state. Both start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LstmState {
    pub cell: f32,
    pub hidden: f32,
}

/// The three sigmoid gate values for one input, each strictly inside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gates {
    pub forget: f32,
    pub input: f32,
    pub output: f32,
}

/// A gated memory cell with fixed, unlearned coefficients.
///
/// Per input the cell decides how much of the old memory to keep (forget
/// gate), how much of a tanh candidate to write (input gate), and how much
/// of the updated memory to expose as hidden state (output gate). This is an
/// illustrative fixed-weight cell, not a trainable LSTM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LstmCell {
    w_forget: f32,
    w_input: f32,
    w_output: f32,
    w_candidate: f32,
}

impl Default for LstmCell {
    /// The fixed gate coefficients: forget 0.1, input 0.5, output 0.2, and
    /// 0.8 on the tanh candidate.
    fn default() -> Self {
        Self {
            w_forget: 0.1,
            w_input: 0.5,
            w_output: 0.2,
            w_candidate: 0.8,
        }
    }
}

impl LstmCell {
    /// Evaluates the three gates for one input.
    pub fn gates(&self, input: f32) -> Gates {
        Gates {
            forget: sigmoid(input * self.w_forget),
            input: sigmoid(input * self.w_input),
            output: sigmoid(input * self.w_output),
        }
    }

    /// Advances the memory by one input, returning the updated state.
    ///
    /// The previous state is consumed by value; the caller threads the
    /// returned state into the next call.
    pub fn step(&self, input: f32, state: LstmState) -> LstmState {
        let gates = self.gates(input);

        let carried = state.cell * gates.forget;
        let candidate = tanh(input * self.w_candidate);
        let cell = carried + gates.input * candidate;
        let hidden = gates.output * tanh(cell);

        LstmState { cell, hidden }
    }

    /// Runs an ordered sequence from the zero state and returns the final
    /// state.
    pub fn run(&self, inputs: &[f32]) -> LstmState {
        inputs
            .iter()
            .fold(LstmState::default(), |state, &input| self.step(input, state))
    }
}
