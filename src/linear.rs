/// A single-parameter linear regression model, immutable after construction.
///
/// Holds trained parameters only; nothing in this crate mutates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    weight: f32,
    bias: f32,
    name: Option<&'static str>,
}

impl LinearModel {
    /// Returns a model with the given trained parameters.
    pub fn new(weight: f32, bias: f32) -> Self {
        Self {
            weight,
            bias,
            name: None,
        }
    }

    /// Same as [`LinearModel::new`], with a label carried into `Debug` output.
    pub fn named(weight: f32, bias: f32, name: &'static str) -> Self {
        Self {
            weight,
            bias,
            name: Some(name),
        }
    }

    /// Label attached at construction, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Computes `weight * x + bias`.
    pub fn predict(&self, x: f32) -> f32 {
        self.weight * x + self.bias
    }

    /// Squared error of the prediction for `x` against the observed value.
    pub fn squared_error(&self, x: f32, actual: f32) -> f32 {
        let error = self.predict(x) - actual;
        error * error
    }
}
