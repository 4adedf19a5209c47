use ndarray::{Array1, Array2, ArrayView1};

use crate::activations::relu;
use crate::error::{KernelError, Result};

/// A fully connected layer with a ReLU on every output node.
///
/// Weights are laid out `[input][node]`, so `weights[[i, j]]` is the
/// contribution of input `i` to output node `j`.
pub struct Dense {
    weights: Array2<f32>,
    biases: Array1<f32>,
}

impl Dense {
    /// Builds a layer from its weight matrix and bias vector.
    ///
    /// # Errors
    /// Returns `KernelError::ShapeMismatch` when the bias vector does not
    /// have one entry per weight column, so an invalid layer cannot exist.
    pub fn new(weights: Array2<f32>, biases: Array1<f32>) -> Result<Self> {
        if biases.len() != weights.ncols() {
            return Err(KernelError::ShapeMismatch {
                what: "biases",
                got: biases.len(),
                expected: weights.ncols(),
            });
        }

        Ok(Self { weights, biases })
    }

    /// Number of inputs this layer consumes.
    pub fn in_dim(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of nodes this layer produces.
    pub fn out_dim(&self) -> usize {
        self.weights.ncols()
    }

    /// Forward pass: `relu(inputs · weights + biases)` per output node.
    ///
    /// The output always has `out_dim()` entries and every entry is >= 0.
    ///
    /// # Errors
    /// Returns `KernelError::ShapeMismatch` when `inputs` does not have one
    /// entry per weight row.
    pub fn forward(&self, inputs: ArrayView1<f32>) -> Result<Array1<f32>> {
        if inputs.len() != self.weights.nrows() {
            return Err(KernelError::ShapeMismatch {
                what: "inputs",
                got: inputs.len(),
                expected: self.weights.nrows(),
            });
        }

        let weighted = inputs.dot(&self.weights) + &self.biases;
        Ok(weighted.mapv(relu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    const EPS: f32 = 1e-6;

    fn two_by_three() -> Dense {
        Dense::new(
            arr2(&[[0.5, 0.8, -0.2], [0.1, -0.4, 0.6]]),
            arr1(&[0.1, 0.2, -0.1]),
        )
        .unwrap()
    }

    #[test]
    fn forward_computes_weighted_sums_through_relu() {
        let layer = two_by_three();
        let out = layer.forward(arr1(&[1.0, 0.5]).view()).unwrap();

        assert_eq!(out.len(), 3);
        assert!((out[0] - 0.65).abs() < EPS);
        assert!((out[1] - 0.8).abs() < EPS);
        // node 2 sums to exactly zero before the ReLU
        assert!(out[2].abs() < EPS);
    }

    #[test]
    fn forward_output_has_relu_floor() {
        let layer = Dense::new(
            arr2(&[[-1.0, -2.0], [-3.0, -4.0]]),
            arr1(&[0.0, -1.0]),
        )
        .unwrap();

        let out = layer.forward(arr1(&[1.0, 1.0]).view()).unwrap();
        assert!(out.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn forward_rejects_wrong_input_length() {
        let layer = two_by_three();
        let err = layer.forward(arr1(&[1.0, 0.5, 0.25]).view()).unwrap_err();

        assert_eq!(
            err,
            KernelError::ShapeMismatch {
                what: "inputs",
                got: 3,
                expected: 2,
            }
        );
    }

    #[test]
    fn new_rejects_bias_weight_mismatch() {
        let result = Dense::new(arr2(&[[0.5, 0.8], [0.1, -0.4]]), arr1(&[0.1]));
        assert!(matches!(
            result,
            Err(KernelError::ShapeMismatch { what: "biases", .. })
        ));
    }
}
