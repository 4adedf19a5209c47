//! Affine int8 quantization: a float weight vector is mapped onto the
//! signed 8-bit range through a scale and a zero point, and back.

use log::debug;

use crate::error::{KernelError, Result};

/// Scale and zero point derived from a weight vector's value range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantParams {
    pub scale: f32,
    pub zero_point: i32,
}

impl QuantParams {
    /// Lowest representable code.
    pub const BIT_MIN: i32 = -128;
    /// Highest representable code.
    pub const BIT_MAX: i32 = 127;

    /// Derives parameters from the min/max of `weights`.
    ///
    /// `scale = (max - min) / 255`, `zero_point = round(-min / scale) - 128`.
    /// When every weight is equal the range collapses and the raw scale
    /// would be zero; the scale is clamped to `f32::EPSILON` so the codec
    /// stays total instead of dividing by zero. The zero point saturates at
    /// the `i32` bounds when the magnitude of the weights dwarfs the scale.
    ///
    /// # Errors
    /// Returns `KernelError::InvalidInput` for an empty weight vector, whose
    /// range is undefined.
    pub fn from_weights(weights: &[f32]) -> Result<Self> {
        if weights.is_empty() {
            return Err(KernelError::InvalidInput(
                "quantization range of an empty weight vector",
            ));
        }

        let min = weights.iter().copied().fold(f32::INFINITY, f32::min);
        let max = weights.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        let scale = ((max - min) / 255.0).max(f32::EPSILON);

        // Derived in f64 and saturated: values huge relative to the scale
        // (an epsilon-clamped flat vector, or a tiny range at a large
        // magnitude) push the raw zero point past the i32 range.
        let raw = (f64::from(-min) / f64::from(scale)).round() - 128.0;
        let zero_point = raw.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
        debug!("quantization params: scale={scale} zero_point={zero_point}");

        Ok(Self { scale, zero_point })
    }
}

/// Encodes `weights` into int8 codes plus the derived parameters.
///
/// Each code is `round(w / scale + zero_point)` clamped into
/// `[BIT_MIN, BIT_MAX]`, so codes stay in range for any finite input.
///
/// # Errors
/// Returns `KernelError::InvalidInput` for an empty weight vector.
pub fn quantize(weights: &[f32]) -> Result<(Vec<i8>, QuantParams)> {
    let params = QuantParams::from_weights(weights)?;

    let codes = weights
        .iter()
        .map(|&w| {
            let code = (w / params.scale + params.zero_point as f32).round() as i32;
            code.clamp(QuantParams::BIT_MIN, QuantParams::BIT_MAX) as i8
        })
        .collect();

    Ok((codes, params))
}

/// Decodes int8 codes back into floats: `(code - zero_point) * scale`.
pub fn dequantize(codes: &[i8], params: QuantParams) -> Vec<f32> {
    codes
        .iter()
        .map(|&code| (code as i32 - params.zero_point) as f32 * params.scale)
        .collect()
}

/// Encodes and decodes `weights`, reporting the absolute error per element.
///
/// The codec itself enforces no tolerance; interpreting the error is up to
/// the caller.
///
/// # Errors
/// Returns `KernelError::InvalidInput` for an empty weight vector.
pub fn round_trip_error(weights: &[f32]) -> Result<Vec<f32>> {
    let (codes, params) = quantize(weights)?;
    let recovered = dequantize(&codes, params);

    Ok(weights
        .iter()
        .zip(&recovered)
        .map(|(&original, &decoded)| (original - decoded).abs())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const WEIGHTS: [f32; 5] = [0.8567, -0.1234, 0.5566, -0.9981, 0.0023];

    #[test]
    fn params_follow_the_range_of_the_vector() {
        let params = QuantParams::from_weights(&WEIGHTS).unwrap();

        let expected_scale = (0.8567 - (-0.9981)) / 255.0;
        assert!((params.scale - expected_scale).abs() < 1e-7);
        assert_eq!(params.zero_point, 9);
    }

    #[test]
    fn codes_cover_the_range_extremes() {
        let (codes, _) = quantize(&WEIGHTS).unwrap();
        assert_eq!(codes, vec![127, -8, 86, -128, 9]);
    }

    #[test]
    fn round_trip_stays_within_one_quantization_step() {
        let params = QuantParams::from_weights(&WEIGHTS).unwrap();
        let errors = round_trip_error(&WEIGHTS).unwrap();

        assert_eq!(errors.len(), WEIGHTS.len());
        for error in errors {
            assert!(error < params.scale);
        }
    }

    #[test]
    fn codes_stay_in_range_for_random_vectors() {
        let mut rng = rand::rng();

        for _ in 0..50 {
            let weights: Vec<f32> = (0..16).map(|_| rng.random_range(-1e4..1e4)).collect();
            let (codes, _) = quantize(&weights).unwrap();
            for code in codes {
                let code = code as i32;
                assert!((QuantParams::BIT_MIN..=QuantParams::BIT_MAX).contains(&code));
            }
        }
    }

    #[test]
    fn degenerate_range_falls_back_to_an_epsilon_scale() {
        let flat = [0.5, 0.5, 0.5];
        let (codes, params) = quantize(&flat).unwrap();

        assert_eq!(params.scale, f32::EPSILON);
        // every weight collapses onto one code and decodes exactly
        assert!(codes.iter().all(|&c| c == codes[0]));
        for decoded in dequantize(&codes, params) {
            assert!((decoded - 0.5).abs() <= params.scale);
        }
    }

    #[test]
    fn huge_flat_weights_saturate_the_zero_point() {
        // flat vector at a large magnitude: the epsilon-clamped scale makes
        // the raw zero point about -8.4e15, far past the i32 range
        let (codes, params) = quantize(&[1.0e9, 1.0e9]).unwrap();

        assert_eq!(params.scale, f32::EPSILON);
        assert_eq!(params.zero_point, i32::MIN);
        for code in codes {
            let code = code as i32;
            assert!((QuantParams::BIT_MIN..=QuantParams::BIT_MAX).contains(&code));
        }
    }

    #[test]
    fn tiny_range_at_large_magnitude_saturates_the_zero_point() {
        // non-degenerate range (64 is one float step at 1e9), but the
        // magnitude dwarfs the scale of roughly 0.25
        let weights = [1.0e9, 1.0e9 + 64.0];
        let (codes, params) = quantize(&weights).unwrap();

        assert_eq!(params.zero_point, i32::MIN);
        for code in codes {
            let code = code as i32;
            assert!((QuantParams::BIT_MIN..=QuantParams::BIT_MAX).contains(&code));
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            QuantParams::from_weights(&[]),
            Err(KernelError::InvalidInput(_))
        ));
        assert!(quantize(&[]).is_err());
        assert!(round_trip_error(&[]).is_err());
    }
}
