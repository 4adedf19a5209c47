//! Valid 2D convolution: a kernel slides over an image with no padding and
//! stride 1, producing one product-sum per position.

use ndarray::{s, Array2, ArrayView2};

use crate::error::{KernelError, Result};

/// Slides `kernel` over `image` and returns the feature map.
///
/// The output has shape `(H - Fh + 1, W - Fw + 1)`; each cell is the
/// elementwise product of the kernel with the image window at that position,
/// summed.
///
/// # Errors
/// Returns `KernelError::ShapeMismatch` when either kernel side exceeds the
/// corresponding image side — there would be no valid output position, and
/// the check happens before any indexing.
pub fn convolve(image: ArrayView2<f32>, kernel: ArrayView2<f32>) -> Result<Array2<f32>> {
    let (rows, cols) = image.dim();
    let (k_rows, k_cols) = kernel.dim();

    if k_rows > rows {
        return Err(KernelError::ShapeMismatch {
            what: "kernel rows",
            got: k_rows,
            expected: rows,
        });
    }
    if k_cols > cols {
        return Err(KernelError::ShapeMismatch {
            what: "kernel columns",
            got: k_cols,
            expected: cols,
        });
    }

    let mut feature_map = Array2::zeros((rows - k_rows + 1, cols - k_cols + 1));
    for ((i, j), cell) in feature_map.indexed_iter_mut() {
        let window = image.slice(s![i..i + k_rows, j..j + k_cols]);
        *cell = window
            .iter()
            .zip(kernel.iter())
            .map(|(&pixel, &tap)| pixel * tap)
            .sum();
    }

    Ok(feature_map)
}

/// Fixed-size variant: an unrolled 2x2 kernel over a 3x3 image.
///
/// Same contract as [`convolve`] restricted to the one shape, with the four
/// taps applied explicitly per output cell.
///
/// # Errors
/// Returns `KernelError::ShapeMismatch` when the image is not 3x3 or the
/// kernel is not 2x2.
pub fn convolve_2x2(image: ArrayView2<f32>, kernel: ArrayView2<f32>) -> Result<Array2<f32>> {
    if image.nrows() != 3 {
        return Err(KernelError::ShapeMismatch {
            what: "image rows",
            got: image.nrows(),
            expected: 3,
        });
    }
    if image.ncols() != 3 {
        return Err(KernelError::ShapeMismatch {
            what: "image columns",
            got: image.ncols(),
            expected: 3,
        });
    }
    if kernel.nrows() != 2 {
        return Err(KernelError::ShapeMismatch {
            what: "kernel rows",
            got: kernel.nrows(),
            expected: 2,
        });
    }
    if kernel.ncols() != 2 {
        return Err(KernelError::ShapeMismatch {
            what: "kernel columns",
            got: kernel.ncols(),
            expected: 2,
        });
    }

    let mut feature_map = Array2::zeros((2, 2));
    for y in 0..2 {
        for x in 0..2 {
            feature_map[[y, x]] = image[[y, x]] * kernel[[0, 0]]
                + image[[y, x + 1]] * kernel[[0, 1]]
                + image[[y + 1, x]] * kernel[[1, 0]]
                + image[[y + 1, x + 1]] * kernel[[1, 1]];
        }
    }

    Ok(feature_map)
}
