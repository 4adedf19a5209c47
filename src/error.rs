use std::fmt;

/// The result type used by every fallible kernel in this crate.
pub type Result<T> = std::result::Result<T, KernelError>;

/// Errors produced by kernels when inputs violate their invariants.
///
/// Kernels fail fast with a typed error instead of letting an out-of-range
/// index panic or producing a nonsensical result. Plain floating-point
/// overflow is *not* covered: values are allowed to reach infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A dimension of an input does not match what the kernel requires.
    ShapeMismatch {
        /// Which input carried the offending dimension (e.g. "inputs", "kernel rows").
        what: &'static str,
        /// The dimension that was provided.
        got: usize,
        /// The dimension the kernel expected.
        expected: usize,
    },

    /// An input is invalid for domain reasons rather than shape reasons.
    InvalidInput(&'static str),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "{what} has dimension {got}, the kernel expects {expected}")
            }
            KernelError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for KernelError {}
