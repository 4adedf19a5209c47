//! Sequence kernels that carry state from one step to the next.
//!
//! State is always an explicit value owned by the caller and threaded
//! through `step`, never an ambient variable shared between call sites.

mod lstm;
mod rnn;

pub use lstm::{Gates, LstmCell, LstmState};
pub use rnn::RnnCell;
