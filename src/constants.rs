//! Crate-wide numeric constants.

/// Tolerance used when checking that a probability distribution sums to one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// The pseudo-count added to every tally before normalization
/// (add-one/Laplace smoothing).
pub const LAPLACE_PSEUDO_COUNT: f64 = 1f64;

/// Initial capacity for record buffers while reading a file.
pub const BUFFER_SIZE: usize = 256;
