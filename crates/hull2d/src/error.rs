//! Error taxonomy for hull construction.
//!
//! Validation failures (`InsufficientPoints`, `DegenerateCollinear`) are
//! detected before any hull work starts. `NoBridgeFound` is a failure of a
//! running Kirkpatrick–Seidel computation on degenerate geometry. Selection
//! errors escaping into `HullError` indicate a defect in a calling
//! component, not a recoverable condition; nothing here is retried.

/// Failure of a hull computation.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than 3 distinct points were supplied.
    #[error("fewer than 3 distinct points were given to the hull algorithm")]
    InsufficientPoints,
    /// All input points lie on one line; no 2-D hull exists.
    #[error("all input points are collinear; no 2-D hull exists")]
    DegenerateCollinear,
    /// The bridge search ran out of usable slopes (every candidate pair
    /// shares an x-coordinate).
    #[error("bridge search found no usable slopes across the split line")]
    NoBridgeFound,
    /// An internal order-statistic query was malformed.
    #[error("internal selection failure: {0}")]
    Selection(#[from] SelectError),
}

/// Contract violation of [`crate::select::quickselect`].
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// Selection was requested on an empty buffer.
    #[error("quickselect called on an empty buffer")]
    EmptyInput,
    /// The requested rank does not exist in the buffer.
    #[error("rank {rank} out of range for buffer of length {len}")]
    IndexOutOfRange { rank: usize, len: usize },
}
