//! Capacity ceiling and the shared growth policy
//!
//! Both storage strategies grow by the same rule, so it lives here once:
//! doubling with saturation at [`MAX_CAPACITY`], never wrapping. Doubling
//! gives amortized constant-time appends; saturation gives a hard ceiling.

use crate::error::{Error, Result};

/// Maximum representable backing-array capacity
///
/// Rust allocations are bounded by `isize::MAX` bytes, so an index/length
/// counter never meaningfully exceeds this. Growth saturates here.
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// Compute the capacity to grow to when a container is full
///
/// The new capacity is `min(current * 2, MAX_CAPACITY)`, with a saturating
/// multiplication so a near-ceiling capacity clamps to the ceiling instead
/// of wrapping.
///
/// # Errors
///
/// Returns `CapacityExhausted` when `current` is already at the ceiling:
/// a larger backing array cannot be constructed.
pub fn next_capacity(current: usize) -> Result<usize> {
    if current >= MAX_CAPACITY {
        return Err(Error::CapacityExhausted { max: MAX_CAPACITY });
    }
    Ok(current.saturating_mul(2).min(MAX_CAPACITY))
}
