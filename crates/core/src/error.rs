//! Error types for CompactList
//!
//! This module defines all failure conditions in the container core.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every condition is raised synchronously to the immediate caller; nothing
//! is swallowed or logged-and-continued inside the core.

use crate::kind::ElementKind;
use thiserror::Error;

/// Result type alias for container operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the container core
#[derive(Debug, Error)]
pub enum Error {
    /// Construction requested with a zero initial capacity
    #[error("Invalid capacity: {0} (initial capacity must be at least 1)")]
    InvalidCapacity(usize),

    /// Read past the current logical length
    ///
    /// The bound is the length, not the allocated capacity: slots between
    /// the length and the capacity are unspecified filler.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Logical length at the time of the read
        len: usize,
    },

    /// Growth requested while already at the representable-size ceiling
    ///
    /// Fatal for the container: a backing array of the target size cannot
    /// be constructed.
    #[error("Capacity exhausted: cannot grow past {max} slots")]
    CapacityExhausted {
        /// The ceiling that was hit
        max: usize,
    },

    /// A boxed value could not bridge to a packed primitive slot
    ///
    /// Raised by the specialized strategy when a value of the wrong kind
    /// reaches its contract boundary.
    #[error("Kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// Kind the container was created for
        expected: ElementKind,
        /// Kind of the value that was pushed
        actual: ElementKind,
    },

    /// The code-synthesis collaborator could not realize the specialized
    /// implementation
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Failure reported by the code-synthesis collaborator
///
/// Kept separate from [`Error`] and kept `Clone` so the synthesizer can
/// publish the outcome of the single synthesis attempt once and re-yield it
/// to every concurrent and future caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Code synthesis failed: {reason}")]
pub struct SynthesisError {
    /// What the collaborator rejected about the structural description
    pub reason: String,
}

impl SynthesisError {
    /// Create a synthesis error from a reason string
    pub fn new(reason: impl Into<String>) -> Self {
        SynthesisError {
            reason: reason.into(),
        }
    }
}
