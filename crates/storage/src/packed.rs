//! Packed integer storage strategy
//!
//! The specialized implementation of the container contract: elements live
//! in a contiguous `i64` buffer with no per-element indirection. Boxed
//! values bridge to raw words at the contract boundary; the inherent
//! `push_int`/`get_int` methods skip the boxing entirely.
//!
//! Instances are only handed out through the synthesizer's
//! [`SpecializedHandle`](crate::synth::SpecializedHandle); the factory never
//! names this type directly.

use compactlist_core::{limits, CompactList, ElementKind, Error, Result, Value};
use tracing::trace;

/// Packed, unboxed storage for `Int` elements
///
/// Words below the logical length hold stored elements; words between the
/// length and the capacity are zero filler.
#[derive(Debug)]
pub struct PackedIntList {
    buf: Box<[i64]>,
    len: usize,
}

impl PackedIntList {
    /// Create a packed list with room for `initial_capacity` elements
    ///
    /// # Errors
    ///
    /// `InvalidCapacity` when `initial_capacity` is zero.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        if initial_capacity < 1 {
            return Err(Error::InvalidCapacity(initial_capacity));
        }
        Ok(PackedIntList {
            buf: vec![0i64; initial_capacity].into_boxed_slice(),
            len: 0,
        })
    }

    /// Append a raw integer without boxing
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` if the buffer is already at the ceiling.
    pub fn push_int(&mut self, value: i64) -> Result<()> {
        if self.len == self.buf.len() {
            self.grow()?;
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Read a raw integer without boxing
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= self.len()`.
    pub fn get_int(&self, index: usize) -> Result<i64> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.buf[index])
    }

    /// Swap in a buffer of the next capacity, copying the first `len` words
    fn grow(&mut self) -> Result<()> {
        let next = limits::next_capacity(self.buf.len())?;
        trace!(from = self.buf.len(), to = next, "growing packed int buffer");
        let mut buf = vec![0i64; next].into_boxed_slice();
        buf[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = buf;
        Ok(())
    }
}

impl CompactList for PackedIntList {
    fn kind(&self) -> ElementKind {
        ElementKind::Int
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bridge the boxed value to a raw word and append it
    fn push(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Int(n) => self.push_int(n),
            other => Err(Error::KindMismatch {
                expected: ElementKind::Int,
                actual: other.kind(),
            }),
        }
    }

    /// Read the raw word and re-box it for the contract boundary
    fn get(&self, index: usize) -> Result<Value> {
        self.get_int(index).map(Value::Int)
    }
}
