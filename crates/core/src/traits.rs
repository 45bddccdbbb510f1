//! Container contract
//!
//! This module defines the `CompactList` trait, the capability set every
//! storage strategy implements. Upper layers (factory, callers) work
//! against this trait and never name a concrete strategy.

use crate::error::Result;
use crate::kind::ElementKind;
use crate::value::Value;
use std::fmt;

/// Capability set every storage strategy implements
///
/// Containers are single-writer: mutation goes through `&mut self` and
/// instances carry no internal locking. A boxed container is `Send`, so it
/// can be moved to another thread, but never shared between threads while
/// being mutated.
pub trait CompactList: fmt::Debug + Send {
    /// The element kind this container was created for
    fn kind(&self) -> ElementKind;

    /// Current logical length
    fn len(&self) -> usize;

    /// Whether the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total slots currently allocated, including unspecified filler
    fn capacity(&self) -> usize;

    /// Append `value` at the end, growing the backing storage first if full
    ///
    /// Previously stored elements are never lost by growth.
    ///
    /// # Errors
    ///
    /// - `CapacityExhausted` if the backing storage already has
    ///   [`MAX_CAPACITY`](crate::limits::MAX_CAPACITY) slots
    /// - `KindMismatch` if a packed strategy cannot bridge `value` to its
    ///   primitive kind
    fn push(&mut self, value: Value) -> Result<()>;

    /// Read the element at `index`
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= self.len()`. The bound is the
    /// current length, not the allocated capacity.
    fn get(&self, index: usize) -> Result<Value>;
}
