//! Generic boxed storage strategy
//!
//! Stores elements of any kind behind a uniform slot array of
//! `Option<Value>`. Every kind works here; the cost relative to the packed
//! strategy is one boxed value per slot.

use compactlist_core::{limits, CompactList, ElementKind, Error, Result, Value};
use tracing::trace;

/// Boxed/indirect storage usable for any element kind
///
/// Slots below the logical length always hold `Some(value)`; slots between
/// the length and the capacity are `None` filler.
#[derive(Debug)]
pub struct GenericList {
    kind: ElementKind,
    slots: Box<[Option<Value>]>,
    len: usize,
}

impl GenericList {
    /// Create a list for `kind` with room for `initial_capacity` elements
    ///
    /// # Errors
    ///
    /// `InvalidCapacity` when `initial_capacity` is zero.
    pub fn with_capacity(kind: ElementKind, initial_capacity: usize) -> Result<Self> {
        if initial_capacity < 1 {
            return Err(Error::InvalidCapacity(initial_capacity));
        }
        Ok(GenericList {
            kind,
            slots: vec![None; initial_capacity].into_boxed_slice(),
            len: 0,
        })
    }

    /// Swap in a slot array of the next capacity, moving the first `len`
    /// elements across and leaving the rest `None`
    fn grow(&mut self) -> Result<()> {
        let next = limits::next_capacity(self.slots.len())?;
        trace!(from = self.slots.len(), to = next, "growing generic slot array");
        let mut slots = vec![None; next].into_boxed_slice();
        for (dst, src) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
        Ok(())
    }
}

impl CompactList for GenericList {
    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn push(&mut self, value: Value) -> Result<()> {
        if self.len == self.slots.len() {
            self.grow()?;
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<Value> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.slots[index]
            .clone()
            .expect("slot below logical length is occupied"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        let err = GenericList::with_capacity(ElementKind::String, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_push_get_round_trip() {
        let mut list = GenericList::with_capacity(ElementKind::String, 2).unwrap();
        list.push(Value::from("a")).unwrap();
        list.push(Value::from("b")).unwrap();
        list.push(Value::from("c")).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0).unwrap(), Value::from("a"));
        assert_eq!(list.get(1).unwrap(), Value::from("b"));
        assert_eq!(list.get(2).unwrap(), Value::from("c"));
    }

    #[test]
    fn test_get_bound_is_length_not_capacity() {
        let mut list = GenericList::with_capacity(ElementKind::Int, 16).unwrap();
        let err = list.get(0).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 0, len: 0 }));

        list.push(Value::Int(1)).unwrap();
        assert!(list.get(0).is_ok());
        // Capacity is 16, but index 1 is past the length
        let err = list.get(1).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_accepts_any_value_kind() {
        // Boxed storage is kind-agnostic; the declared kind is advisory
        let mut list = GenericList::with_capacity(ElementKind::Bool, 1).unwrap();
        list.push(Value::Bool(true)).unwrap();
        list.push(Value::from("mixed")).unwrap();
        assert_eq!(list.get(1).unwrap(), Value::from("mixed"));
        assert_eq!(list.kind(), ElementKind::Bool);
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let mut list = GenericList::with_capacity(ElementKind::Int, 1).unwrap();
        assert_eq!(list.capacity(), 1);
        list.push(Value::Int(0)).unwrap();
        list.push(Value::Int(1)).unwrap();
        assert_eq!(list.capacity(), 2);
        list.push(Value::Int(2)).unwrap();
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn test_growth_preserves_elements() {
        let mut list = GenericList::with_capacity(ElementKind::Int, 1).unwrap();
        for i in 0..100i64 {
            list.push(Value::Int(i)).unwrap();
        }
        for i in 0..100usize {
            assert_eq!(list.get(i).unwrap(), Value::Int(i as i64));
        }
    }
}
