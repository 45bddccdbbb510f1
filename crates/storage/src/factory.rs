//! Strategy selector
//!
//! [`create`] is the single entry point for building containers. Selection
//! is a pure function of the requested element kind: the one specializable
//! kind goes through the synthesizer's cached handle, every other kind gets
//! a fresh generic list.

use compactlist_core::{CompactList, ElementKind, Result};

use crate::generic::GenericList;
use crate::synth;

/// Build a container for `kind` with room for `initial_capacity` elements
///
/// Requesting [`ElementKind::Int`] yields the packed specialized
/// implementation, synthesized on the first such request process-wide and
/// reused for every later one. Any other kind yields a generic boxed list.
///
/// # Errors
///
/// - `InvalidCapacity` when `initial_capacity` is zero, either strategy
/// - `Synthesis` when the specialized implementation could not be built;
///   the same error is reported to every later `Int` request
pub fn create(kind: ElementKind, initial_capacity: usize) -> Result<Box<dyn CompactList>> {
    if kind.is_specializable() {
        synth::obtain()?.instantiate(initial_capacity)
    } else {
        Ok(Box::new(GenericList::with_capacity(kind, initial_capacity)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compactlist_core::{Error, Value};

    #[test]
    fn test_int_selects_packed_strategy() {
        let mut list = create(ElementKind::Int, 4).unwrap();
        assert_eq!(list.kind(), ElementKind::Int);
        // Only the packed strategy bridges at the boundary, so a wrong-kind
        // push failing proves we did not get a generic list
        let err = list.push(Value::from("not an int")).unwrap_err();
        assert!(matches!(err, Error::KindMismatch { .. }));
    }

    #[test]
    fn test_other_kinds_select_generic_strategy() {
        for kind in [
            ElementKind::Bool,
            ElementKind::Float,
            ElementKind::String,
            ElementKind::Bytes,
        ] {
            let mut list = create(kind, 4).unwrap();
            assert_eq!(list.kind(), kind);
            // Generic storage accepts any value kind
            list.push(Value::Int(1)).unwrap();
            list.push(Value::from("x")).unwrap();
            assert_eq!(list.len(), 2);
        }
    }

    #[test]
    fn test_zero_capacity_rejected_on_both_paths() {
        let err = create(ElementKind::Int, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidCapacity(0)));
        let err = create(ElementKind::String, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_repeated_int_requests_behave_identically() {
        for _ in 0..3 {
            let mut list = create(ElementKind::Int, 1).unwrap();
            list.push(Value::Int(10)).unwrap();
            list.push(Value::Int(20)).unwrap();
            list.push(Value::Int(30)).unwrap();
            assert_eq!(list.len(), 3);
            assert_eq!(list.get(0).unwrap(), Value::Int(10));
            assert_eq!(list.get(1).unwrap(), Value::Int(20));
            assert_eq!(list.get(2).unwrap(), Value::Int(30));
            assert!(matches!(
                list.get(3).unwrap_err(),
                Error::IndexOutOfRange { index: 3, len: 3 }
            ));
        }
    }
}
