//! Integration tests for the storage strategies and the factory
//!
//! Exercises the container contract end to end through `create`, the way
//! callers use it: strategy selection, append/read round trips, and the
//! failure conditions at the contract boundary.

use compactlist_core::{CompactList, ElementKind, Error, Value};
use compactlist_storage::create;

#[test]
fn test_packed_scenario_from_capacity_one() {
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

#[test]
fn test_generic_scenario_with_spare_capacity() {
    let mut list = create(ElementKind::String, 16).unwrap();

    // Empty container: index 0 is out of range even with 16 slots allocated
    assert!(matches!(
        list.get(0).unwrap_err(),
        Error::IndexOutOfRange { index: 0, len: 0 }
    ));

    list.push(Value::from("a")).unwrap();
    assert_eq!(list.get(0).unwrap(), Value::from("a"));
    assert!(matches!(
        list.get(1).unwrap_err(),
        Error::IndexOutOfRange { index: 1, len: 1 }
    ));
}

#[test]
fn test_length_tracks_every_push() {
    let mut list = create(ElementKind::Float, 2).unwrap();
    for i in 0..50 {
        assert_eq!(list.len(), i);
        list.push(Value::Float(i as f64 / 2.0)).unwrap();
        assert_eq!(list.len(), i + 1);
    }
}

#[test]
fn test_is_empty_reflects_length() {
    let mut list = create(ElementKind::Bytes, 4).unwrap();
    assert!(list.is_empty());
    list.push(Value::Bytes(vec![0xff])).unwrap();
    assert!(!list.is_empty());
}

#[test]
fn test_independent_instances_share_no_storage() {
    let mut a = create(ElementKind::Int, 1).unwrap();
    let mut b = create(ElementKind::Int, 1).unwrap();
    a.push(Value::Int(1)).unwrap();
    b.push(Value::Int(2)).unwrap();
    b.push(Value::Int(3)).unwrap();

    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 2);
    assert_eq!(a.get(0).unwrap(), Value::Int(1));
    assert_eq!(b.get(0).unwrap(), Value::Int(2));
}

#[test]
fn test_boxed_container_is_send() {
    // A container may be moved to another thread (single-writer, not shared)
    let mut list = create(ElementKind::Int, 1).unwrap();
    list.push(Value::Int(7)).unwrap();
    let handle = std::thread::spawn(move || list.get(0).unwrap());
    assert_eq!(handle.join().unwrap(), Value::Int(7));
}
