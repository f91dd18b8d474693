//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap order and the position index stay consistent, comparing every
//! observable result against a plain `Vec` multiset model.

use indexed_heap::{HeapError, IndexedBinaryHeap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Poll,
    Remove(i32),
    RemoveAt(usize),
    Update(i32, i32),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => (-50i32..50).prop_map(Op::Insert),
        2 => Just(Op::Poll),
        2 => (-50i32..50).prop_map(Op::Remove),
        1 => (0usize..64).prop_map(Op::RemoveAt),
        2 => (-50i32..50, -50i32..50).prop_map(|(old, new)| Op::Update(old, new)),
        1 => Just(Op::Clear),
    ]
}

/// Removes one occurrence of `value` from the model, returning whether it was there
fn model_remove(model: &mut Vec<i32>, value: i32) -> bool {
    match model.iter().position(|&v| v == value) {
        Some(pos) => {
            model.swap_remove(pos);
            true
        }
        None => false,
    }
}

/// Checks that every slot is reachable through the index and counts agree with the array
fn check_index(heap: &IndexedBinaryHeap<i32>) -> Result<(), TestCaseError> {
    prop_assert!(heap.is_valid());
    let slice = heap.as_slice();
    for (slot, value) in slice.iter().enumerate() {
        let first = heap.position(value);
        prop_assert!(first.is_some());
        let first = first.unwrap();
        prop_assert!(first <= slot);
        prop_assert_eq!(slice[first], *value);
        prop_assert_eq!(
            heap.count(value),
            slice.iter().filter(|&&v| v == *value).count()
        );
    }
    Ok(())
}

fn drain(heap: &mut IndexedBinaryHeap<i32>) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(value) = heap.poll() {
        out.push(value);
    }
    out
}

/// Apply a random operation sequence to both the heap and the model
fn test_matches_model(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap = IndexedBinaryHeap::new();
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        let len_before = heap.len();
        match op {
            Op::Insert(value) => {
                heap.insert(value);
                model.push(value);
                prop_assert_eq!(heap.len(), len_before + 1);
            }
            Op::Poll => {
                let expected = model.iter().min().copied();
                match expected {
                    Some(min) => {
                        prop_assert_eq!(heap.poll(), Ok(min));
                        model_remove(&mut model, min);
                        prop_assert_eq!(heap.len(), len_before - 1);
                    }
                    None => prop_assert_eq!(heap.poll(), Err(HeapError::Empty)),
                }
            }
            Op::Remove(value) => {
                if model_remove(&mut model, value) {
                    prop_assert_eq!(heap.remove(&value), Ok(value));
                    prop_assert_eq!(heap.len(), len_before - 1);
                } else {
                    prop_assert_eq!(heap.remove(&value), Err(HeapError::NotFound));
                    prop_assert_eq!(heap.len(), len_before);
                }
            }
            Op::RemoveAt(index) => {
                if index < heap.len() {
                    let expected = heap.as_slice()[index];
                    prop_assert_eq!(heap.remove_at(index), Ok(expected));
                    model_remove(&mut model, expected);
                    prop_assert_eq!(heap.len(), len_before - 1);
                } else {
                    let before = heap.as_slice().to_vec();
                    prop_assert_eq!(
                        heap.remove_at(index),
                        Err(HeapError::InvalidArgument { index, len: len_before })
                    );
                    prop_assert_eq!(heap.as_slice(), &before[..]);
                }
            }
            Op::Update(old, new) => {
                if model_remove(&mut model, old) {
                    model.push(new);
                    prop_assert_eq!(heap.update_priority(&old, new), Ok(old));
                } else {
                    prop_assert_eq!(heap.update_priority(&old, new), Err(HeapError::NotFound));
                }
                prop_assert_eq!(heap.len(), len_before);
            }
            Op::Clear => {
                heap.clear();
                model.clear();
                prop_assert_eq!(heap.len(), 0);
            }
        }

        check_index(&heap)?;
        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.peek().ok(), model.iter().min());
    }

    let mut expected = model;
    expected.sort();
    prop_assert_eq!(drain(&mut heap), expected);
    Ok(())
}

proptest! {
    #[test]
    fn test_operations_match_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        test_matches_model(ops)?;
    }

    #[test]
    fn test_poll_yields_sorted_multiset(values in prop::collection::vec(-100i32..100, 0..200)) {
        let mut heap = IndexedBinaryHeap::from_collection(values.iter().copied());
        let mut expected = values;
        expected.sort();

        let drained = drain(&mut heap);
        prop_assert_eq!(drained, expected);
        prop_assert!(heap.is_empty());
    }

    #[test]
    fn test_heapify_equivalence(
        (values, shuffled) in prop::collection::vec(-20i32..20, 0..100)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let mut heapified = IndexedBinaryHeap::from_vec(values);
        let mut inserted = IndexedBinaryHeap::from_collection(shuffled);

        check_index(&heapified)?;
        check_index(&inserted)?;
        prop_assert_eq!(drain(&mut heapified), drain(&mut inserted));
    }

    #[test]
    fn test_update_round_trip(
        values in prop::collection::vec(-100i32..100, 1..100),
        pick in any::<prop::sample::Index>(),
        new_value in -200i32..200,
    ) {
        let old_value = values[pick.index(values.len())];
        let mut heap = IndexedBinaryHeap::from_vec(values.clone());

        prop_assert_eq!(heap.update_priority(&old_value, new_value), Ok(old_value));
        check_index(&heap)?;

        let mut expected = values;
        let pos = expected.iter().position(|&v| v == old_value).unwrap();
        expected[pos] = new_value;
        expected.sort();
        prop_assert_eq!(drain(&mut heap), expected);
    }

    #[test]
    fn test_remove_every_element_by_value(values in prop::collection::vec(-30i32..30, 0..100)) {
        let mut heap = IndexedBinaryHeap::from_vec(values.clone());

        for value in &values {
            prop_assert_eq!(heap.remove(value), Ok(*value));
            check_index(&heap)?;
        }
        prop_assert!(heap.is_empty());
        for value in &values {
            prop_assert!(!heap.contains(value));
        }
    }
}
