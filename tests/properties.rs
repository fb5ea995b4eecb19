// Property-based checks for the Vector contracts.

use proptest::prelude::*;
use vector_list::{reduce, Vector, VectorError};

fn build(values: &[i32]) -> Vector<i32> {
    let mut v = Vector::new();
    for x in values {
        v.add(*x);
    }
    v
}

// ============================================================================
// Growth and ordering
// ============================================================================

proptest! {
    #[test]
    fn add_keeps_count_and_order(values: Vec<i32>) {
        let v = build(&values);
        prop_assert_eq!(v.len(), values.len());
        prop_assert!(v.capacity() >= v.len());
        for (i, x) in values.iter().enumerate() {
            prop_assert_eq!(v.get(i), Ok(x));
        }
    }

    #[test]
    fn insert_shifts_right(values in prop::collection::vec(any::<i32>(), 1..64), seed: usize, e: i32) {
        let i = seed % values.len();
        let mut v = build(&values);
        v.insert(i, e).unwrap();

        prop_assert_eq!(v.len(), values.len() + 1);
        prop_assert_eq!(v.get(i), Ok(&e));
        for (j, x) in values.iter().enumerate().skip(i) {
            prop_assert_eq!(v.get(j + 1), Ok(x));
        }
    }

    #[test]
    fn remove_index_shifts_left(values in prop::collection::vec(any::<i32>(), 1..64), seed: usize) {
        let i = seed % values.len();
        let mut v = build(&values);

        prop_assert_eq!(v.remove_index(i), Ok(values[i]));
        prop_assert_eq!(v.len(), values.len() - 1);
        for (j, x) in values.iter().enumerate().skip(i + 1) {
            prop_assert_eq!(v.get(j - 1), Ok(x));
        }
    }

    #[test]
    fn out_of_range_index_is_rejected(values in prop::collection::vec(any::<i32>(), 1..16), extra in 0usize..1000) {
        let mut v = build(&values);
        let i = values.len() + extra;
        let expected = Err(VectorError::Index { index: i, len: values.len() });
        prop_assert_eq!(v.get(i), expected.map(|_: ()| &0));
        prop_assert_eq!(v.remove_index(i), expected.map(|_: ()| 0));
        prop_assert_eq!(v.insert(i, 0), expected);
        prop_assert_eq!(v.len(), values.len());
    }
}

// ============================================================================
// Equality-based removal
// ============================================================================

proptest! {
    #[test]
    fn remove_takes_lowest_occurrence(values in prop::collection::vec(0i32..8, 0..64), e in 0i32..8) {
        let mut v = build(&values);
        let removed = v.remove(&e);

        let first = values.iter().position(|x| *x == e);
        match first {
            Some(pos) => {
                prop_assert!(removed);
                let mut expected = values.clone();
                expected.remove(pos);
                prop_assert_eq!(v, expected);
            }
            None => {
                prop_assert!(!removed);
                prop_assert_eq!(v, values);
            }
        }
    }
}

// ============================================================================
// Transforms
// ============================================================================

proptest! {
    #[test]
    fn chunks_concatenate_to_source(values: Vec<i32>, size in 1usize..40) {
        let v = build(&values);
        let chunks = v.chunk(size);

        let flat: Vec<i32> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
        prop_assert_eq!(flat, values.clone());

        if size >= values.len() {
            prop_assert_eq!(chunks.len(), 1);
        } else {
            prop_assert!(chunks.iter().all(|c| c.len() <= size && !c.is_empty()));
            prop_assert!(chunks[..chunks.len() - 1].iter().all(|c| c.len() == size));
        }
    }

    #[test]
    fn zero_chunk_size_yields_nothing(values: Vec<i32>) {
        prop_assert!(build(&values).chunk(0).is_empty());
    }

    #[test]
    fn filter_keeps_exactly_matching(values: Vec<i32>) {
        let v = build(&values);
        let even = v.filter(|x| x % 2 == 0);

        prop_assert!(even.iter().all(|x| x % 2 == 0));
        let expected: Vec<i32> = values.iter().copied().filter(|x| x % 2 == 0).collect();
        prop_assert_eq!(even, expected);
    }

    #[test]
    fn map_preserves_length_and_order(values: Vec<i32>) {
        let v = build(&values);
        let mapped = v.map(|x| i64::from(*x) * 10);

        prop_assert_eq!(mapped.len(), v.len());
        for (i, x) in values.iter().enumerate() {
            let expected = i64::from(*x) * 10;
            prop_assert_eq!(mapped.get(i), Ok(&expected));
        }
    }

    #[test]
    fn reduce_matches_iterator_sum(values: Vec<i32>) {
        let v = build(&values);
        let total = reduce(&v, 0i64, |acc, x| acc + i64::from(*x));
        prop_assert_eq!(total, values.iter().map(|x| i64::from(*x)).sum::<i64>());
    }
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn one_to_five_examples() {
    let v = build(&[1, 2, 3, 4, 5]);

    let chunks: Vec<Vec<i32>> = v.chunk(2).into_iter().map(Vec::from).collect();
    assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(v.filter(|x| x % 2 == 0), [2, 4]);
    assert_eq!(v.map(|x| x * 10), [10, 20, 30, 40, 50]);
    assert_eq!(reduce(&v, 0, |acc, x| acc + x), 15);
}

#[test]
fn empty_vector_examples() {
    let mut v: Vector<i32> = Vector::new();
    assert_eq!(v.pop_first(), Err(VectorError::Empty));
    assert_eq!(v.get(0), Err(VectorError::Empty));
    assert_eq!(reduce(&v, 7, |acc, x| acc + x), 7);
}

#[test]
fn missing_value_examples() {
    let mut v = build(&[10, 20, 30]);
    assert!(matches!(v.remove_index(5), Err(VectorError::Index { .. })));
    assert_eq!(v.replace(&99, 0), Err(VectorError::NotFound));
    assert_eq!(v.index(&99), None);
}
