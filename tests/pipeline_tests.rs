//! Operator composition and fusion equivalence tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use seqpipe::prelude::*;
use seqpipe::{Filter, FilterMap, Map, SharedSeq};

#[test]
fn test_fused_filter_map_pipeline() {
    let data = [1, 2, 3, 4, 5, 6];

    // The annotation proves filter+map collapsed into one fused stage.
    let fused: FilterMap<_, _, _> = seqpipe::from_slice(&data)
        .filter(|x: &i32| x % 2 == 0)
        .map(|x| x * 2);

    assert_eq!(fused.to_vec().expect("materialize"), vec![4, 8, 12]);
}

#[test]
fn test_fusion_matches_two_separate_passes() {
    let cases: Vec<Vec<i32>> = vec![
        vec![],
        vec![1, 2, 3, 4, 5, 6],
        vec![2, 4, 6],  // all-pass
        vec![1, 3, 5],  // all-fail
    ];

    for data in cases {
        let fused = seqpipe::from_vec(data.clone())
            .filter(|x: &i32| x % 2 == 0)
            .map(|x| x * 10)
            .to_vec()
            .expect("fused pass");

        let filtered = seqpipe::from_vec(data)
            .filter(|x: &i32| x % 2 == 0)
            .to_vec()
            .expect("filter pass");
        let two_pass = seqpipe::from_vec(filtered)
            .map(|x: i32| x * 10)
            .to_vec()
            .expect("map pass");

        assert_eq!(fused, two_pass);
    }
}

#[test]
fn test_filter_tests_pre_transform_value() {
    // The predicate must see the original element, not the mapped one;
    // with post-transform evaluation every element here would pass.
    let out = seqpipe::from_vec(vec![1, 2, 3, 4])
        .filter(|x: &i32| x % 2 == 0)
        .map(|x| x + 1)
        .to_vec()
        .expect("materialize");
    assert_eq!(out, vec![3, 5]);
}

#[test]
fn test_consecutive_maps_compose_into_one_stage() {
    let composed: Map<SharedSeq<i32>, _> = seqpipe::from_vec(vec![1, 2, 3])
        .map(|x: i32| x + 1)
        .map(|x| x * 10);

    assert_eq!(composed.to_vec().expect("materialize"), vec![20, 30, 40]);
    assert_eq!(composed.exact_len(), Some(3));
}

#[test]
fn test_consecutive_filters_compose_into_one_stage() {
    let composed: Filter<SharedSeq<i32>, _> = seqpipe::from_vec(vec![1, 2, 3, 4, 5, 6])
        .filter(|x: &i32| x % 2 == 0)
        .filter(|x: &i32| *x > 2);

    assert_eq!(composed.to_vec().expect("materialize"), vec![4, 6]);
}

#[test]
fn test_map_preserves_length_and_indexing() {
    let mapped = seqpipe::from_vec(vec![5, 6, 7]).map(|x: i32| x * 100);

    assert_eq!(mapped.len(), 3);
    assert_eq!(mapped.get(0), Some(500));
    assert_eq!(mapped.get(2), Some(700));
    assert_eq!(mapped.get(3), None);
    assert_eq!(mapped.count(), 3);
}

#[test]
fn test_predicate_reevaluated_per_traversal() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_pred = Arc::clone(&calls);
    let seq = seqpipe::from_vec(vec![1, 2, 3]).filter(move |_: &i32| {
        calls_in_pred.fetch_add(1, Ordering::Relaxed);
        true
    });

    assert_eq!(seq.to_vec().expect("first pass"), vec![1, 2, 3]);
    assert_eq!(seq.to_vec().expect("second pass"), vec![1, 2, 3]);
    // No cross-traversal memoization: three calls per pass.
    assert_eq!(calls.load(Ordering::Relaxed), 6);
}

#[test]
fn test_traversals_are_independent() {
    let seq = seqpipe::from_vec(vec![1, 2, 3]).map(|x: i32| x * 2);
    let mut a = seq.iter();
    let mut b = seq.iter();

    assert_eq!(a.next(), Some(2));
    assert_eq!(a.next(), Some(4));
    // The second cursor starts from the beginning regardless.
    assert_eq!(b.next(), Some(2));
}

#[test]
fn test_single_pass_adapter_is_empty_after_first_traversal() {
    let seq = seqpipe::once_iter(vec![1, 2, 3].into_iter());

    assert_eq!(seq.to_vec().expect("first traversal"), vec![1, 2, 3]);
    assert!(seq.to_vec().expect("second traversal").is_empty());
}

#[test]
fn test_boxed_fallback_matches_generic_pipeline() {
    let generic = seqpipe::from_vec(vec![1, 2, 3, 4])
        .filter(|x: &i32| x % 2 == 0)
        .map(|x| x + 1);
    let boxed = generic.clone().boxed();

    assert_eq!(boxed.to_vec().expect("boxed"), generic.to_vec().expect("generic"));
}

#[test]
fn test_boxed_preserves_exact_len() {
    let boxed = seqpipe::from_vec(vec![1, 2, 3]).map(|x: i32| x + 1).boxed();
    assert_eq!(boxed.exact_len(), Some(3));
    assert_eq!(boxed.count(), 3);
}
