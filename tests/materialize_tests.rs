//! Segmented buffer and segment pool accounting tests

use std::thread;

use seqpipe::prelude::*;
use seqpipe::{PoolConfig, SegmentPool, SegmentedBuf, INLINE_LEN};

#[test]
fn test_thousand_additions_preserve_order() {
    let pool = SegmentPool::with_config(PoolConfig::default()).expect("pool");
    let mut buf = SegmentedBuf::new(&pool);

    for i in 0..1000u32 {
        buf.push(i).expect("push");
    }
    assert_eq!(buf.len(), 1000);

    let out = buf.finish();
    assert_eq!(out.len(), 1000);
    assert!(out.iter().enumerate().all(|(i, &v)| v as usize == i));

    // Inline 8 + segments 16, 32, 64, ... -> several rents, all returned.
    let stats = pool.stats();
    assert!(stats.rented >= 2);
    assert_eq!(stats.rented, stats.returned);
    assert_eq!(stats.peak_outstanding, stats.rented);
}

#[test]
fn test_inline_segment_never_touches_the_pool() {
    let pool = SegmentPool::new();
    let mut buf = SegmentedBuf::new(&pool);

    for i in 0..INLINE_LEN {
        buf.push(i).expect("push");
    }
    assert_eq!(buf.len(), INLINE_LEN);
    assert_eq!(buf.finish(), (0..INLINE_LEN).collect::<Vec<_>>());

    let stats = pool.stats();
    assert_eq!(stats.rented, 0);
    assert_eq!(stats.returned, 0);
}

#[test]
fn test_len_tracks_successful_additions() {
    let pool = SegmentPool::new();
    let mut buf = SegmentedBuf::new(&pool);

    assert!(buf.is_empty());
    for i in 0..50 {
        buf.push(i).expect("push");
        assert_eq!(buf.len(), i as usize + 1);
    }
}

#[test]
fn test_early_drop_returns_every_segment() {
    let pool = SegmentPool::new();
    {
        let mut buf = SegmentedBuf::new(&pool);
        for i in 0..100 {
            buf.push(i).expect("push");
        }
        // Dropped without finish: the caller stopped iterating.
    }

    let stats = pool.stats();
    assert!(stats.rented >= 1);
    assert_eq!(stats.rented, stats.returned);
}

#[test]
fn test_pool_reuses_returned_segments() {
    let pool = SegmentPool::new();
    let seq = seqpipe::range(0, 200)
        .expect("range")
        .filter(|x: &i64| x % 2 == 0);

    let first = seq.to_vec_in(&pool).expect("first run");
    let after_first = pool.stats();
    let second = seq.to_vec_in(&pool).expect("second run");
    let after_second = pool.stats();

    assert_eq!(first, second);
    assert_eq!(after_second.rented, after_second.returned);
    // Something was retained after the first run and handed out again.
    assert!(after_first.retained >= 1);
    assert!(after_second.peak_outstanding <= after_first.rented.max(after_second.rented));
}

#[test]
fn test_to_vec_without_known_length_uses_the_buffer() {
    let out = seqpipe::range(0, 100)
        .expect("range")
        .filter(|x: &i64| x % 3 == 0)
        .to_vec()
        .expect("materialize");
    assert_eq!(out.len(), 34);
    assert_eq!(out[0], 0);
    assert_eq!(out[33], 99);
}

#[test]
fn test_to_vec_with_known_length_allocates_once_up_front() {
    let seq = seqpipe::range(5, 4).expect("range").map(|x| x * 2);
    assert_eq!(seq.exact_len(), Some(4));

    let out = seq.to_vec().expect("materialize");
    assert_eq!(out, vec![10, 12, 14, 16]);
    assert_eq!(out.capacity(), 4);
}

#[test]
fn test_to_boxed_slice_matches_to_vec() {
    let seq = seqpipe::from_vec(vec![3, 1, 4, 1, 5]);
    let boxed = seq.to_boxed_slice().expect("boxed slice");
    assert_eq!(&*boxed, &[3, 1, 4, 1, 5]);
}

#[test]
fn test_pool_rent_return_across_threads() {
    let pool = SegmentPool::<u64>::new();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let pool = pool.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    let mut buf = SegmentedBuf::new(&pool);
                    for i in 0..100u64 {
                        buf.push(t * 1000 + i).expect("push");
                    }
                    let out = buf.finish();
                    assert_eq!(out.len(), 100);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker");
    }

    let stats = pool.stats();
    assert_eq!(stats.rented, stats.returned);
}

#[test]
fn test_pool_config_from_json() {
    let cfg = PoolConfig::from_json(r#"{"min_segment": 4, "max_retained_segments": 2}"#)
        .expect("valid json");
    assert_eq!(cfg.min_segment, 4);
    assert_eq!(cfg.max_retained_segments, 2);

    assert!(PoolConfig::from_json(r#"{"min_segment": 0, "max_retained_segments": 2}"#).is_err());
}

#[test]
fn test_pool_rejects_invalid_config() {
    let cfg = PoolConfig {
        min_segment: 0,
        max_retained_segments: 4,
    };
    assert!(SegmentPool::<u8>::with_config(cfg).is_err());
}

#[test]
fn test_retention_is_bounded() {
    let cfg = PoolConfig {
        min_segment: 4,
        max_retained_segments: 1,
    };
    let pool = SegmentPool::<i64>::with_config(cfg).expect("pool");
    let seq = seqpipe::range(0, 100)
        .expect("range")
        .filter(|_: &i64| true);

    seq.to_vec_in(&pool).expect("run");
    let stats = pool.stats();
    assert!(stats.retained <= 1);
    assert_eq!(stats.rented, stats.returned);
}
