//! Pool configuration environment loading tests
//!
//! Kept in a dedicated binary: these tests mutate process environment
//! variables, which must not race the pools spun up by the other suites.

use seqpipe::PoolConfig;

#[test]
fn test_from_env_overrides_and_silent_fallback() {
    std::env::remove_var("SEQPIPE_MIN_SEGMENT");
    std::env::remove_var("SEQPIPE_MAX_RETAINED_SEGMENTS");
    assert_eq!(PoolConfig::from_env(), PoolConfig::default());

    std::env::set_var("SEQPIPE_MIN_SEGMENT", "64");
    std::env::set_var("SEQPIPE_MAX_RETAINED_SEGMENTS", "2");
    let cfg = PoolConfig::from_env();
    assert_eq!(cfg.min_segment, 64);
    assert_eq!(cfg.max_retained_segments, 2);

    // Unparseable values fall back silently; a zero min_segment is
    // rejected by the guard and falls back too.
    std::env::set_var("SEQPIPE_MIN_SEGMENT", "0");
    std::env::set_var("SEQPIPE_MAX_RETAINED_SEGMENTS", "not-a-number");
    let cfg = PoolConfig::from_env();
    assert_eq!(cfg.min_segment, PoolConfig::default().min_segment);
    assert_eq!(
        cfg.max_retained_segments,
        PoolConfig::default().max_retained_segments
    );

    std::env::remove_var("SEQPIPE_MIN_SEGMENT");
    std::env::remove_var("SEQPIPE_MAX_RETAINED_SEGMENTS");
}
