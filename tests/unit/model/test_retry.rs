use epcc_client::model::retry::RetryStrategy;
use std::time::Duration;

fn strategy(jitter: bool) -> RetryStrategy {
    RetryStrategy::new(
        Duration::from_millis(10),
        1.5,
        jitter,
        Duration::from_secs(1),
    )
}

#[test]
fn test_first_attempt_never_waits() {
    let s = strategy(true).with_limit(Duration::ZERO);
    assert_eq!(s.next_delay(0, Duration::from_secs(60)), Some(Duration::ZERO));
}

#[test]
fn test_nominal_delays_grow() {
    let s = strategy(false);
    let delays: Vec<Duration> = (1..8).map(|n| s.nominal_delay(n)).collect();
    for pair in delays.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert_eq!(delays[0], Duration::from_millis(10));
}

#[test]
fn test_jittered_delay_bounded_by_nominal() {
    let s = strategy(true);
    for attempt in 1..10 {
        for _ in 0..50 {
            let delay = s.next_delay(attempt, Duration::ZERO).unwrap();
            assert!(delay <= s.nominal_delay(attempt), "attempt {attempt}");
        }
    }
}

#[test]
fn test_budget_stops_the_schedule() {
    let s = strategy(false).with_limit(Duration::from_millis(100));
    assert!(s.next_delay(1, Duration::from_millis(50)).is_some());
    assert!(s.next_delay(1, Duration::from_millis(95)).is_none());
    assert!(s.next_delay(30, Duration::ZERO).is_none());
}

#[test]
fn test_timer_counts_attempts() {
    let mut timer = strategy(false).start();
    assert_eq!(timer.attempts(), 0);
    assert_eq!(timer.next_delay(), Some(Duration::ZERO));
    assert_eq!(timer.next_delay(), Some(Duration::from_millis(10)));
    assert_eq!(timer.attempts(), 2);
}
