mod common;

use std::time::Duration;

use common::collect_states;
use countdown_screen::countdown::{CountdownEngine, CountdownError, CounterState, DEFAULT_START};
use tokio::time::Instant;

fn running(remaining: u32) -> CounterState {
    CounterState::running(remaining)
}

#[tokio::test(start_paused = true)]
async fn start_three_counts_down_then_finishes() {
    let engine = CountdownEngine::new();
    engine.start(3).unwrap();

    let seen = collect_states(engine.subscribe()).await;
    assert_eq!(
        seen,
        vec![running(3), running(2), running(1), CounterState::finished()]
    );
    assert_eq!(engine.current_state(), Some(CounterState::finished()));
}

#[tokio::test(start_paused = true)]
async fn start_one_goes_straight_to_done() {
    let engine = CountdownEngine::new();
    engine.start(1).unwrap();

    let seen = collect_states(engine.subscribe()).await;
    assert_eq!(seen, vec![running(1), CounterState::finished()]);
}

#[tokio::test(start_paused = true)]
async fn full_countdown_is_monotonic_and_terminates() {
    let engine = CountdownEngine::new();
    engine.start(DEFAULT_START).unwrap();

    let seen = collect_states(engine.subscribe()).await;
    // Initial state plus one publication per tick.
    assert_eq!(seen.len(), DEFAULT_START as usize + 1);
    for pair in seen.windows(2) {
        assert_eq!(pair[1].remaining, pair[0].remaining - 1);
        assert!(!pair[0].done);
    }
    assert_eq!(seen.last(), Some(&CounterState::finished()));
    assert_eq!(seen.iter().filter(|s| s.done).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn ticks_are_one_period_apart() {
    let engine = CountdownEngine::new();
    let started = Instant::now();
    engine.start(3).unwrap();

    let mut subscription = engine.subscribe();
    assert_eq!(subscription.next().await, Some(running(3)));

    let mut last = started;
    while subscription.next().await.is_some() {
        let gap = last.elapsed();
        assert!(gap >= Duration::from_millis(1000), "tick came early: {gap:?}");
        assert!(gap < Duration::from_millis(1010), "tick came late: {gap:?}");
        last = Instant::now();
    }
}

#[tokio::test(start_paused = true)]
async fn full_countdown_takes_about_one_hundred_seconds() {
    let engine = CountdownEngine::new();
    let started = Instant::now();
    engine.start(DEFAULT_START).unwrap();

    collect_states(engine.subscribe()).await;
    let total = started.elapsed();
    assert!(total >= Duration::from_secs(100));
    assert!(total < Duration::from_secs(101));
}

#[tokio::test(start_paused = true)]
async fn custom_period_paces_the_loop() {
    let engine = CountdownEngine::with_period(Duration::from_millis(200));
    let started = Instant::now();
    engine.start(5).unwrap();

    collect_states(engine.subscribe()).await;
    let total = started.elapsed();
    assert!(total >= Duration::from_secs(1));
    assert!(total < Duration::from_millis(1050));
}

#[tokio::test(start_paused = true)]
async fn double_start_is_rejected_and_runs_one_loop() {
    let engine = CountdownEngine::new();
    engine.start(3).unwrap();
    assert_eq!(engine.start(3), Err(CountdownError::AlreadyStarted));
    assert_eq!(engine.start(50), Err(CountdownError::AlreadyStarted));

    let seen = collect_states(engine.subscribe()).await;
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], running(3));
}

#[tokio::test(start_paused = true)]
async fn current_state_is_stable_between_ticks() {
    let engine = CountdownEngine::new();
    engine.start(5).unwrap();

    let first = engine.current_state();
    tokio::time::advance(Duration::from_millis(400)).await;
    assert_eq!(engine.current_state(), first);
    assert_eq!(engine.current_state(), first);
    assert_eq!(first, Some(running(5)));
}

#[tokio::test(start_paused = true)]
async fn late_subscriber_sees_latest_state_first() {
    let engine = CountdownEngine::new();
    engine.start(5).unwrap();

    let mut early = engine.subscribe();
    early.next().await;
    early.next().await;
    early.next().await;

    let mut late = engine.subscribe();
    assert_eq!(late.latest(), Some(running(3)));
    assert_eq!(late.next().await, Some(running(3)));
}

#[tokio::test(start_paused = true)]
async fn shutdown_mid_countdown_freezes_state() {
    let engine = CountdownEngine::new();
    engine.start(10).unwrap();
    assert!(engine.is_running());

    let mut subscription = engine.subscribe();
    assert_eq!(subscription.next().await, Some(running(10)));
    assert_eq!(subscription.next().await, Some(running(9)));

    engine.shutdown().await;
    assert!(!engine.is_running());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(engine.current_state(), Some(running(9)));
    assert_eq!(subscription.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn dropping_engine_ends_subscriptions() {
    let engine = CountdownEngine::new();
    engine.start(10).unwrap();
    let subscription = engine.subscribe();
    drop(engine);

    let seen = collect_states(subscription).await;
    assert!(seen.len() <= 2, "loop kept running after drop: {seen:?}");
    assert!(seen.iter().all(|s| !s.done));
}

#[tokio::test(start_paused = true)]
async fn loop_stops_after_done() {
    let engine = CountdownEngine::new();
    engine.start(2).unwrap();
    collect_states(engine.subscribe()).await;

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(engine.current_state(), Some(CounterState::finished()));
    assert!(!engine.is_running());
}

#[tokio::test(start_paused = true)]
async fn subscriber_attached_before_start_never_sees_idle_state() {
    let engine = CountdownEngine::new();
    let subscription = engine.subscribe();
    assert_eq!(subscription.latest(), None);
    assert_eq!(engine.current_state(), None);

    engine.start(3).unwrap();
    let seen = collect_states(subscription).await;
    assert_eq!(
        seen,
        vec![running(3), running(2), running(1), CounterState::finished()]
    );
}

#[tokio::test(start_paused = true)]
async fn subscriber_waits_for_start() {
    let engine = CountdownEngine::new();
    let mut subscription = engine.subscribe();

    let pending = tokio::time::timeout(Duration::from_secs(5), subscription.next()).await;
    assert!(pending.is_err(), "state delivered before start: {pending:?}");

    engine.start(2).unwrap();
    assert_eq!(subscription.next().await, Some(running(2)));
}
