use statwatch_monitor::{FailureStreak, StreakState};

#[test]
fn starts_healthy_and_unreported() {
    let streak = FailureStreak::new();
    assert_eq!(streak.count(), 0);
    assert!(!streak.reported());
    assert_eq!(streak.state(), StreakState::Healthy);
}

#[test]
fn alerts_on_third_failure_only() {
    let mut streak = FailureStreak::new();
    let alerts: Vec<bool> = (0..5).map(|_| streak.record_failure()).collect();
    assert_eq!(alerts, vec![false, false, true, false, false]);
    assert_eq!(streak.state(), StreakState::Degraded { count: 5 });
    assert!(streak.reported());
}

#[test]
fn success_resets_and_rearms() {
    let mut streak = FailureStreak::new();
    for _ in 0..4 {
        streak.record_failure();
    }
    assert_eq!(streak.record_success(), 4);
    assert_eq!(streak.state(), StreakState::Healthy);
    assert!(!streak.reported());

    assert!(!streak.record_failure());
    assert!(!streak.record_failure());
    assert!(streak.record_failure());
}

#[test]
fn short_streak_never_alerts() {
    let mut streak = FailureStreak::new();
    for _ in 0..10 {
        assert!(!streak.record_failure());
        assert!(!streak.record_failure());
        assert_eq!(streak.record_success(), 2);
    }
}

#[test]
fn success_without_streak_reports_zero() {
    let mut streak = FailureStreak::new();
    assert_eq!(streak.record_success(), 0);
}
