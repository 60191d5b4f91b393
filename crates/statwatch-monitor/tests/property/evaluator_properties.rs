use proptest::prelude::*;
use statwatch_core::models::{Snapshot, Warning};
use statwatch_monitor::evaluate;

fn metric() -> impl Strategy<Value = f64> {
    0.0f64..1e13
}

fn snapshot() -> impl Strategy<Value = Snapshot> {
    prop::array::uniform7(metric()).prop_map(Snapshot::from_values)
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(s in snapshot()) {
        prop_assert_eq!(evaluate(&s), evaluate(&s));
    }

    #[test]
    fn at_most_one_warning_per_rule(s in snapshot()) {
        let warnings = evaluate(&s);
        prop_assert!(warnings.len() <= 4);
        let mut rules: Vec<&str> = warnings.iter().map(Warning::rule).collect();
        rules.dedup();
        prop_assert_eq!(rules.len(), warnings.len());
    }

    #[test]
    fn zero_memory_total_never_warns(used in metric()) {
        let s = Snapshot::from_values([0.0, 0.0, used, 0.0, 0.0, 0.0, 0.0]);
        prop_assert!(evaluate(&s).is_empty());
    }

    #[test]
    fn disk_overuse_reports_zero_free(total in 1.0f64..1e13, excess in 0.0f64..1e13) {
        let s = Snapshot::from_values([0.0, 0.0, 0.0, total, total + excess, 0.0, 0.0]);
        prop_assert_eq!(evaluate(&s), vec![Warning::DiskSpaceLow { free_mb: 0 }]);
    }

    #[test]
    fn memory_percent_is_truncated_ratio(total in 1.0f64..1e13, ratio in 0.81f64..1.0) {
        let used = total * ratio;
        let s = Snapshot::from_values([0.0, total, used, 0.0, 0.0, 0.0, 0.0]);
        let expected = ((used / total) * 100.0) as u64;
        prop_assert_eq!(evaluate(&s), vec![Warning::MemoryUsageHigh { percent: expected }]);
    }
}
