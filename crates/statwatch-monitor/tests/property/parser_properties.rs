use proptest::prelude::*;
use statwatch_monitor::parse_snapshot;

proptest! {
    #[test]
    fn well_formed_frames_round_trip(values in prop::array::uniform7(0u64..1_000_000_000_000)) {
        let payload = values.iter().map(u64::to_string).collect::<Vec<_>>().join(",");
        let snapshot = parse_snapshot(&payload).unwrap();
        let expected = values.map(|v| v as f64);
        prop_assert_eq!(snapshot.values(), expected);
    }

    #[test]
    fn padding_does_not_change_result(values in prop::array::uniform7(0u32..100_000), pad in "[ \t]{0,3}") {
        let plain = values.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
        let padded = values
            .iter()
            .map(|v| format!("{pad}{v}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(parse_snapshot(&plain), parse_snapshot(&format!("\n{padded}\n")));
    }

    #[test]
    fn wrong_field_count_never_parses(count in 1usize..20) {
        prop_assume!(count != 7);
        let payload = vec!["1"; count].join(",");
        prop_assert!(parse_snapshot(&payload).is_err());
    }

    #[test]
    fn arbitrary_text_never_panics(s in ".{0,200}") {
        let _ = parse_snapshot(&s);
    }
}
