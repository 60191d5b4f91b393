use statwatch_core::errors::*;

#[test]
fn fetch_error_bad_status_carries_code() {
    let err = FetchError::BadStatus { status: 503 };
    assert!(err.to_string().contains("503"));
    assert_eq!(err.error_code(), "BAD_STATUS");
}

#[test]
fn fetch_error_transport_carries_reason() {
    let err = FetchError::Transport {
        reason: "connection refused".into(),
    };
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(err.error_code(), "TRANSPORT_ERROR");
}

#[test]
fn parse_error_malformed_frame_carries_counts() {
    let err = ParseError::MalformedFrame {
        expected: 7,
        actual: 6,
    };
    let msg = err.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains('6'));
    assert_eq!(err.error_code(), "MALFORMED_FRAME");
}

#[test]
fn parse_error_malformed_field_carries_index() {
    let err = ParseError::MalformedField {
        index: 3,
        reason: "invalid float literal".into(),
    };
    assert!(err.to_string().contains("field 3"));
    assert_eq!(err.error_code(), "MALFORMED_FIELD");
}

// --- From impls ---

#[test]
fn fetch_error_converts_to_cycle_error() {
    let cycle: CycleError = FetchError::Read {
        reason: "eof".into(),
    }
    .into();
    assert!(matches!(cycle, CycleError::Fetch(FetchError::Read { .. })));
    assert_eq!(cycle.error_code(), "READ_ERROR");
}

#[test]
fn parse_error_converts_to_cycle_error() {
    let cycle: CycleError = ParseError::EmptyPayload.into();
    assert!(matches!(cycle, CycleError::Parse(ParseError::EmptyPayload)));
    assert_eq!(cycle.error_code(), "EMPTY_PAYLOAD");
}

#[test]
fn coded_string_prefixes_code() {
    let err = ParseError::EmptyPayload;
    assert_eq!(err.coded_string(), "[EMPTY_PAYLOAD] payload is empty");
}

#[test]
fn config_error_has_config_code() {
    let err = ConfigError::ValidationFailed {
        field: "poll.interval_secs".into(),
        message: "must be greater than 0".into(),
    };
    assert!(err.to_string().contains("poll.interval_secs"));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
