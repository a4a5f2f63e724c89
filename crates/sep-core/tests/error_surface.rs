use sep_core::errors::{ErrorInfo, SepError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("vertex", 3)
        .with_context("reason", "example")
}

#[test]
fn encoding_error_surface() {
    let err = SepError::InvalidGraphEncoding(sample_info("offsets-not-monotonic", "bad offsets"));
    assert_eq!(err.code(), "offsets-not-monotonic");
    assert_eq!(err.info().context.get("vertex"), Some(&"3".to_string()));
}

#[test]
fn degree_target_error_surface() {
    let err = SepError::InfeasibleDegreeTarget(sample_info("stalled", "no progress"));
    assert_eq!(err.info().code, "stalled");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn oracle_error_surface() {
    let err = SepError::oracle("too-small", "graph has a single vertex");
    assert_eq!(err.code(), "too-small");
    assert!(err.info().context.is_empty());
}

#[test]
fn display_includes_context_and_hint() {
    let err = SepError::Config(
        ErrorInfo::new("imbalance-range", "imbalance must lie in (0, 1)")
            .with_context("imbalance", 1.5)
            .with_hint("use 0.33"),
    );
    let text = err.to_string();
    assert!(text.starts_with("config error: imbalance must lie in (0, 1)"));
    assert!(text.contains("imbalance=1.5"));
    assert!(text.contains("hint: use 0.33"));
}

#[test]
fn errors_round_trip_json() {
    let err = SepError::Generator(sample_info("too-many-edges", "m exceeds n(n-1)/2"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Generator\""));
    let decoded: SepError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
