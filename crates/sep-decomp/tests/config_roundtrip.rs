use sep_core::errors::SepError;
use sep_decomp::{binned_statistic, DecompositionConfig, QualityLevel};

#[test]
fn partial_yaml_uses_defaults() {
    let config =
        DecompositionConfig::from_yaml_str("threshold: 50\nquality: strong-social\n").unwrap();
    assert_eq!(config.threshold, 50);
    assert_eq!(config.quality, QualityLevel::StrongSocial);
    assert_eq!(config.num_parts, 2);
    assert!((config.imbalance - 1.0 / 3.0).abs() < 1e-12);
    assert!(!config.parallel);
    assert_eq!(config.max_depth, None);

    let empty = DecompositionConfig::from_yaml_str("{}").unwrap();
    assert_eq!(empty, DecompositionConfig::default());
    assert_eq!(empty.threshold, 200);
    assert_eq!(empty.quality, QualityLevel::Eco);
}

#[test]
fn yaml_and_json_round_trip() {
    let config = DecompositionConfig {
        threshold: 75,
        quality: QualityLevel::Fast,
        seed: 12345,
        parallel: true,
        max_depth: Some(6),
        ..DecompositionConfig::default()
    };
    let yaml = config.to_yaml_string().unwrap();
    assert_eq!(DecompositionConfig::from_yaml_str(&yaml).unwrap(), config);
    let json = config.to_json_string().unwrap();
    assert_eq!(DecompositionConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn invalid_values_are_rejected() {
    let err = DecompositionConfig::from_yaml_str("num_parts: 1\n").unwrap_err();
    assert!(matches!(err, SepError::Config(_)));
    assert_eq!(err.code(), "invalid-num-parts");

    let err = DecompositionConfig::from_json_str(r#"{"imbalance": 0.0}"#).unwrap_err();
    assert_eq!(err.code(), "invalid-imbalance");
}

#[test]
fn malformed_documents_are_serde_errors() {
    let err = DecompositionConfig::from_yaml_str("quality: thorough\n").unwrap_err();
    assert!(matches!(err, SepError::Serde(_)));
    assert_eq!(err.code(), "deserialize-yaml");

    let err = DecompositionConfig::from_json_str("{").unwrap_err();
    assert_eq!(err.code(), "deserialize-json");
}

#[test]
fn binned_statistic_uses_log_scale() {
    let pairs = [(1024, 32), (1024, 8), (2, 1), (0, 5), (16, 0)];
    let bins = binned_statistic(&pairs, 10);
    assert_eq!(bins.len(), 2);

    assert_eq!(bins[0].bin, 1);
    assert_eq!(bins[0].count, 1);
    assert!((bins[0].mean_log_fragment_size - 1.0).abs() < 1e-12);
    assert!(bins[0].mean_log_separator_size.abs() < 1e-12);

    assert_eq!(bins[1].bin, 10);
    assert_eq!(bins[1].count, 2);
    assert!((bins[1].mean_log_fragment_size - 10.0).abs() < 1e-12);
    assert!((bins[1].mean_log_separator_size - 4.0).abs() < 1e-12);

    assert!(binned_statistic(&[], 4).is_empty());
}
