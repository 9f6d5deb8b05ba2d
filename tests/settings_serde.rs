#[cfg(feature = "serde")]
#[test]
fn test_settings_serde() {
    use densemat::engine::*;

    // missing fields take their defaults
    let settings: EngineSettings =
        serde_json::from_str(r#"{"determinant_method": "lu"}"#).unwrap();
    assert_eq!(settings.determinant_method, "lu");
    assert_eq!(settings.cofactor_max_dim, 8);
    assert!(!settings.verbose);
    assert!(MatrixEngine::new(settings.clone()).is_ok());

    let text = serde_json::to_string(&settings).unwrap();
    let settings2: EngineSettings = serde_json::from_str(&text).unwrap();
    assert_eq!(settings, settings2);
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_serde_validated_by_engine() {
    use densemat::engine::*;

    // deserialization bypasses the builder, so the engine checks
    let settings: EngineSettings =
        serde_json::from_str(r#"{"determinant_method": "gauss"}"#).unwrap();
    assert_eq!(
        MatrixEngine::new(settings).unwrap_err(),
        SettingsError::UnknownDeterminantMethod("gauss".to_string())
    );
}
