//! Tests for generator configuration defaults, validation and JSON loading

#[cfg(test)]
mod tests {
    use hilbertcave::GenerationError;
    use hilbertcave::io::configuration::{
        DEFAULT_FILL_PERCENTAGE, DEFAULT_HEIGHT, DEFAULT_HILBERT_ORDER, DEFAULT_HILBERT_SIZE,
        DEFAULT_NEGATIVE_PATH_GIRTH, DEFAULT_PATH_WIDTH, DEFAULT_WIDTH, GeneratorConfig,
        MAX_CURVE_SPAN, MAX_GRID_DIMENSION, MAX_HILBERT_ORDER,
    };
    use std::fs;

    fn rejected_parameter(config: &GeneratorConfig) -> Option<&'static str> {
        match config.validate() {
            Err(GenerationError::InvalidParameter { parameter, .. }) => Some(parameter),
            _ => None,
        }
    }

    // Tests default values match the documented defaults
    // Verified by changing a default constant
    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, "");
        assert_eq!(config.fill_percentage, DEFAULT_FILL_PERCENTAGE);
        assert_eq!(config.hilbert_order, DEFAULT_HILBERT_ORDER);
        assert_eq!(config.hilbert_size, DEFAULT_HILBERT_SIZE);
        assert_eq!(config.path_width, DEFAULT_PATH_WIDTH);
        assert_eq!(config.negative_path_girth, DEFAULT_NEGATIVE_PATH_GIRTH);
        assert!(config.validate().is_ok());
    }

    // Tests each malformed field is rejected by name
    // Verified by removing each validation check in turn
    #[test]
    fn test_validate_rejects_malformed_fields() {
        let base = GeneratorConfig::default();
        let cases = [
            (GeneratorConfig { width: 2, ..base.clone() }, "width"),
            (GeneratorConfig { height: 0, ..base.clone() }, "height"),
            (
                GeneratorConfig {
                    width: MAX_GRID_DIMENSION + 1,
                    ..base.clone()
                },
                "width",
            ),
            (
                GeneratorConfig {
                    fill_percentage: 101,
                    ..base.clone()
                },
                "fill_percentage",
            ),
            (
                GeneratorConfig {
                    hilbert_order: MAX_HILBERT_ORDER + 1,
                    ..base.clone()
                },
                "hilbert_order",
            ),
            (
                GeneratorConfig {
                    hilbert_size: 0,
                    ..base.clone()
                },
                "hilbert_size",
            ),
        ];

        for (config, parameter) in cases {
            assert_eq!(rejected_parameter(&config), Some(parameter));
        }
    }

    // Tests boundary values are accepted
    // Verified by using exclusive limits
    #[test]
    fn test_validate_accepts_limits() {
        let config = GeneratorConfig {
            width: 3,
            height: 3,
            fill_percentage: 100,
            hilbert_order: MAX_HILBERT_ORDER,
            hilbert_size: 1,
            path_width: 0,
            negative_path_girth: 0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    // Tests a spacing factor whose scaled curve leaves i32 range is rejected
    // Verified by checking only the lower bound of hilbert_size
    #[test]
    fn test_validate_rejects_oversized_curve_span() {
        let config = GeneratorConfig {
            width: 20,
            height: 20,
            seed: "abc".to_string(),
            hilbert_order: 1,
            hilbert_size: 200_000_000,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_parameter(&config), Some("hilbert_size"));

        let extreme = GeneratorConfig {
            hilbert_size: i32::MAX,
            ..config
        };
        assert_eq!(rejected_parameter(&extreme), Some("hilbert_size"));
    }

    // Tests the curve span limit is inclusive and uses the larger side
    // Verified by measuring the span from the width only
    #[test]
    fn test_curve_span_limit() {
        let at_limit = GeneratorConfig {
            width: 16,
            height: 64,
            hilbert_size: (MAX_CURVE_SPAN / 64) as i32,
            ..GeneratorConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = GeneratorConfig {
            hilbert_size: at_limit.hilbert_size + 1,
            ..at_limit
        };
        assert_eq!(rejected_parameter(&over_limit), Some("hilbert_size"));
    }

    // Tests the curve square uses the larger side
    // Verified by returning the width
    #[test]
    fn test_extent() {
        let config = GeneratorConfig {
            width: 20,
            height: 35,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.extent(), 35);
    }

    // Tests partial JSON files fill missing fields with defaults
    // Verified by removing the serde default attribute
    #[test]
    fn test_from_json_file_partial() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("cave.json");
        fs::write(&path, r#"{ "width": 30, "seed": "json", "hilbert_order": 3 }"#)
            .expect("Failed to write config");

        let config = GeneratorConfig::from_json_file(&path).expect("Config should load");
        assert_eq!(config.width, 30);
        assert_eq!(config.seed, "json");
        assert_eq!(config.hilbert_order, 3);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.path_width, DEFAULT_PATH_WIDTH);
    }

    // Tests a serialized config loads back unchanged
    // Verified by renaming a field on serialization
    #[test]
    fn test_json_file_matches_serialized_config() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("full.json");
        let config = GeneratorConfig {
            width: 40,
            seed: "full".to_string(),
            negative_path_girth: 3,
            ..GeneratorConfig::default()
        };
        let text = serde_json::to_string_pretty(&config).expect("Config should serialize");
        fs::write(&path, text).expect("Failed to write config");

        let loaded = GeneratorConfig::from_json_file(&path).expect("Config should load");
        assert_eq!(loaded, config);
    }

    // Tests missing and malformed files map to distinct errors
    // Verified by mapping both failures to ConfigLoad
    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let missing = GeneratorConfig::from_json_file(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(GenerationError::ConfigLoad { .. })));

        let bad_path = dir.path().join("bad.json");
        fs::write(&bad_path, "{ width: ").expect("Failed to write config");
        let bad = GeneratorConfig::from_json_file(&bad_path);
        assert!(matches!(bad, Err(GenerationError::ConfigParse { .. })));
    }
}
