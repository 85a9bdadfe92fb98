//! Tests for error construction and display formatting

#[cfg(test)]
mod tests {
    use hilbertcave::io::error::{GenerationError, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests the invalid parameter helper fills every field
    // Verified by swapping value and reason
    #[test]
    fn test_invalid_parameter_fields() {
        let error = invalid_parameter("fill_percentage", &120, &"must be between 0 and 100");
        assert!(matches!(
            error,
            GenerationError::InvalidParameter {
                parameter: "fill_percentage",
                ref value,
                ref reason,
            } if value == "120" && reason == "must be between 0 and 100"
        ));
    }

    // Tests display messages name the offending input
    // Verified by omitting fields from the format strings
    #[test]
    fn test_display_messages() {
        let error = invalid_parameter("width", &2, &"too small");
        assert_eq!(error.to_string(), "Invalid parameter 'width' = '2': too small");

        let error = GenerationError::SegmentBudgetExceeded {
            start: [3, 7],
            budget: 42,
        };
        let message = error.to_string();
        assert!(message.contains("(3, 7)"));
        assert!(message.contains("42"));
    }

    // Tests I/O variants expose their source error and path
    // Verified by dropping the source attribute
    #[test]
    fn test_io_error_source() {
        let error = GenerationError::ConfigLoad {
            path: PathBuf::from("cave.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("cave.json"));

        let error = GenerationError::FileSystem {
            path: PathBuf::from("out"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert!(error.to_string().contains("create directory"));
    }
}
