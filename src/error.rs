use std::fmt;

/// All errors that can occur in the playground.
#[derive(Debug)]
pub enum PlaygroundError {
    /// Perceptron training needs at least one point in each class.
    MissingClass { class_a: usize, class_b: usize },
    /// A configuration value is out of range.
    InvalidConfig(String),
    /// A domain or pixel rectangle has no usable area.
    InvalidGeometry(String),
    /// Two sequences that must be paired have different lengths.
    LengthMismatch { expected: usize, found: usize },
    /// A statistic was requested over no samples.
    EmptyInput(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for PlaygroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClass { class_a, class_b } => write!(
                f,
                "add points to both classes before training (class A: {class_a}, class B: {class_b})"
            ),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidGeometry(msg) => write!(f, "invalid geometry: {msg}"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "length mismatch: expected {expected}, found {found}")
            }
            Self::EmptyInput(what) => write!(f, "{what} must not be empty"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for PlaygroundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlaygroundError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PlaygroundError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_class_message_names_counts() {
        let err = PlaygroundError::MissingClass { class_a: 3, class_b: 0 };
        let msg = err.to_string();
        assert!(msg.contains("both classes"));
        assert!(msg.contains("class B: 0"));
    }

    #[test]
    fn test_json_error_has_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PlaygroundError::from(json_err);
        assert!(err.source().is_some());
        assert!(PlaygroundError::EmptyInput("points").source().is_none());
    }
}
