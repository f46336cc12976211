use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading inputs or computing statistics
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("read id {id} does not match quality id {qual_id}")]
    QualityIdMismatch { id: String, qual_id: String },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An internal consistency check failed. Never caused by user input.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl StatsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StatsError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors that indicate a logic defect rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, StatsError::InvariantViolation(_))
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_kind_is_distinguishable() {
        let internal = StatsError::InvariantViolation("median count 0".to_string());
        let parse = StatsError::Parse {
            path: PathBuf::from("a.lens"),
            line: 3,
            message: "bad length".to_string(),
        };

        assert!(internal.is_internal());
        assert!(!parse.is_internal());
        assert_eq!(parse.to_string(), "a.lens:3: bad length");
    }
}
