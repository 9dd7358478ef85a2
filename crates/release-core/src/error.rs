use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the release statistics crates.
#[derive(Error, Debug)]
pub enum StatsError {
    /// A required setting is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written to disk.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted JSON document did not match the expected shape.
    #[error("Malformed input in {path}: {source}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON document could not be parsed or produced.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The HTTP layer failed (connect, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the release crates.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = StatsError::Config("missing project".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing project");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = StatsError::FileRead {
            path: PathBuf::from("/data/releases.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/data/releases.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_malformed_input_names_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let err = StatsError::MalformedInput {
            path: PathBuf::from("history.json"),
            source: json_err,
        };
        assert!(err.to_string().starts_with("Malformed input in history.json"));
    }

    #[test]
    fn test_error_display_status() {
        let err = StatsError::Status {
            status: 502,
            url: "https://api.github.com/repos/o/r/releases".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 502 from https://api.github.com/repos/o/r/releases"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StatsError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: StatsError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
