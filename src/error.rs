use std::fmt;
use std::path::PathBuf;

/// The three ways one fetch run can fail. Every variant is terminal for the
/// run; nothing is retried.
#[derive(Debug)]
pub enum FetchError {
    /// The transport layer failed before the whole body arrived (DNS,
    /// connect, TLS, mid-stream reset).
    Network(reqwest::Error),
    /// Parsed mode only: the body was not a valid JSON document. Carries an
    /// excerpt of the offending input for diagnostics.
    Parse {
        source: serde_json::Error,
        excerpt: String,
    },
    /// The whole-file write to the output path failed.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FetchError {
    /// The leading part of the raw body, present on parse failures only.
    pub fn body_excerpt(&self) -> Option<&str> {
        match self {
            FetchError::Parse { excerpt, .. } => Some(excerpt),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(_) => write!(f, "network request failed"),
            FetchError::Parse { .. } => write!(f, "response body is not valid JSON"),
            FetchError::Write { path, .. } => write!(f, "could not write {}", path.display()),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(err) => Some(err),
            FetchError::Parse { source, .. } => Some(source),
            FetchError::Write { source, .. } => Some(source),
        }
    }
}
