use serde_json::Value;

use crate::config::FetchMode;
use crate::error::FetchError;

/// Longest prefix of a bad body quoted in parse diagnostics, in characters.
pub const EXCERPT_MAX_CHARS: usize = 500;

/// In-memory accumulation of one response body.
///
/// Created empty when the body starts streaming, appended to as chunks
/// arrive, and consumed exactly once by [`Payload::render`]. Accumulation is
/// unbounded: the remote endpoint decides how large this gets.
#[derive(Debug, Default)]
pub struct Payload {
    bytes: Vec<u8>,
}

/// The file image produced from one payload, plus the decoded document when
/// parsed mode produced one.
#[derive(Debug)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    pub document: Option<Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Produce the bytes destined for the output file.
    ///
    /// Raw mode passes the body through untouched. Parsed mode decodes the
    /// body as one JSON document and re-encodes it with two-space
    /// indentation; a body that does not parse yields [`FetchError::Parse`]
    /// carrying the caught decode error and an excerpt of the offending
    /// input.
    pub fn render(self, mode: FetchMode) -> Result<Rendered, FetchError> {
        match mode {
            FetchMode::Raw => Ok(Rendered {
                bytes: self.bytes,
                document: None,
            }),
            FetchMode::Parsed => {
                let document: Value =
                    serde_json::from_slice(&self.bytes).map_err(|source| FetchError::Parse {
                        source,
                        excerpt: self.excerpt(),
                    })?;
                let bytes =
                    serde_json::to_vec_pretty(&document).map_err(|source| FetchError::Parse {
                        source,
                        excerpt: self.excerpt(),
                    })?;
                Ok(Rendered {
                    bytes,
                    document: Some(document),
                })
            }
        }
    }

    // Decoded lossily so a truncated multi-byte sequence cannot panic the
    // diagnostic path.
    fn excerpt(&self) -> String {
        String::from_utf8_lossy(&self.bytes)
            .chars()
            .take(EXCERPT_MAX_CHARS)
            .collect()
    }
}
