use std::path::PathBuf;

use futures::stream::StreamExt;
use log::info;
use serde_json::Value;

use crate::config::{FetchConfig, FetchMode};
use crate::error::FetchError;
use crate::payload::Payload;
use crate::requests::RequestClient;

/// One fetch-and-persist run: GET the feed, buffer the body, write one file.
#[derive(Debug)]
pub struct FetchTask {
    pub url: String,
    pub output_path: PathBuf,
    pub mode: FetchMode,
}

/// What a finished run did. `document` is populated in parsed mode only.
#[derive(Debug)]
pub struct FetchReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub document: Option<Value>,
}

impl FetchTask {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            url: config.url,
            output_path: config.output_path,
            mode: config.mode,
        }
    }

    /// Issue the single GET, accumulate the streamed body, then persist it
    /// in one whole-file write. Every failure is terminal; nothing is
    /// retried and no partial file is produced by the parse path.
    pub async fn run(&self, client: &RequestClient) -> Result<FetchReport, FetchError> {
        let response = client
            .fetch_url_response(&self.url)
            .await
            .map_err(FetchError::Network)?;

        // Logged for operators only: a non-2xx body is persisted the same
        // way a 200 body is.
        info!("{} responded with status {}", self.url, response.status());

        let mut payload = Payload::new();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(FetchError::Network)?;
            payload.append(&chunk);
        }
        info!("received {} bytes from {}", payload.len(), self.url);

        let rendered = payload.render(self.mode)?;

        tokio::fs::write(&self.output_path, &rendered.bytes)
            .await
            .map_err(|source| FetchError::Write {
                path: self.output_path.clone(),
                source,
            })?;

        Ok(FetchReport {
            output_path: self.output_path.clone(),
            bytes_written: rendered.bytes.len(),
            document: rendered.document,
        })
    }
}
