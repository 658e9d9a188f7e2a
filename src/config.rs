use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

/// Whether the fetched body is persisted verbatim or decoded and re-encoded
/// as indented JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Raw,
    Parsed,
}

impl FromStr for FetchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(FetchMode::Raw),
            "parsed" => Ok(FetchMode::Parsed),
            _ => Err(anyhow::anyhow!(
                "unrecognized fetch mode {s:?} (expected \"raw\" or \"parsed\")"
            )),
        }
    }
}

/// The env config env vars recognized by a fetch run. Every variable has a
/// default matching the feed this tool was written for, so an empty
/// environment is a valid one.
#[derive(Debug, Deserialize)]
pub struct FetchEnv {
    #[serde(default = "default_api_url")]
    jobs_api_url: String,
    #[serde(default = "default_output_path")]
    jobs_output_path: String,
    #[serde(default = "default_fetch_mode")]
    jobs_fetch_mode: String,
}

fn default_api_url() -> String {
    "https://remoteok.com/api".to_string()
}

fn default_output_path() -> String {
    "data/raw_jobs_json.json".to_string()
}

fn default_fetch_mode() -> String {
    "parsed".to_string()
}

/// Resolved inputs for one fetch run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: String,
    pub output_path: PathBuf,
    pub mode: FetchMode,
}

impl FetchConfig {
    pub fn new() -> anyhow::Result<Self> {
        let fetch_env = FetchEnv::load_from_env()?;
        let mode = fetch_env.jobs_fetch_mode.parse()?;
        Ok(Self {
            url: fetch_env.jobs_api_url,
            output_path: PathBuf::from(fetch_env.jobs_output_path),
            mode,
        })
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_mode_parses_known_values() {
        assert_eq!("raw".parse::<FetchMode>().unwrap(), FetchMode::Raw);
        assert_eq!("parsed".parse::<FetchMode>().unwrap(), FetchMode::Parsed);
        assert_eq!(" Raw ".parse::<FetchMode>().unwrap(), FetchMode::Raw);
        assert_eq!("PARSED".parse::<FetchMode>().unwrap(), FetchMode::Parsed);
    }

    #[test]
    fn fetch_mode_rejects_unknown_values() {
        assert!("pretty".parse::<FetchMode>().is_err());
        assert!("".parse::<FetchMode>().is_err());
    }

    #[test]
    fn env_defaults_match_the_shipped_constants() {
        let fetch_env =
            envy::from_iter::<_, FetchEnv>(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(fetch_env.jobs_api_url, "https://remoteok.com/api");
        assert_eq!(fetch_env.jobs_output_path, "data/raw_jobs_json.json");
        assert_eq!(fetch_env.jobs_fetch_mode, "parsed");
    }

    #[test]
    fn env_overrides_are_honored() {
        let vars = vec![
            (
                "JOBS_API_URL".to_string(),
                "https://example.com/feed".to_string(),
            ),
            ("JOBS_FETCH_MODE".to_string(), "raw".to_string()),
        ];
        let fetch_env = envy::from_iter::<_, FetchEnv>(vars).unwrap();
        assert_eq!(fetch_env.jobs_api_url, "https://example.com/feed");
        assert_eq!(fetch_env.jobs_fetch_mode, "raw");
        assert_eq!(fetch_env.jobs_output_path, "data/raw_jobs_json.json");
    }
}
