use std::fmt;

use log::{info, warn};
use serde_json::{Map, Value};

/// One row of the feed summary. Every field is optional: the row schema is
/// owned by the remote feed, not by this crate, and unknown keys are
/// ignored.
#[derive(Debug, Default)]
pub struct JobListing {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
}

impl JobListing {
    fn from_row(row: &Map<String, Value>) -> Self {
        Self {
            company: field_text(row, "company"),
            position: field_text(row, "position"),
            location: field_text(row, "location"),
            url: field_text(row, "url"),
        }
    }
}

// The feed does not promise field types. Strings pass through; any other
// present value keeps its compact JSON form so one odd field never drops
// the whole row.
fn field_text(row: &Map<String, Value>, key: &str) -> Option<String> {
    match row.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

impl fmt::Display for JobListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Company: {}", self.company.as_deref().unwrap_or("-"))?;
        writeln!(f, "Position: {}", self.position.as_deref().unwrap_or("-"))?;
        writeln!(f, "Location: {}", self.location.as_deref().unwrap_or("-"))?;
        writeln!(f, "URL: {}", self.url.as_deref().unwrap_or("-"))?;
        write!(f, "{}", "-".repeat(40))
    }
}

/// Decode the summary rows from a fetched document.
///
/// The feed keeps a metadata/legal-notice object in the first array slot, so
/// that element is skipped. Returns `None` when the document is not an array
/// at all; rows that are not objects are dropped.
pub fn listings(document: &Value) -> Option<Vec<JobListing>> {
    let rows = document.as_array()?;
    Some(
        rows.iter()
            .skip(1)
            .filter_map(Value::as_object)
            .map(JobListing::from_row)
            .collect(),
    )
}

pub fn print_summary(document: &Value) {
    match listings(document) {
        Some(jobs) => {
            info!("feed contains {} job listings", jobs.len());
            for job in &jobs {
                println!("{job}");
            }
        }
        None => warn!("unexpected data format received from the feed (expected a JSON array)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skips_the_leading_metadata_element() {
        let document = json!([
            {"legal": "terms of use"},
            {
                "company": "Acme",
                "position": "Engineer",
                "location": "Remote",
                "url": "https://acme.example/jobs/1",
                "tags": ["rust"]
            },
            {"company": "Globex"}
        ]);
        let jobs = listings(&document).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].company.as_deref(), Some("Acme"));
        assert_eq!(jobs[0].position.as_deref(), Some("Engineer"));
        assert_eq!(jobs[1].company.as_deref(), Some("Globex"));
        assert!(jobs[1].position.is_none());
    }

    #[test]
    fn a_lone_metadata_element_yields_no_listings() {
        let document = json!([{"legal": "terms of use"}]);
        assert!(listings(&document).unwrap().is_empty());
    }

    #[test]
    fn an_empty_array_yields_no_listings() {
        assert!(listings(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn non_array_documents_are_rejected() {
        assert!(listings(&json!({"jobs": []})).is_none());
        assert!(listings(&json!("nope")).is_none());
        assert!(listings(&json!(42)).is_none());
    }

    #[test]
    fn non_object_rows_are_dropped() {
        let document = json!([
            {"legal": "terms of use"},
            "stray",
            42,
            ["not", "a", "row"],
            {"company": "Acme"}
        ]);
        let jobs = listings(&document).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company.as_deref(), Some("Acme"));
    }

    #[test]
    fn odd_typed_fields_keep_their_row() {
        let document = json!([
            {"legal": "terms of use"},
            {"company": 1337, "position": "Engineer", "location": null},
            {"company": "Globex", "url": {"href": "https://globex.example"}}
        ]);
        let jobs = listings(&document).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].company.as_deref(), Some("1337"));
        assert_eq!(jobs[0].position.as_deref(), Some("Engineer"));
        assert!(jobs[0].location.is_none());
        assert_eq!(
            jobs[1].url.as_deref(),
            Some(r#"{"href":"https://globex.example"}"#)
        );
    }

    #[test]
    fn display_shows_missing_fields_as_dashes() {
        let text = JobListing::default().to_string();
        assert!(text.contains("Company: -"));
        assert!(text.contains("URL: -"));
        assert!(text.ends_with(&"-".repeat(40)));
    }
}
