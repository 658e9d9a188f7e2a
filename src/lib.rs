mod config;
mod error;
mod fetch_task;
mod listing;
mod payload;
mod requests;

pub use config::{FetchConfig, FetchMode};
pub use error::FetchError;
pub use fetch_task::{FetchReport, FetchTask};
pub use listing::{JobListing, listings, print_summary};
pub use payload::{EXCERPT_MAX_CHARS, Payload, Rendered};
pub use requests::RequestClient;
