use reqwest::{Client, ClientBuilder, Response};

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new() -> anyhow::Result<Self> {
        // Transport defaults only: no timeout, no redirect or TLS tuning.
        // A hung connection stalls the run rather than failing it.
        let client = ClientBuilder::new().build()?;
        Ok(Self { client })
    }

    /// Issue the single outbound GET for a run. The status code is returned
    /// to the caller untouched; only transport failures surface as errors.
    pub async fn fetch_url_response(&self, url: &str) -> reqwest::Result<Response> {
        self.client.get(url).send().await
    }
}
