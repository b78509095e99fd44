//! HTTP adapter for the request feed.

use tracing::debug;

use crate::error::FeedError;
use crate::feed::FeatureCollection;
use crate::model::Point;
use crate::traits::LegRepository;

#[derive(Debug, Clone)]
pub struct HttpFeedConfig {
    /// URL of the JSON feature collection.
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for HttpFeedConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/orders.json".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    config: HttpFeedConfig,
    client: reqwest::blocking::Client,
}

impl HttpFeedClient {
    pub fn new(config: HttpFeedConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn fetch(&self) -> Result<FeatureCollection, FeedError> {
        debug!(url = %self.config.url, "fetching feed");
        let collection = self
            .client
            .get(&self.config.url)
            .send()?
            .error_for_status()?
            .json::<FeatureCollection>()?;
        Ok(collection)
    }
}

impl LegRepository for HttpFeedClient {
    fn points(&self) -> Result<Vec<Point>, FeedError> {
        self.fetch()?.to_points()
    }
}
