//! Catalog fetched over HTTP with a single `GET`.

use async_trait::async_trait;
use log::{debug, info, warn};
use url::Url;

use crate::content::{ContentSource, SourceError};
use crate::core::catalog::Catalog;

pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, SourceError> {
        let url = Url::parse(url).map_err(|e| SourceError::Config(format!("{url:?}: {e}")))?;
        Ok(Self {
            url,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn load(&self) -> Result<Catalog, SourceError> {
        info!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog fetch failed: {} - {}", status, body);
            return Err(SourceError::Api {
                status,
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        debug!("Catalog body: {} bytes", body.len());

        Ok(Catalog::from_json(&body)?)
    }
}
