//! Bulletin retrieval over HTTP.
//!
//! Downloads `<base_url>/<zone>.txt` and classifies failures so callers can
//! tell a transiently unavailable zone from a hard failure.

use crate::config::ForecastConfig;
use crate::error::{FetchError, ForecastError, Result};
use crate::models::MarineForecast;
use crate::parser::BulletinParser;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// HTTP client for zone bulletins
#[derive(Debug, Clone)]
pub struct ZoneFetcher {
    client: Client,
    config: ForecastConfig,
}

impl ZoneFetcher {
    /// Create a fetcher; fails only on invalid configuration
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ForecastError::ClientSetup)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Fetch the raw bulletin text for a zone
    #[instrument(skip(self))]
    pub async fn fetch_zone_text(&self, zone: &str) -> std::result::Result<String, FetchError> {
        let url = self.config.zone_url(zone);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify(zone, e))?;

        let status = response.status();
        if !status.is_success() {
            error!("HTTP error {} for zone {}", status.as_u16(), zone);
            return Err(FetchError::HttpStatus {
                zone: zone.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| classify(zone, e))
    }

    /// Fetch and parse the bulletin for a zone
    pub async fn fetch_forecast(
        &self,
        zone: &str,
        parser: &BulletinParser,
    ) -> std::result::Result<MarineForecast, FetchError> {
        let text = self.fetch_zone_text(zone).await?;
        Ok(parser.parse(&text, zone))
    }
}

/// Map a reqwest failure onto the fetch error taxonomy
fn classify(zone: &str, err: reqwest::Error) -> FetchError {
    let zone = zone.to_string();
    if err.is_timeout() {
        error!("Timeout fetching data for zone {}", zone);
        FetchError::Timeout { zone }
    } else if let Some(status) = err.status() {
        error!("HTTP error {} for zone {}: {}", status.as_u16(), zone, err);
        FetchError::HttpStatus {
            zone,
            status: status.as_u16(),
        }
    } else {
        error!("Unexpected error fetching zone {}: {}", zone, err);
        FetchError::Transport { zone, source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let config = ForecastConfig::default().with_max_concurrent_fetches(0);
        assert!(matches!(
            ZoneFetcher::new(config),
            Err(ForecastError::Configuration { .. })
        ));
    }

    #[test]
    fn test_fetcher_keeps_config() {
        let config = ForecastConfig::default().with_base_url("http://127.0.0.1:9");
        let fetcher = ZoneFetcher::new(config.clone()).unwrap();
        assert_eq!(fetcher.config(), &config);
    }
}
