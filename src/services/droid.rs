use async_trait::async_trait;
use serde::Deserialize;
use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use crate::{configuration::ScraperSettings, domain::QueryIdentifier};

use super::{FetchError, PageFetcher, RawDocument};

/// Chrome over WebDriver. Every fetch gets its own session.
pub struct Droid {
    settings: ScraperSettings,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct StatusResponse {
    value: StatusValue,
}

#[derive(Deserialize)]
struct StatusValue {
    ready: bool,
    #[serde(default)]
    message: String,
}

impl Droid {
    pub fn new(settings: ScraperSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        Ok(Droid { settings, client })
    }

    async fn open_session(&self) -> Result<WebDriver, FetchError> {
        let mut caps = DesiredCapabilities::chrome();
        if self.settings.headless {
            caps.set_headless()
                .map_err(|e| FetchError::Session(e.to_string()))?;
        }

        WebDriver::new(self.settings.webdriver_url.as_str(), caps)
            .await
            .map_err(|e| FetchError::Session(e.to_string()))
    }

    async fn capture(&self, driver: &WebDriver, url: &str) -> Result<RawDocument, FetchError> {
        driver
            .goto(url)
            .await
            .map_err(|e| FetchError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        // Fixed settle time for client-side rendering; the page exposes no readiness signal.
        tokio::time::sleep(self.settings.settle_delay()).await;

        driver
            .source()
            .await
            .map_err(|e| FetchError::Source(e.to_string()))
    }
}

#[async_trait]
impl PageFetcher for Droid {
    async fn ensure_ready(&self) -> Result<(), FetchError> {
        let status_url = format!(
            "{}/status",
            self.settings.webdriver_url.trim_end_matches('/')
        );

        let status = self
            .client
            .get(&status_url)
            .send()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?
            .json::<StatusResponse>()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        match status.value.ready {
            true => Ok(()),
            false => Err(FetchError::Unavailable(format!(
                "webdriver at {} is not ready: {}",
                self.settings.webdriver_url, status.value.message
            ))),
        }
    }

    async fn fetch(&self, query: QueryIdentifier) -> Result<RawDocument, FetchError> {
        let url = self
            .settings
            .query_url(query)
            .map_err(|e| FetchError::Navigation {
                url: self.settings.base_url.clone(),
                message: e.to_string(),
            })?;

        let driver = self.open_session().await?;

        let budget = self.settings.request_timeout() + self.settings.settle_delay();
        let result = match tokio::time::timeout(budget, self.capture(&driver, url.as_str())).await
        {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                seconds: budget.as_secs(),
            }),
        };

        if let Err(e) = driver.quit().await {
            log::error!("Failed to close browser session for {}: {:?}", query, e);
        }

        result
    }
}
