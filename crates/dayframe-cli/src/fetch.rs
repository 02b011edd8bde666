//! Remote source for the daily image.
//!
//! The image for a given day lives at `<base>/<YYYY>/<MMDD>.jpg`. One blocking
//! GET is made per run; any failure is returned to the caller without retry.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SourceConfig;

pub const DEFAULT_BASE_URL: &str = "https://img.owspace.com/Public/uploads/Download";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Calendar date (UTC) of `now` shifted by `day_offset` days.
///
/// Returns `None` if the shift leaves chrono's supported range.
pub fn target_date(now: DateTime<Utc>, day_offset: i64) -> Option<NaiveDate> {
    let offset = chrono::Duration::try_days(day_offset)?;
    now.checked_add_signed(offset).map(|t| t.date_naive())
}

/// Build the image URL for `date` under `base_url`.
pub fn image_url(base_url: &str, date: NaiveDate) -> String {
    format!(
        "{}/{}/{}.jpg",
        base_url.trim_end_matches('/'),
        date.format("%Y"),
        date.format("%m%d")
    )
}

/// Blocking HTTP client configured with the source's user agent and timeout.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(source.user_agent.as_str())
            .timeout(Duration::from_secs(source.timeout_secs))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and return the response body.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!(url, "downloading image");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!(bytes = body.len(), "download complete");
        Ok(body.to_vec())
    }
}
