//! Log trail resource: append activity entries to a claim's history.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use reqwest::Method;
use serde::Serialize;

use crate::{client::ClientInner, types::ApiResponse, Result};

/// Date format the log trail endpoint expects
pub const LOG_TRAIL_DATE_FORMAT: &str = "%m/%d/%Y";

/// Options for [`LogTrailsService::create_log_trail`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogTrailOptions {
    /// Entry date as `MM/DD/YYYY`; today's local date when unset
    pub date: Option<String>,
}

impl LogTrailOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preformatted date string, sent as-is
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Date the entry on a calendar day
    pub fn on(self, day: NaiveDate) -> Self {
        self.date(day.format(LOG_TRAIL_DATE_FORMAT).to_string())
    }

    fn resolved_date(self) -> String {
        self.date
            .unwrap_or_else(|| Local::now().format(LOG_TRAIL_DATE_FORMAT).to_string())
    }
}

#[derive(Debug, Serialize)]
struct LogTrailRequest<'a> {
    #[serde(rename = "filenumber")]
    file_number: i64,
    activity: &'a str,
    date: String,
}

/// Log trail endpoints, obtained from [`Client::log_trails`](crate::Client::log_trails)
#[derive(Debug, Clone)]
pub struct LogTrailsService {
    inner: Arc<ClientInner>,
}

impl LogTrailsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Append an activity entry to a claim's log trail.
    ///
    /// Posts to the route selected by
    /// [`ClientBuilder::log_trail_endpoint`](crate::ClientBuilder::log_trail_endpoint).
    pub async fn create_log_trail(
        &self,
        file_number: i64,
        activity: &str,
        options: LogTrailOptions,
    ) -> Result<ApiResponse> {
        let request = LogTrailRequest {
            file_number,
            activity,
            date: options.resolved_date(),
        };
        let body = serde_json::to_value(&request)?;

        let path = self.inner.config.log_trail_endpoint.path();
        tracing::debug!(file_number, path, "Creating log trail entry");

        let url = self.inner.endpoint(path)?;
        self.inner
            .execute("create_log_trail", Method::POST, url, Some(body))
            .await
    }
}
