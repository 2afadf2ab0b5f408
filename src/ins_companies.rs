//! Insurance company listing and search.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    client::{check_response, ClientInner},
    error::Error,
    lenient,
    types::InsCompany,
    Result,
};

/// Results returned when no limit is given
pub const DEFAULT_LIMIT: i64 = 5;

/// Largest page the server will return
pub const MAX_LIMIT: i64 = 20;

/// Options for [`InsCompaniesService::get_insurance_companies`]
///
/// # Examples
///
/// ```rust
/// use hawkeye_sdk::InsCompaniesOptions;
///
/// assert_eq!(InsCompaniesOptions::search("Geico", 0).effective_limit(), 5);
/// assert_eq!(InsCompaniesOptions::search("Geico", 50).effective_limit(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsCompaniesOptions {
    /// Name fragment to search for; `None` lists companies unfiltered
    pub query: Option<String>,
    pub limit: i64,
}

impl Default for InsCompaniesOptions {
    fn default() -> Self {
        Self {
            query: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl InsCompaniesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search by name with a result limit.
    ///
    /// A non-positive limit falls back to [`DEFAULT_LIMIT`]; larger values are
    /// clamped to [`MAX_LIMIT`] when sent.
    pub fn search(query: impl Into<String>, limit: i64) -> Self {
        Self {
            query: Some(query.into()),
            limit: if limit <= 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Limit actually sent to the server
    pub fn effective_limit(&self) -> i64 {
        if self.limit <= 0 {
            DEFAULT_LIMIT
        } else {
            self.limit.min(MAX_LIMIT)
        }
    }

    fn search_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

/// Listing response, `{"data": [...]}`
#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    #[serde(default, deserialize_with = "lenient::vec_or_null")]
    data: Vec<InsCompany>,
}

/// Search response, `{"query": "...", "suggestions": [...]}`
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    query: String,
    #[serde(default, deserialize_with = "lenient::vec_or_null")]
    suggestions: Vec<InsCompany>,
}

/// Decode either response shape the endpoint produces.
///
/// The body is probed for its top-level keys, then decoded whole into the
/// matching envelope. Listings carry `data`, searches carry `suggestions`;
/// `data` wins when both are present.
pub(crate) fn decode_companies(body: &[u8]) -> Result<Vec<InsCompany>> {
    let keys: Map<String, Value> = serde_json::from_slice(body).map_err(|e| {
        Error::InvalidResponse(format!(
            "failed to decode get_insurance_companies response: {}",
            e
        ))
    })?;

    if keys.contains_key("data") {
        let listing: ListingEnvelope = serde_json::from_slice(body).map_err(|e| {
            Error::InvalidResponse(format!("failed to decode listing response: {}", e))
        })?;
        Ok(listing.data)
    } else if keys.contains_key("suggestions") {
        let search: SearchEnvelope = serde_json::from_slice(body).map_err(|e| {
            Error::InvalidResponse(format!("failed to decode search response: {}", e))
        })?;
        tracing::debug!(
            query = %search.query,
            matches = search.suggestions.len(),
            "Insurance company search decoded"
        );
        Ok(search.suggestions)
    } else {
        Err(Error::InvalidResponse("unexpected response format".to_string()))
    }
}

/// Insurance company endpoints, obtained from [`Client::ins_companies`](crate::Client::ins_companies)
#[derive(Debug, Clone)]
pub struct InsCompaniesService {
    inner: Arc<ClientInner>,
}

impl InsCompaniesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List or search insurance companies.
    ///
    /// Without a query no parameters are sent and the server's own default
    /// page applies.
    pub async fn get_insurance_companies(
        &self,
        options: InsCompaniesOptions,
    ) -> Result<Vec<InsCompany>> {
        let mut url = self.inner.endpoint("/inscompanies")?;
        if let Some(query) = options.search_query() {
            url.query_pairs_mut()
                .append_pair("q", query)
                .append_pair("limit", &options.effective_limit().to_string());
        }

        let response = self
            .inner
            .send("get_insurance_companies", Method::GET, url, None)
            .await?;
        check_response("get_insurance_companies", response.status, &response.body)?;

        decode_companies(&response.body)
    }
}
