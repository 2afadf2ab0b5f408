//! Claims resource: create, update and fetch claims.

use std::sync::Arc;

use reqwest::Method;

use crate::{
    client::ClientInner,
    error::Error,
    types::{ApiResponse, Claim, ClaimPost},
    Result,
};

/// Required fields for a create, in reporting order
const REQUIRED_FIELDS: [&str; 7] = [
    "RenterName",
    "InsuranceCompany",
    "DateOfLoss",
    "VehMake",
    "VehModel",
    "VehColor",
    "VehVIN",
];

impl ClaimPost {
    /// Names of the fields that must be non-blank before a create
    pub fn required_fields() -> Vec<&'static str> {
        REQUIRED_FIELDS.to_vec()
    }

    /// Check every required field is non-blank after trimming.
    ///
    /// The error lists all missing fields, not just the first one found.
    pub fn validate_for_create(&self) -> Result<()> {
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .zip(self.required_values())
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(missing))
        }
    }

    /// Values of the required fields, aligned with `REQUIRED_FIELDS`
    fn required_values(&self) -> [&str; 7] {
        [
            self.renter_name.as_str(),
            self.insurance_company.as_str(),
            self.date_of_loss.as_str(),
            self.veh_make.as_str(),
            self.veh_model.as_str(),
            self.veh_color.as_str(),
            self.veh_vin.as_str(),
        ]
    }
}

/// Options for [`ClaimsService::get_claims`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetClaimsOptions {
    /// Include closed/inactive claims (default `false`)
    pub include_inactive: bool,
}

impl GetClaimsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include closed/inactive claims
    pub fn include_inactive(mut self, include: bool) -> Self {
        self.include_inactive = include;
        self
    }
}

/// Claims endpoints, obtained from [`Client::claims`](crate::Client::claims)
#[derive(Debug, Clone)]
pub struct ClaimsService {
    inner: Arc<ClientInner>,
}

impl ClaimsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a claim.
    ///
    /// Required fields are validated first; when any are blank no request is
    /// sent and [`Error::Validation`] names all of them.
    pub async fn create_claim(&self, claim: &ClaimPost) -> Result<ApiResponse> {
        if let Err(err) = claim.validate_for_create() {
            tracing::debug!(error = %err, "Claim rejected before create");
            return Err(err);
        }

        let body = serde_json::to_value(claim)?;
        let url = self.inner.endpoint("/createclaim")?;
        self.inner
            .execute("create_claim", Method::POST, url, Some(body))
            .await
    }

    /// Update a claim.
    ///
    /// Partial updates are expected, so no required-field validation runs.
    pub async fn update_claim(&self, claim: &ClaimPost) -> Result<ApiResponse> {
        let body = serde_json::to_value(claim)?;
        let url = self.inner.endpoint("/updateclaim")?;
        self.inner
            .execute("update_claim", Method::POST, url, Some(body))
            .await
    }

    /// Fetch one claim by file number.
    ///
    /// The endpoint answers with a list; an empty list is
    /// [`Error::NotFound`], otherwise the first element is returned.
    pub async fn get_single_claim(&self, file_number: i64) -> Result<Claim> {
        let url = self.inner.endpoint(&format!("/getclaims/{}", file_number))?;
        let claims: Vec<Claim> = self
            .inner
            .execute("get_single_claim", Method::GET, url, None)
            .await?;

        claims.into_iter().next().ok_or_else(|| {
            Error::NotFound(format!("no claim found with filenumber {}", file_number))
        })
    }

    /// Fetch every claim visible to the token, without pagination
    pub async fn get_claims(&self, options: GetClaimsOptions) -> Result<Vec<Claim>> {
        let url = self
            .inner
            .endpoint(&format!("/getclaims/all/{}", options.include_inactive))?;
        self.inner.execute("get_claims", Method::GET, url, None).await
    }
}
