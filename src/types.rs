//! Core types and data models for the Hawkeye API.
//!
//! This module contains the request and response types shared by the claims,
//! document-file, log-trail and insurance-company endpoints. Read models are
//! decoded tolerantly: every field is optional and unknown keys are ignored.

use serde::{Deserialize, Serialize};

use crate::doc_type::DocType;
use crate::lenient;

/// Acknowledgement envelope returned by every write operation.
///
/// # Examples
///
/// ```rust
/// use hawkeye_sdk::ApiResponse;
///
/// let ack: ApiResponse = serde_json::from_str(
///     r#"{"filenumber": 1042, "message": "Claim created", "error": 0, "success": true}"#,
/// ).unwrap();
/// assert!(ack.success);
/// assert_eq!(ack.file_number, 1042);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ApiResponse {
    /// File number the operation applied to
    #[serde(rename = "filenumber", deserialize_with = "lenient::null_as_default")]
    pub file_number: i64,
    /// Human-readable result message, empty when the server sends `null`
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub message: String,
    /// Numeric error code, `0` on success
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub error: i64,
    /// Whether the server accepted the write
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub success: bool,
}

/// Write model for creating or updating a claim.
///
/// The seven required fields are checked client-side before a create call
/// (see [`ClaimPost::validate_for_create`]); optional fields are omitted from
/// the request body when unset.
///
/// # Examples
///
/// ```rust
/// use hawkeye_sdk::ClaimPost;
///
/// let claim = ClaimPost {
///     renter_name: "Jordan Reyes".to_string(),
///     insurance_company: "State Farm".to_string(),
///     date_of_loss: "2024-03-14".to_string(),
///     veh_make: "Ford".to_string(),
///     veh_model: "Transit".to_string(),
///     veh_color: "White".to_string(),
///     veh_vin: "1FTBW3XM6HKA12345".to_string(),
///     claim_number: Some("SF-88213".to_string()),
///     ..Default::default()
/// };
/// assert!(claim.validate_for_create().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct ClaimPost {
    #[serde(rename = "filenumber", skip_serializing_if = "Option::is_none")]
    pub file_number: Option<i64>,
    #[serde(rename = "clientclaimno", skip_serializing_if = "Option::is_none")]
    pub client_claim_no: Option<String>,
    #[serde(rename = "rentername")]
    pub renter_name: String,
    #[serde(rename = "renterphone", skip_serializing_if = "Option::is_none")]
    pub renter_phone: Option<String>,
    #[serde(rename = "renteremail", skip_serializing_if = "Option::is_none")]
    pub renter_email: Option<String>,
    #[serde(rename = "insurancecompany")]
    pub insurance_company: String,
    #[serde(rename = "claimnumber", skip_serializing_if = "Option::is_none")]
    pub claim_number: Option<String>,
    #[serde(rename = "insuredname", skip_serializing_if = "Option::is_none")]
    pub insured_name: Option<String>,
    #[serde(rename = "policynumber", skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(rename = "dateofloss")]
    pub date_of_loss: String,
    #[serde(rename = "vehyear", skip_serializing_if = "Option::is_none")]
    pub veh_year: Option<i32>,
    #[serde(rename = "vehmake")]
    pub veh_make: String,
    #[serde(rename = "vehmodel")]
    pub veh_model: String,
    #[serde(rename = "vehcolor")]
    pub veh_color: String,
    #[serde(rename = "vehvin")]
    pub veh_vin: String,
    #[serde(rename = "vehedition", skip_serializing_if = "Option::is_none")]
    pub veh_edition: Option<String>,
    #[serde(rename = "vehplatenumber", skip_serializing_if = "Option::is_none")]
    pub veh_plate_number: Option<String>,
    #[serde(rename = "vehunitnumber", skip_serializing_if = "Option::is_none")]
    pub veh_unit_number: Option<String>,
    #[serde(rename = "vehlocationdetails", skip_serializing_if = "Option::is_none")]
    pub veh_location_details: Option<String>,
    #[serde(rename = "vehlocationcity", skip_serializing_if = "Option::is_none")]
    pub veh_location_city: Option<String>,
    #[serde(rename = "vehlocationstate", skip_serializing_if = "Option::is_none")]
    pub veh_location_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A document attached to a claim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct DocFile {
    #[serde(rename = "doctype")]
    pub doc_type: DocType,
    #[serde(rename = "dateadded")]
    pub date_added: String,
    /// User who uploaded the document
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub filename: String,
}

/// One entry in a claim's activity log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct LogTrail {
    pub date: String,
    pub activity: String,
    pub user: String,
}

/// An insurance company known to the API.
///
/// `probability` is only populated by the fuzzy-search form of the lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct InsCompany {
    pub id: i64,
    pub name: String,
    /// Match score from a search, absent in the unfiltered listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

/// Read model for a claim as returned by `/getclaims`.
///
/// Flags and amounts are decoded leniently because the API mixes booleans,
/// `0`/`1` and numeric strings across records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct Claim {
    #[serde(rename = "filenumber")]
    pub file_number: Option<i64>,
    #[serde(rename = "customername")]
    pub customer_name: Option<String>,
    #[serde(rename = "clientclaimno")]
    pub client_claim_no: Option<String>,
    #[serde(rename = "rentername")]
    pub renter_name: Option<String>,
    #[serde(rename = "renterphone")]
    pub renter_phone: Option<String>,
    #[serde(rename = "renteremail")]
    pub renter_email: Option<String>,
    #[serde(rename = "ranumber")]
    pub ra_number: Option<String>,
    #[serde(rename = "insuredname")]
    pub insured_name: Option<String>,
    #[serde(rename = "insurancecompany")]
    pub insurance_company: Option<String>,
    #[serde(rename = "claimnumber")]
    pub claim_number: Option<String>,
    #[serde(rename = "policynumber")]
    pub policy_number: Option<String>,
    #[serde(rename = "dateofloss")]
    pub date_of_loss: Option<String>,
    pub adjuster: Option<String>,
    #[serde(rename = "adjusterphone")]
    pub adjuster_phone: Option<String>,
    #[serde(rename = "firstparty", deserialize_with = "lenient::opt_bool")]
    pub first_party: Option<bool>,
    #[serde(rename = "thirdparty", deserialize_with = "lenient::opt_bool")]
    pub third_party: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub cdw: Option<bool>,
    #[serde(rename = "hc_adj")]
    pub hc_adj: Option<String>,
    #[serde(rename = "officephone")]
    pub office_phone: Option<String>,
    pub email: Option<String>,
    pub vin: Option<String>,
    #[serde(rename = "vehyear")]
    pub veh_year: Option<i32>,
    #[serde(rename = "vehmake")]
    pub veh_make: Option<String>,
    #[serde(rename = "vehmodel")]
    pub veh_model: Option<String>,
    #[serde(rename = "vehedition")]
    pub veh_edition: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "platenumber")]
    pub plate_number: Option<String>,
    #[serde(rename = "unitnumber")]
    pub unit_number: Option<String>,
    #[serde(rename = "vehlocationdetails")]
    pub veh_location_details: Option<String>,
    #[serde(rename = "vehlocationcity")]
    pub veh_location_city: Option<String>,
    #[serde(rename = "vehlocationstate")]
    pub veh_location_state: Option<String>,
    pub note: Option<String>,
    #[serde(rename = "inspectiondate")]
    pub inspection_date: Option<String>,
    #[serde(rename = "estimateamount", deserialize_with = "lenient::opt_f64")]
    pub estimate_amount: Option<f64>,
    #[serde(rename = "totalloss", deserialize_with = "lenient::opt_bool")]
    pub total_loss: Option<bool>,
    #[serde(rename = "continuedrentalamt", deserialize_with = "lenient::opt_f64")]
    pub continued_rental_amt: Option<f64>,
    #[serde(rename = "dv_amt", deserialize_with = "lenient::opt_f64")]
    pub dv_amt: Option<f64>,
    /// Decoded as a flag from booleans, `0`/`1` and yes/no text.
    ///
    /// Free text such as `"50% accepted"` is not a flag and decodes to `None`,
    /// so the original wording is lost; read [`AdminClaim`](crate::AdminClaim)
    /// when the text itself matters.
    #[serde(rename = "liabilityaccepted", deserialize_with = "lenient::opt_bool")]
    pub liability_accepted: Option<bool>,
    /// Same decoding as `liability_accepted`: free text becomes `None`
    #[serde(rename = "liabilitydenied", deserialize_with = "lenient::opt_bool")]
    pub liability_denied: Option<bool>,
    #[serde(rename = "settlement_pd", deserialize_with = "lenient::opt_f64")]
    pub settlement_pd: Option<f64>,
    #[serde(rename = "settlement_salvage", deserialize_with = "lenient::opt_f64")]
    pub settlement_salvage: Option<f64>,
    #[serde(rename = "settlement_cr", deserialize_with = "lenient::opt_f64")]
    pub settlement_cr: Option<f64>,
    #[serde(rename = "settlement_dv", deserialize_with = "lenient::opt_f64")]
    pub settlement_dv: Option<f64>,
    #[serde(rename = "settlement_other", deserialize_with = "lenient::opt_f64")]
    pub settlement_other: Option<f64>,
    #[serde(rename = "settlement_deductable", deserialize_with = "lenient::opt_f64")]
    pub settlement_deductible: Option<f64>,
    #[serde(rename = "administrativefee", deserialize_with = "lenient::opt_f64")]
    pub administrative_fee: Option<f64>,
    #[serde(rename = "appraisalfee", deserialize_with = "lenient::opt_f64")]
    pub appraisal_fee: Option<f64>,
    #[serde(rename = "datefileclosed")]
    pub date_file_closed: Option<String>,
    #[serde(rename = "settlementoffer", deserialize_with = "lenient::opt_f64")]
    pub settlement_offer: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub supplement: Option<f64>,
    #[serde(rename = "settlementtowing", deserialize_with = "lenient::opt_f64")]
    pub settlement_towing: Option<f64>,
    #[serde(rename = "settlementstorage", deserialize_with = "lenient::opt_f64")]
    pub settlement_storage: Option<f64>,
    #[serde(rename = "demand_admin_fee", deserialize_with = "lenient::opt_f64")]
    pub demand_admin_fee: Option<f64>,
    #[serde(rename = "demand_appraisal_fee", deserialize_with = "lenient::opt_f64")]
    pub demand_appraisal_fee: Option<f64>,
    #[serde(rename = "estimateddate")]
    pub estimated_date: Option<String>,
    #[serde(rename = "demandate")]
    pub demand_date: Option<String>,
    #[serde(rename = "policystartdate")]
    pub policy_start_date: Option<String>,
    #[serde(rename = "policyenddate")]
    pub policy_end_date: Option<String>,
    #[serde(rename = "vehicleowner")]
    pub vehicle_owner: Option<String>,
    #[serde(rename = "docfiles", deserialize_with = "lenient::vec_or_null")]
    pub doc_files: Vec<DocFile>,
    #[serde(rename = "logtrail", deserialize_with = "lenient::vec_or_null")]
    pub log_trail: Vec<LogTrail>,
}
