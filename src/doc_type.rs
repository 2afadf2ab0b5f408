//! Document categories attached to uploaded claim files.
//!
//! The declaration order of [`DocType`] is the integer wire encoding used by the
//! API, so variants must never be reordered.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Closed set of categories for a document attached to a claim.
///
/// On the wire a category is either its ordinal (`0` is [`DocType::Default`])
/// or its display label, matched case-insensitively.
///
/// # Examples
///
/// ```rust
/// use hawkeye_sdk::DocType;
///
/// let doc_type: DocType = "police report".parse().unwrap();
/// assert_eq!(doc_type, DocType::PoliceReport);
/// assert_eq!(doc_type.to_string(), "Police Report");
/// assert_eq!(DocType::from_ordinal(38), DocType::PoliceReport);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum DocType {
    #[default]
    Default,
    FirstReport,
    SecondReport,
    ThirdReport,
    Acknowledgement,
    Aob,
    AssignmentSheet,
    Bill,
    BillOfLading,
    CallRecording,
    CashCall,
    CheckInVideo,
    CheckOutVideo,
    ConditionReport,
    DamageAssessment,
    DeductibleRequestFinalNotice,
    DeductibleRequestFirstNotice,
    DeliveryConfirmation,
    Demand,
    DemandLetter,
    DenialLetter,
    DriverExchange,
    DriversLicense,
    DvForm,
    Email,
    ExpenseReceipt,
    HcDamageAppraisal,
    Images,
    IncidentReport,
    InsuranceCard,
    Invoice,
    LienholderInfo,
    MarketValuation,
    MitigationLetter,
    NonHcDamageAppraisal,
    Other,
    PaymentAdvisoryLetter,
    PaymentConfirmation,
    PoliceReport,
    Policy,
    Poa,
    RecordedStatement,
    Registration,
    Release,
    RentalAgreement,
    ReserveReport,
    SettlementCheck,
    StatusReport,
    Title,
    TowBill,
    TrailerInterchangeAgreement,
    VehicleHistory,
    VehicleSpecifications,
    VendorInvoice,
    InterimInvoice,
    FinalInvoice,
}

impl DocType {
    /// Every category in wire order
    pub const ALL: [DocType; 56] = [
        DocType::Default,
        DocType::FirstReport,
        DocType::SecondReport,
        DocType::ThirdReport,
        DocType::Acknowledgement,
        DocType::Aob,
        DocType::AssignmentSheet,
        DocType::Bill,
        DocType::BillOfLading,
        DocType::CallRecording,
        DocType::CashCall,
        DocType::CheckInVideo,
        DocType::CheckOutVideo,
        DocType::ConditionReport,
        DocType::DamageAssessment,
        DocType::DeductibleRequestFinalNotice,
        DocType::DeductibleRequestFirstNotice,
        DocType::DeliveryConfirmation,
        DocType::Demand,
        DocType::DemandLetter,
        DocType::DenialLetter,
        DocType::DriverExchange,
        DocType::DriversLicense,
        DocType::DvForm,
        DocType::Email,
        DocType::ExpenseReceipt,
        DocType::HcDamageAppraisal,
        DocType::Images,
        DocType::IncidentReport,
        DocType::InsuranceCard,
        DocType::Invoice,
        DocType::LienholderInfo,
        DocType::MarketValuation,
        DocType::MitigationLetter,
        DocType::NonHcDamageAppraisal,
        DocType::Other,
        DocType::PaymentAdvisoryLetter,
        DocType::PaymentConfirmation,
        DocType::PoliceReport,
        DocType::Policy,
        DocType::Poa,
        DocType::RecordedStatement,
        DocType::Registration,
        DocType::Release,
        DocType::RentalAgreement,
        DocType::ReserveReport,
        DocType::SettlementCheck,
        DocType::StatusReport,
        DocType::Title,
        DocType::TowBill,
        DocType::TrailerInterchangeAgreement,
        DocType::VehicleHistory,
        DocType::VehicleSpecifications,
        DocType::VendorInvoice,
        DocType::InterimInvoice,
        DocType::FinalInvoice,
    ];

    /// Display label sent to and accepted from the API
    pub fn label(&self) -> &'static str {
        match self {
            DocType::Default => "Uncategorized API Document",
            DocType::FirstReport => "1st Report",
            DocType::SecondReport => "2nd Report",
            DocType::ThirdReport => "3rd Report",
            DocType::Acknowledgement => "Acknowledgement",
            DocType::Aob => "Assignment of Benefits",
            DocType::AssignmentSheet => "Assignment Sheet",
            DocType::Bill => "Bill",
            DocType::BillOfLading => "Bill of Lading",
            DocType::CallRecording => "Call Recording",
            DocType::CashCall => "Cash Call",
            DocType::CheckInVideo => "Check-in Video (Drop-Off)",
            DocType::CheckOutVideo => "Check-out Video (Pick up)",
            DocType::ConditionReport => "Condition Report",
            DocType::DamageAssessment => "Damage Assessment",
            DocType::DeductibleRequestFinalNotice => "Deductible Request Final Notice",
            DocType::DeductibleRequestFirstNotice => "Deductible Request First Notice",
            DocType::DeliveryConfirmation => "Delivery Confirmation",
            DocType::Demand => "Demand",
            DocType::DemandLetter => "Demand Letter",
            DocType::DenialLetter => "Denial Letter",
            DocType::DriverExchange => "Driver Exchange",
            DocType::DriversLicense => "Drivers License",
            DocType::DvForm => "DV Form",
            DocType::Email => "Email",
            DocType::ExpenseReceipt => "Expense Receipt",
            DocType::HcDamageAppraisal => "HC Damage Appraisal",
            DocType::Images => "Images",
            DocType::IncidentReport => "Incident Report",
            DocType::InsuranceCard => "Insurance Card",
            DocType::Invoice => "Invoice",
            DocType::LienholderInfo => "Lienholder Info",
            DocType::MarketValuation => "Market Valuation",
            DocType::MitigationLetter => "Mitigation Letter",
            DocType::NonHcDamageAppraisal => "Non-HC Damage Appraisal",
            DocType::Other => "Other",
            DocType::PaymentAdvisoryLetter => "Payment Advisory Letter",
            DocType::PaymentConfirmation => "Payment Confirmation",
            DocType::PoliceReport => "Police Report",
            DocType::Policy => "Policy",
            DocType::Poa => "Power of Attorney",
            DocType::RecordedStatement => "Recorded Statement",
            DocType::Registration => "Registration",
            DocType::Release => "Release",
            DocType::RentalAgreement => "Rental Agreement",
            DocType::ReserveReport => "Reserve Report",
            DocType::SettlementCheck => "Settlement Check",
            DocType::StatusReport => "Status Report",
            DocType::Title => "Title",
            DocType::TowBill => "Tow Bill",
            DocType::TrailerInterchangeAgreement => "Trailer Interchange Agreement",
            DocType::VehicleHistory => "Vehicle History",
            DocType::VehicleSpecifications => "Vehicle Specifications",
            DocType::VendorInvoice => "Vendor Inv",
            DocType::InterimInvoice => "Interim Invoice",
            DocType::FinalInvoice => "Final Invoice",
        }
    }

    /// Integer wire encoding
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Map an integer wire value to a category.
    ///
    /// Ordinals outside the known range map to [`DocType::Default`], the
    /// category every unknown value is displayed as.
    pub fn from_ordinal(ordinal: i64) -> Self {
        usize::try_from(ordinal)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or_default()
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|doc_type| doc_type.label().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| Error::InvalidDocType(trimmed.to_string()))
    }
}

impl Serialize for DocType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for DocType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocTypeVisitor)
    }
}

struct DocTypeVisitor;

impl<'de> Visitor<'de> for DocTypeVisitor {
    type Value = DocType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a document type ordinal or label")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<DocType, E> {
        Ok(DocType::from_ordinal(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<DocType, E> {
        Ok(i64::try_from(v).map(DocType::from_ordinal).unwrap_or_default())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DocType, E> {
        v.parse().map_err(E::custom)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for DocType {
    fn schema_name() -> String {
        "DocType".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <u8 as schemars::JsonSchema>::json_schema(gen)
    }
}
