//! Admin-scoped claim read model.
//!
//! Tokens with admin scope receive a much wider record from the claims
//! endpoints. [`AdminClaim`] is independent of [`Claim`](crate::Claim): the two
//! share concepts but not types (liability flags are free text here).

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::types::{DocFile, LogTrail};

/// Full claim record as seen by an admin token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct AdminClaim {
    #[serde(rename = "customername")]
    pub customer_name: Option<String>,
    #[serde(rename = "customeraddress")]
    pub customer_address: Option<String>,
    #[serde(rename = "searchinfo")]
    pub search_info: Option<String>,
    pub id: Option<i64>,
    #[serde(rename = "filenumber")]
    pub file_number: Option<i64>,
    #[serde(rename = "customerid")]
    pub customer_id: Option<i64>,
    #[serde(rename = "clientclaimno")]
    pub client_claim_no: Option<String>,
    #[serde(rename = "vehyear")]
    pub veh_year: Option<i64>,
    #[serde(rename = "vehmake")]
    pub veh_make: Option<String>,
    #[serde(rename = "vehmodel")]
    pub veh_model: Option<String>,
    #[serde(rename = "vehedition")]
    pub veh_edition: Option<String>,
    pub color: Option<String>,
    pub vin: Option<String>,
    #[serde(rename = "rentername")]
    pub renter_name: Option<String>,
    #[serde(rename = "renterphone")]
    pub renter_phone: Option<String>,
    #[serde(rename = "renteremail")]
    pub renter_email: Option<String>,
    #[serde(rename = "renteraddress1")]
    pub renter_address1: Option<String>,
    #[serde(rename = "renteraddress2")]
    pub renter_address2: Option<String>,
    #[serde(rename = "rentercity")]
    pub renter_city: Option<String>,
    #[serde(rename = "renterstate")]
    pub renter_state: Option<String>,
    #[serde(rename = "renterzip")]
    pub renter_zip: Option<String>,
    #[serde(rename = "renterphone2")]
    pub renter_phone2: Option<String>,
    #[serde(rename = "policynumber")]
    pub policy_number: Option<String>,
    #[serde(rename = "drivername")]
    pub driver_name: Option<String>,
    #[serde(rename = "insurancecompany")]
    pub insurance_company: Option<String>,
    #[serde(rename = "claimnumber")]
    pub claim_number: Option<String>,
    pub adjuster: Option<String>,
    #[serde(rename = "adjusterphone")]
    pub adjuster_phone: Option<String>,
    #[serde(rename = "adjemail")]
    pub adj_email: Option<String>,
    #[serde(rename = "adjfax")]
    pub adj_fax: Option<String>,
    #[serde(rename = "dateofloss")]
    pub date_of_loss: Option<String>,
    #[serde(rename = "driverphone")]
    pub driver_phone: Option<String>,
    #[serde(rename = "driveremail")]
    pub driver_email: Option<String>,
    #[serde(rename = "physdamprice", deserialize_with = "lenient::opt_f64")]
    pub phys_dam_price: Option<f64>,
    #[serde(rename = "lossdescription")]
    pub loss_description: Option<String>,
    #[serde(rename = "damagedescription")]
    pub damage_description: Option<String>,
    #[serde(rename = "teamleader_adjid")]
    pub team_leader_adj_id: Option<i64>,
    /// Adjuster to-do note
    pub todo: Option<String>,
    #[serde(rename = "vehmileage")]
    pub veh_mileage: Option<i64>,
    #[serde(rename = "laborhours", deserialize_with = "lenient::opt_f64")]
    pub labor_hours: Option<f64>,
    #[serde(rename = "damagemodifier", deserialize_with = "lenient::opt_f64")]
    pub damage_modifier: Option<f64>,
    #[serde(rename = "dailyrent", deserialize_with = "lenient::opt_f64")]
    pub daily_rent: Option<f64>,
    #[serde(rename = "virtualassid")]
    pub virtual_ass_id: Option<i64>,
    #[serde(rename = "losstype")]
    pub loss_type: Option<String>,
    #[serde(rename = "reservecategory")]
    pub reserve_category: Option<String>,
    #[serde(rename = "catastrophedesc")]
    pub catastrophe_desc: Option<String>,
    pub catastrophe: Option<String>,
    #[serde(rename = "reserveamount", deserialize_with = "lenient::opt_f64")]
    pub reserve_amount: Option<f64>,
    #[serde(rename = "reserveamount2", deserialize_with = "lenient::opt_f64")]
    pub reserve_amount2: Option<f64>,
    #[serde(rename = "reserveamount3", deserialize_with = "lenient::opt_f64")]
    pub reserve_amount3: Option<f64>,
    #[serde(rename = "reserveamount4", deserialize_with = "lenient::opt_f64")]
    pub reserve_amount4: Option<f64>,
    #[serde(rename = "policyrequested", deserialize_with = "lenient::opt_bool")]
    pub policy_requested: Option<bool>,
    #[serde(rename = "policyreceived", deserialize_with = "lenient::opt_bool")]
    pub policy_received: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub aob: Option<bool>,
    #[serde(rename = "policereportreceived", deserialize_with = "lenient::opt_bool")]
    pub police_report_received: Option<bool>,
    #[serde(rename = "rentalagreement", deserialize_with = "lenient::opt_bool")]
    pub rental_agreement: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub poa: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub photos: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub estimate: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub lou: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub dv: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub demand: Option<bool>,
    #[serde(rename = "claimpaid", deserialize_with = "lenient::opt_bool")]
    pub claim_paid: Option<bool>,
    #[serde(rename = "invoicepaid", deserialize_with = "lenient::opt_bool")]
    pub invoice_paid: Option<bool>,
    #[serde(rename = "invsubmitted", deserialize_with = "lenient::opt_bool")]
    pub inv_submitted: Option<bool>,
    #[serde(rename = "totalloss", deserialize_with = "lenient::opt_bool")]
    pub total_loss: Option<bool>,
    #[serde(rename = "firstparty", deserialize_with = "lenient::opt_bool")]
    pub first_party: Option<bool>,
    #[serde(rename = "thirdparty", deserialize_with = "lenient::opt_bool")]
    pub third_party: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub cdw: Option<bool>,
    #[serde(rename = "cashcheck", deserialize_with = "lenient::opt_bool")]
    pub cash_check: Option<bool>,
    #[serde(rename = "policereportnumber")]
    pub police_report_number: Option<String>,
    #[serde(rename = "reportingagency")]
    pub reporting_agency: Option<String>,
    #[serde(rename = "estimateamount", deserialize_with = "lenient::opt_f64")]
    pub estimate_amount: Option<f64>,
    #[serde(rename = "lossofuseamnt", deserialize_with = "lenient::opt_f64")]
    pub loss_of_use_amount: Option<f64>,
    #[serde(rename = "dv_amnt", deserialize_with = "lenient::opt_f64")]
    pub dv_amount: Option<f64>,
    /// Free text here, unlike the boolean on [`Claim`](crate::Claim)
    #[serde(rename = "liabilityaccepted")]
    pub liability_accepted: Option<String>,
    #[serde(rename = "liabilitydenied")]
    pub liability_denied: Option<String>,
    #[serde(rename = "settlementoffer", deserialize_with = "lenient::opt_f64")]
    pub settlement_offer: Option<f64>,
    #[serde(rename = "settlementcalcpdsupd", deserialize_with = "lenient::opt_f64")]
    pub settlement_calc_pd_sup_d: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub settlement_pd: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub settlement_salvage: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub settlement_lou: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub settlement_dv: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub settlement_other: Option<f64>,
    #[serde(rename = "settlement_deductable", deserialize_with = "lenient::opt_f64")]
    pub settlement_deductible: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub supplement: Option<f64>,
    #[serde(rename = "receivedvia")]
    pub received_via: Option<String>,
    #[serde(rename = "datereceived")]
    pub date_received: Option<String>,
    #[serde(rename = "recorddate")]
    pub record_date: Option<String>,
    #[serde(rename = "appraiserid")]
    pub appraiser_id: Option<i64>,
    #[serde(rename = "insuredname")]
    pub insured_name: Option<String>,
    #[serde(rename = "insdaddress1")]
    pub insd_address1: Option<String>,
    #[serde(rename = "insdaddress2")]
    pub insd_address2: Option<String>,
    #[serde(rename = "insdcity")]
    pub insd_city: Option<String>,
    #[serde(rename = "insdstate")]
    pub insd_state: Option<String>,
    #[serde(rename = "insdzip")]
    pub insd_zip: Option<String>,
    #[serde(rename = "insdphone")]
    pub insd_phone: Option<String>,
    #[serde(rename = "insdphone2")]
    pub insd_phone2: Option<String>,
    #[serde(rename = "insdemail")]
    pub insd_email: Option<String>,
    pub risk: Option<String>,
    #[serde(rename = "risklocname")]
    pub risk_loc_name: Option<String>,
    #[serde(rename = "riskaddress")]
    pub risk_address: Option<String>,
    #[serde(rename = "riskcity")]
    pub risk_city: Option<String>,
    #[serde(rename = "riskstate")]
    pub risk_state: Option<String>,
    #[serde(rename = "riskzip")]
    pub risk_zip: Option<String>,
    #[serde(rename = "riskcontact")]
    pub risk_contact: Option<String>,
    #[serde(rename = "riskphone")]
    pub risk_phone: Option<String>,
    #[serde(rename = "clmtname")]
    pub clmt_name: Option<String>,
    #[serde(rename = "clmtaddress1")]
    pub clmt_address1: Option<String>,
    #[serde(rename = "clmtaddress2")]
    pub clmt_address2: Option<String>,
    #[serde(rename = "clmtcity")]
    pub clmt_city: Option<String>,
    #[serde(rename = "clmtstate")]
    pub clmt_state: Option<String>,
    #[serde(rename = "clmtzip")]
    pub clmt_zip: Option<String>,
    #[serde(rename = "clmtphone")]
    pub clmt_phone: Option<String>,
    #[serde(rename = "clmtphone2")]
    pub clmt_phone2: Option<String>,
    #[serde(rename = "clmtemail")]
    pub clmt_email: Option<String>,
    #[serde(rename = "daterptdue")]
    pub date_rpt_due: Option<String>,
    #[serde(rename = "nextstatusdue")]
    pub next_status_due: Option<String>,
    #[serde(rename = "adjusterdiarydate")]
    pub adjuster_diary_date: Option<String>,
    #[serde(rename = "daysuntilrptdue")]
    pub days_until_rpt_due: Option<i64>,
    #[serde(rename = "hc_adjid")]
    pub hc_adj_id: Option<i64>,
    #[serde(rename = "assist_adjid")]
    pub assist_adj_id: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub amt_inv: Option<f64>,
    #[serde(rename = "hcadjuster")]
    pub hc_adjuster: Option<String>,
    #[serde(rename = "hcajusteremail")]
    pub hc_adjuster_email: Option<String>,
    #[serde(rename = "hcassistantadjuster")]
    pub hc_assistant_adjuster: Option<String>,
    pub appraiser: Option<String>,
    #[serde(rename = "appraiserdeskstandardfee", deserialize_with = "lenient::opt_f64")]
    pub appraiser_desk_standard_fee: Option<f64>,
    #[serde(rename = "appraiserdeskexoticfee", deserialize_with = "lenient::opt_f64")]
    pub appraiser_desk_exotic_fee: Option<f64>,
    #[serde(rename = "platenumber")]
    pub plate_number: Option<String>,
    #[serde(rename = "unitnumber")]
    pub unit_number: Option<String>,
    #[serde(rename = "ackemaildatesent")]
    pub ack_email_date_sent: Option<String>,
    #[serde(rename = "interimsubmittedamt", deserialize_with = "lenient::opt_f64")]
    pub interim_submitted_amt: Option<f64>,
    #[serde(rename = "interiminvoiceamt", deserialize_with = "lenient::opt_f64")]
    pub interim_invoice_amt: Option<f64>,
    #[serde(rename = "inspectiondate")]
    pub inspection_date: Option<String>,
    #[serde(rename = "administrativefee", deserialize_with = "lenient::opt_f64")]
    pub administrative_fee: Option<f64>,
    #[serde(rename = "appraisalfee", deserialize_with = "lenient::opt_f64")]
    pub appraisal_fee: Option<f64>,
    #[serde(rename = "datefileclosed")]
    pub date_file_closed: Option<String>,
    #[serde(rename = "settdamagedeposit", deserialize_with = "lenient::opt_f64")]
    pub sett_damage_deposit: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub demand_admin_fee: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub demand_appraisal_fee: Option<f64>,
    #[serde(rename = "businessphone")]
    pub business_phone: Option<String>,
    #[serde(rename = "homephone")]
    pub home_phone: Option<String>,
    #[serde(rename = "mobilephone")]
    pub mobile_phone: Option<String>,
    #[serde(rename = "faxnumber")]
    pub fax_number: Option<String>,
    #[serde(rename = "claimtype")]
    pub claim_type: Option<String>,
    #[serde(rename = "customeremail1")]
    pub customer_email1: Option<String>,
    #[serde(rename = "customeremail2")]
    pub customer_email2: Option<String>,
    #[serde(rename = "ackemails")]
    pub ack_emails: Option<String>,
    #[serde(rename = "clienthourlyrate", deserialize_with = "lenient::opt_f64")]
    pub client_hourly_rate: Option<f64>,
    #[serde(rename = "claimrate", deserialize_with = "lenient::opt_f64")]
    pub claim_rate: Option<f64>,
    #[serde(rename = "hidebydefault")]
    pub hide_by_default: Option<i64>,
    #[serde(rename = "isflat", deserialize_with = "lenient::opt_bool")]
    pub is_flat: Option<bool>,
    #[serde(rename = "inscheckreceived", deserialize_with = "lenient::opt_bool")]
    pub ins_check_received: Option<bool>,
    #[serde(rename = "claimduration")]
    pub claim_duration: Option<i64>,
    #[serde(rename = "claimstatusid")]
    pub claim_status_id: Option<i64>,
    #[serde(rename = "insclaim")]
    pub ins_claim: Option<String>,
    #[serde(rename = "claimstatusname")]
    pub claim_status_name: Option<String>,
    #[serde(rename = "inspnotneeded", deserialize_with = "lenient::opt_bool")]
    pub insp_not_needed: Option<bool>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub acv: Option<f64>,
    #[serde(rename = "salvagequote", deserialize_with = "lenient::opt_f64")]
    pub salvage_quote: Option<f64>,
    #[serde(rename = "ranumber")]
    pub ra_number: Option<String>,
    #[serde(rename = "settlementtowing", deserialize_with = "lenient::opt_f64")]
    pub settlement_towing: Option<f64>,
    #[serde(rename = "settlementstorage", deserialize_with = "lenient::opt_f64")]
    pub settlement_storage: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub towing: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub storage: Option<f64>,
    #[serde(rename = "salesrepname")]
    pub sales_rep_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub locked: Option<bool>,
    #[serde(rename = "settlement_totalloss", deserialize_with = "lenient::opt_f64")]
    pub settlement_total_loss: Option<f64>,
    #[serde(rename = "dmgdepcollected", deserialize_with = "lenient::opt_f64")]
    pub dmg_dep_collected: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_f64")]
    pub deductible: Option<f64>,
    #[serde(rename = "invnotes")]
    pub inv_notes: Option<String>,
    #[serde(rename = "towingstorage")]
    pub towing_storage: Option<String>,
    pub ownership: Option<String>,
    #[serde(rename = "policefire")]
    pub police_fire: Option<String>,
    pub salvage: Option<String>,
    #[serde(rename = "useofexpert")]
    pub use_of_expert: Option<String>,
    #[serde(rename = "bodilyinjury")]
    pub bodily_injury: Option<String>,
    #[serde(rename = "docfiles", deserialize_with = "lenient::vec_or_null")]
    pub doc_files: Vec<DocFile>,
    #[serde(rename = "logtrail", deserialize_with = "lenient::vec_or_null")]
    pub log_trail: Vec<LogTrail>,
    #[serde(rename = "paymentmethod")]
    pub payment_method: Option<String>,
    #[serde(rename = "openagreementdate")]
    pub open_agreement_date: Option<String>,
    #[serde(rename = "closedagreementdate")]
    pub closed_agreement_date: Option<String>,
    #[serde(rename = "reportbeforerentaldate")]
    pub report_before_rental_date: Option<String>,
    #[serde(rename = "reportafterrentaldate")]
    pub report_after_rental_date: Option<String>,
    #[serde(rename = "reportdate")]
    pub report_date: Option<String>,
    #[serde(rename = "endrentalperioddate")]
    pub end_rental_period_date: Option<String>,
    #[serde(rename = "startrentalperioddate")]
    pub start_rental_period_date: Option<String>,
    #[serde(rename = "birthyear")]
    pub birth_year: Option<i64>,
    #[serde(rename = "handlingstartdate")]
    pub handling_start_date: Option<String>,
    #[serde(rename = "demanddate")]
    pub demand_date: Option<String>,
    #[serde(rename = "policystartdate")]
    pub policy_start_date: Option<String>,
    #[serde(rename = "policyenddate")]
    pub policy_end_date: Option<String>,
    #[serde(rename = "vehicleowner")]
    pub vehicle_owner: Option<String>,
}
