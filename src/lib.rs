//! # Hawkeye Rust SDK
//!
//! An async client for the Hawkeye claims-management REST API: create and
//! fetch claims, attach documents, append log trail entries and look up
//! insurance companies.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hawkeye_sdk::{Client, DocType, GetClaimsOptions, UploadFileOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("my-bearer-token")?;
//!
//!     let claims = client.claims().get_claims(GetClaimsOptions::new()).await?;
//!     println!("{} open claims", claims.len());
//!
//!     let ack = client
//!         .doc_files()
//!         .upload_file(
//!             1042,
//!             "https://files.example.com/police-report.pdf",
//!             UploadFileOptions::new().category(DocType::PoliceReport),
//!         )
//!         .await?;
//!     println!("{}", ack.message);
//!
//!     Ok(())
//! }
//! ```
//!
//! Requests are logged through `tracing` when enabled on the builder with
//! [`ClientBuilder::with_logging`]; the bearer token is never logged.

pub mod admin;
pub mod claims;
pub mod client;
pub mod config;
pub mod doc_files;
pub mod doc_type;
pub mod error;
pub mod ins_companies;
pub mod log_trails;
pub mod types;

mod lenient;


// Re-export commonly used types for convenience
pub use admin::AdminClaim;
pub use claims::{ClaimsService, GetClaimsOptions};
pub use client::{Client, RequestMiddleware};
pub use config::{ClientBuilder, Config, Environment, LogTrailEndpoint};
pub use doc_files::{DocFilesService, UploadFileOptions};
pub use doc_type::DocType;
pub use error::{Error, ErrorCategory};
pub use ins_companies::{InsCompaniesOptions, InsCompaniesService};
pub use log_trails::{LogTrailOptions, LogTrailsService};
pub use types::{ApiResponse, Claim, ClaimPost, DocFile, InsCompany, LogTrail};

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;
