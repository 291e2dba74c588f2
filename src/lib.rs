//! Typed Rust client for the QuestBlue SecureFax REST API.
//!
//! The crate is split in three layers: a domain layer of validated types and
//! request values, a transport layer describing each operation's HTTP shape and
//! wire-format quirks, and a small client layer that authenticates, sends and
//! classifies responses.
//!
//! ```rust,no_run
//! use genesis::{Genesis, GenesisError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GenesisError> {
//!     let client = Genesis::builder()
//!         .username("user")
//!         .password("secret")
//!         .api_key("...")
//!         .sandbox(true)
//!         .build()?;
//!
//!     let company = client.secure_fax().company().create("Acme").await?;
//!     let dids = client.secure_fax().did().list(company.id.as_str()).await?;
//!     println!("{} has {} DIDs", company.name, dids.total);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiFailure, CompanyResource, DidResource, Genesis, GenesisBuilder, GenesisError,
    ManagerResource, SecureFaxResource, UsersResource,
};
pub use domain::{
    ApiKey, CompanyData, CompanyId, CompanyName, CreateAdministrator, CreateCompany, CreateDid,
    DeleteCompany, DeleteDid, DidData, DidId, DidListData, DidNumber, Email, GetCompanies,
    ListAvailableDids, ListDids, ListUsers, LockCompany, Pagination, Password, Service,
    UnlockCompany, UserData, Username, ValidationError,
};
pub use transport::{DecodeError, Method, Request, Response};
