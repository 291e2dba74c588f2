//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod service;
mod validation;
mod value;

pub use request::{
    CreateAdministrator, CreateCompany, CreateDid, DEFAULT_PAGE, DeleteCompany, DeleteDid,
    GetCompanies, ListAvailableDids, ListDids, ListUsers, LockCompany, Pagination, UnlockCompany,
};
pub use response::{CompanyData, DidData, DidListData, UserData};
pub use service::Service;
pub use validation::ValidationError;
pub use value::{ApiKey, CompanyId, CompanyName, DidId, DidNumber, Email, Password, Username};
