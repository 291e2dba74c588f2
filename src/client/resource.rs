//! Grouped entry points mirroring the SecureFax URL tree.
//!
//! Each method validates its arguments, builds the matching request and sends it
//! through the owning [`Genesis`]. Validation failures are returned before any
//! network traffic.

use super::{Genesis, GenesisError};
use crate::domain::{
    CompanyData, CompanyId, CompanyName, CreateAdministrator, CreateCompany, CreateDid,
    DeleteCompany, DeleteDid, DidId, DidListData, DidNumber, Email, GetCompanies,
    ListAvailableDids, ListDids, ListUsers, LockCompany, Pagination, Password, UnlockCompany,
    UserData,
};
use crate::transport::Response;

/// `secure_fax()` root.
#[derive(Debug, Clone, Copy)]
pub struct SecureFaxResource<'a> {
    genesis: &'a Genesis,
}

impl<'a> SecureFaxResource<'a> {
    pub(super) fn new(genesis: &'a Genesis) -> Self {
        Self { genesis }
    }

    pub fn company(&self) -> CompanyResource<'a> {
        CompanyResource {
            genesis: self.genesis,
        }
    }

    pub fn did(&self) -> DidResource<'a> {
        DidResource {
            genesis: self.genesis,
        }
    }

    pub fn users(&self) -> UsersResource<'a> {
        UsersResource {
            genesis: self.genesis,
        }
    }
}

/// Company management (`/manager/company`).
#[derive(Debug, Clone, Copy)]
pub struct CompanyResource<'a> {
    genesis: &'a Genesis,
}

impl CompanyResource<'_> {
    /// List companies; `None` requests the first page.
    pub async fn list(&self, pagination: Option<Pagination>) -> Result<Response, GenesisError> {
        self.genesis.send_dto(&GetCompanies::new(pagination)).await
    }

    pub async fn create(&self, name: impl Into<String>) -> Result<CompanyData, GenesisError> {
        let request = CreateCompany::new(CompanyName::new(name)?);
        self.genesis.send_dto(&request).await
    }

    pub async fn delete(&self, company_id: impl Into<String>) -> Result<Response, GenesisError> {
        let request = DeleteCompany::new(CompanyId::new(company_id)?);
        self.genesis.send_dto(&request).await
    }

    pub async fn lock(&self, company_id: impl Into<String>) -> Result<CompanyData, GenesisError> {
        let request = LockCompany::new(CompanyId::new(company_id)?);
        self.genesis.send_dto(&request).await
    }

    pub async fn unlock(
        &self,
        company_id: impl Into<String>,
    ) -> Result<CompanyData, GenesisError> {
        let request = UnlockCompany::new(CompanyId::new(company_id)?);
        self.genesis.send_dto(&request).await
    }
}

/// DID numbers.
#[derive(Debug, Clone, Copy)]
pub struct DidResource<'a> {
    genesis: &'a Genesis,
}

impl DidResource<'_> {
    /// DIDs assigned to a company, with the total count across all pages.
    pub async fn list(&self, company_id: impl Into<String>) -> Result<DidListData, GenesisError> {
        let request = ListDids::new(CompanyId::new(company_id)?);
        self.genesis.send_dto(&request).await
    }

    /// DIDs that can still be assigned.
    pub async fn available(&self) -> Result<Response, GenesisError> {
        self.genesis.send_dto(&ListAvailableDids).await
    }

    pub async fn create(
        &self,
        number: impl Into<String>,
        company_id: impl Into<String>,
        description: Option<String>,
        name: Option<String>,
    ) -> Result<Response, GenesisError> {
        let request = CreateDid::new(
            DidNumber::new(number)?,
            CompanyId::new(company_id)?,
            description,
            name,
        );
        self.genesis.send_dto(&request).await
    }

    pub async fn delete(
        &self,
        did_id: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Result<Response, GenesisError> {
        let request = DeleteDid::new(DidId::new(did_id)?, CompanyId::new(company_id)?);
        self.genesis.send_dto(&request).await
    }
}

/// Users (`/user`).
#[derive(Debug, Clone, Copy)]
pub struct UsersResource<'a> {
    genesis: &'a Genesis,
}

impl<'a> UsersResource<'a> {
    pub async fn list(&self, pagination: Option<Pagination>) -> Result<Response, GenesisError> {
        self.genesis.send_dto(&ListUsers::new(pagination)).await
    }

    pub fn manager(&self) -> ManagerResource<'a> {
        ManagerResource {
            genesis: self.genesis,
        }
    }
}

/// Manager-only user operations.
#[derive(Debug, Clone, Copy)]
pub struct ManagerResource<'a> {
    genesis: &'a Genesis,
}

impl ManagerResource<'_> {
    /// Create an administrator for `company_id`.
    pub async fn create(
        &self,
        full_name: Option<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Result<UserData, GenesisError> {
        let request = CreateAdministrator::new(
            full_name,
            Email::new(email)?,
            Password::new(password)?,
            CompanyId::new(company_id)?,
        );
        self.genesis.send_dto(&request).await
    }
}
