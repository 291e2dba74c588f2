use crate::domain::value::{CompanyId, CompanyName, DidId, DidNumber, Email, Password};

/// Default page requested by paginated list operations.
pub const DEFAULT_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Paging options for list operations.
///
/// A missing page falls back to [`DEFAULT_PAGE`].
pub struct Pagination {
    pub page: Option<u32>,
}

impl Pagination {
    /// Request a specific page.
    pub fn page(page: u32) -> Self {
        Self { page: Some(page) }
    }

    /// The page that will be sent.
    pub fn resolved_page(self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompany {
    name: CompanyName,
}

impl CreateCompany {
    pub fn new(name: CompanyName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &CompanyName {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct DeleteCompany {
    company_id: CompanyId,
}

impl DeleteCompany {
    pub fn new(company_id: CompanyId) -> Self {
        Self { company_id }
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetCompanies {
    pagination: Option<Pagination>,
}

impl GetCompanies {
    pub fn new(pagination: Option<Pagination>) -> Self {
        Self { pagination }
    }

    pub fn page(&self) -> u32 {
        self.pagination.unwrap_or_default().resolved_page()
    }
}

#[derive(Debug, Clone)]
pub struct LockCompany {
    company_id: CompanyId,
}

impl LockCompany {
    pub fn new(company_id: CompanyId) -> Self {
        Self { company_id }
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }
}

#[derive(Debug, Clone)]
pub struct UnlockCompany {
    company_id: CompanyId,
}

impl UnlockCompany {
    pub fn new(company_id: CompanyId) -> Self {
        Self { company_id }
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }
}

#[derive(Debug, Clone)]
/// Assign a DID number to a company.
///
/// `description` and `name` are optional and are sent as JSON `null` when absent.
pub struct CreateDid {
    number: DidNumber,
    company: CompanyId,
    description: Option<String>,
    name: Option<String>,
}

impl CreateDid {
    pub fn new(
        number: DidNumber,
        company: CompanyId,
        description: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            number,
            company,
            description,
            name,
        }
    }

    pub fn number(&self) -> &DidNumber {
        &self.number
    }

    pub fn company(&self) -> &CompanyId {
        &self.company
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone)]
/// Remove a DID from a company. The DID id goes into the path, the owning company
/// into the body.
pub struct DeleteDid {
    did_id: DidId,
    company_id: CompanyId,
}

impl DeleteDid {
    pub fn new(did_id: DidId, company_id: CompanyId) -> Self {
        Self { did_id, company_id }
    }

    pub fn did_id(&self) -> &DidId {
        &self.did_id
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListAvailableDids;

#[derive(Debug, Clone)]
pub struct ListDids {
    company_id: CompanyId,
}

impl ListDids {
    pub fn new(company_id: CompanyId) -> Self {
        Self { company_id }
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }
}

#[derive(Debug, Clone)]
/// Create an administrator user for a company.
pub struct CreateAdministrator {
    full_name: Option<String>,
    email: Email,
    password: Password,
    company: CompanyId,
}

impl CreateAdministrator {
    pub fn new(
        full_name: Option<String>,
        email: Email,
        password: Password,
        company: CompanyId,
    ) -> Self {
        Self {
            full_name,
            email,
            password,
            company,
        }
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn company(&self) -> &CompanyId {
        &self.company
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListUsers {
    pagination: Option<Pagination>,
}

impl ListUsers {
    pub fn new(pagination: Option<Pagination>) -> Self {
        Self { pagination }
    }

    pub fn page(&self) -> u32 {
        self.pagination.unwrap_or_default().resolved_page()
    }
}
