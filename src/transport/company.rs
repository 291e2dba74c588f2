use serde::Deserialize;
use serde_json::{Value, json};

use super::coerce::{TransportId, Truthy};
use super::{DecodeError, Method, Request, Response, page_query};
use crate::domain::{
    CompanyData, CreateCompany, DeleteCompany, GetCompanies, LockCompany, Service, UnlockCompany,
};

const COMPANY_PATH: &str = "data.company";

#[derive(Debug, Clone, Deserialize)]
struct CompanyJson {
    id: TransportId,
    name: String,
    timezone: String,
    locked: Truthy,
}

impl From<CompanyJson> for CompanyData {
    fn from(value: CompanyJson) -> Self {
        Self {
            id: value.id.into_string(),
            name: value.name,
            timezone: value.timezone,
            locked: value.locked.into_bool(),
        }
    }
}

pub fn decode_company_json_response(response: &Response) -> Result<CompanyData, DecodeError> {
    response
        .decode_at::<CompanyJson>(COMPANY_PATH)
        .map(CompanyData::from)
}

impl Request for CreateCompany {
    type Output = CompanyData;

    fn method(&self) -> Method {
        Method::Post
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        "/manager/company/create".to_owned()
    }

    fn default_body(&self) -> Option<Value> {
        Some(json!({ "name": self.name().as_str() }))
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<CompanyData, DecodeError> {
        decode_company_json_response(response)
    }
}

impl Request for DeleteCompany {
    type Output = Response;

    fn method(&self) -> Method {
        Method::Delete
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        format!("/manager/company/delete/{}", self.company_id().as_str())
    }

    fn default_body(&self) -> Option<Value> {
        Some(json!({ "id": self.company_id().as_str() }))
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<Response, DecodeError> {
        Ok(response.clone())
    }
}

impl Request for GetCompanies {
    type Output = Response;

    fn method(&self) -> Method {
        Method::Get
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        "/manager/company".to_owned()
    }

    fn default_query(&self) -> Vec<(String, String)> {
        page_query(self.page())
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<Response, DecodeError> {
        Ok(response.clone())
    }
}

impl Request for LockCompany {
    type Output = CompanyData;

    fn method(&self) -> Method {
        Method::Get
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        format!("/manager/company/{}/lock", self.company_id().as_str())
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<CompanyData, DecodeError> {
        decode_company_json_response(response)
    }
}

impl Request for UnlockCompany {
    type Output = CompanyData;

    fn method(&self) -> Method {
        Method::Get
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        format!("/manager/company/{}/unlock", self.company_id().as_str())
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<CompanyData, DecodeError> {
        decode_company_json_response(response)
    }
}
