use serde::Deserialize;
use serde_json::{Value, json};

use super::coerce::{TransportCount, TransportId};
use super::{DecodeError, Method, Request, Response, decode_field};
use crate::domain::{
    CreateDid, DeleteDid, DidData, DidListData, ListAvailableDids, ListDids, Service,
};

const DIDS_PATH: &str = "data.dids";
const TOTAL_PATH: &str = "meta.total";

#[derive(Debug, Clone, Deserialize)]
struct DidJson {
    id: TransportId,
    number: TransportId,
    #[serde(default)]
    description: Option<String>,
}

impl From<DidJson> for DidData {
    fn from(value: DidJson) -> Self {
        Self {
            id: value.id.into_string(),
            number: value.number.into_string(),
            description: value.description,
        }
    }
}

pub fn decode_did_list_json_response(response: &Response) -> Result<DidListData, DecodeError> {
    let root = response.json()?;
    let dids: Vec<DidJson> = decode_field(&root, DIDS_PATH)?;
    let total: TransportCount = decode_field(&root, TOTAL_PATH)?;

    Ok(DidListData {
        dids: dids.into_iter().map(DidData::from).collect(),
        total: total.into_u64(),
    })
}

impl Request for CreateDid {
    type Output = Response;

    fn method(&self) -> Method {
        Method::Post
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        "/manager/did".to_owned()
    }

    fn default_body(&self) -> Option<Value> {
        Some(json!({
            "number": self.number().as_str(),
            "company": self.company().as_str(),
            "description": self.description(),
            "name": self.name(),
        }))
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<Response, DecodeError> {
        Ok(response.clone())
    }
}

impl Request for DeleteDid {
    type Output = Response;

    fn method(&self) -> Method {
        Method::Delete
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        format!("/manager/did/{}", self.did_id().as_str())
    }

    fn default_body(&self) -> Option<Value> {
        Some(json!({ "company": self.company_id().as_str() }))
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<Response, DecodeError> {
        Ok(response.clone())
    }
}

impl Request for ListAvailableDids {
    type Output = Response;

    fn method(&self) -> Method {
        Method::Get
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        "/did/available".to_owned()
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<Response, DecodeError> {
        Ok(response.clone())
    }
}

impl Request for ListDids {
    type Output = DidListData;

    fn method(&self) -> Method {
        Method::Get
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        format!("/did/{}", self.company_id().as_str())
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<DidListData, DecodeError> {
        decode_did_list_json_response(response)
    }
}
