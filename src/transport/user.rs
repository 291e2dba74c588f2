use serde::Deserialize;
use serde_json::{Value, json};

use super::coerce::{TransportId, TransportPermissions, Truthy};
use super::{DecodeError, Method, Request, Response, page_query};
use crate::domain::{CreateAdministrator, ListUsers, Service, UserData};

const USER_PATH: &str = "data.user";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserJson {
    id: TransportId,
    full_name: String,
    email: String,
    admin: Truthy,
    locked: Truthy,
    #[serde(default)]
    role_id: Option<TransportId>,
    #[serde(default)]
    acl_permissions_array: Option<TransportPermissions>,
}

impl From<UserJson> for UserData {
    fn from(value: UserJson) -> Self {
        Self {
            id: value.id.into_string(),
            full_name: value.full_name,
            email: value.email,
            admin: value.admin.into_bool(),
            locked: value.locked.into_bool(),
            role_id: value.role_id.map(TransportId::into_string),
            acl_permissions: value
                .acl_permissions_array
                .map(TransportPermissions::into_map),
        }
    }
}

pub fn decode_user_json_response(response: &Response) -> Result<UserData, DecodeError> {
    response
        .decode_at::<UserJson>(USER_PATH)
        .map(UserData::from)
}

impl Request for CreateAdministrator {
    type Output = UserData;

    fn method(&self) -> Method {
        Method::Post
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        "/manager/administrator".to_owned()
    }

    fn default_body(&self) -> Option<Value> {
        Some(json!({
            "fullname": self.full_name(),
            "email": self.email().as_str(),
            "password": self.password().expose(),
            "company": self.company().as_str(),
        }))
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<UserData, DecodeError> {
        decode_user_json_response(response)
    }
}

impl Request for ListUsers {
    type Output = Response;

    fn method(&self) -> Method {
        Method::Get
    }

    fn resolve_service(&self) -> Service {
        Service::SecureFax
    }

    fn resolve_endpoint(&self) -> String {
        "/user".to_owned()
    }

    fn default_query(&self) -> Vec<(String, String)> {
        page_query(self.page())
    }

    fn create_dto_from_response(&self, response: &Response) -> Result<Response, DecodeError> {
        Ok(response.clone())
    }
}
