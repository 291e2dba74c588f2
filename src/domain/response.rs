use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyData {
    pub id: String,
    pub name: String,
    pub timezone: String,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DidData {
    pub id: String,
    pub number: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One page of DIDs.
///
/// `total` is the server-side count and may exceed `dids.len()`.
pub struct DidListData {
    pub dids: Vec<DidData>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserData {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub admin: bool,
    pub locked: bool,
    pub role_id: Option<String>,
    pub acl_permissions: Option<BTreeMap<String, serde_json::Value>>,
}
