use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub account: String,
    pub is_admin: bool,
}
