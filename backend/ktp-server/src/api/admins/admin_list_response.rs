use serde::Serialize;

/// Current administrator set, sorted
#[derive(Debug, Serialize)]
pub struct AdminListResponse {
    pub admins: Vec<String>,
}
