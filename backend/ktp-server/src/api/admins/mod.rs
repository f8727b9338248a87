pub mod admin_list_response;
pub mod admin_status_response;
#[allow(clippy::module_inception)]
pub mod admins;
