use ktp_auth::JwtValidator;
use ktp_config::ValidationConfig;
use ktp_db::RegistryStore;

use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RegistryStore>,
    /// `None` means development mode: the caller comes from `X-Account-Id`
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub validation: ValidationConfig,
}
