
use crate::AppState;

use ktp_auth::JwtValidator;
use ktp_config::ValidationConfig;
use ktp_core::{AccountId, RegistryPolicy};
use ktp_db::RegistryStore;

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) async fn create_test_state(jwt_validator: Option<JwtValidator>) -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test pool");

    ktp_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let deployer = AccountId::parse("deployer").unwrap();
    let store = RegistryStore::open(pool, Some(&deployer), RegistryPolicy::default())
        .await
        .expect("Failed to open registry");

    AppState {
        store: Arc::new(store),
        jwt_validator: jwt_validator.map(Arc::new),
        validation: ValidationConfig::default(),
    }
}
