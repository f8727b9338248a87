pub mod bootstrap;
pub mod error;
pub mod metrics;
pub mod registry_meta;
pub mod registry_store;
pub mod repositories;

pub use bootstrap::bootstrap;
pub use error::{DbError, Result};
pub use metrics::RegistryMetrics;
pub use registry_meta::RegistryMeta;
pub use registry_store::RegistryStore;
pub use repositories::admin_repository::AdminRepository;
pub use repositories::identity_record_repository::IdentityRecordRepository;
pub use repositories::registry_meta_repository::RegistryMetaRepository;

/// Embedded schema migrations for the registry database.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
