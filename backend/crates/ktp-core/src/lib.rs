pub mod error;
pub mod models;
pub mod registry;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::account_id::{AccountId, MAX_ACCOUNT_ID_LENGTH};
pub use models::caller::Caller;
pub use models::identity_record::IdentityRecord;
pub use models::national_id::NationalId;
pub use models::record_hashes::RecordHashes;
pub use models::record_status::RecordStatus;
pub use registry::admin_registry::AdminRegistry;
pub use registry::command::Command;
pub use registry::import_policy::ImportPolicy;
pub use registry::mutation::Mutation;
pub use registry::record_registry::RecordRegistry;
pub use registry::registry_policy::RegistryPolicy;
pub use registry::state::Registry;

#[cfg(test)]
mod tests;
