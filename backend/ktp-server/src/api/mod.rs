pub mod admins;
pub mod error;
pub mod extractors;
pub mod field_limits;
pub mod records;
