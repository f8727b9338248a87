mod import_policy;
mod property_tests;
mod record_registry;
mod state;
