//! The record lifecycle and access-control state machine.
//!
//! Every mutating operation is split in two steps: `plan` decides the outcome
//! against the current state without touching it, and `apply` commits the
//! resulting [`Mutation`](mutation::Mutation). A rejected command therefore
//! never leaves a partial write behind.

pub mod admin_registry;
pub mod command;
pub mod import_policy;
pub mod mutation;
pub mod record_registry;
pub mod registry_policy;
pub mod state;
