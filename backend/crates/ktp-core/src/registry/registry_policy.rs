use crate::ImportPolicy;

/// Tunable rules of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryPolicy {
    pub import: ImportPolicy,
    /// Refuse to remove the only remaining administrator
    pub protect_last_admin: bool,
}

impl RegistryPolicy {
    /// Legacy rules: self-service import and no
    /// guard on the admin set.
    pub fn permissive() -> Self {
        Self {
            import: ImportPolicy::SelfService,
            protect_last_admin: false,
        }
    }
}

impl Default for RegistryPolicy {
    fn default() -> Self {
        Self {
            import: ImportPolicy::AdminGated,
            protect_last_admin: true,
        }
    }
}
