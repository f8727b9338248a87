use crate::{AccountId, NationalId, RecordHashes};

/// A mutating registry call. The acting identity travels separately as a
/// [`Caller`](crate::Caller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddAdmin {
        account: AccountId,
    },
    RemoveAdmin {
        account: AccountId,
    },
    /// Write or reset the caller's own record
    CreateRecord {
        hashes: RecordHashes,
    },
    /// Amend the caller's existing record
    UpdateRecord {
        hashes: RecordHashes,
    },
    VerifyRecord {
        subject: AccountId,
        national_id: NationalId,
    },
    /// `subject` is required under [`ImportPolicy::AdminGated`](crate::ImportPolicy)
    /// and must be absent or the caller under `SelfService`.
    ImportRecord {
        subject: Option<AccountId>,
        national_id: NationalId,
        hashes: RecordHashes,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddAdmin { .. } => "add_admin",
            Self::RemoveAdmin { .. } => "remove_admin",
            Self::CreateRecord { .. } => "create_record",
            Self::UpdateRecord { .. } => "update_record",
            Self::VerifyRecord { .. } => "verify_record",
            Self::ImportRecord { .. } => "import_record",
        }
    }
}
