use serde::{Deserialize, Serialize};

/// Content identifiers of the off-chain artifacts behind a record.
///
/// Stored verbatim; the registry never inspects their format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordHashes {
    pub data_hash: String,
    pub photo_hash: String,
    pub signature_hash: String,
}

impl RecordHashes {
    pub fn new(
        data_hash: impl Into<String>,
        photo_hash: impl Into<String>,
        signature_hash: impl Into<String>,
    ) -> Self {
        Self {
            data_hash: data_hash.into(),
            photo_hash: photo_hash.into(),
            signature_hash: signature_hash.into(),
        }
    }
}
