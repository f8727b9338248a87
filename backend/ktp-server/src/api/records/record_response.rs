use crate::RecordDto;
use serde::Serialize;

/// Single identity record response
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub record: RecordDto,
}
