use serde::{Deserialize, Serialize};

use crate::date::{parse_timestamp, Timestamp};
use crate::raw_data::RawIdRef;

pub type Id = u64;

/// Envelope shared by every persisted record.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BaseModel {
    pub id: Id,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl BaseModel {
    pub fn new(id: Id, created_at: Option<&str>, updated_at: Option<&str>) -> Self {
        Self {
            id,
            created_at: parse_timestamp(created_at),
            updated_at: parse_timestamp(updated_at),
        }
    }
}

/// Reference to another record by id only.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdRef {
    pub id: Id,
}

impl From<RawIdRef> for IdRef {
    fn from(raw: RawIdRef) -> Self {
        Self { id: raw.id }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Draft,
    Published,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_id_and_parses_timestamps() {
        let base = BaseModel::new(7, Some("2024-01-02T03:04:05Z"), Some("garbage"));

        assert_eq!(base.id, 7);
        assert!(base.created_at.unwrap().is_valid());
        assert_eq!(base.updated_at, Some(Timestamp::Invalid));
    }

    #[test]
    fn absent_timestamps_stay_absent() {
        let base = BaseModel::new(1, None, None);

        assert_eq!(base.created_at, None);
        assert_eq!(base.updated_at, None);
        assert_eq!(serde_json::to_value(&base).unwrap(), serde_json::json!({ "id": 1 }));
    }
}
