//! Resident Records

use jiff::civil::Date;
use uuid::Uuid;

use crate::uuids::TypedUuid;

/// Resident UUID
pub type ResidentUuid = TypedUuid<ResidentRecord>;

/// Address UUID
pub type AddressUuid = TypedUuid<AddressRecord>;

/// Row fetched by the primary list query. The manager display name is the
/// only joined attribute; the managing account itself is never materialized.
#[derive(Debug, Clone)]
pub struct ResidentRecord {
    pub uuid: ResidentUuid,
    pub address_uuid: Option<AddressUuid>,
    /// Public identifier printed on the page, distinct from the row key.
    pub code: Uuid,
    pub full_name: String,
    pub people_id: String,
    pub date_of_birth: Date,
    pub status: ResidentStatus,
    pub manager: Option<String>,
}

/// Address Record
pub struct AddressRecord;

/// Quarantine status, stored as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidentStatus {
    F0,
    F1,
    F2,
    F3,
    Recovered,
    Unknown,
}

impl ResidentStatus {
    #[must_use]
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => Self::F0,
            1 => Self::F1,
            2 => Self::F2,
            3 => Self::F3,
            4 => Self::Recovered,
            _ => Self::Unknown,
        }
    }

    /// Display label shown to operators.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::F0 => "F0",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::Recovered => "Đã khỏi bệnh",
            Self::Unknown => "Không xác định",
        }
    }
}

/// A resident ready for rendering. Both enrichment fields are populated
/// before the row leaves the service; the renderer never sees partial rows.
#[derive(Debug, Clone)]
pub struct EnrichedResident {
    pub resident: ResidentRecord,
    pub num_of_related: u64,
    pub address: String,
}

/// One page of enriched residents plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct ResidentPage {
    pub rows: Vec<EnrichedResident>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    /// Normalized sort string, re-embedded in pagination links.
    pub sort: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip_to_labels() {
        assert_eq!(ResidentStatus::from_code(0).label(), "F0");
        assert_eq!(ResidentStatus::from_code(3).label(), "F3");
        assert_eq!(ResidentStatus::from_code(4).label(), "Đã khỏi bệnh");
    }

    #[test]
    fn out_of_range_status_is_unknown() {
        assert_eq!(ResidentStatus::from_code(-1), ResidentStatus::Unknown);
        assert_eq!(ResidentStatus::from_code(99), ResidentStatus::Unknown);
    }
}
