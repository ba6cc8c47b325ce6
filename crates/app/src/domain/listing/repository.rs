//! Listing Repository

use jiff_sqlx::Date as SqlxDate;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::listing::{
    page::PageRequest,
    records::{ResidentRecord, ResidentStatus, ResidentUuid},
    sort::SortSpec,
};

const LIST_RESIDENTS_SQL: &str = include_str!("sql/list_residents.sql");
const COUNT_RESIDENTS_SQL: &str = include_str!("sql/count_residents.sql");
const RELATED_COUNTS_SQL: &str = include_str!("sql/related_counts.sql");
const RESOLVE_ADDRESSES_SQL: &str = include_str!("sql/resolve_addresses.sql");

/// At most this many address components make it into the display string.
pub const ADDRESS_PART_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub(crate) struct PgListingRepository;

/// One fetched row plus the window-function total carried on every row.
struct ResidentListRow {
    record: ResidentRecord,
    total_count: i64,
}

impl PgListingRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Fetch one page of residents and the total row count in a single
    /// query. The ORDER BY clause comes from the whitelisted sort spec.
    pub(crate) async fn list_residents(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sort: &SortSpec,
        page: PageRequest,
    ) -> Result<(Vec<ResidentRecord>, u64), sqlx::Error> {
        let sql = match sort.order_clause() {
            Some(order) => format!("{LIST_RESIDENTS_SQL}{order}\nLIMIT $1 OFFSET $2"),
            None => format!("{LIST_RESIDENTS_SQL}LIMIT $1 OFFSET $2"),
        };

        let limit = i64::from(page.limit());
        let offset = i64::try_from(page.offset()).map_err(|e| sqlx::Error::ColumnDecode {
            index: "offset".to_string(),
            source: Box::new(e),
        })?;

        let rows = query_as::<Postgres, ResidentListRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **tx)
            .await?;

        // An empty page past the end carries no window count, but the table
        // may still hold rows; count them separately so pagination links
        // keep pointing at the real pages. The common in-range case stays a
        // single query.
        let total = match window_total(&rows) {
            Some(count) => into_total(count)?,
            None => {
                let (count,): (i64,) = query_as(COUNT_RESIDENTS_SQL)
                    .fetch_one(&mut **tx)
                    .await?;

                into_total(count)?
            }
        };

        let records = rows.into_iter().map(|row| row.record).collect();

        Ok((records, total))
    }

    /// Bulk related-record counts keyed by resident UUID. Residents with no
    /// related rows are simply absent from the map.
    pub(crate) async fn related_counts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        residents: &[Uuid],
    ) -> Result<FxHashMap<Uuid, u64>, sqlx::Error> {
        if residents.is_empty() {
            return Ok(FxHashMap::default());
        }

        let rows: Vec<(Uuid, i64)> = query_as(RELATED_COUNTS_SQL)
            .bind(residents)
            .fetch_all(&mut **tx)
            .await?;

        rows.into_iter()
            .map(|(uuid, count)| {
                let count = u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "num_related".to_string(),
                    source: Box::new(e),
                })?;

                Ok((uuid, count))
            })
            .collect()
    }

    /// Bulk address resolution keyed by address UUID, each formatted down to
    /// at most [`ADDRESS_PART_LIMIT`] components.
    pub(crate) async fn resolve_addresses(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        addresses: &[Uuid],
    ) -> Result<FxHashMap<Uuid, String>, sqlx::Error> {
        if addresses.is_empty() {
            return Ok(FxHashMap::default());
        }

        let rows = query(RESOLVE_ADDRESSES_SQL)
            .bind(addresses)
            .fetch_all(&mut **tx)
            .await?;

        rows.into_iter()
            .map(|row| {
                let uuid: Uuid = row.try_get("uuid")?;
                let parts: [Option<String>; 5] = [
                    row.try_get("line")?,
                    row.try_get("ward")?,
                    row.try_get("district")?,
                    row.try_get("province")?,
                    row.try_get("country")?,
                ];

                Ok((uuid, format_address(&parts, ADDRESS_PART_LIMIT)))
            })
            .collect()
    }
}

/// The `COUNT(*) OVER ()` total riding on the fetched rows, or `None` when
/// the page came back empty and the total has to be counted on its own.
fn window_total(rows: &[ResidentListRow]) -> Option<i64> {
    rows.first().map(|row| row.total_count)
}

fn into_total(count: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
        index: "total_count".to_string(),
        source: Box::new(e),
    })
}

/// Join the first `limit` non-empty address components into one display
/// string.
pub(crate) fn format_address(parts: &[Option<String>], limit: usize) -> String {
    parts
        .iter()
        .filter_map(|part| {
            part.as_deref()
                .map(str::trim)
                .filter(|part| !part.is_empty())
        })
        .take(limit)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<'r> FromRow<'r, PgRow> for ResidentListRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status_code: i16 = row.try_get("status")?;

        Ok(Self {
            record: ResidentRecord {
                uuid: ResidentUuid::from_uuid(row.try_get("uuid")?),
                address_uuid: row
                    .try_get::<Option<Uuid>, _>("address_uuid")?
                    .map(Into::into),
                code: row.try_get("code")?,
                full_name: row.try_get("full_name")?,
                people_id: row.try_get("people_id")?,
                date_of_birth: row.try_get::<SqlxDate, _>("date_of_birth")?.to_jiff(),
                status: ResidentStatus::from_code(status_code),
                manager: row.try_get("manager")?,
            },
            total_count: row.try_get("total_count")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn make_list_row(total_count: i64) -> ResidentListRow {
        ResidentListRow {
            record: ResidentRecord {
                uuid: ResidentUuid::new(),
                address_uuid: None,
                code: Uuid::nil(),
                full_name: "Nguyễn Văn A".to_string(),
                people_id: "079123456789".to_string(),
                date_of_birth: date(1990, 4, 12),
                status: ResidentStatus::F1,
                manager: None,
            },
            total_count,
        }
    }

    #[test]
    fn window_total_rides_on_the_first_row() {
        let rows = vec![make_list_row(42), make_list_row(42)];

        assert_eq!(window_total(&rows), Some(42));
    }

    #[test]
    fn page_past_the_end_defers_to_a_separate_count() {
        // No rows means no window count; the caller must count on its own
        // instead of reporting an empty table.
        assert_eq!(window_total(&[]), None);
    }

    #[test]
    fn negative_window_count_is_a_decode_error() {
        assert!(into_total(-1).is_err());
        assert_eq!(into_total(42).ok(), Some(42));
    }

    #[test]
    fn format_address_joins_non_empty_parts() {
        let parts = [
            some("12 Lý Thường Kiệt"),
            some("Phường 7"),
            some("Quận 10"),
            some("TP. Hồ Chí Minh"),
            some("Việt Nam"),
        ];

        assert_eq!(
            format_address(&parts, ADDRESS_PART_LIMIT),
            "12 Lý Thường Kiệt, Phường 7, Quận 10, TP. Hồ Chí Minh, Việt Nam"
        );
    }

    #[test]
    fn format_address_skips_missing_and_blank_parts() {
        let parts = [some("Quận 10"), None, some("  "), some("Việt Nam"), None];

        assert_eq!(format_address(&parts, ADDRESS_PART_LIMIT), "Quận 10, Việt Nam");
    }

    #[test]
    fn format_address_honors_the_component_limit() {
        let parts = [some("a"), some("b"), some("c"), some("d"), some("e")];

        assert_eq!(format_address(&parts, 2), "a, b");
    }

    #[test]
    fn format_address_of_nothing_is_empty() {
        assert_eq!(format_address(&[None, None], ADDRESS_PART_LIMIT), "");
    }
}
