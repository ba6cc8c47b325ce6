//! Listing service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::listing::{
        errors::ListingServiceError,
        page::{PAGE_SIZE, PageRequest},
        records::{EnrichedResident, ResidentPage, ResidentRecord},
        repository::PgListingRepository,
        sort::SortSpec,
    },
};

#[derive(Debug, Clone)]
pub struct PgListingService {
    db: Db,
    repository: PgListingRepository,
}

impl PgListingService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgListingRepository::new(),
        }
    }
}

#[async_trait]
impl ListingService for PgListingService {
    async fn list_residents(
        &self,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<ResidentPage, ListingServiceError> {
        let mut tx = self.db.begin().await?;

        let (records, total) = self.repository.list_residents(&mut tx, &sort, page).await?;

        // Enrichment is batched: one bulk count query and one bulk address
        // query for the whole page, instead of two lookups per row.
        let resident_uuids: Vec<Uuid> = records
            .iter()
            .map(|record| record.uuid.into_uuid())
            .collect();

        let counts = self.repository.related_counts(&mut tx, &resident_uuids).await?;

        let address_uuids: Vec<Uuid> = records
            .iter()
            .filter_map(|record| record.address_uuid)
            .map(Into::into)
            .collect();

        let addresses = self
            .repository
            .resolve_addresses(&mut tx, &address_uuids)
            .await?;

        tx.commit().await?;

        let rows = merge_enrichment(records, &counts, &addresses);

        tracing::debug!(
            page = page.page(),
            total,
            rows = rows.len(),
            "built resident list page"
        );

        Ok(ResidentPage {
            rows,
            total,
            page: page.page(),
            page_size: PAGE_SIZE,
            sort: sort.normalize(),
        })
    }
}

/// Attach the bulk-lookup results to every record. A resident missing from
/// the count map has zero related rows; a missing or unreferenced address
/// resolves to the empty string. Every returned row carries both fields.
fn merge_enrichment(
    records: Vec<ResidentRecord>,
    counts: &FxHashMap<Uuid, u64>,
    addresses: &FxHashMap<Uuid, String>,
) -> Vec<EnrichedResident> {
    records
        .into_iter()
        .map(|resident| {
            let num_of_related = counts
                .get(&resident.uuid.into_uuid())
                .copied()
                .unwrap_or(0);

            let address = resident
                .address_uuid
                .and_then(|uuid| addresses.get(&uuid.into_uuid()))
                .cloned()
                .unwrap_or_default();

            EnrichedResident {
                resident,
                num_of_related,
                address,
            }
        })
        .collect()
}

#[automock]
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Produce one enriched, sorted page of residents plus the total count.
    async fn list_residents(
        &self,
        page: PageRequest,
        sort: SortSpec,
    ) -> Result<ResidentPage, ListingServiceError>;
}
