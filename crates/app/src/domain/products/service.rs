//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::ProductUpdate,
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

/// Maximum product name length, in characters.
pub const MAX_NAME_CHARS: usize = 40;

/// Maximum unit label length, in characters.
pub const MAX_UNIT_CHARS: usize = 10;

/// Maximum unit price, in whole VND.
pub const MAX_PRICE_VND: u64 = 100_000_000;

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        validate_update(&update)?;

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_product(&mut tx, product, &update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

/// The client enforces the same bounds before submitting; repeating them
/// here keeps direct API callers honest.
fn validate_update(update: &ProductUpdate) -> Result<(), ProductsServiceError> {
    let name = update.name.trim();
    let unit = update.unit.trim();

    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(ProductsServiceError::InvalidData);
    }

    if unit.is_empty() || unit.chars().count() > MAX_UNIT_CHARS {
        return Err(ProductsServiceError::InvalidData);
    }

    if update.price > MAX_PRICE_VND {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Update a product's name, price, and unit.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Soft-delete a product.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
