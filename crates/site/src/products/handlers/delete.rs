//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Product Delete Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "products.delete", skip(uuid, depot), fields(product_uuid = tracing::field::Empty), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = uuid.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    state
        .app
        .products
        .delete_product(product.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product, "deleted product");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use storefront_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("management/products/{uuid}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_product_success() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(move |u| u.into_uuid() == uuid)
            .return_once(|_| Ok(()));

        repo.expect_update_product().never();

        let res = TestClient::delete(format!("http://example.com/management/products/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/management/products/123")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_not_found_returns_404() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        repo.expect_update_product().never();

        let res = TestClient::delete(format!("http://example.com/management/products/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
