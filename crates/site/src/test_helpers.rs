//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{listing::MockListingService, products::MockProductsService},
};

use crate::{render::MockPageRenderer, state::State};

fn strict_listing_mock() -> MockListingService {
    let mut listing = MockListingService::new();

    listing.expect_list_residents().never();

    listing
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn state_with_listing(
    listing: MockListingService,
    renderer: MockPageRenderer,
) -> Arc<State> {
    State::shared(
        AppContext {
            listing: Arc::new(listing),
            products: Arc::new(strict_products_mock()),
        },
        Arc::new(renderer),
    )
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    // The renderer mock carries no expectations; any call fails the test.
    State::shared(
        AppContext {
            listing: Arc::new(strict_listing_mock()),
            products: Arc::new(products),
        },
        Arc::new(MockPageRenderer::new()),
    )
}

pub(crate) fn listing_service(
    listing: MockListingService,
    renderer: MockPageRenderer,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_listing(listing, renderer)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
