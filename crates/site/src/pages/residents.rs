//! Resident List Page Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use storefront_app::domain::listing::{page::PageRequest, sort::SortSpec};

use crate::state::State;

/// Resident list page
///
/// Renders one sorted, enriched page of residents. Any failure while
/// building the page degrades to the generic error page; no partial list is
/// ever rendered.
#[endpoint(tags("pages"), summary = "Resident list page")]
#[tracing::instrument(name = "residents.list", skip(page, sort, depot, res))]
pub(crate) async fn handler(
    page: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) {
    let Ok(state) = depot.obtain::<Arc<State>>() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let request = PageRequest::from_param(page.into_inner().as_deref());
    let sort_spec = SortSpec::parse(sort.into_inner().as_deref().unwrap_or(""));

    match state.app.listing.list_residents(request, sort_spec).await {
        Ok(listing_page) => {
            tracing::debug!(
                page = listing_page.page,
                rows = listing_page.rows.len(),
                "rendering resident list page"
            );

            res.render(Text::Html(state.renderer.residents_page(&listing_page)));
        }
        Err(error) => {
            tracing::error!("failed to build resident list page: {error}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Text::Html(state.renderer.error_page()));
        }
    }
}
