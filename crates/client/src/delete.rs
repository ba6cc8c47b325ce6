//! Card delete flow.
//!
//! A delete fires `DELETE {base}/{uuid}` and, on a confirmed 200, schedules
//! a full page reload after a short delay so the success toast is visible
//! before the page goes away. A rejected request shows a failure toast and
//! leaves the page alone.

use std::time::Duration;

use mockall::automock;
use uuid::Uuid;

use crate::{api::ProductApi, notices::Notice};

pub(crate) const DELETE_OK: &str = "Xoá sản phẩm thành công";
pub(crate) const DELETE_FAILED: &str = "Xoá sản phẩm thất bại";

/// Delay between the success toast and the reload.
pub const RELOAD_DELAY: Duration = Duration::from_millis(1000);

/// Navigation seam: `window.location` in the browser build, a mock in tests.
#[automock]
pub trait PageNavigator {
    fn show_notice(&mut self, notice: Notice);

    /// Reload the current page, re-rendering the list from the server.
    fn reload(&mut self);
}

/// Drives the delete flow.
#[derive(Debug)]
pub struct DeleteController<A> {
    api: A,
}

impl<A: ProductApi> DeleteController<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Delete a product. On success the reload happens [`RELOAD_DELAY`]
    /// after the toast, not before.
    pub async fn delete(&self, uuid: Uuid, navigator: &mut dyn PageNavigator) {
        match self.api.delete_product(uuid).await {
            Ok(()) => {
                navigator.show_notice(Notice::success(DELETE_OK));

                tokio::time::sleep(RELOAD_DELAY).await;

                navigator.reload();
            }
            Err(error) => {
                tracing::warn!("product delete rejected: {error}");

                navigator.show_notice(Notice::danger(DELETE_FAILED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use crate::{
        api::{ApiError, MockProductApi},
        notices::NoticeLevel,
    };

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn confirmed_delete_toasts_then_reloads_after_the_delay() {
        let mut api = MockProductApi::new();
        api.expect_delete_product()
            .once()
            .return_once(|_| Ok(()));

        let controller = DeleteController::new(api);

        let started = Instant::now();

        let mut navigator = MockPageNavigator::new();
        navigator
            .expect_show_notice()
            .once()
            .withf(move |notice| {
                notice.level == NoticeLevel::Success
                    && notice.message == DELETE_OK
                    && started.elapsed() == Duration::ZERO
            })
            .return_const(());
        navigator
            .expect_reload()
            .once()
            .withf(move || started.elapsed() >= RELOAD_DELAY)
            .return_const(());

        controller.delete(Uuid::now_v7(), &mut navigator).await;
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_delete_never_reloads() {
        let mut api = MockProductApi::new();
        api.expect_delete_product()
            .once()
            .return_once(|_| Err(ApiError::Status(404)));

        let controller = DeleteController::new(api);

        let mut navigator = MockPageNavigator::new();
        navigator
            .expect_show_notice()
            .once()
            .withf(|notice| {
                notice.level == NoticeLevel::Danger && notice.message == DELETE_FAILED
            })
            .return_const(());
        navigator.expect_reload().never();

        controller.delete(Uuid::now_v7(), &mut navigator).await;
    }
}
