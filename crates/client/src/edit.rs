//! Card edit flow.
//!
//! One edit moves through `Idle → EditRequested → Validating → Submitting →
//! {Applied | Rejected} → Idle`. The card model and the view are rewritten
//! only on a confirmed 200; a rejected or failed request leaves both
//! untouched.

use mockall::automock;
use uuid::Uuid;

use crate::{
    api::ProductApi,
    card::{EditCheck, ProductCard, ProductDraft, check_edit},
    notices::Notice,
};

pub(crate) const UPDATE_OK: &str = "Cập nhật thành công";
pub(crate) const UPDATE_FAILED: &str = "Cập nhật thất bại";

/// Presentation seam: the DOM in the browser build, a mock in tests.
#[automock]
pub trait CardView {
    /// Fill the edit form with the card's current values.
    fn open_editor(&mut self, card: &ProductCard);

    /// Rewrite the rendered card after a confirmed update: name, formatted
    /// price text, raw price attribute, and unit.
    fn apply_card(&mut self, card: &ProductCard);

    fn close_editor(&mut self);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Restore the price form field to the card's current price.
    fn revert_price_field(&mut self, price: u64);

    fn show_notice(&mut self, notice: Notice);
}

/// Drives the edit flow for the page's card collection.
#[derive(Debug)]
pub struct EditController<A> {
    api: A,
    cards: Vec<ProductCard>,
    /// Card currently open in the edit form.
    editing: Option<Uuid>,
    /// Card with a request on the wire. Overlapping submissions are
    /// rejected outright rather than relying on the disabled button alone.
    in_flight: Option<Uuid>,
}

impl<A: ProductApi> EditController<A> {
    #[must_use]
    pub fn new(api: A, cards: Vec<ProductCard>) -> Self {
        Self {
            api,
            cards,
            editing: None,
            in_flight: None,
        }
    }

    #[must_use]
    pub fn card(&self, uuid: Uuid) -> Option<&ProductCard> {
        self.cards.iter().find(|card| card.uuid == uuid)
    }

    /// An edit action on a card: remember the target and populate the form.
    pub fn request_edit(&mut self, uuid: Uuid, view: &mut dyn CardView) {
        let Some(card) = self.card(uuid) else {
            return;
        };

        view.open_editor(card);
        self.editing = Some(uuid);
    }

    /// Submit the edit form. Validation failures and unchanged drafts never
    /// reach the network; the submit control always comes back enabled once
    /// a request settles.
    pub async fn submit(&mut self, draft: ProductDraft, view: &mut dyn CardView) {
        let Some(uuid) = self.editing else {
            return;
        };

        let Some(card) = self.card(uuid) else {
            return;
        };

        match check_edit(card, &draft) {
            EditCheck::Unchanged => return,
            EditCheck::Invalid {
                warning,
                revert_price,
            } => {
                if revert_price {
                    view.revert_price_field(card.price);
                }

                view.show_notice(warning);
                return;
            }
            EditCheck::Valid => {}
        }

        if !self.begin_submission(uuid) {
            return;
        }

        view.set_submit_enabled(false);

        let result = self.api.update_product(uuid, &draft).await;

        // Guaranteed cleanup on both outcomes.
        view.set_submit_enabled(true);
        self.in_flight = None;

        match result {
            Ok(()) => {
                if let Some(card) = self.cards.iter_mut().find(|card| card.uuid == uuid) {
                    card.name = draft.name;
                    card.price = draft.price;
                    card.unit = draft.unit;

                    view.show_notice(Notice::success(UPDATE_OK));
                    view.close_editor();
                    view.apply_card(card);
                }

                self.editing = None;
            }
            Err(error) => {
                tracing::warn!("product update rejected: {error}");

                view.show_notice(Notice::danger(UPDATE_FAILED));
            }
        }
    }

    /// Claim the in-flight slot, refusing overlapping submissions.
    fn begin_submission(&mut self, uuid: Uuid) -> bool {
        if self.in_flight.is_some() {
            return false;
        }

        self.in_flight = Some(uuid);
        true
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use smallvec::smallvec;

    use crate::{
        api::{ApiError, MockProductApi},
        card::{MAX_NAME_CHARS, NAME_TOO_LONG, PRICE_TOO_HIGH},
        notices::NoticeLevel,
    };

    use super::*;

    fn make_card(uuid: Uuid) -> ProductCard {
        ProductCard {
            uuid,
            name: "Sữa".to_string(),
            price: 20_000,
            unit: "hộp".to_string(),
            photos: smallvec![],
        }
    }

    fn make_draft(name: &str, price: u64, unit: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            unit: unit.to_string(),
        }
    }

    fn quiet_view() -> MockCardView {
        let mut view = MockCardView::new();

        view.expect_open_editor().never();
        view.expect_apply_card().never();
        view.expect_close_editor().never();
        view.expect_set_submit_enabled().never();
        view.expect_revert_price_field().never();
        view.expect_show_notice().never();

        view
    }

    fn controller_with_card(
        uuid: Uuid,
        api: MockProductApi,
    ) -> EditController<MockProductApi> {
        let mut controller = EditController::new(api, vec![make_card(uuid)]);
        controller.editing = Some(uuid);
        controller
    }

    #[tokio::test]
    async fn unchanged_draft_makes_no_network_call() {
        let uuid = Uuid::now_v7();

        let mut api = MockProductApi::new();
        api.expect_update_product().never();
        api.expect_delete_product().never();

        let mut controller = controller_with_card(uuid, api);
        let mut view = quiet_view();

        controller
            .submit(make_draft("Sữa", 20_000, "hộp"), &mut view)
            .await;
    }

    #[tokio::test]
    async fn over_long_name_warns_and_makes_no_call() {
        let uuid = Uuid::now_v7();

        let mut api = MockProductApi::new();
        api.expect_update_product().never();

        let mut controller = controller_with_card(uuid, api);

        let mut view = quiet_view();
        view.checkpoint();
        view.expect_show_notice()
            .once()
            .withf(|notice| {
                notice.level == NoticeLevel::Warning && notice.message == NAME_TOO_LONG
            })
            .return_const(());

        controller
            .submit(
                make_draft(&"a".repeat(MAX_NAME_CHARS + 1), 20_000, "hộp"),
                &mut view,
            )
            .await;
    }

    #[tokio::test]
    async fn over_cap_price_reverts_the_field_and_warns() {
        let uuid = Uuid::now_v7();

        let mut api = MockProductApi::new();
        api.expect_update_product().never();

        let mut controller = controller_with_card(uuid, api);

        let mut view = MockCardView::new();
        view.expect_revert_price_field()
            .once()
            .with(eq(20_000u64))
            .return_const(());
        view.expect_show_notice()
            .once()
            .withf(|notice| notice.message == PRICE_TOO_HIGH)
            .return_const(());
        view.expect_apply_card().never();
        view.expect_close_editor().never();
        view.expect_set_submit_enabled().never();

        controller
            .submit(make_draft("Sữa", 150_000_000, "hộp"), &mut view)
            .await;
    }

    #[tokio::test]
    async fn confirmed_update_rewrites_card_and_closes_editor() {
        let uuid = Uuid::now_v7();

        let mut api = MockProductApi::new();
        api.expect_update_product()
            .once()
            .withf(move |u, draft| *u == uuid && draft.name == "Sữa đặc" && draft.price == 35_000)
            .return_once(|_, _| Ok(()));

        let mut controller = controller_with_card(uuid, api);

        let mut view = MockCardView::new();
        view.expect_set_submit_enabled()
            .with(eq(false))
            .once()
            .return_const(());
        view.expect_set_submit_enabled()
            .with(eq(true))
            .once()
            .return_const(());
        view.expect_show_notice()
            .once()
            .withf(|notice| notice.level == NoticeLevel::Success)
            .return_const(());
        view.expect_close_editor().once().return_const(());
        view.expect_apply_card()
            .once()
            .withf(|card| card.name == "Sữa đặc" && card.price == 35_000 && card.unit == "lon")
            .return_const(());
        view.expect_revert_price_field().never();

        controller
            .submit(make_draft("Sữa đặc", 35_000, "lon"), &mut view)
            .await;

        let card = controller.card(uuid).expect("card still present");

        assert_eq!(card.name, "Sữa đặc");
        assert_eq!(card.price, 35_000);
        assert_eq!(card.unit, "lon");
        assert_eq!(controller.editing, None);
        assert_eq!(controller.in_flight, None);
    }

    #[tokio::test]
    async fn rejected_update_leaves_card_untouched() {
        let uuid = Uuid::now_v7();

        let mut api = MockProductApi::new();
        api.expect_update_product()
            .once()
            .return_once(|_, _| Err(ApiError::Status(500)));

        let mut controller = controller_with_card(uuid, api);

        let mut view = MockCardView::new();
        view.expect_set_submit_enabled()
            .with(eq(false))
            .once()
            .return_const(());
        view.expect_set_submit_enabled()
            .with(eq(true))
            .once()
            .return_const(());
        view.expect_show_notice()
            .once()
            .withf(|notice| {
                notice.level == NoticeLevel::Danger && notice.message == UPDATE_FAILED
            })
            .return_const(());
        view.expect_apply_card().never();
        view.expect_close_editor().never();

        controller
            .submit(make_draft("Sữa đặc", 35_000, "lon"), &mut view)
            .await;

        let card = controller.card(uuid).expect("card still present");

        assert_eq!(card.name, "Sữa");
        assert_eq!(card.price, 20_000);
        // The editor stays open for another attempt.
        assert_eq!(controller.editing, Some(uuid));
        assert_eq!(controller.in_flight, None);
    }

    #[tokio::test]
    async fn request_edit_populates_the_form() {
        let uuid = Uuid::now_v7();

        let mut controller =
            EditController::new(MockProductApi::new(), vec![make_card(uuid)]);

        let mut view = MockCardView::new();
        view.expect_open_editor()
            .once()
            .withf(move |card| card.uuid == uuid)
            .return_const(());

        controller.request_edit(uuid, &mut view);

        assert_eq!(controller.editing, Some(uuid));
    }

    #[test]
    fn overlapping_submissions_are_rejected() {
        let uuid = Uuid::now_v7();

        let mut controller =
            EditController::new(MockProductApi::new(), vec![make_card(uuid)]);

        assert!(controller.begin_submission(uuid));
        assert!(!controller.begin_submission(uuid));

        controller.in_flight = None;

        assert!(controller.begin_submission(uuid));
    }
}
