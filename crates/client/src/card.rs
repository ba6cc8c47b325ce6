//! Product card model and edit validation.

use smallvec::SmallVec;
use uuid::Uuid;

use crate::notices::Notice;

/// Maximum product name length, in characters.
pub const MAX_NAME_CHARS: usize = 40;

/// Maximum unit label length, in characters.
pub const MAX_UNIT_CHARS: usize = 10;

/// Maximum unit price, in whole VND.
pub const MAX_PRICE_VND: u64 = 100_000_000;

pub(crate) const NAME_TOO_LONG: &str = "Tên sản phẩm tối đa 40 ký tự";
pub(crate) const UNIT_TOO_LONG: &str = "Đơn vị sản phẩm tối đa 10 ký tự";
pub(crate) const PRICE_TOO_HIGH: &str = "Giá sản phẩm tối đa 100.000.000 VNĐ";

/// Client-side model of one product card. The server stays the source of
/// truth; this copy changes only after a confirmed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub uuid: Uuid,
    pub name: String,
    /// Unit price in whole VND.
    pub price: u64,
    pub unit: String,
    pub photos: SmallVec<[String; 4]>,
}

/// Values taken from the edit form on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: u64,
    pub unit: String,
}

/// Outcome of comparing a draft against the card it edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCheck {
    /// Nothing changed; no request should be made.
    Unchanged,
    /// A limit was violated. `revert_price` asks the form to restore the
    /// card's current price.
    Invalid {
        warning: Notice,
        revert_price: bool,
    },
    /// The draft differs from the card and respects every limit.
    Valid,
}

/// Validate a draft before submission. Name and unit compare
/// case-insensitively; the price compares numerically.
#[must_use]
pub fn check_edit(card: &ProductCard, draft: &ProductDraft) -> EditCheck {
    let name_unchanged = card.name.to_lowercase() == draft.name.to_lowercase();
    let unit_unchanged = card.unit.to_lowercase() == draft.unit.to_lowercase();

    if name_unchanged && unit_unchanged && card.price == draft.price {
        return EditCheck::Unchanged;
    }

    if draft.name.chars().count() > MAX_NAME_CHARS {
        return EditCheck::Invalid {
            warning: Notice::warning(NAME_TOO_LONG),
            revert_price: false,
        };
    }

    if draft.unit.chars().count() > MAX_UNIT_CHARS {
        return EditCheck::Invalid {
            warning: Notice::warning(UNIT_TOO_LONG),
            revert_price: false,
        };
    }

    if draft.price > MAX_PRICE_VND {
        return EditCheck::Invalid {
            warning: Notice::warning(PRICE_TOO_HIGH),
            revert_price: true,
        };
    }

    EditCheck::Valid
}

/// Format a whole-VND amount the way the storefront displays prices:
/// thousands separated by dots, followed by the đồng sign.
#[must_use]
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped.push_str(" ₫");
    grouped
}
