//! Photo preview carousel.
//!
//! Each preview session owns its own position, opened from whichever photo
//! the user clicked. Both directions wrap around, so a single-photo card
//! simply stays put.

use crate::card::ProductCard;

/// One open preview session over a card's photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPreview {
    photos: Vec<String>,
    position: usize,
}

impl PhotoPreview {
    /// Open a preview on the clicked photo. Returns `None` when the card
    /// has no photos or the index points past the end.
    #[must_use]
    pub fn open(card: &ProductCard, clicked: usize) -> Option<Self> {
        if clicked >= card.photos.len() {
            return None;
        }

        Some(Self {
            photos: card.photos.to_vec(),
            position: clicked,
        })
    }

    /// URL of the photo currently shown.
    #[must_use]
    pub fn current(&self) -> &str {
        // Position stays in bounds: open() validates it and the wrapping
        // arithmetic keeps it below len.
        self.photos.get(self.position).map_or("", String::as_str)
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Advance one photo, wrapping from the last back to the first.
    pub fn next(&mut self) -> &str {
        self.position = (self.position + 1) % self.photos.len();
        self.current()
    }

    /// Step back one photo, wrapping from the first to the last.
    pub fn prev(&mut self) -> &str {
        self.position = self
            .position
            .checked_sub(1)
            .unwrap_or(self.photos.len() - 1);
        self.current()
    }
}
