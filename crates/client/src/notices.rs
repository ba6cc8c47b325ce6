//! Transient user notices.

/// Toast severity, mirrored by the page's toast component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Danger,
}

/// One auto-dismissing toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

impl Notice {
    #[must_use]
    pub const fn success(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
        }
    }

    #[must_use]
    pub const fn warning(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message,
        }
    }

    #[must_use]
    pub const fn danger(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Danger,
            message,
        }
    }
}
