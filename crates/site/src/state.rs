//! State

use std::sync::Arc;

use storefront_app::context::AppContext;

use crate::render::PageRenderer;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) renderer: Arc<dyn PageRenderer>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, renderer: Arc<dyn PageRenderer>) -> Self {
        Self { app, renderer }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, renderer: Arc<dyn PageRenderer>) -> Arc<Self> {
        Arc::new(Self::new(app, renderer))
    }
}
