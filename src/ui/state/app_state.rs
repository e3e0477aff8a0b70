use dioxus::prelude::*;

use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::view_reducer::{reduce, Action, ViewState};

#[derive(Clone, Copy)]
pub struct AppState {
    pub view: Signal<ViewState>,
    pub queries: Signal<QueryService>,
}

impl AppState {
    pub fn new(queries: impl FnOnce() -> QueryService) -> Self {
        Self {
            view: use_signal(ViewState::default),
            queries: use_signal(queries),
        }
    }

    /// Applies `action` and runs the fetch it issues, if any. The completion is
    /// dispatched back through here, so the reducer decides whether it is stale.
    pub fn dispatch(self, action: Action) {
        let mut view = self.view;
        let transition = reduce(&view.peek(), action);
        view.set(transition.state);

        if let Some(request) = transition.fetch {
            let queries = self.queries.peek().clone();
            spawn(async move {
                let completion = queries.load_page(request).await;
                self.dispatch(completion);
            });
        }
    }
}
