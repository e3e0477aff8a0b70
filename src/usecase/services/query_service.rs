use std::sync::Arc;

use crate::usecase::ports::employee_source::EmployeeSource;
use crate::usecase::services::view_reducer::{Action, FetchRequest};

/// Runs fetches issued by the reducer and turns their outcome into a
/// completion [`Action`]. Failures are logged here and never bubble up.
#[derive(Clone)]
pub struct QueryService {
    source: Arc<dyn EmployeeSource>,
}

impl QueryService {
    pub fn new(source: Arc<dyn EmployeeSource>) -> Self {
        Self { source }
    }

    pub async fn load_page(&self, request: FetchRequest) -> Action {
        let FetchRequest { seq, query } = request;
        match self.source.fetch_page(query).await {
            Ok(page) => {
                tracing::info!(
                    seq,
                    page = query.page,
                    rows = page.records.len(),
                    total = page.total,
                    "loaded employee page"
                );
                Action::FetchSucceeded { seq, page }
            }
            Err(err) => {
                tracing::error!(seq, page = query.page, "error fetching employees: {err}");
                Action::FetchFailed {
                    seq,
                    message: err.to_string(),
                }
            }
        }
    }
}
