//! View-state transitions for the employee table.
//!
//! Every user action and every fetch completion goes through [`reduce`], which
//! returns the next [`ViewState`] and, when the page/sort/filter inputs changed,
//! exactly one [`FetchRequest`] for the caller to run.

use crate::domain::entities::employee::Employee;
use crate::domain::entities::view::{
    total_pages, EmployeePage, FilterSpec, FilterUpdate, PageQuery, PageState, SortField, SortSpec,
};
use crate::usecase::services::row_transform::visible_rows;
use crate::PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub sort: SortSpec,
    pub filter: FilterSpec,
    pub page: PageState,
    /// Rows of the latest applied page only.
    pub records: Vec<Employee>,
    pub loading: bool,
    /// Sequence number of the newest issued fetch; completions carrying any
    /// other number are dropped.
    pub latest_request: u64,
    pub last_error: Option<String>,
}

impl ViewState {
    pub fn visible_rows(&self) -> Vec<Employee> {
        visible_rows(&self.records, &self.sort, &self.filter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: PageQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Mount,
    SetSort(SortField),
    SetFilter(FilterUpdate),
    SetPage(u32),
    NextPage,
    PrevPage,
    FetchSucceeded { seq: u64, page: EmployeePage },
    FetchFailed { seq: u64, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    pub fetch: Option<FetchRequest>,
}

impl Transition {
    fn unchanged(state: &ViewState) -> Self {
        Self {
            state: state.clone(),
            fetch: None,
        }
    }
}

fn issue_fetch(mut next: ViewState) -> Transition {
    next.latest_request += 1;
    next.loading = true;
    let fetch = FetchRequest {
        seq: next.latest_request,
        query: PageQuery::new(next.page.current_page, PAGE_SIZE),
    };
    Transition {
        state: next,
        fetch: Some(fetch),
    }
}

fn restart_from_first_page(mut next: ViewState) -> Transition {
    next.page.current_page = 1;
    next.records.clear();
    issue_fetch(next)
}

fn go_to_page(state: &ViewState, target: u32) -> Transition {
    if !state.page.contains(target) {
        tracing::debug!(
            requested = target,
            total_pages = state.page.total_pages,
            "ignoring out-of-range page change"
        );
        return Transition::unchanged(state);
    }
    let mut next = state.clone();
    next.page.current_page = target;
    issue_fetch(next)
}

pub fn reduce(state: &ViewState, action: Action) -> Transition {
    match action {
        Action::Mount => issue_fetch(state.clone()),
        Action::SetSort(field) => {
            let mut next = state.clone();
            next.sort = state.sort.select(field);
            restart_from_first_page(next)
        }
        Action::SetFilter(update) => {
            let mut next = state.clone();
            next.filter = state.filter.merged(update);
            restart_from_first_page(next)
        }
        Action::SetPage(target) => go_to_page(state, target),
        Action::NextPage => go_to_page(state, state.page.current_page.saturating_add(1)),
        Action::PrevPage => go_to_page(state, state.page.current_page.saturating_sub(1)),
        Action::FetchSucceeded { seq, page } => {
            if seq != state.latest_request {
                tracing::debug!(seq, latest = state.latest_request, "dropping stale page");
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.records = page.records;
            next.page.total_pages = total_pages(page.total, PAGE_SIZE);
            next.loading = false;
            next.last_error = None;

            if next.page.total_pages == 0 {
                next.page.current_page = 1;
            } else if next.page.current_page > next.page.total_pages {
                tracing::info!(
                    current_page = next.page.current_page,
                    total_pages = next.page.total_pages,
                    "current page no longer exists, moving to last page"
                );
                next.page.current_page = next.page.total_pages;
                next.records.clear();
                return issue_fetch(next);
            }

            Transition {
                state: next,
                fetch: None,
            }
        }
        Action::FetchFailed { seq, message } => {
            if seq != state.latest_request {
                tracing::debug!(seq, latest = state.latest_request, "dropping stale failure");
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.loading = false;
            next.last_error = Some(message);
            Transition {
                state: next,
                fetch: None,
            }
        }
    }
}
