use crate::domain::entities::employee::Employee;
use crate::domain::entities::view::{FilterSpec, PageState, SortDirection, SortField, SortSpec};

pub const NAV_ENABLED_STYLE: &str = "color: cyan; cursor: pointer; background: none; border: none; font-size: 20px;";
pub const NAV_DISABLED_STYLE: &str = "color: gray; cursor: not-allowed; background: none; border: none; font-size: 20px;";

pub const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 4px; text-align: center;";

pub const TABLE_WRAPPER_STYLE: &str =
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 6px;";
pub const HEADER_CELL_STYLE: &str =
    "border: 1px solid #bbb; padding: 6px; background: #f3f3f3; position: sticky; top: 0; white-space: nowrap;";

pub fn pagination_label(page: &PageState) -> String {
    format!("{} page of {}", page.current_page, page.total_pages)
}

pub fn nav_style(enabled: bool) -> &'static str {
    if enabled {
        NAV_ENABLED_STYLE
    } else {
        NAV_DISABLED_STYLE
    }
}

pub fn can_go_prev(page: &PageState) -> bool {
    page.contains(page.current_page.saturating_sub(1))
}

pub fn can_go_next(page: &PageState) -> bool {
    page.contains(page.current_page.saturating_add(1))
}

pub fn sort_indicator(sort: &SortSpec, field: SortField) -> &'static str {
    match (sort.field == Some(field), sort.direction) {
        (false, _) => "⇅",
        (true, SortDirection::Asc) => "▲",
        (true, SortDirection::Desc) => "▼",
    }
}

pub fn gender_select_value(filter: &FilterSpec) -> &'static str {
    filter.gender.map(|gender| gender.as_str()).unwrap_or("")
}

pub fn role_label(employee: &Employee) -> &str {
    employee.role.as_deref().unwrap_or("")
}
