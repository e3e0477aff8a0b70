use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::Settings;
use crate::domain::entities::employee::{Employee, Gender};
use crate::domain::entities::view::{FilterUpdate, PageState, SortField, SortSpec};
use crate::infra::http::dummyjson::HttpEmployeeSource;
use crate::ui::state::app_state::AppState;
use crate::ui::view_model::{
    can_go_next, can_go_prev, gender_select_value, nav_style, pagination_label, role_label,
    sort_indicator, CELL_STYLE, HEADER_CELL_STYLE, TABLE_WRAPPER_STYLE,
};
use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::view_reducer::Action;

#[component]
fn SortHeader(
    label: &'static str,
    field: SortField,
    sort: SortSpec,
    on_sort: EventHandler<SortField>,
) -> Element {
    let indicator = sort_indicator(&sort, field);

    rsx! {
        th { style: HEADER_CELL_STYLE,
            "{label} "
            button {
                style: "color: red; cursor: pointer; background: none; border: none;",
                title: "Sort by {field.as_str()}",
                onclick: move |_| on_sort.call(field),
                "{indicator}"
            }
        }
    }
}

#[component]
fn GenderFilter(selected: &'static str, on_change: EventHandler<Option<Gender>>) -> Element {
    rsx! {
        div { class: "labl",
            label {
                "Gender: "
                select {
                    name: "gender",
                    value: "{selected}",
                    onchange: move |event| on_change.call(Gender::from_filter_value(&event.value())),
                    option { value: "", selected: selected.is_empty(), "Select Gender" }
                    for gender in Gender::ALL {
                        option {
                            value: "{gender.as_str()}",
                            selected: selected == gender.as_str(),
                            "{gender.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmployeeRow(position: usize, employee: Employee) -> Element {
    let name = employee.display_name();
    let role = role_label(&employee).to_string();

    rsx! {
        tr {
            td { style: CELL_STYLE, "{position}" }
            td { style: CELL_STYLE, "{employee.id}" }
            td { style: CELL_STYLE, class: "image",
                img { src: "{employee.image}", alt: "image/logo", width: "48" }
            }
            td { style: CELL_STYLE, "{name}" }
            td { style: CELL_STYLE, "{employee.age}" }
            td { style: CELL_STYLE, "{employee.gender.as_str()}" }
            td { style: CELL_STYLE, "{employee.phone}" }
            td { style: CELL_STYLE, "{employee.email}" }
            td { style: CELL_STYLE, "{employee.company.title}" }
            td { style: CELL_STYLE, "{role}" }
            td { style: CELL_STYLE, "{employee.address.country}" }
        }
    }
}

#[component]
fn PaginationBar(page: PageState, on_prev: EventHandler<()>, on_next: EventHandler<()>) -> Element {
    let prev_enabled = can_go_prev(&page);
    let next_enabled = can_go_next(&page);
    let label = pagination_label(&page);

    rsx! {
        div {
            class: "pagination",
            style: "display: flex; gap: 12px; align-items: center; justify-content: center; padding: 8px 0;",
            button {
                style: "{nav_style(prev_enabled)}",
                disabled: !prev_enabled,
                onclick: move |_| on_prev.call(()),
                "⏮"
            }
            p { "{label}" }
            button {
                style: "{nav_style(next_enabled)}",
                disabled: !next_enabled,
                onclick: move |_| on_next.call(()),
                "⏭"
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let settings = use_context::<Settings>();
    let state = AppState::new(move || {
        QueryService::new(Arc::new(HttpEmployeeSource::new(
            settings.api_base_url.clone(),
        )))
    });

    use_effect(move || state.dispatch(Action::Mount));

    let view = state.view.read().clone();
    let rows = view.visible_rows();
    let selected_gender = gender_select_value(&view.filter);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; padding: 12px; height: 100vh; box-sizing: border-box;",
            h1 { "Employee Details" }

            GenderFilter {
                selected: selected_gender,
                on_change: move |gender| state.dispatch(Action::SetFilter(FilterUpdate::Gender(gender))),
            }

            div {
                style: TABLE_WRAPPER_STYLE,
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            th { style: HEADER_CELL_STYLE, "Sl no." }
                            SortHeader {
                                label: "ID",
                                field: SortField::Id,
                                sort: view.sort,
                                on_sort: move |field| state.dispatch(Action::SetSort(field)),
                            }
                            th { style: HEADER_CELL_STYLE, "Image" }
                            SortHeader {
                                label: "Name",
                                field: SortField::Name,
                                sort: view.sort,
                                on_sort: move |field| state.dispatch(Action::SetSort(field)),
                            }
                            SortHeader {
                                label: "Age",
                                field: SortField::Age,
                                sort: view.sort,
                                on_sort: move |field| state.dispatch(Action::SetSort(field)),
                            }
                            for header in ["Gender", "Phone", "Email", "Department", "Role", "Country"] {
                                th { style: HEADER_CELL_STYLE, "{header}" }
                            }
                        }
                    }
                    tbody {
                        for (idx, employee) in rows.iter().enumerate() {
                            EmployeeRow { key: "{employee.id}", position: idx + 1, employee: employee.clone() }
                        }
                    }
                }
            }

            if view.loading {
                p { "Loading..." }
            }

            PaginationBar {
                page: view.page,
                on_prev: move |_| state.dispatch(Action::PrevPage),
                on_next: move |_| state.dispatch(Action::NextPage),
            }
        }
    }
}
