use std::cmp::Ordering;

use crate::domain::entities::employee::Employee;
use crate::domain::entities::view::{FilterSpec, SortDirection, SortField, SortSpec};

fn compare_by(field: SortField, a: &Employee, b: &Employee) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Name => a
            .first_name
            .cmp(&b.first_name)
            .then_with(|| a.last_name.cmp(&b.last_name)),
    }
}

/// Sorts, then filters, the rows of the loaded page.
///
/// The sort is stable, so rows with equal keys keep fetch order in both
/// directions. Filtering never reaches beyond `records`; a filtered page can
/// hold fewer rows than the page size.
pub fn visible_rows(records: &[Employee], sort: &SortSpec, filter: &FilterSpec) -> Vec<Employee> {
    let mut rows = records.to_vec();

    if let Some(field) = sort.field {
        rows.sort_by(|a, b| {
            let ordering = compare_by(field, a, b);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    rows.retain(|employee| filter.matches(employee));
    rows
}
