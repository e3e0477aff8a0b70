use crate::domain::entities::employee::{Employee, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    /// Display name, `"{first_name} {last_name}"`.
    Name,
    Age,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Age => "age",
        }
    }
}

/// `field == None` keeps fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Re-selecting the ascending column flips it; anything else starts ascending.
    pub fn select(self, field: SortField) -> Self {
        let direction = if self.field == Some(field) && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortSpec {
            field: Some(field),
            direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub gender: Option<Gender>,
    /// Never set by a UI control; matches everything while `None`.
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Gender(Option<Gender>),
    #[allow(dead_code)]
    Country(Option<String>),
}

impl FilterSpec {
    pub fn merged(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Gender(gender) => next.gender = gender,
            FilterUpdate::Country(country) => {
                next.country = country.filter(|value| !value.trim().is_empty())
            }
        }
        next
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.gender.map_or(true, |gender| employee.gender == gender)
            && self
                .country
                .as_deref()
                .map_or(true, |country| employee.address.country == country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }
}

impl PageState {
    pub fn contains(&self, target: u32) -> bool {
        target >= 1 && target <= self.total_pages
    }
}

pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeePage {
    pub records: Vec<Employee>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_toggles_only_when_same_field_is_ascending() {
        let unsorted = SortSpec::default();

        let first = unsorted.select(SortField::Age);
        assert_eq!(first.field, Some(SortField::Age));
        assert_eq!(first.direction, SortDirection::Asc);

        let second = first.select(SortField::Age);
        assert_eq!(second.direction, SortDirection::Desc);

        let third = second.select(SortField::Age);
        assert_eq!(third.direction, SortDirection::Asc);

        let other = second.select(SortField::Id);
        assert_eq!(other.field, Some(SortField::Id));
        assert_eq!(other.direction, SortDirection::Asc);
    }

    #[test]
    fn merged_keeps_fields_not_named_by_the_update() {
        let filter = FilterSpec {
            gender: None,
            country: Some("France".to_string()),
        };

        let next = filter.merged(FilterUpdate::Gender(Some(Gender::Male)));

        assert_eq!(next.gender, Some(Gender::Male));
        assert_eq!(next.country.as_deref(), Some("France"));
    }

    #[test]
    fn blank_country_is_stored_as_unset() {
        let next = FilterSpec::default().merged(FilterUpdate::Country(Some("  ".to_string())));
        assert_eq!(next.country, None);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(208, 10), 21);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn skip_is_zero_based_offset() {
        assert_eq!(PageQuery::new(1, 10).skip(), 0);
        assert_eq!(PageQuery::new(3, 10).skip(), 20);
    }
}
