//! Parameters of the `GET /api/cars` list request.
//!
//! The controller owns one `CarQuery` built from its search text, committed
//! filters and selected sort. Unset or empty parameters never reach the wire:
//! `to_params` only yields the pairs that carry a value.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::car::Car;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "createdAt")]
    CreatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl SortSpec {
    pub fn new(sort_by: SortField, sort_order: SortOrder) -> Self {
        Self {
            sort_by: Some(sort_by),
            sort_order: Some(sort_order),
        }
    }
}

/// One entry of the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub label: &'static str,
    pub spec: SortSpec,
}

/// The sort presets offered by the toolbar, in menu order.
pub const SORT_OPTIONS: [SortOption; 4] = [
    SortOption {
        label: "Car Name (A-Z)",
        spec: SortSpec {
            sort_by: Some(SortField::Name),
            sort_order: Some(SortOrder::Asc),
        },
    },
    SortOption {
        label: "Car Name (Z-A)",
        spec: SortSpec {
            sort_by: Some(SortField::Name),
            sort_order: Some(SortOrder::Desc),
        },
    },
    SortOption {
        label: "Creation Date (Newest First)",
        spec: SortSpec {
            sort_by: Some(SortField::CreatedAt),
            sort_order: Some(SortOrder::Desc),
        },
    },
    SortOption {
        label: "Creation Date (Oldest First)",
        spec: SortSpec {
            sort_by: Some(SortField::CreatedAt),
            sort_order: Some(SortOrder::Asc),
        },
    },
];

/// Committed filter selection. `tags` is already comma-joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilters {
    pub car_type: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarQuery {
    pub search: String,
    pub filters: CarFilters,
    pub sort: SortSpec,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl CarQuery {
    /// Query-string pairs in wire order, skipping every unset or empty value.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = non_empty(Some(&self.search)) {
            params.push(("search", search.to_string()));
        }
        if let Some(car_type) = non_empty(self.filters.car_type.as_deref()) {
            params.push(("carType", car_type.to_string()));
        }
        if let Some(tags) = non_empty(self.filters.tags.as_deref()) {
            params.push(("tags", tags.to_string()));
        }
        if let Some(sort_by) = self.sort.sort_by {
            params.push(("sortBy", sort_by.as_str().to_string()));
        }
        if let Some(sort_order) = self.sort.sort_order {
            params.push(("sortOrder", sort_order.as_str().to_string()));
        }
        params
    }
}

fn compare_created(a: &Car, b: &Car) -> Ordering {
    match (a.created_at_time(), b.created_at_time()) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.created_at.cmp(&b.created_at),
    }
}

/// Orders `cars` in place the way the list endpoint orders its results.
///
/// Names compare case-insensitively; a missing order means ascending. With no
/// sort field the slice is left untouched. The sort is stable.
pub fn sort_cars(cars: &mut [Car], spec: SortSpec) {
    let Some(field) = spec.sort_by else {
        return;
    };
    cars.sort_by(|a, b| {
        let ordering = match field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::CreatedAt => compare_created(a, b),
        };
        match spec.sort_order {
            Some(SortOrder::Desc) => ordering.reverse(),
            _ => ordering,
        }
    });
}
