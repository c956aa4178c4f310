//! State owned by the catalog's root controller.
//!
//! One `CatalogState` holds the canonical car list together with all
//! transient UI state. Child views never keep server data of their own except
//! the detail viewer's single record and the forms' lookup choices.

use crate::model::car::Car;
use crate::query::{CarFilters, CarQuery, SortSpec};

/// Which overlay the controller currently shows. The detail viewer is driven
/// separately by `selected_car_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Filter,
    Create,
    Delete,
}

/// Main state container of the catalog.
///
/// Fields are `pub` because the view reads them directly; all mutation goes
/// through `update::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    /// Last successfully fetched list, patched locally after deletes.
    pub cars: Vec<Car>,

    /// True while a list request issued by a search, filter or sort change
    /// (or the initial load) is outstanding.
    pub loading: bool,

    /// Current search box text.
    pub search: String,

    /// Filters committed from the filter chooser.
    pub filters: CarFilters,

    /// Sort preset chosen from the sort menu.
    pub sort: SortSpec,

    /// Whether the sort dropdown is expanded.
    pub sort_menu_open: bool,

    /// Car shown in the detail viewer, if any.
    pub selected_car_id: Option<String>,

    pub active_modal: Modal,

    /// Car awaiting delete confirmation. Set together with `Modal::Delete`.
    pub delete_target_id: Option<String>,

    /// True while a create request is outstanding, whether or not the form
    /// is still open.
    pub creating: bool,

    /// Message for the creation form after its last submit failed.
    pub create_error: Option<&'static str>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Fresh state as mounted: empty list and `loading` set, since the
    /// initial list request goes out immediately.
    pub fn new() -> Self {
        Self {
            cars: Vec::new(),
            loading: true,
            search: String::new(),
            filters: CarFilters::default(),
            sort: SortSpec::default(),
            sort_menu_open: false,
            selected_car_id: None,
            active_modal: Modal::None,
            delete_target_id: None,
            creating: false,
            create_error: None,
        }
    }

    /// List parameters for the current search, filters and sort.
    pub fn query(&self) -> CarQuery {
        CarQuery {
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort: self.sort,
        }
    }

    /// Display name of the delete target, or an empty string when the target
    /// is not in the current list.
    pub fn delete_target_name(&self) -> &str {
        self.delete_target_id
            .as_deref()
            .and_then(|id| self.cars.iter().find(|car| car.id == id))
            .map(|car| car.name.as_str())
            .unwrap_or("")
    }
}
