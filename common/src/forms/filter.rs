//! Draft state of the filter chooser.
//!
//! Selections stay local to the chooser until `apply` turns them into the
//! `CarFilters` committed to the controller. `clear` resets the draft only.

use crate::query::CarFilters;
use crate::selection::TagSelection;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    /// Lookup vocabularies offered as choices.
    pub car_types: Vec<String>,
    pub available_tags: Vec<String>,
    /// Single-select; `None` until a type is picked.
    pub car_type: Option<String>,
    pub tags: TagSelection,
}

impl FilterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_options(&mut self, car_types: Vec<String>, available_tags: Vec<String>) {
        self.car_types = car_types;
        self.available_tags = available_tags;
    }

    pub fn select_car_type(&mut self, car_type: &str) {
        self.car_type = Some(car_type.to_string());
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.tags.toggle(tag);
    }

    pub fn clear(&mut self) {
        self.car_type = None;
        self.tags.clear();
    }

    pub fn is_car_type_selected(&self, car_type: &str) -> bool {
        self.car_type.as_deref() == Some(car_type)
    }

    /// Filters to commit. Nothing chosen means the parameter stays unset.
    pub fn apply(&self) -> CarFilters {
        CarFilters {
            car_type: self.car_type.clone().filter(|t| !t.is_empty()),
            tags: if self.tags.is_empty() {
                None
            } else {
                Some(self.tags.joined())
            },
        }
    }
}
