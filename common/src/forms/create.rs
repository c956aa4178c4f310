//! Creation form: local draft, client-side validation and submit bookkeeping.
//!
//! Validation collects every violated rule at once. The server remains the
//! authority on the car type and tag vocabularies; the form only offers the
//! looked-up choices and format-checks what was entered.

use std::collections::BTreeMap;
use std::fmt;

use crate::requests::CreateCarRequest;
use crate::selection::TagSelection;

pub const MAX_NAME_CHARS: usize = 50;
pub const MAX_DESCRIPTION_CHARS: usize = 200;
pub const CAR_TYPES: [&str; 2] = ["automatic", "manual"];

/// Shown for any failed create request, whatever the server said.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create car. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ImageUrl,
    Name,
    Description,
    CarType,
    Tags,
}

/// Per-field messages for every rule the draft violates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().copied().collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    fn add(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarDraft {
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub car_type: String,
    pub tags: TagSelection,
}

impl CarDraft {
    pub fn validate(&self) -> Result<CreateCarRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.image_url.is_empty() {
            errors.add(Field::ImageUrl, "Image URL is required");
        }

        if self.name.is_empty() {
            errors.add(Field::Name, "Name is required");
        } else if self.name.chars().count() > MAX_NAME_CHARS {
            errors.add(Field::Name, "Name must be 50 characters or less");
        }

        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.add(Field::Description, "Description must be 200 characters or less");
        }

        if self.car_type.is_empty() {
            errors.add(Field::CarType, "Car type is required");
        } else if !CAR_TYPES
            .iter()
            .any(|t| t.eq_ignore_ascii_case(&self.car_type))
        {
            errors.add(Field::CarType, "Car type must be 'automatic' or 'manual'");
        }

        if self.tags.is_empty() {
            errors.add(Field::Tags, "At least one tag is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateCarRequest {
            image_url: self.image_url.clone(),
            name: self.name.clone(),
            description: Some(self.description.clone()).filter(|d| !d.is_empty()),
            car_type: self.car_type.clone(),
            tags: self.tags.to_vec(),
        })
    }
}

/// Everything the creation form shows besides its markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCarForm {
    pub draft: CarDraft,
    pub car_types: Vec<String>,
    pub available_tags: Vec<String>,
    pub errors: ValidationErrors,
    pub submit_error: Option<&'static str>,
    pub submitting: bool,
}

impl CreateCarForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_options(&mut self, car_types: Vec<String>, available_tags: Vec<String>) {
        self.car_types = car_types;
        self.available_tags = available_tags;
    }

    /// Validates the draft. On success the form enters the submitting state
    /// and the request to send is returned; otherwise the errors are kept for
    /// display and nothing is sent.
    pub fn submit(&mut self) -> Option<CreateCarRequest> {
        if self.submitting {
            return None;
        }
        match self.draft.validate() {
            Ok(request) => {
                self.errors = ValidationErrors::default();
                self.submit_error = None;
                self.submitting = true;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Mirrors the outstanding create request tracked by the catalog
    /// controller, which sends it and hears back about it.
    pub fn sync_submission(&mut self, submitting: bool, submit_error: Option<&'static str>) {
        self.submitting = submitting;
        self.submit_error = submit_error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CarDraft {
        let mut tags = TagSelection::new();
        tags.toggle("sport");
        CarDraft {
            image_url: "https://img/a.jpg".to_string(),
            name: "Alpha".to_string(),
            description: String::new(),
            car_type: "Automatic".to_string(),
            tags,
        }
    }

    #[test]
    fn valid_draft_produces_request() {
        let request = valid_draft().validate().unwrap();
        assert_eq!(request.name, "Alpha");
        assert_eq!(request.description, None);
        assert_eq!(request.tags, vec!["sport"]);
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let mut draft = valid_draft();
        draft.name = "n".repeat(MAX_NAME_CHARS);
        draft.description = "d".repeat(MAX_DESCRIPTION_CHARS);
        draft.car_type = "MANUAL".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut draft = valid_draft();
        draft.name = "é".repeat(MAX_NAME_CHARS);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn reports_all_missing_fields_together() {
        let errors = CarDraft::default().validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![Field::ImageUrl, Field::Name, Field::CarType, Field::Tags]
        );
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::CarType), Some("Car type is required"));
        assert_eq!(errors.get(Field::Tags), Some("At least one tag is required"));
    }

    #[test]
    fn reports_overlong_and_unknown_values() {
        let mut draft = valid_draft();
        draft.name = "n".repeat(MAX_NAME_CHARS + 1);
        draft.description = "d".repeat(MAX_DESCRIPTION_CHARS + 1);
        draft.car_type = "hybrid".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some("Name must be 50 characters or less"));
        assert_eq!(
            errors.get(Field::Description),
            Some("Description must be 200 characters or less")
        );
        assert_eq!(
            errors.get(Field::CarType),
            Some("Car type must be 'automatic' or 'manual'")
        );
    }

    #[test]
    fn invalid_submit_keeps_errors_and_sends_nothing() {
        let mut form = CreateCarForm::new();
        assert_eq!(form.submit(), None);
        assert!(!form.submitting);
        assert_eq!(form.errors.len(), 4);
    }

    #[test]
    fn failed_submit_shows_generic_message() {
        let mut form = CreateCarForm::new();
        form.draft = valid_draft();
        assert!(form.submit().is_some());
        assert!(form.submitting);
        assert_eq!(form.submit(), None);

        form.sync_submission(false, Some(CREATE_FAILED_MESSAGE));
        assert!(!form.submitting);
        assert_eq!(form.submit_error, Some(CREATE_FAILED_MESSAGE));

        assert!(form.submit().is_some());
        assert_eq!(form.submit_error, None);
    }
}
