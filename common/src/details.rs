use crate::model::car::Car;

/// Local state of the detail viewer.
///
/// The viewer receives the selected identifier from the controller and
/// fetches the record itself. `show` reports which identifier, if any, needs
/// a get-by-id request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    pub car_id: Option<String>,
    pub car: Option<Car>,
    pub loading: bool,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows a change of selection. Returns the identifier to fetch when
    /// the selection moved to a new car; re-selecting the current car or
    /// clearing the selection fetches nothing.
    pub fn show(&mut self, car_id: Option<&str>) -> Option<String> {
        if self.car_id.as_deref() == car_id {
            return None;
        }
        self.car_id = car_id.map(str::to_string);
        self.car = None;
        self.loading = self.car_id.is_some();
        self.car_id.clone()
    }

    /// Stores a fetched record. Records for a car that is no longer selected
    /// are dropped and `false` is returned.
    pub fn loaded(&mut self, car: Car) -> bool {
        if self.car_id.as_deref() != Some(car.id.as_str()) {
            return false;
        }
        self.car = Some(car);
        self.loading = false;
        true
    }

    /// A failed fetch leaves nothing to display.
    pub fn failed(&mut self, car_id: &str) {
        if self.car_id.as_deref() == Some(car_id) {
            self.loading = false;
        }
    }

    /// The car to render, if the selection is set and its record arrived.
    pub fn visible(&self) -> Option<&Car> {
        self.car_id.as_ref().and(self.car.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: &str) -> Car {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": "Civic",
            "carType": "manual",
            "engine": "1.5L"
        }))
        .unwrap()
    }

    #[test]
    fn selecting_requests_exactly_one_fetch() {
        let mut detail = DetailState::new();
        assert_eq!(detail.show(Some("abc")), Some("abc".to_string()));
        assert_eq!(detail.show(Some("abc")), None);
        assert!(detail.loading);
        assert!(detail.visible().is_none());

        assert!(detail.loaded(car("abc")));
        let shown = detail.visible().unwrap();
        assert_eq!(shown.specifications().len(), 1);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut detail = DetailState::new();
        detail.show(Some("abc"));
        detail.show(Some("xyz"));
        assert!(!detail.loaded(car("abc")));
        assert!(detail.visible().is_none());
        assert!(detail.loaded(car("xyz")));
    }

    #[test]
    fn clearing_selection_hides_viewer() {
        let mut detail = DetailState::new();
        detail.show(Some("abc"));
        detail.loaded(car("abc"));
        assert_eq!(detail.show(None), None);
        assert!(detail.visible().is_none());
        assert!(!detail.loading);
    }

    #[test]
    fn failure_stops_loading() {
        let mut detail = DetailState::new();
        detail.show(Some("abc"));
        detail.failed("abc");
        assert!(!detail.loading);
        assert!(detail.visible().is_none());
    }
}
