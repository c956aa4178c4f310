//! In-memory stand-in for the remote cars API, used to drive the catalog
//! controller through full request/response loops.

use common::catalog::{CatalogMsg, Command};
use common::error::ApiError;
use common::model::car::Car;
use common::query::{sort_cars, CarQuery};
use common::requests::CreateCarRequest;

#[derive(Default)]
pub struct InMemoryCatalog {
    cars: Vec<Car>,
    next_id: u32,
    pub list_requests: Vec<CarQuery>,
    pub get_requests: Vec<String>,
    pub offline: bool,
}

pub fn car(id: &str, name: &str, car_type: &str, tags: &[&str], created_at: &str) -> Car {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "carType": car_type,
        "tags": tags,
        "imageUrl": format!("https://img/{}.jpg", id),
        "createdAt": created_at,
    }))
    .unwrap()
}

impl InMemoryCatalog {
    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self {
            cars,
            ..Default::default()
        }
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline {
            Err(ApiError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    pub fn list(&mut self, query: &CarQuery) -> Result<Vec<Car>, ApiError> {
        self.list_requests.push(query.clone());
        self.check_online()?;

        let search = query.search.to_lowercase();
        let wanted_tags: Vec<&str> = query
            .filters
            .tags
            .as_deref()
            .map(|t| t.split(',').filter(|t| !t.is_empty()).collect())
            .unwrap_or_default();

        let mut cars: Vec<Car> = self
            .cars
            .iter()
            .filter(|car| search.is_empty() || car.name.to_lowercase().contains(&search))
            .filter(|car| match query.filters.car_type.as_deref() {
                Some(t) if !t.is_empty() => car.car_type.eq_ignore_ascii_case(t),
                _ => true,
            })
            .filter(|car| {
                wanted_tags.is_empty() || wanted_tags.iter().any(|t| car.tags.iter().any(|c| c == t))
            })
            .cloned()
            .collect();
        sort_cars(&mut cars, query.sort);
        Ok(cars)
    }

    pub fn get(&mut self, id: &str) -> Result<Car, ApiError> {
        self.get_requests.push(id.to_string());
        self.check_online()?;
        self.cars
            .iter()
            .find(|car| car.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    pub fn create(&mut self, request: CreateCarRequest) -> Result<Car, ApiError> {
        self.check_online()?;
        self.next_id += 1;
        let created = Car {
            id: format!("new-{}", self.next_id),
            name: request.name,
            description: request.description.unwrap_or_default(),
            car_type: request.car_type,
            tags: request.tags,
            image_url: request.image_url,
            created_at: format!("2030-01-01T00:00:{:02}Z", self.next_id),
            engine: None,
            displacement: None,
            fuel_type: None,
            mileage: None,
            top_speed: None,
            max_power: None,
            emission_standard: None,
        };
        self.cars.push(created.clone());
        Ok(created)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.check_online()?;
        let before = self.cars.len();
        self.cars.retain(|car| car.id != id);
        if self.cars.len() == before {
            return Err(ApiError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Runs a controller command and returns the completion message the host
    /// would feed back into `update`.
    pub fn execute(&mut self, command: Command) -> CatalogMsg {
        match command {
            Command::FetchCars(query) => match self.list(&query) {
                Ok(cars) => CatalogMsg::CarsLoaded(cars),
                Err(error) => CatalogMsg::CarsFailed(error),
            },
            Command::DeleteCar(id) => match self.delete(&id) {
                Ok(()) => CatalogMsg::CarDeleted(id),
                Err(error) => CatalogMsg::DeleteFailed { id, error },
            },
            Command::CreateCar(request) => match self.create(request) {
                Ok(car) => CatalogMsg::CarCreated(car),
                Err(error) => CatalogMsg::CreateFailed(error),
            },
        }
    }
}
