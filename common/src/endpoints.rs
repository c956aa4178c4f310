//! Paths of the remote cars API, all under `/api/cars`.

pub const API_PATH: &str = "/api/cars";

fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// `GET` lists cars, `POST` creates one.
pub fn cars_url(base_url: &str) -> String {
    join(base_url, API_PATH)
}

/// `GET` fetches and `DELETE` removes a single car.
pub fn car_url(base_url: &str, id: &str) -> String {
    join(base_url, &format!("{}/{}", API_PATH, id))
}

pub fn car_types_url(base_url: &str) -> String {
    join(base_url, &format!("{}/types", API_PATH))
}

pub fn tags_url(base_url: &str) -> String {
    join(base_url, &format!("{}/tags", API_PATH))
}
