//! Typed client for the remote cars API.
//!
//! Each function is a single request/response round trip against
//! `config::API_BASE_URL`: no retries, no caching, no cancellation. Errors are
//! returned to the caller, which decides how to log and surface them.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use common::endpoints;
use common::error::ApiError;
use common::model::car::Car;
use common::query::CarQuery;
use common::requests::CreateCarRequest;

use crate::config::API_BASE_URL;

fn transport(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

/// Turns a non-success response into an `ApiError`, keeping its body text.
async fn check(response: Response, resource: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, body, resource))
}

async fn decode<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T, ApiError> {
    check(response, resource)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /api/cars` with only the parameters that are set.
pub async fn list_cars(query: &CarQuery) -> Result<Vec<Car>, ApiError> {
    let url = endpoints::cars_url(API_BASE_URL);
    let response = Request::get(&url)
        .query(query.to_params())
        .send()
        .await
        .map_err(transport)?;
    decode(response, &url).await
}

pub async fn get_car(id: &str) -> Result<Car, ApiError> {
    let url = endpoints::car_url(API_BASE_URL, id);
    let response = Request::get(&url).send().await.map_err(transport)?;
    decode(response, id).await
}

pub async fn list_car_types() -> Result<Vec<String>, ApiError> {
    let url = endpoints::car_types_url(API_BASE_URL);
    let response = Request::get(&url).send().await.map_err(transport)?;
    decode(response, &url).await
}

pub async fn list_tags() -> Result<Vec<String>, ApiError> {
    let url = endpoints::tags_url(API_BASE_URL);
    let response = Request::get(&url).send().await.map_err(transport)?;
    decode(response, &url).await
}

/// Fetches both lookup vocabularies, car types first.
pub async fn load_options() -> Result<(Vec<String>, Vec<String>), ApiError> {
    let car_types = list_car_types().await?;
    let tags = list_tags().await?;
    Ok((car_types, tags))
}

pub async fn create_car(request: &CreateCarRequest) -> Result<Car, ApiError> {
    let url = endpoints::cars_url(API_BASE_URL);
    let response = Request::post(&url)
        .json(request)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    decode(response, &url).await
}

/// `DELETE /api/cars/{id}`. Any 2xx counts as done; the body is ignored.
pub async fn delete_car(id: &str) -> Result<(), ApiError> {
    let url = endpoints::car_url(API_BASE_URL, id);
    let response = Request::delete(&url).send().await.map_err(transport)?;
    check(response, id).await.map(|_| ())
}
