use crate::error::ApiError;
use crate::model::car::Car;
use crate::query::{CarFilters, CarQuery, SortSpec};
use crate::requests::CreateCarRequest;

/// Events the catalog controller reacts to: user input from its own view or
/// a child component, and completions of the requests it issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogMsg {
    SetSearch(String),
    ApplyFilters(CarFilters),
    ToggleSortMenu,
    SelectSort(SortSpec),
    SelectCar(String),
    CloseDetails,
    OpenFilter,
    OpenCreate,
    CloseModal,
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    CarsLoaded(Vec<Car>),
    CarsFailed(ApiError),
    CarDeleted(String),
    DeleteFailed { id: String, error: ApiError },
    SubmitCreate(CreateCarRequest),
    CarCreated(Car),
    CreateFailed(ApiError),
}

/// Side effects requested by a transition, executed by the hosting view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchCars(CarQuery),
    DeleteCar(String),
    CreateCar(CreateCarRequest),
}
