//! Transition table of the catalog controller.
//!
//! Elm-style: `update` receives the current state and a message, mutates the
//! state and returns at most one `Command` for the host to run. Responses come
//! back as further messages.
//!
//! Key behaviors
//! - Any change of search text, filters or sort sets `loading` and re-fetches
//!   the list with the current parameters. Responses are applied in arrival
//!   order, so a slow earlier response can overwrite a newer one.
//! - A confirmed delete removes the row locally once the server acknowledges
//!   it; no re-fetch. A failed delete leaves the modal open.
//! - Create requests are owned here rather than by the form, so a creation
//!   that completes after the form was closed still re-fetches the list. A
//!   successful creation closes the form (if open) without touching `loading`.

use super::messages::{CatalogMsg, Command};
use super::state::{CatalogState, Modal};
use crate::forms::create::CREATE_FAILED_MESSAGE;

/// The request issued when the catalog is mounted.
pub fn initial_command(state: &CatalogState) -> Command {
    Command::FetchCars(state.query())
}

fn refetch(state: &mut CatalogState) -> Option<Command> {
    state.loading = true;
    Some(Command::FetchCars(state.query()))
}

pub fn update(state: &mut CatalogState, msg: CatalogMsg) -> Option<Command> {
    match msg {
        CatalogMsg::SetSearch(search) => {
            if state.search == search {
                return None;
            }
            state.search = search;
            refetch(state)
        }
        CatalogMsg::ApplyFilters(filters) => {
            state.filters = filters;
            if state.active_modal == Modal::Filter {
                state.active_modal = Modal::None;
            }
            refetch(state)
        }
        CatalogMsg::ToggleSortMenu => {
            state.sort_menu_open = !state.sort_menu_open;
            None
        }
        CatalogMsg::SelectSort(sort) => {
            state.sort = sort;
            state.sort_menu_open = false;
            refetch(state)
        }
        CatalogMsg::SelectCar(id) => {
            state.selected_car_id = Some(id);
            None
        }
        CatalogMsg::CloseDetails => {
            state.selected_car_id = None;
            None
        }
        CatalogMsg::OpenFilter => {
            state.active_modal = Modal::Filter;
            None
        }
        CatalogMsg::OpenCreate => {
            state.active_modal = Modal::Create;
            state.create_error = None;
            None
        }
        CatalogMsg::CloseModal | CatalogMsg::CancelDelete => {
            state.active_modal = Modal::None;
            state.delete_target_id = None;
            None
        }
        CatalogMsg::RequestDelete(id) => {
            state.active_modal = Modal::Delete;
            state.delete_target_id = Some(id);
            None
        }
        CatalogMsg::ConfirmDelete => state.delete_target_id.clone().map(Command::DeleteCar),
        CatalogMsg::CarsLoaded(cars) => {
            state.cars = cars;
            state.loading = false;
            None
        }
        CatalogMsg::CarsFailed(_) => {
            state.loading = false;
            None
        }
        CatalogMsg::CarDeleted(id) => {
            state.cars.retain(|car| car.id != id);
            state.active_modal = Modal::None;
            state.delete_target_id = None;
            None
        }
        CatalogMsg::DeleteFailed { .. } => None,
        CatalogMsg::SubmitCreate(request) => {
            if state.creating {
                return None;
            }
            state.creating = true;
            state.create_error = None;
            Some(Command::CreateCar(request))
        }
        CatalogMsg::CarCreated(_) => {
            state.creating = false;
            if state.active_modal == Modal::Create {
                state.active_modal = Modal::None;
            }
            Some(Command::FetchCars(state.query()))
        }
        CatalogMsg::CreateFailed(_) => {
            state.creating = false;
            state.create_error = Some(CREATE_FAILED_MESSAGE);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::model::car::Car;
    use crate::query::{CarFilters, CarQuery, SortField, SortOrder, SortSpec};
    use crate::requests::CreateCarRequest;

    fn car(id: &str, name: &str) -> Car {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "carType": "manual",
            "tags": ["sport"]
        }))
        .unwrap()
    }

    fn request(name: &str) -> CreateCarRequest {
        CreateCarRequest {
            image_url: "https://img/n.jpg".to_string(),
            name: name.to_string(),
            description: None,
            car_type: "manual".to_string(),
            tags: vec!["sport".to_string()],
        }
    }

    fn loaded(cars: Vec<Car>) -> CatalogState {
        let mut state = CatalogState::new();
        update(&mut state, CatalogMsg::CarsLoaded(cars));
        state
    }

    #[test]
    fn mount_starts_loading_with_bare_query() {
        let state = CatalogState::new();
        assert!(state.loading);
        assert_eq!(
            initial_command(&state),
            Command::FetchCars(CarQuery::default())
        );
    }

    #[test]
    fn search_change_issues_one_fetch_with_search_only() {
        let mut state = loaded(vec![]);
        let command = update(&mut state, CatalogMsg::SetSearch("civic".to_string()));
        let Some(Command::FetchCars(query)) = command else {
            panic!("expected a list request");
        };
        assert_eq!(query.to_params(), vec![("search", "civic".to_string())]);
        assert!(state.loading);
    }

    #[test]
    fn unchanged_search_does_not_refetch() {
        let mut state = loaded(vec![]);
        update(&mut state, CatalogMsg::SetSearch("civic".to_string()));
        update(&mut state, CatalogMsg::CarsLoaded(vec![]));
        assert_eq!(update(&mut state, CatalogMsg::SetSearch("civic".to_string())), None);
        assert!(!state.loading);
    }

    #[test]
    fn applying_filters_closes_chooser_and_refetches() {
        let mut state = loaded(vec![]);
        update(&mut state, CatalogMsg::OpenFilter);
        let filters = CarFilters {
            car_type: Some("automatic".to_string()),
            tags: Some("suv,family".to_string()),
        };
        let command = update(&mut state, CatalogMsg::ApplyFilters(filters.clone()));
        assert_eq!(state.active_modal, Modal::None);
        assert_eq!(
            command,
            Some(Command::FetchCars(CarQuery {
                filters,
                ..Default::default()
            }))
        );
    }

    #[test]
    fn selecting_sort_closes_menu_and_refetches() {
        let mut state = loaded(vec![]);
        update(&mut state, CatalogMsg::ToggleSortMenu);
        assert!(state.sort_menu_open);
        let spec = SortSpec::new(SortField::Name, SortOrder::Desc);
        let command = update(&mut state, CatalogMsg::SelectSort(spec));
        assert!(!state.sort_menu_open);
        assert_eq!(state.sort, spec);
        assert!(matches!(command, Some(Command::FetchCars(q)) if q.sort == spec));
    }

    #[test]
    fn later_response_wins_even_when_stale() {
        let mut state = loaded(vec![]);
        update(&mut state, CatalogMsg::SetSearch("c".to_string()));
        update(&mut state, CatalogMsg::SetSearch("civic".to_string()));
        update(&mut state, CatalogMsg::CarsLoaded(vec![car("1", "Civic")]));
        update(
            &mut state,
            CatalogMsg::CarsLoaded(vec![car("1", "Civic"), car("2", "Corolla")]),
        );
        assert_eq!(state.cars.len(), 2);
    }

    #[test]
    fn list_failure_keeps_previous_cars() {
        let mut state = loaded(vec![car("1", "Alpha")]);
        update(&mut state, CatalogMsg::SetSearch("x".to_string()));
        update(
            &mut state,
            CatalogMsg::CarsFailed(ApiError::Transport("offline".to_string())),
        );
        assert!(!state.loading);
        assert_eq!(state.cars, vec![car("1", "Alpha")]);
    }

    #[test]
    fn delete_flow_patches_list_locally() {
        let mut state = loaded(vec![car("x", "Alpha"), car("y", "Beta")]);
        assert_eq!(update(&mut state, CatalogMsg::RequestDelete("x".to_string())), None);
        assert_eq!(state.active_modal, Modal::Delete);
        assert_eq!(state.delete_target_name(), "Alpha");

        assert_eq!(
            update(&mut state, CatalogMsg::ConfirmDelete),
            Some(Command::DeleteCar("x".to_string()))
        );
        assert_eq!(update(&mut state, CatalogMsg::CarDeleted("x".to_string())), None);
        assert_eq!(state.cars, vec![car("y", "Beta")]);
        assert_eq!(state.active_modal, Modal::None);
        assert_eq!(state.delete_target_id, None);
    }

    #[test]
    fn failed_delete_leaves_modal_open() {
        let mut state = loaded(vec![car("x", "Alpha")]);
        update(&mut state, CatalogMsg::RequestDelete("x".to_string()));
        update(&mut state, CatalogMsg::ConfirmDelete);
        let command = update(
            &mut state,
            CatalogMsg::DeleteFailed {
                id: "x".to_string(),
                error: ApiError::NotFound("x".to_string()),
            },
        );
        assert_eq!(command, None);
        assert_eq!(state.active_modal, Modal::Delete);
        assert_eq!(state.delete_target_id.as_deref(), Some("x"));
        assert_eq!(state.cars.len(), 1);
    }

    #[test]
    fn cancel_delete_clears_target() {
        let mut state = loaded(vec![car("x", "Alpha")]);
        update(&mut state, CatalogMsg::RequestDelete("x".to_string()));
        update(&mut state, CatalogMsg::CancelDelete);
        assert_eq!(state.active_modal, Modal::None);
        assert_eq!(state.delete_target_name(), "");
        assert_eq!(update(&mut state, CatalogMsg::ConfirmDelete), None);
    }

    #[test]
    fn creation_closes_form_and_refetches_current_query() {
        let mut state = loaded(vec![]);
        update(&mut state, CatalogMsg::SetSearch("a".to_string()));
        update(&mut state, CatalogMsg::CarsLoaded(vec![]));
        update(&mut state, CatalogMsg::OpenCreate);
        let command = update(&mut state, CatalogMsg::CarCreated(car("n", "New")));
        assert_eq!(state.active_modal, Modal::None);
        assert!(!state.loading);
        assert_eq!(command, Some(Command::FetchCars(state.query())));
    }

    #[test]
    fn submit_issues_one_create_request() {
        let mut state = loaded(vec![]);
        update(&mut state, CatalogMsg::OpenCreate);
        assert_eq!(
            update(&mut state, CatalogMsg::SubmitCreate(request("New"))),
            Some(Command::CreateCar(request("New")))
        );
        assert!(state.creating);
        assert_eq!(update(&mut state, CatalogMsg::SubmitCreate(request("New"))), None);
    }

    #[test]
    fn creation_finishing_after_form_closed_still_refetches() {
        let mut state = loaded(vec![]);
        update(&mut state, CatalogMsg::OpenCreate);
        update(&mut state, CatalogMsg::SubmitCreate(request("New")));
        update(&mut state, CatalogMsg::CloseModal);
        assert_eq!(state.active_modal, Modal::None);

        let command = update(&mut state, CatalogMsg::CarCreated(car("n", "New")));
        assert!(!state.creating);
        assert_eq!(state.active_modal, Modal::None);
        assert_eq!(command, Some(Command::FetchCars(state.query())));
    }

    #[test]
    fn failed_creation_keeps_form_open_with_message() {
        let mut state = loaded(vec![]);
        update(&mut state, CatalogMsg::OpenCreate);
        update(&mut state, CatalogMsg::SubmitCreate(request("New")));
        let command = update(
            &mut state,
            CatalogMsg::CreateFailed(ApiError::Rejected {
                status: 400,
                body: "bad".to_string(),
            }),
        );
        assert_eq!(command, None);
        assert!(!state.creating);
        assert_eq!(state.active_modal, Modal::Create);
        assert_eq!(state.create_error, Some(CREATE_FAILED_MESSAGE));

        update(&mut state, CatalogMsg::CloseModal);
        update(&mut state, CatalogMsg::OpenCreate);
        assert_eq!(state.create_error, None);
    }

    #[test]
    fn detail_selection_is_independent_of_modals() {
        let mut state = loaded(vec![car("abc", "Alpha")]);
        update(&mut state, CatalogMsg::SelectCar("abc".to_string()));
        assert_eq!(state.selected_car_id.as_deref(), Some("abc"));
        assert_eq!(state.active_modal, Modal::None);
        update(&mut state, CatalogMsg::CloseDetails);
        assert_eq!(state.selected_car_id, None);
    }
}
