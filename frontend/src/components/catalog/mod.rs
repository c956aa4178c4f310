//! Catalog page: the root controller of the app.
//!
//! Wires the Yew `Component` lifecycle to `common::catalog`:
//! - on mount, issue the initial list request;
//! - every message goes through `common::catalog::update`, and any returned
//!   `Command` is executed here with `spawn_local`, its completion sent back as
//!   another message;
//! - failed list and delete requests are logged to the console and reported
//!   with a toast, leaving state as the transition table defines it. A failed
//!   create is shown by the form, or by a toast once the form is closed.

use common::catalog::{self, CatalogMsg, CatalogState, Command, Modal};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{log_failure, report_failure};

mod view;

pub struct CatalogComponent {
    pub state: CatalogState,
}

impl Component for CatalogComponent {
    type Message = CatalogMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let state = CatalogState::new();
        run(ctx.link(), catalog::initial_command(&state));
        Self { state }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match &msg {
            CatalogMsg::CarsFailed(error) => {
                report_failure("fetching cars", error, "Could not load cars.");
            }
            CatalogMsg::DeleteFailed { error, .. } => {
                report_failure("deleting car", error, "Could not delete car.");
            }
            CatalogMsg::CreateFailed(error) if self.state.active_modal == Modal::Create => {
                log_failure("creating car", error);
            }
            CatalogMsg::CreateFailed(error) => {
                report_failure("creating car", error, "Could not create car.");
            }
            _ => {}
        }

        if let Some(command) = catalog::update(&mut self.state, msg) {
            run(ctx.link(), command);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Executes a controller command in the background. Responses are delivered
/// in completion order; nothing is cancelled.
fn run(link: &Scope<CatalogComponent>, command: Command) {
    let link = link.clone();
    match command {
        Command::FetchCars(query) => spawn_local(async move {
            match api::list_cars(&query).await {
                Ok(cars) => link.send_message(CatalogMsg::CarsLoaded(cars)),
                Err(error) => link.send_message(CatalogMsg::CarsFailed(error)),
            }
        }),
        Command::DeleteCar(id) => spawn_local(async move {
            match api::delete_car(&id).await {
                Ok(()) => link.send_message(CatalogMsg::CarDeleted(id)),
                Err(error) => link.send_message(CatalogMsg::DeleteFailed { id, error }),
            }
        }),
        Command::CreateCar(request) => spawn_local(async move {
            match api::create_car(&request).await {
                Ok(car) => link.send_message(CatalogMsg::CarCreated(car)),
                Err(error) => link.send_message(CatalogMsg::CreateFailed(error)),
            }
        }),
    }
}
