//! Detail viewer: fetches and shows the full record of the selected car.
//!
//! The viewer owns its fetched record. Each time the `car_id` prop moves to a
//! new car it issues one get-by-id request; closing only clears the selection
//! upstream.

use common::details::DetailState;
use common::error::ApiError;
use common::model::car::Car;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::config::DETAIL_PLACEHOLDER_IMAGE;
use crate::helpers::log_failure;
use crate::tops_sheet::modal_sheet::ModalSheet;

#[derive(Properties, PartialEq)]
pub struct CarDetailsProps {
    #[prop_or_default]
    pub car_id: Option<String>,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Loaded(Car),
    Failed { id: String, error: ApiError },
}

pub struct CarDetails {
    detail: DetailState,
}

impl CarDetails {
    fn follow_selection(&mut self, ctx: &Context<Self>) {
        if let Some(id) = self.detail.show(ctx.props().car_id.as_deref()) {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::get_car(&id).await {
                    Ok(car) => link.send_message(Msg::Loaded(car)),
                    Err(error) => link.send_message(Msg::Failed { id, error }),
                }
            });
        }
    }
}

impl Component for CarDetails {
    type Message = Msg;
    type Properties = CarDetailsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = Self {
            detail: DetailState::new(),
        };
        component.follow_selection(ctx);
        component
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.follow_selection(ctx);
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(car) => self.detail.loaded(car),
            Msg::Failed { id, error } => {
                log_failure("fetching car details", &error);
                self.detail.failed(&id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(car) = self.detail.visible() else {
            return html! {};
        };
        let badge = if car.is_automatic() { "automatic" } else { "manual" };

        html! {
            <ModalSheet>
                <button class="close-button" onclick={ctx.props().on_close.reform(|_| ())}>
                    <i class="material-icons">{ "close" }</i>
                </button>
                <h2 class="modal-title">{ car.name.clone() }</h2>
                <img class="detail-image" src={car.image_or(DETAIL_PLACEHOLDER_IMAGE).to_string()} alt={car.name.clone()} />
                <span class={classes!("transmission-tag", badge)}>{ car.car_type.to_uppercase() }</span>
                <div class="section">
                    <h3 class="section-title">{ "Description" }</h3>
                    <p class="description">{ car.description.clone() }</p>
                </div>
                <div class="section">
                    <h3 class="section-title">{ "Specifications" }</h3>
                    <div class="specs">
                        { for car.specifications().into_iter().map(|spec| html! {
                            <span class="spec">{ format!("{}: {}", spec.label, spec.value) }</span>
                        }) }
                    </div>
                </div>
                <p class="last-updated">{ format!("Last Updated: {}", car.created_at_display()) }</p>
            </ModalSheet>
        }
    }
}
