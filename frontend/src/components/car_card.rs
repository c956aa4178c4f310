use common::model::car::Car;
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::config::CARD_PLACEHOLDER_IMAGE;

#[derive(Properties, PartialEq)]
pub struct CarCardProps {
    pub car: Car,
    /// Opens the detail viewer for this car.
    pub on_select: Callback<String>,
    /// Asks for delete confirmation; the card never calls the API itself.
    pub on_delete: Callback<String>,
}

/// One entry of the catalog grid.
pub struct CarCard;

impl Component for CarCard {
    type Message = ();
    type Properties = CarCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CarCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let car = &props.car;
        let on_select = {
            let id = car.id.clone();
            props.on_select.reform(move |_| id.clone())
        };
        let on_delete = {
            let id = car.id.clone();
            props.on_delete.reform(move |_| id.clone())
        };

        html! {
            <div class="card">
                <img class="card-image" src={car.image_or(CARD_PLACEHOLDER_IMAGE).to_string()} alt={car.name.clone()} />
                <div class="card-content">
                    <h3 class="card-title" onclick={on_select}>{ car.name.clone() }</h3>
                    <p class="card-description">{ car.description.clone() }</p>
                    <div class="tags">
                        { for car.tags.iter().map(|tag| html! { <span class="tag" key={tag.clone()}>{ tag.clone() }</span> }) }
                    </div>
                    <button class="delete-button" title="Delete" onclick={on_delete}>
                        <i class="material-icons">{ "delete" }</i>
                    </button>
                </div>
            </div>
        }
    }
}
