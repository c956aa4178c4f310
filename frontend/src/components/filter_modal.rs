use common::error::ApiError;
use common::forms::filter::FilterDraft;
use common::query::CarFilters;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::log_failure;
use crate::tops_sheet::modal_sheet::ModalSheet;

#[derive(Properties, PartialEq)]
pub struct FilterModalProps {
    pub on_apply: Callback<CarFilters>,
    pub on_close: Callback<()>,
}

pub enum Msg {
    OptionsLoaded(Vec<String>, Vec<String>),
    OptionsFailed(ApiError),
    SelectCarType(String),
    ToggleTag(String),
    Clear,
    Apply,
}

/// Filter chooser. Selections are a local draft until "Apply".
pub struct FilterModal {
    draft: FilterDraft,
}

impl Component for FilterModal {
    type Message = Msg;
    type Properties = FilterModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::load_options().await {
                Ok((car_types, tags)) => link.send_message(Msg::OptionsLoaded(car_types, tags)),
                Err(error) => link.send_message(Msg::OptionsFailed(error)),
            }
        });
        Self {
            draft: FilterDraft::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OptionsLoaded(car_types, tags) => self.draft.set_options(car_types, tags),
            Msg::OptionsFailed(error) => {
                log_failure("fetching filter options", &error);
                return false;
            }
            Msg::SelectCarType(car_type) => self.draft.select_car_type(&car_type),
            Msg::ToggleTag(tag) => self.draft.toggle_tag(&tag),
            Msg::Clear => self.draft.clear(),
            Msg::Apply => {
                ctx.props().on_apply.emit(self.draft.apply());
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <ModalSheet>
                <div class="modal-header">
                    <h2 class="modal-title">{ "Filter By" }</h2>
                    <button class="close-button" onclick={ctx.props().on_close.reform(|_| ())}>
                        <i class="material-icons">{ "close" }</i>
                    </button>
                </div>
                <div class="section">
                    <h3 class="section-title">{ "Car Type" }</h3>
                    <div class="options">
                        { for self.draft.car_types.iter().map(|car_type| {
                            let value = car_type.clone();
                            let selected = self.draft.is_car_type_selected(car_type);
                            html! {
                                <button
                                    key={car_type.clone()}
                                    class={classes!("option", selected.then_some("selected"))}
                                    onclick={link.callback(move |_| Msg::SelectCarType(value.clone()))}
                                >
                                    { car_type.to_uppercase() }
                                </button>
                            }
                        }) }
                    </div>
                </div>
                <div class="section">
                    <h3 class="section-title">{ "Tags" }</h3>
                    <div class="options">
                        { for self.draft.available_tags.iter().map(|tag| {
                            let value = tag.clone();
                            let selected = self.draft.tags.contains(tag);
                            html! {
                                <button
                                    key={tag.clone()}
                                    class={classes!("option", selected.then_some("selected"))}
                                    onclick={link.callback(move |_| Msg::ToggleTag(value.clone()))}
                                >
                                    { tag.clone() }
                                </button>
                            }
                        }) }
                    </div>
                </div>
                <div class="button-group">
                    <button class="clear-button" onclick={link.callback(|_| Msg::Clear)}>{ "Clear" }</button>
                    <button class="apply-button" onclick={link.callback(|_| Msg::Apply)}>{ "Apply" }</button>
                </div>
            </ModalSheet>
        }
    }
}
