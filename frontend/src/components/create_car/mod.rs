//! Creation form for a new car.
//!
//! Responsibilities
//! - Load the car type and tag vocabularies when opened.
//! - Keep the draft locally and validate it on submit, showing every
//!   violated rule at once.
//! - Hand a valid request to the catalog controller, which sends it, and
//!   mirror the controller's submitting and failure state.

use common::error::ApiError;
use common::forms::create::CreateCarForm;
use common::requests::CreateCarRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::log_failure;

mod view;

#[derive(Properties, PartialEq)]
pub struct CreateCarProps {
    pub on_submit: Callback<CreateCarRequest>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub submitting: bool,
    #[prop_or_default]
    pub submit_error: Option<&'static str>,
}

pub enum Msg {
    OptionsLoaded(Vec<String>, Vec<String>),
    OptionsFailed(ApiError),
    SetImageUrl(String),
    SetName(String),
    SetDescription(String),
    SetCarType(String),
    ToggleTag(String),
    Submit,
}

pub struct CreateCarModal {
    pub form: CreateCarForm,
}

impl Component for CreateCarModal {
    type Message = Msg;
    type Properties = CreateCarProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::load_options().await {
                Ok((car_types, tags)) => link.send_message(Msg::OptionsLoaded(car_types, tags)),
                Err(error) => link.send_message(Msg::OptionsFailed(error)),
            }
        });
        let mut form = CreateCarForm::new();
        form.sync_submission(ctx.props().submitting, ctx.props().submit_error);
        Self { form }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.form
            .sync_submission(ctx.props().submitting, ctx.props().submit_error);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OptionsLoaded(car_types, tags) => self.form.set_options(car_types, tags),
            Msg::OptionsFailed(error) => {
                log_failure("fetching options", &error);
                return false;
            }
            Msg::SetImageUrl(value) => self.form.draft.image_url = value,
            Msg::SetName(value) => self.form.draft.name = value,
            Msg::SetDescription(value) => self.form.draft.description = value,
            Msg::SetCarType(value) => self.form.draft.car_type = value,
            Msg::ToggleTag(tag) => self.form.draft.tags.toggle(&tag),
            Msg::Submit => {
                if let Some(request) = self.form.submit() {
                    ctx.props().on_submit.emit(request);
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
