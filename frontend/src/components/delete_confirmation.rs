use yew::{html, Callback, Component, Context, Html, Properties};

use crate::tops_sheet::modal_sheet::ModalSheet;

#[derive(Properties, PartialEq)]
pub struct DeleteConfirmationProps {
    pub car_name: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub struct DeleteConfirmation;

impl Component for DeleteConfirmation {
    type Message = ();
    type Properties = DeleteConfirmationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DeleteConfirmation
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <ModalSheet>
                <h2 class="modal-title">{ "Delete Car" }</h2>
                <p class="message">
                    { "Are you sure you want to delete " }
                    <strong>{ props.car_name.clone() }</strong>
                    { "? This action cannot be undone." }
                </p>
                <div class="button-group">
                    <button class="cancel-button" onclick={props.on_cancel.reform(|_| ())}>{ "Cancel" }</button>
                    <button class="delete-confirm-button" onclick={props.on_confirm.reform(|_| ())}>{ "Delete" }</button>
                </div>
            </ModalSheet>
        }
    }
}
