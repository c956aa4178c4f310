use common::forms::create::{Field, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::{CreateCarModal, Msg};
use crate::tops_sheet::modal_sheet::ModalSheet;

pub fn view(component: &CreateCarModal, ctx: &Context<CreateCarModal>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let draft = &form.draft;

    html! {
        <ModalSheet>
            <div class="modal-header">
                <h2 class="modal-title">{ "Add New Car" }</h2>
                <button class="close-button" onclick={ctx.props().on_close.reform(|_| ())}>
                    <i class="material-icons">{ "close" }</i>
                </button>
            </div>
            <div class="form">
                <div class="field">
                    <label class="label">{ "Image URL" }</label>
                    <input
                        type="text"
                        class="input"
                        placeholder="Enter image URL"
                        value={draft.image_url.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetImageUrl(e.target_unchecked_into::<HtmlInputElement>().value()))}
                    />
                    { field_error(component, Field::ImageUrl) }
                </div>
                <div class="field">
                    <label class="label">{ "Name" }</label>
                    <input
                        type="text"
                        class="input"
                        placeholder="Enter car name"
                        maxlength={MAX_NAME_CHARS.to_string()}
                        value={draft.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value()))}
                    />
                    { field_error(component, Field::Name) }
                </div>
                <div class="field">
                    <label class="label">{ "Description" }</label>
                    <textarea
                        class="textarea"
                        placeholder="Enter description (optional)"
                        maxlength={MAX_DESCRIPTION_CHARS.to_string()}
                        value={draft.description.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value()))}
                    />
                    { field_error(component, Field::Description) }
                </div>
                <div class="field">
                    <label class="label">{ "Car Type" }</label>
                    <select
                        class="select"
                        onchange={link.callback(|e: Event| Msg::SetCarType(e.target_unchecked_into::<HtmlSelectElement>().value()))}
                    >
                        <option value="" selected={draft.car_type.is_empty()}>{ "Select car type" }</option>
                        { for form.car_types.iter().map(|car_type| html! {
                            <option key={car_type.clone()} value={car_type.clone()} selected={draft.car_type == *car_type}>
                                { car_type.to_uppercase() }
                            </option>
                        }) }
                    </select>
                    { field_error(component, Field::CarType) }
                </div>
                <div class="field">
                    <label class="label">{ "Tags" }</label>
                    <div class="tags">
                        { for form.available_tags.iter().map(|tag| tag_button(component, link, tag)) }
                    </div>
                    { field_error(component, Field::Tags) }
                </div>
                {
                    if let Some(message) = form.submit_error {
                        html! { <p class="error">{ message }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="button-group">
                    <button class="cancel-button" onclick={ctx.props().on_close.reform(|_| ())}>{ "Cancel" }</button>
                    <button
                        class="submit-button"
                        disabled={form.submitting}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if form.submitting { "Submitting..." } else { "Add Car" } }
                    </button>
                </div>
            </div>
        </ModalSheet>
    }
}

fn field_error(component: &CreateCarModal, field: Field) -> Html {
    match component.form.errors.get(field) {
        Some(message) => html! { <p class="error">{ message }</p> },
        None => html! {},
    }
}

fn tag_button(component: &CreateCarModal, link: &Scope<CreateCarModal>, tag: &str) -> Html {
    let selected = component.form.draft.tags.contains(tag);
    let value = tag.to_string();
    html! {
        <button
            key={tag.to_string()}
            type="button"
            class={classes!("tag", selected.then_some("selected"))}
            onclick={link.callback(move |_| Msg::ToggleTag(value.clone()))}
        >
            { tag.to_string() }
        </button>
    }
}
