use common::catalog::{CatalogMsg, Modal};
use common::query::SORT_OPTIONS;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::CatalogComponent;
use crate::components::car_card::CarCard;
use crate::components::car_details::CarDetails;
use crate::components::create_car::CreateCarModal;
use crate::components::delete_confirmation::DeleteConfirmation;
use crate::components::filter_modal::FilterModal;

pub fn view(component: &CatalogComponent, ctx: &Context<CatalogComponent>) -> Html {
    let link = ctx.link();
    let state = &component.state;

    html! {
        <div class="content">
            { build_toolbar(component, link) }

            <h2 class="section-title">{ "Exercise Cards" }</h2>

            {
                if state.loading {
                    html! { <div class="loading"><p>{ "Loading cars..." }</p></div> }
                } else {
                    html! {
                        <div class="grid">
                            { for state.cars.iter().map(|car| html! {
                                <CarCard
                                    key={car.id.clone()}
                                    car={car.clone()}
                                    on_select={link.callback(CatalogMsg::SelectCar)}
                                    on_delete={link.callback(CatalogMsg::RequestDelete)}
                                />
                            }) }
                        </div>
                    }
                }
            }

            <button class="add-button" onclick={link.callback(|_| CatalogMsg::OpenCreate)}>
                <i class="material-icons">{ "add" }</i>
                { "Add New Car" }
            </button>

            <CarDetails
                car_id={state.selected_car_id.clone()}
                on_close={link.callback(|_| CatalogMsg::CloseDetails)}
            />
            { build_modal(component, link) }
        </div>
    }
}

/// Search box, filter button and sort dropdown.
fn build_toolbar(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    let state = &component.state;
    html! {
        <div class="search-bar">
            <div class="search-input-wrapper">
                <i class="material-icons search-icon">{ "search" }</i>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search a car"
                    value={state.search.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        CatalogMsg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <div class="action-buttons">
                <button class="filter-button" onclick={link.callback(|_| CatalogMsg::OpenFilter)}>
                    <i class="material-icons">{ "filter_alt" }</i>
                    { "Filter" }
                </button>
                <div class="sort-wrapper">
                    <button class="sort-button" onclick={link.callback(|_| CatalogMsg::ToggleSortMenu)}>
                        <i class="material-icons">{ "sort" }</i>
                        { "Sort" }
                    </button>
                    {
                        if state.sort_menu_open {
                            html! {
                                <div class="sort-dropdown">
                                    { for SORT_OPTIONS.iter().map(|option| {
                                        let spec = option.spec;
                                        html! {
                                            <button
                                                class="sort-option"
                                                onclick={link.callback(move |_| CatalogMsg::SelectSort(spec))}
                                            >
                                                { option.label }
                                            </button>
                                        }
                                    }) }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn build_modal(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    let state = &component.state;
    match state.active_modal {
        Modal::None => html! {},
        Modal::Filter => html! {
            <FilterModal
                on_apply={link.callback(CatalogMsg::ApplyFilters)}
                on_close={link.callback(|_| CatalogMsg::CloseModal)}
            />
        },
        Modal::Create => html! {
            <CreateCarModal
                on_submit={link.callback(CatalogMsg::SubmitCreate)}
                on_close={link.callback(|_| CatalogMsg::CloseModal)}
                submitting={state.creating}
                submit_error={state.create_error}
            />
        },
        Modal::Delete => html! {
            <DeleteConfirmation
                car_name={state.delete_target_name().to_string()}
                on_confirm={link.callback(|_| CatalogMsg::ConfirmDelete)}
                on_cancel={link.callback(|_| CatalogMsg::CancelDelete)}
            />
        },
    }
}
