use crate::components::catalog::CatalogComponent;
use yew::{classes, html, Component, Context, Html};

/// Static navigation links. Only "Car Library" is live; the rest, including
/// "Recycle Bin", lead nowhere.
const NAV_LINKS: [&str; 5] = ["Home", "Car Library", "Services", "Special Offers", "Recycle Bin"];

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <nav class="navbar">
                    <div class="logo">
                        <i class="material-icons logo-icon">{ "directions_car" }</i>
                        <h1>{ "DriveSphere" }</h1>
                    </div>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|label| html! {
                            <a href="#" class={classes!("nav-link", (*label == "Car Library").then_some("active"))}>{ *label }</a>
                        }) }
                    </div>
                    <button class="contact-button">{ "Contact Us" }</button>
                </nav>
                <CatalogComponent />
            </div>
        }
    }
}
