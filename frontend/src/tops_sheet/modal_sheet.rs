use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Component, Context, Html, Properties};

/// Full-screen overlay hosting one modal dialog.
///
/// The sheet mounts hidden and gains the `show` class shortly after its first
/// render so the CSS transition runs.
pub struct ModalSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="overlay" id={self.id.clone()}>
                <div class="modal">
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            open_sheet(&self.id);
        }
    }
}

pub fn open_sheet(id: &str) {
    let id = id.to_string();
    Timeout::new(50, move || {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&id));
        if let Some(element) = element {
            element.class_list().add_1("show").ok();
        }
    })
    .forget();
}
