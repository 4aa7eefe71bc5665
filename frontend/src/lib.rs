mod client;
mod components;
pub mod config;
mod hooks;
mod liveness;
mod pages;
mod store;
pub mod utils;

use components::ToastHost;
use hooks::{use_viewport_layout, LayoutInfo};
use pages::{chat::ChatPage, share::SharePage};
use store::ChatProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/chat/:session_id")]
    Chat { session_id: String },
    #[at("/share/:session_id")]
    Share { session_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => html! { <ChatPage /> },
        Route::Chat { session_id } => html! { <ChatPage session_id={Some(AttrValue::from(session_id))} /> },
        Route::Share { session_id } => html! { <SharePage session_id={session_id} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let layout = use_viewport_layout();

    html! {
        <BrowserRouter>
            <ContextProvider<LayoutInfo> context={layout}>
                <ToastHost>
                    <ChatProvider>
                        <Switch<Route> render={switch} />
                    </ChatProvider>
                </ToastHost>
            </ContextProvider<LayoutInfo>>
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
