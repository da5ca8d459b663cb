mod api;
mod components;
mod config_file;
mod error;
mod model;
mod pages;
mod router;

use crate::config_file::load_config;
use crate::router::AppRouter;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                load_config().await;
                ready.set(true);
            });
            || ()
        });
    }

    if !*ready {
        return html! { "Loading..." };
    }

    html! {
    <BrowserRouter>
        <AppRouter />
    </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
