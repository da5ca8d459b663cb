// frontend_jalsetu/src/pages/not_found.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::layout::Layout, router::Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout>
            <section class="p-6 text-center">
                <h1 class="text-2xl font-bold mb-2">{ "404 - Page not found" }</h1>
                <Link<Route> to={Route::Home} classes="text-emerald-700 hover:underline">
                    { "Back to JalSetu" }
                </Link<Route>>
            </section>
        </Layout>
    }
}
