// frontend_jalsetu/src/pages/home.rs
use yew::prelude::*;

use crate::components::{awareness::Awareness, hero::Hero, layout::Layout};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout background="bg-blue-50/60">
            <Hero />
            <Awareness />
        </Layout>
    }
}
