// frontend_jalsetu/src/components/layout.rs
use yew::prelude::*;

use crate::components::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or(AttrValue::from("bg-gradient-to-b from-emerald-50 to-blue-50"))]
    pub background: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class={format!("{} min-h-screen scroll-smooth", props.background)}>
            <Navbar />
            { for props.children.iter() }
        </div>
    }
}
