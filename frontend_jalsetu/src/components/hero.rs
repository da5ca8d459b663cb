// frontend_jalsetu/src/components/hero.rs
use gloo::console::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::potential_form::{FormVariant, PotentialForm};
use crate::components::{scroll_to_section, AWARENESS_ID};
use crate::model::ReportForm;
use crate::router::Route;

const HERO_BACKGROUND: &str = "background-image: linear-gradient(rgba(46, 125, 50, 0.4), rgba(2, 119, 189, 0.4)), url('https://images.pexels.com/photos/1108572/pexels-photo-1108572.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop');";

#[function_component(Hero)]
pub fn hero() -> Html {
    let navigator = use_navigator();

    // Hand the entered values to the report page through its query string
    let on_check = {
        let navigator = navigator.clone();
        Callback::from(move |form: ReportForm| {
            if let Some(navigator) = &navigator {
                if let Err(e) = navigator.push_with_query(&Route::Report, &form.to_params()) {
                    error!(format!("failed to open report page: {e:?}"));
                }
            }
        })
    };

    let on_check_potential = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Report);
            }
        })
    };

    let on_learn_more = Callback::from(|_: MouseEvent| {
        scroll_to_section(AWARENESS_ID);
    });

    html! {
        <div class="relative min-h-[90vh]">
            <div class="absolute inset-0 bg-cover bg-center bg-no-repeat" style={HERO_BACKGROUND} />

            <div class="relative z-10 max-w-[90rem] pt-56 mx-auto flex items-center gap-10">
                <div class="flex-7 space-y-6">
                    <div class="font-lilita text-7xl text-white leading-16">
                        <span>{ "Harvest Rain." }</span>
                        <br />
                        <span>{ "Secure the Future." }</span>
                    </div>
                    <p class="text-xl text-gray-100 drop-shadow-md">
                        { "Find out your rooftop's rainwater harvesting potential in minutes and get accurate cost estimates." }
                    </p>
                    <div class="flex items-center gap-4">
                        <button
                            class="bg-emerald-600 hover:bg-emerald-700 text-white px-10 py-4 text-lg font-semibold rounded-xl shadow-xl hover:shadow-2xl transform hover:-translate-y-1 transition-all duration-300 focus:outline-none hover:cursor-pointer"
                            onclick={on_check_potential}
                        >
                            { "Check Potential" }
                        </button>
                        <button
                            class="border-2 border-white/80 text-white hover:bg-white/10 backdrop-blur-sm px-8 py-4 text-lg font-semibold rounded-xl hover:border-white transform hover:-translate-y-1 transition-all duration-300 focus:outline-none hover:cursor-pointer"
                            onclick={on_learn_more}
                        >
                            { "Learn More About RWH" }
                        </button>
                    </div>
                </div>

                <div class="flex-6">
                    <div class="bg-white/10 backdrop-blur-md rounded-xl p-8 border border-white/20 shadow-xl">
                        <h3 class="text-2xl font-semibold text-white mb-6 text-center">
                            { "Check Your Potential" }
                        </h3>
                        <PotentialForm variant={FormVariant::Hero} onsubmit={on_check} />
                    </div>
                </div>
            </div>
        </div>
    }
}
