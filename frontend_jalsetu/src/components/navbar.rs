// frontend_jalsetu/src/components/navbar.rs
use gloo::console::log;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{scroll_to_section, AWARENESS_ID};
use crate::model::language::{Language, LANGUAGES};
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator();
    let is_language_open = use_state(|| false);
    let selected_language = use_state(Language::load);

    let on_check_potential = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Report);
            }
        })
    };

    let on_learn_more = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if !scroll_to_section(AWARENESS_ID) {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
        })
    };

    let toggle_languages = {
        let is_language_open = is_language_open.clone();
        Callback::from(move |_: MouseEvent| is_language_open.set(!*is_language_open))
    };

    html! {
        <nav class="bg-blue-50 border-b border-gray-200 sticky top-0 z-50 shadow-lg">
            <div class="max-w-[90rem] mx-auto">
                <div class="flex justify-between items-center py-2">
                    <div class="flex-shrink-0 flex items-center">
                        <Link<Route> to={Route::Home}
                            classes="text-2xl font-bold text-emerald-700 hover:text-emerald-800 transition-colors cursor-pointer">
                            { "JalSetu" }
                        </Link<Route>>
                    </div>

                    <div class="flex items-center space-x-8">
                        <button
                            class="bg-emerald-600 hover:bg-emerald-700 text-white px-6 py-2 rounded-lg font-medium transition-all duration-200 hover:shadow-lg hover:-translate-y-0.5 hover:cursor-pointer"
                            onclick={on_check_potential}
                        >
                            { "Check Potential" }
                        </button>

                        <button
                            class="text-gray-700 hover:text-emerald-600 hover:bg-emerald-50 px-4 py-2 rounded-lg font-medium transition-all duration-200 hover:cursor-pointer"
                            onclick={on_learn_more}
                        >
                            { "Learn More" }
                        </button>

                        <div class="relative">
                            <button
                                class="flex items-center space-x-2 px-4 py-2 border border-gray-300 rounded-lg hover:border-emerald-400 hover:bg-emerald-50 transition-all duration-200 hover:cursor-pointer"
                                onclick={toggle_languages}
                            >
                                <span>{ "🌐" }</span>
                                <span class="hidden lg:inline">{ selected_language.name }</span>
                                <span class="lg:hidden">{ selected_language.flag }</span>
                            </button>

                            { if *is_language_open {
                                html! {
                                    <div class="absolute right-0 mt-2 w-48 bg-white rounded-lg shadow-lg border border-gray-200 py-1 z-50">
                                        { for LANGUAGES.iter().map(|language| {
                                            let language = *language;
                                            let onclick = {
                                                let selected_language = selected_language.clone();
                                                let is_language_open = is_language_open.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    log!(format!("language set to {}", language.code));
                                                    language.save();
                                                    selected_language.set(language);
                                                    is_language_open.set(false);
                                                })
                                            };
                                            html! {
                                                <button key={language.code}
                                                    class="flex items-center space-x-3 w-full px-4 py-2 text-left hover:bg-emerald-50 hover:cursor-pointer transition-colors focus:outline-none focus:bg-emerald-50"
                                                    {onclick}
                                                >
                                                    <span class="text-lg">{ language.flag }</span>
                                                    <span>{ language.name }</span>
                                                </button>
                                            }
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
