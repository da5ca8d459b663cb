// frontend_jalsetu/src/components/awareness.rs
use yew::prelude::*;

use crate::components::AWARENESS_ID;

struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const KINDS: [Card; 2] = [
    Card {
        icon: "🏠",
        title: "Rooftop Rainwater Harvesting (RWH)",
        body: "Collects rainwater from rooftops and stores it for later use or directs it to recharge the ground, helping conserve water and reduce dependence on municipal supply.",
    },
    Card {
        icon: "🌍",
        title: "Artificial Recharge (AR)",
        body: "Helps replenish groundwater by channeling rainwater into the soil through recharge pits, trenches, or shafts, supporting sustainable water resources for your community.",
    },
];

const BENEFITS: [Card; 3] = [
    Card {
        icon: "🌱",
        title: "Environmental",
        body: "Conserves water, reduces runoff, prevents flooding, and replenishes local aquifers.",
    },
    Card {
        icon: "💰",
        title: "Economic",
        body: "Lowers water bills and reduces dependence on municipal water supply.",
    },
    Card {
        icon: "👥",
        title: "Community",
        body: "Strengthens local water security and encourages community participation in sustainable water practices.",
    },
];

#[function_component(Awareness)]
pub fn awareness() -> Html {
    html! {
        <div id={AWARENESS_ID} class="py-32">
            <div class="max-w-[90rem] mx-auto flex flex-col gap-4">
                <h3 class="text-4xl font-bold text-center mb-10 text-gray-800">
                    { "What is Rainwater Harvesting?" }
                </h3>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    { for KINDS.iter().map(|card| html! {
                        <div class="flex flex-col items-center text-center p-8 bg-white border border-gray-200 rounded-xl shadow-md hover:shadow-lg transition-all duration-300">
                            <div class="w-16 h-16 bg-gray-100 rounded-full flex items-center justify-center mb-6">
                                <span class="text-2xl">{ card.icon }</span>
                            </div>
                            <h4 class="text-xl font-bold text-gray-800 mb-4">{ card.title }</h4>
                            <p class="text-gray-600 leading-relaxed">{ card.body }</p>
                        </div>
                    }) }
                </div>
            </div>

            <div class="max-w-[90rem] mx-auto flex flex-col gap-4 mt-32">
                <h3 class="text-4xl font-semibold text-center mt-12 mb-6 text-gray-800">
                    { "Benefits of Rainwater Harvesting" }
                </h3>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                    { for BENEFITS.iter().map(|card| html! {
                        <div class="flex flex-col items-center text-center p-6 bg-white border border-gray-200 rounded-xl shadow-md hover:shadow-lg transition">
                            <span class="text-4xl mb-2">{ card.icon }</span>
                            <h4 class="font-semibold text-lg mb-1 text-gray-800">{ card.title }</h4>
                            <p class="text-gray-600 text-sm">{ card.body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
