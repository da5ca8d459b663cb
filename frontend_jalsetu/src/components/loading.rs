// frontend_jalsetu/src/components/loading.rs
use yew::prelude::*;

#[function_component(LoadingPanel)]
pub fn loading_panel() -> Html {
    html! {
        <div class="mt-8 bg-white rounded-xl shadow-2xl p-12 border border-gray-200">
            <div class="flex flex-col items-center justify-center space-y-6">
                <div class="relative">
                    <div class="w-20 h-20 border-4 border-emerald-200 rounded-full animate-spin">
                        <div class="absolute top-0 left-0 w-20 h-20 border-4 border-transparent border-t-emerald-600 rounded-full animate-spin"></div>
                    </div>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <div class="text-2xl">{ "🌧️" }</div>
                    </div>
                </div>

                <div class="text-center space-y-2">
                    <h3 class="text-2xl font-semibold text-gray-800">{ "Generating Your Report" }</h3>
                    <div class="flex items-center justify-center space-x-1">
                        <span class="text-gray-600">{ "Analyzing rainfall data" }</span>
                        <div class="flex space-x-1">
                            { for [0, 150, 300].iter().map(|delay| html! {
                                <div class="w-1 h-1 bg-emerald-600 rounded-full animate-bounce"
                                    style={format!("animation-delay: {delay}ms")}></div>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="w-full max-w-md">
                    <div class="flex justify-between text-sm text-gray-500 mb-2">
                        <span>{ "Processing Location" }</span>
                        <span>{ "Calculating Results" }</span>
                    </div>
                    <div class="w-full bg-gray-200 rounded-full h-2">
                        <div class="bg-gradient-to-r from-emerald-500 to-blue-500 h-2 rounded-full animate-pulse" style="width: 75%"></div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full max-w-2xl">
                    <div class="flex items-center space-x-3 p-4 bg-emerald-50 rounded-lg border border-emerald-200">
                        <div class="w-8 h-8 bg-emerald-600 rounded-full flex items-center justify-center">
                            <span class="text-white text-sm">{ "✓" }</span>
                        </div>
                        <div>
                            <div class="font-medium text-emerald-800">{ "Location Found" }</div>
                            <div class="text-sm text-emerald-600">{ "Geocoding complete" }</div>
                        </div>
                    </div>
                    <div class="flex items-center space-x-3 p-4 bg-blue-50 rounded-lg border border-blue-200">
                        <div class="w-8 h-8 bg-blue-600 rounded-full flex items-center justify-center animate-spin">
                            <div class="w-4 h-4 border-2 border-white border-t-transparent rounded-full"></div>
                        </div>
                        <div>
                            <div class="font-medium text-blue-800">{ "Fetching Data" }</div>
                            <div class="text-sm text-blue-600">{ "Rainfall analysis" }</div>
                        </div>
                    </div>
                    <div class="flex items-center space-x-3 p-4 bg-gray-50 rounded-lg border border-gray-200">
                        <div class="w-8 h-8 bg-gray-400 rounded-full flex items-center justify-center">
                            <span class="text-white text-sm">{ "3" }</span>
                        </div>
                        <div>
                            <div class="font-medium text-gray-600">{ "Generating Report" }</div>
                            <div class="text-sm text-gray-500">{ "Final calculations" }</div>
                        </div>
                    </div>
                </div>

                <div class="bg-gradient-to-r from-emerald-100 to-blue-100 rounded-lg p-4 max-w-lg text-center">
                    <div class="text-sm font-medium text-gray-700 mb-1">{ "💡 Did you know?" }</div>
                    <div class="text-sm text-gray-600">
                        { "Rainwater harvesting can reduce your water bill by up to 50% and help conserve precious groundwater resources!" }
                    </div>
                </div>
            </div>
        </div>
    }
}
